use sst_config::{ApiConfig, SstConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SstConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SstConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = ApiConfig::default();

    let mut warnings = Vec::new();

    if config.api.base_url == defaults.base_url && has_single_underscore_key(&env_keys, "SST_API") {
        warnings.push(
            "API config appears default while SST_API_* env vars exist. Use double underscores (example: SST_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.api.has_token() && env_keys.iter().any(|key| key == "SST_API_BEARER_TOKEN") {
        warnings.push(
            "No bearer token configured while SST_API_BEARER_TOKEN exists. Use SST_API__BEARER_TOKEN."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "SST_SEARCH") {
        warnings.push(
            "SST_SEARCH_* env vars are ignored. Use double underscores (example: SST_SEARCH__PAGE_SIZE)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "SST_NOTIFY") {
        warnings.push(
            "SST_NOTIFY_* env vars are ignored. Use double underscores (example: SST_NOTIFY__DISMISS_AFTER_MS)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let single = format!("{prefix}_");
    let double = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
