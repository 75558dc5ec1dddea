use anyhow::Context;
use sst_config::SstConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the config layers, then apply CLI overrides and validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SstConfig> {
    load_dotenv()?;

    let mut config: SstConfig = SstConfig::figment()
        .extract()
        .context("failed to read SST configuration")?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut SstConfig, flags: &GlobalFlags) {
    if let Some(base_url) = &flags.base_url {
        tracing::debug!(%base_url, "base URL overridden from the command line");
        config.api.base_url.clone_from(base_url);
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
