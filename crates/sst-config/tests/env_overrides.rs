use figment::Jail;
use sst_config::SstConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.set_env("SST_API__BASE_URL", "https://env.example.com/api");
        jail.set_env("SST_SEARCH__DEBOUNCE_MS", "120");

        let config = SstConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(config.search.debounce_ms, 120);
        assert_eq!(config.search.page_size, 10);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        std::fs::create_dir_all(jail.directory().join(".sst"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".sst/config.toml",
            r#"
[notify]
dismiss_after_ms = 1000
"#,
        )?;
        jail.set_env("SST_NOTIFY__DISMISS_AFTER_MS", "8000");

        let config = SstConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.notify.dismiss_after_ms, 8000);
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_nest() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.set_env("SST_API_BASE_URL", "https://ignored.example.com");

        let config = SstConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        Ok(())
    });
}
