//! # sst-config
//!
//! Layered configuration loading for the SST admin toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SST_*` prefix, `__` as separator)
//! 2. Project-level `.sst/config.toml`
//! 3. User-level `~/.config/sst/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SST_API__BASE_URL` -> `api.base_url`,
//! `SST_SEARCH__PAGE_SIZE` -> `search.page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sst_config::SstConfig;
//!
//! let config = SstConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod notify;
mod search;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use notify::NotifyConfig;
pub use search::SearchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted for `search.page_size`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SstConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl SstConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".sst/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SST_").split("__"))
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base}' must start with http:// or https://"),
            });
        }
        if self.search.page_size == 0 || self.search.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "search.page_size".into(),
                reason: format!("{} is outside 1..={MAX_PAGE_SIZE}", self.search.page_size),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sst").join("config.toml"))
    }
}
