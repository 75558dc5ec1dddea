//! Backend API connection settings.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("sst-admin/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Static bearer token sent as `Authorization` when non-empty.
    #[serde(default)]
    pub bearer_token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            bearer_token: String::new(),
        }
    }
}

impl ApiConfig {
    /// Check if a bearer token is available.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.bearer_token.is_empty()
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
