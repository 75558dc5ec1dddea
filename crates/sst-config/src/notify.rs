//! Error notification settings.

use serde::{Deserialize, Serialize};

/// Default time a notice stays on screen.
const fn default_dismiss_after_ms() -> u64 {
    5000
}

fn default_fallback_message() -> String {
    "Ocorreu um erro inesperado.".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Auto-dismiss interval for error notices, in milliseconds.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,

    /// Message used when neither the backend nor the transport says anything.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl NotifyConfig {
    #[must_use]
    pub const fn dismiss_after(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.dismiss_after_ms)
    }
}
