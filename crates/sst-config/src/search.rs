//! Search widget and listing defaults.

use serde::{Deserialize, Serialize};

/// Default rows per page.
const fn default_page_size() -> u32 {
    10
}

/// Default quiet period before a typed filter is sent.
const fn default_debounce_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Rows per page, for both server and client-side pagination.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Debounce window for free-text filters, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
