use std::sync::Arc;

use anyhow::Context;
use sst_client::SstClient;
use sst_config::SstConfig;

use crate::notifier::TerminalNotifier;
use crate::ui;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: Arc<SstClient>,
    pub config: SstConfig,
}

impl AppContext {
    /// Build the backend client, wired to print notices on the terminal.
    pub fn init(config: SstConfig) -> anyhow::Result<Self> {
        let notifier = Arc::new(TerminalNotifier::new(ui::prefs().table_color));
        let client = SstClient::from_config(&config, notifier)
            .with_context(|| format!("invalid backend at {}", config.api.base_url))?;

        tracing::debug!(
            base_url = %config.api.trimmed_base_url(),
            authenticated = config.api.has_token(),
            "backend client ready"
        );

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Page size for lists and lookups.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.config.search.page_size
    }
}
