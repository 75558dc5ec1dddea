//! # sst-client
//!
//! HTTP client for the SST admin backend.
//!
//! Every call goes through one configured [`transport::Transport`]; failures
//! are reported once through the injected [`notify::Notifier`] and returned as
//! [`ApiError`]. Domain operations are grouped per resource:
//! - CAT, PGR and LTIP documents (CRUD, attachments, PDF reports)
//! - Setores, unidades and the riscos of a PGR
//! - Searchable lookup tables (CID, CBO, médico, parte do corpo, situação
//!   geradora, NR-16 anexo, agente nocivo) through [`search::SearchEndpoint`]

pub mod agente_nocivo;
pub mod cat;
pub mod cbo;
pub mod cid;
pub mod ltip;
pub mod medico;
pub mod multipart;
pub mod notify;
pub mod nr16;
pub mod parte_corpo;
pub mod pgr;
pub mod query;
pub mod risco;
pub mod search;
pub mod setor;
pub mod situacao_geradora;
pub mod transport;
pub mod unidade;

mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

pub use error::{ApiError, ErrorKind};
pub use http::{MESSAGE_FIELDS, error_message};
pub use multipart::{Attachment, CatFiles, LtipFiles, PgrFiles, RequestBody};
pub use notify::{MemoryNotifier, Notice, Notifier, Severity, TracingNotifier};
pub use query::Query;
pub use search::SearchEndpoint;
pub use transport::Transport;

use sst_config::SstConfig;
use sst_core::ResourceId;

// ── Client ─────────────────────────────────────────────────────────

/// Typed access to every backend resource.
pub struct SstClient {
    transport: Transport,
}

impl SstClient {
    /// Wrap an already configured transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Build a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the HTTP client cannot be built.
    pub fn from_config(config: &SstConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        let mut builder = Transport::builder(config.api.trimmed_base_url())
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .user_agent(config.api.user_agent.clone())
            .notifier(notifier)
            .dismiss_after(config.notify.dismiss_after())
            .fallback_message(config.notify.fallback_message.clone());
        if config.api.has_token() {
            builder = builder.bearer_token(config.api.bearer_token.clone());
        }
        Ok(Self::new(builder.build()?))
    }

    #[must_use]
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }
}

/// `"{collection}/{id}"` with the id percent-encoded.
pub(crate) fn item_path(collection: &str, id: &ResourceId) -> String {
    format!("{collection}/{}", id.to_path_segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_encodes_text_ids() {
        assert_eq!(item_path("/cats", &ResourceId::from(7)), "/cats/7");
        assert_eq!(
            item_path("/cats", &ResourceId::from("2024/001")),
            "/cats/2024%2F001"
        );
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let mut config = SstConfig::default();
        config.api.base_url = "https://sst.example.com/api/".into();
        let client = SstClient::from_config(&config, Arc::new(MemoryNotifier::new())).unwrap();
        assert_eq!(client.transport().base_url(), "https://sst.example.com/api");
    }
}
