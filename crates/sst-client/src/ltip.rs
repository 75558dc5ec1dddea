//! LTIP (Laudo Técnico de Insalubridade e Periculosidade) service calls.

use reqwest::Method;
use sst_core::entities::Ltip;
use sst_core::{Envelope, PageRequest, ResourceId};

use crate::multipart::{LtipFiles, RequestBody};
use crate::{ApiError, Query, SstClient, item_path};

const PATH: &str = "/ltips";
const PAYLOAD_PART: &str = "ltip";

/// Filters accepted by `GET /ltips`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LtipFilter {
    pub search: Option<String>,
    pub unidade_id: Option<ResourceId>,
    pub page: PageRequest,
}

impl LtipFilter {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .opt("search", self.search.as_deref())
            .opt("unidadeId", self.unidade_id.as_ref())
            .page(&self.page)
    }
}

impl SstClient {
    /// List LTIPs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_ltips(&self, filter: &LtipFilter) -> Result<Envelope<Ltip>, ApiError> {
        self.transport.get_envelope(PATH, &filter.to_query()).await
    }

    /// Fetch one LTIP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the LTIP does not exist.
    pub async fn get_ltip(&self, id: &ResourceId) -> Result<Ltip, ApiError> {
        self.transport
            .get_json(&item_path(PATH, id), &Query::new())
            .await
    }

    /// Create an LTIP, with optional attachments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn create_ltip(&self, ltip: &Ltip, files: LtipFiles) -> Result<Ltip, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, ltip, files)?;
        self.transport.send_body(Method::POST, PATH, body).await
    }

    /// Replace an LTIP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn update_ltip(
        &self,
        id: &ResourceId,
        ltip: &Ltip,
        files: LtipFiles,
    ) -> Result<Ltip, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, ltip, files)?;
        self.transport
            .send_body(Method::PUT, &item_path(PATH, id), body)
            .await
    }

    /// Delete an LTIP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_ltip(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.transport.delete(&item_path(PATH, id)).await
    }

    /// Download the LTIP report as PDF.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns an
    /// error status.
    pub async fn ltip_report(&self, id: &ResourceId) -> Result<Vec<u8>, ApiError> {
        let path = format!("{}/relatorio", item_path(PATH, id));
        self.transport.get_bytes(&path, &Query::new()).await
    }
}
