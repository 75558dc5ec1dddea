//! PGR (Programa de Gerenciamento de Riscos) service calls.

use reqwest::Method;
use serde::Serialize;
use sst_core::entities::Pgr;
use sst_core::enums::PgrStatus;
use sst_core::{Envelope, PageRequest, ResourceId, Sort};

use crate::multipart::{PgrFiles, RequestBody};
use crate::{ApiError, Query, SstClient, item_path};

const PATH: &str = "/pgrs";
const PAYLOAD_PART: &str = "pgr";

/// Filters accepted by `GET /pgrs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgrFilter {
    pub search: Option<String>,
    pub status: Option<PgrStatus>,
    pub page: PageRequest,
}

impl PgrFilter {
    /// Newest documents first unless the caller picked a sort.
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .opt("search", self.search.as_deref())
            .opt("status", self.status)
            .page_or_sort(&self.page, Some(Sort::desc("dataInicio")))
    }
}

#[derive(Serialize)]
struct StatusChange {
    status: PgrStatus,
}

impl SstClient {
    /// List PGRs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_pgrs(&self, filter: &PgrFilter) -> Result<Envelope<Pgr>, ApiError> {
        self.transport.get_envelope(PATH, &filter.to_query()).await
    }

    /// Fetch one PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the PGR does not exist.
    pub async fn get_pgr(&self, id: &ResourceId) -> Result<Pgr, ApiError> {
        self.transport
            .get_json(&item_path(PATH, id), &Query::new())
            .await
    }

    /// Create a PGR, with an optional cover document and cover image.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn create_pgr(&self, pgr: &Pgr, files: PgrFiles) -> Result<Pgr, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, pgr, files)?;
        self.transport.send_body(Method::POST, PATH, body).await
    }

    /// Replace a PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn update_pgr(
        &self,
        id: &ResourceId,
        pgr: &Pgr,
        files: PgrFiles,
    ) -> Result<Pgr, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, pgr, files)?;
        self.transport
            .send_body(Method::PUT, &item_path(PATH, id), body)
            .await
    }

    /// Move a PGR to `status` (`PATCH /pgrs/{id}/status`).
    ///
    /// The backend owns the lifecycle rules; see
    /// [`PgrStatus::can_transition_to`] for a local pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the transition is refused.
    pub async fn update_pgr_status(
        &self,
        id: &ResourceId,
        status: PgrStatus,
    ) -> Result<Pgr, ApiError> {
        let path = format!("{}/status", item_path(PATH, id));
        self.transport
            .send_json(Method::PATCH, &path, &StatusChange { status })
            .await
    }

    /// Delete a PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_pgr(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.transport.delete(&item_path(PATH, id)).await
    }

    /// Download the PGR document as PDF.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns an
    /// error status.
    pub async fn pgr_report(&self, id: &ResourceId) -> Result<Vec<u8>, ApiError> {
        let path = format!("{}/relatorio", item_path(PATH, id));
        self.transport.get_bytes(&path, &Query::new()).await
    }
}
