//! CAT (Comunicação de Acidente de Trabalho) service calls.

use reqwest::Method;
use sst_core::entities::Cat;
use sst_core::enums::CatTipo;
use sst_core::{Envelope, PageRequest, ResourceId};

use crate::multipart::{CatFiles, RequestBody};
use crate::{ApiError, Query, SstClient, item_path};

const PATH: &str = "/cats";
const PAYLOAD_PART: &str = "cat";

/// Filters accepted by `GET /cats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatFilter {
    /// Free text matched by the backend against number and injured worker.
    pub search: Option<String>,
    pub tipo: Option<CatTipo>,
    pub page: PageRequest,
}

impl CatFilter {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .opt("search", self.search.as_deref())
            .opt("tipo", self.tipo)
            .page(&self.page)
    }
}

impl SstClient {
    /// List CATs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_cats(&self, filter: &CatFilter) -> Result<Envelope<Cat>, ApiError> {
        self.transport.get_envelope(PATH, &filter.to_query()).await
    }

    /// Fetch one CAT.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the CAT does not exist.
    pub async fn get_cat(&self, id: &ResourceId) -> Result<Cat, ApiError> {
        self.transport
            .get_json(&item_path(PATH, id), &Query::new())
            .await
    }

    /// Register a CAT. Sent as multipart only when `files` carries something.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn create_cat(&self, cat: &Cat, files: CatFiles) -> Result<Cat, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, cat, files)?;
        self.transport.send_body(Method::POST, PATH, body).await
    }

    /// Replace a CAT.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the payload cannot be encoded, the request
    /// fails, or the backend rejects it.
    pub async fn update_cat(
        &self,
        id: &ResourceId,
        cat: &Cat,
        files: CatFiles,
    ) -> Result<Cat, ApiError> {
        let body = RequestBody::encode(PAYLOAD_PART, cat, files)?;
        self.transport
            .send_body(Method::PUT, &item_path(PATH, id), body)
            .await
    }

    /// Delete a CAT.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_cat(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.transport.delete(&item_path(PATH, id)).await
    }

    /// Download the CAT form as PDF.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns an
    /// error status.
    pub async fn cat_report(&self, id: &ResourceId) -> Result<Vec<u8>, ApiError> {
        let path = format!("{}/relatorio", item_path(PATH, id));
        self.transport.get_bytes(&path, &Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_query_skips_unset_fields() {
        let filter = CatFilter {
            search: Some("Silva".into()),
            tipo: None,
            page: PageRequest::new(0, 20),
        };
        assert_eq!(filter.to_query().to_query_string(), "?search=Silva&page=0&size=20");
    }

    #[test]
    fn filter_query_renders_wire_tipo() {
        let filter = CatFilter {
            tipo: Some(CatTipo::ComunicacaoObito),
            ..CatFilter::default()
        };
        assert_eq!(filter.to_query().get("tipo"), Some("COMUNICACAO_OBITO"));
    }
}
