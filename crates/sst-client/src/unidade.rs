//! Unidade service calls.

use reqwest::Method;
use sst_core::entities::{Setor, Unidade};
use sst_core::{Envelope, PageRequest, ResourceId, Sort};

use crate::{ApiError, Query, SstClient, item_path};

const PATH: &str = "/unidades";

impl SstClient {
    /// List unidades, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_unidades(
        &self,
        nome: Option<&str>,
        page: &PageRequest,
    ) -> Result<Envelope<Unidade>, ApiError> {
        let query = Query::new()
            .opt("nome", nome)
            .page_or_sort(page, Some(Sort::asc("nome")));
        self.transport.get_envelope(PATH, &query).await
    }

    /// Fetch one unidade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the unidade does not exist.
    pub async fn get_unidade(&self, id: &ResourceId) -> Result<Unidade, ApiError> {
        self.transport
            .get_json(&item_path(PATH, id), &Query::new())
            .await
    }

    /// Every setor of a unidade (`GET /unidades/{id}/setores`, unpaged).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_setores_by_unidade(
        &self,
        unidade_id: &ResourceId,
    ) -> Result<Vec<Setor>, ApiError> {
        let path = format!("{}/setores", item_path(PATH, unidade_id));
        self.transport.get_json(&path, &Query::new()).await
    }

    /// Create a unidade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_unidade(&self, unidade: &Unidade) -> Result<Unidade, ApiError> {
        self.transport.send_json(Method::POST, PATH, unidade).await
    }

    /// Replace a unidade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn update_unidade(
        &self,
        id: &ResourceId,
        unidade: &Unidade,
    ) -> Result<Unidade, ApiError> {
        self.transport
            .send_json(Method::PUT, &item_path(PATH, id), unidade)
            .await
    }

    /// Delete a unidade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_unidade(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.transport.delete(&item_path(PATH, id)).await
    }
}
