//! Setor service calls.

use reqwest::Method;
use sst_core::entities::Setor;
use sst_core::{Envelope, PageRequest, ResourceId, Sort};

use crate::{ApiError, Query, SstClient, item_path};

const PATH: &str = "/setores";

impl SstClient {
    /// List setores, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_setores(
        &self,
        nome: Option<&str>,
        page: &PageRequest,
    ) -> Result<Envelope<Setor>, ApiError> {
        let query = Query::new()
            .opt("nome", nome)
            .page_or_sort(page, Some(Sort::asc("nome")));
        self.transport.get_envelope(PATH, &query).await
    }

    /// Fetch one setor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the setor does not exist.
    pub async fn get_setor(&self, id: &ResourceId) -> Result<Setor, ApiError> {
        self.transport
            .get_json(&item_path(PATH, id), &Query::new())
            .await
    }

    /// Create a setor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_setor(&self, setor: &Setor) -> Result<Setor, ApiError> {
        self.transport.send_json(Method::POST, PATH, setor).await
    }

    /// Replace a setor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn update_setor(&self, id: &ResourceId, setor: &Setor) -> Result<Setor, ApiError> {
        self.transport
            .send_json(Method::PUT, &item_path(PATH, id), setor)
            .await
    }

    /// Delete a setor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_setor(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.transport.delete(&item_path(PATH, id)).await
    }
}
