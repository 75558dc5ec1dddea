//! Médico lookup.
//!
//! The backend answers this collection with the whole table as a bare array,
//! so paging and filtering happen client-side after normalization.

use sst_core::entities::Medico;
use sst_core::{ResourceId, Sort};

use crate::search::SearchEndpoint;
use crate::{ApiError, Query, SstClient, item_path};

impl SearchEndpoint for Medico {
    const PATH: &'static str = "/medicos";
    const TERM_PARAM: &'static str = "nome";
    const LABEL: &'static str = "Médico";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("nome"))
    }
}

impl SstClient {
    /// Fetch one médico.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the médico does not exist,
    /// or the body cannot be decoded.
    pub async fn get_medico(&self, id: &ResourceId) -> Result<Medico, ApiError> {
        self.transport
            .get_json(&item_path(Medico::PATH, id), &Query::new())
            .await
    }
}
