//! Riscos inventoried in a PGR (`/pgrs/{id}/riscos`).

use reqwest::Method;
use sst_core::ResourceId;
use sst_core::entities::Risco;

use crate::{ApiError, Query, SstClient, item_path};

fn riscos_path(pgr_id: &ResourceId) -> String {
    format!("{}/riscos", item_path("/pgrs", pgr_id))
}

impl SstClient {
    /// Every risco of a PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn list_riscos(&self, pgr_id: &ResourceId) -> Result<Vec<Risco>, ApiError> {
        self.transport
            .get_json(&riscos_path(pgr_id), &Query::new())
            .await
    }

    /// Add a risco to a PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_risco(&self, pgr_id: &ResourceId, risco: &Risco) -> Result<Risco, ApiError> {
        self.transport
            .send_json(Method::POST, &riscos_path(pgr_id), risco)
            .await
    }

    /// Remove a risco from a PGR.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_risco(
        &self,
        pgr_id: &ResourceId,
        risco_id: &ResourceId,
    ) -> Result<(), ApiError> {
        self.transport
            .delete(&item_path(&riscos_path(pgr_id), risco_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn riscos_are_nested_under_the_pgr() {
        assert_eq!(riscos_path(&ResourceId::from(3)), "/pgrs/3/riscos");
    }
}
