//! CID-10 lookup.

use sst_core::entities::Cid;
use sst_core::{ResourceId, Sort};

use crate::search::SearchEndpoint;
use crate::{ApiError, Query, SstClient, item_path};

impl SearchEndpoint for Cid {
    const PATH: &'static str = "/cids";
    const TERM_PARAM: &'static str = "termo";
    const LABEL: &'static str = "CID";

    fn default_sort() -> Option<Sort> {
        Some(Sort::asc("codigo"))
    }
}

impl SstClient {
    /// Fetch one CID entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the entry does not exist,
    /// or the body cannot be decoded.
    pub async fn get_cid(&self, id: &ResourceId) -> Result<Cid, ApiError> {
        self.transport
            .get_json(&item_path(Cid::PATH, id), &Query::new())
            .await
    }
}
