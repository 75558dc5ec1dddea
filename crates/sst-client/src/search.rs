//! Generic lookup search shared by every searchable resource.
//!
//! A lookup table is configuration, not code: implementing [`SearchEndpoint`]
//! for a record type names its collection path and the query parameter that
//! carries the search text. [`SstClient::search`] does the rest.

use serde::de::DeserializeOwned;
use sst_core::{Envelope, SearchRequest, Searchable, Sort};

use crate::{ApiError, Query, SstClient};

/// A lookup collection that can be searched by free text.
pub trait SearchEndpoint: Searchable + DeserializeOwned + Send + Sync + 'static {
    /// Collection path relative to the base URL.
    const PATH: &'static str;
    /// Query parameter the backend reads the search text from.
    const TERM_PARAM: &'static str;
    /// Human-facing name, used in titles and log lines.
    const LABEL: &'static str;

    /// Sort applied when the request does not carry one.
    #[must_use]
    fn default_sort() -> Option<Sort> {
        None
    }
}

impl SstClient {
    /// Search a lookup collection.
    ///
    /// A blank term is omitted from the query so the backend returns
    /// everything. The body is returned as an [`Envelope`] because lookup
    /// endpoints answer either paged or with the whole table.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns an
    /// error status, or a row does not decode as `T`.
    pub async fn search<T: SearchEndpoint>(
        &self,
        request: &SearchRequest,
    ) -> Result<Envelope<T>, ApiError> {
        let query = search_query::<T>(request);
        tracing::debug!(resource = T::LABEL, term = ?request.effective_term(), page = request.page.page, "searching");
        self.transport.get_envelope(T::PATH, &query).await
    }
}

/// Query for a lookup search: the term (when not blank) then paging.
#[must_use]
pub fn search_query<T: SearchEndpoint>(request: &SearchRequest) -> Query {
    Query::new()
        .opt(T::TERM_PARAM, request.effective_term())
        .page_or_sort(&request.page, T::default_sort())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sst_core::PageRequest;
    use sst_core::entities::{Cid, Medico};

    #[test]
    fn blank_term_is_not_sent() {
        let request = SearchRequest::new(Some("   ".into()), PageRequest::default());
        let query = search_query::<Medico>(&request);
        assert_eq!(query.get("nome"), None);
        assert_eq!(query.get("page"), Some("0"));
        assert_eq!(query.get("size"), Some("10"));
    }

    #[test]
    fn term_uses_resource_parameter() {
        let request = SearchRequest::new(Some(" S72 ".into()), PageRequest::new(1, 10));
        let query = search_query::<Cid>(&request);
        assert_eq!(query.get("termo"), Some("S72"));
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("sort"), Some("codigo,asc"));
    }
}
