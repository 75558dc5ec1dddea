use sst_core::{Envelope, Page, PageRequest};

/// Translate a 1-based `--page` flag into a backend page request.
#[must_use]
pub fn page_request(page: u32, size: u32) -> PageRequest {
    PageRequest::new(page.saturating_sub(1), size)
}

/// One canonical page from a list response. Filters were applied by the
/// backend, so raw arrays are only sliced.
#[must_use]
pub fn listing_page<T>(envelope: Envelope<T>, request: &PageRequest) -> Page<T> {
    sst_search::normalize_by(envelope, None, request.page, request.size, |_| Vec::new())
}
