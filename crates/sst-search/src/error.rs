//! Controller error types.

use thiserror::Error;

/// Reasons a search or listing controller refuses an operation.
///
/// None of these touch the network; backend failures surface as
/// [`sst_client::ApiError`] and end up in the controller's error phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The modal is closed; open it first.
    #[error("search is closed")]
    Closed,

    /// Requested page does not exist.
    #[error("page {requested} is out of range (total pages: {total})")]
    PageOutOfRange { requested: u32, total: u32 },

    /// Selected row index is outside the current page.
    #[error("no row {index} on this page ({len} rows)")]
    NoSuchRow { index: usize, len: usize },

    /// Rows can only be selected once results are shown.
    #[error("no results to select from")]
    NotSelectable,

    /// Nothing has been requested yet.
    #[error("nothing to retry")]
    NothingToRetry,
}
