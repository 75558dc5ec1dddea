//! Cross-cutting error types.
//!
//! Transport failures live in `sst-client` (`ApiError`) and configuration
//! failures in `sst-config`. This module only covers problems detected while
//! handling domain values locally.

use thiserror::Error;

/// Errors raised while building or parsing domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not match any variant of a domain enum.
    #[error("invalid {kind}: '{value}' (expected one of: {expected})")]
    InvalidEnum {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// A sort expression was not of the form `field` or `field,direction`.
    #[error("invalid sort expression '{0}' (expected 'field,asc' or 'field,desc')")]
    InvalidSort(String),

    /// Data failed a local validation rule.
    #[error("validation error: {0}")]
    Validation(String),
}
