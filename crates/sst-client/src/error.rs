//! Backend call error types.

use thiserror::Error;

/// Broad class of a failed call, used to pick how the UI reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was received (DNS, refused connection, timeout).
    Network,
    /// The backend rejected the request (4xx).
    Client,
    /// The backend failed (5xx).
    Server,
    /// A 2xx response whose body did not match the expected shape.
    Decode,
    /// The request could not be built locally.
    Request,
}

/// Errors returned by every domain service call.
///
/// Each variant carries the user-facing message already extracted from the
/// response, so call sites can show it inline without re-parsing anything.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received.
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with status >= 400.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the error body, or a fallback.
        message: String,
    },

    /// Failed to decode a success response.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Failed to assemble the request (bad file part, unserializable payload).
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Status { status, .. } if *status >= 500 => ErrorKind::Server,
            Self::Status { .. } => ErrorKind::Client,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Request(_) => ErrorKind::Request,
        }
    }

    /// The message meant for the person using the application.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message, .. } | Self::Status { message, .. } => message,
            Self::Decode(message) | Self::Request(message) => message,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 from the backend.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_kinds_split_at_500() {
        let client = ApiError::Status {
            status: 422,
            message: "CPF inválido".into(),
        };
        let server = ApiError::Status {
            status: 503,
            message: "indisponível".into(),
        };
        assert_eq!(client.kind(), ErrorKind::Client);
        assert_eq!(server.kind(), ErrorKind::Server);
        assert_eq!(client.message(), "CPF inválido");
        assert_eq!(client.status(), Some(422));
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Status {
            status: 404,
            message: "CAT não encontrada".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: CAT não encontrada");
        assert!(err.is_not_found());
    }
}
