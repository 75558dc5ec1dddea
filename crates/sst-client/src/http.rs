//! Shared HTTP response helpers.
//!
//! Centralizes the status check and the error-message extraction so every
//! service call reports failures the same way.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ApiError;

/// Error body fields that may carry a readable message, highest priority first.
pub const MESSAGE_FIELDS: [&str; 3] = ["mensagem", "titulo", "message"];

/// Pick the message to show for a failed call.
///
/// Priority: body `mensagem`, body `titulo`, body `message`, the transport
/// message, then `fallback`. Blank strings are skipped at every level.
#[must_use]
pub fn error_message(body: Option<&Value>, transport_message: &str, fallback: &str) -> String {
    body.and_then(body_message)
        .or_else(|| non_blank(transport_message))
        .unwrap_or(fallback)
        .to_string()
}

fn body_message(body: &Value) -> Option<&str> {
    MESSAGE_FIELDS
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str).and_then(non_blank))
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Transport-level description of a failed status.
#[must_use]
pub fn status_description(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || format!("Falha na requisição (HTTP {})", status.as_u16()),
        |reason| format!("Falha na requisição (HTTP {} {reason})", status.as_u16()),
    )
}

/// Check an HTTP response for an error status.
///
/// Returns the response unchanged when the status is below 400. Otherwise the
/// body is read and turned into [`ApiError::Status`] with the extracted message.
pub async fn check_response(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.as_u16() < 400 {
        return Ok(resp);
    }
    let bytes = resp.bytes().await.unwrap_or_default();
    let body = serde_json::from_slice::<Value>(&bytes).ok();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(body.as_ref(), &status_description(status), fallback),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const FALLBACK: &str = "Ocorreu um erro inesperado.";

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[rstest]
    #[case::mensagem_wins(json!({"mensagem": "m", "titulo": "t", "message": "x"}), "transport", "m")]
    #[case::titulo_second(json!({"titulo": "t", "message": "x"}), "transport", "t")]
    #[case::message_third(json!({"message": "x"}), "transport", "x")]
    #[case::blank_fields_skipped(json!({"mensagem": "  ", "titulo": ""}), "transport", "transport")]
    #[case::non_string_skipped(json!({"mensagem": 42}), "transport", "transport")]
    #[case::fallback_last(json!({}), "", FALLBACK)]
    fn message_priority(#[case] body: Value, #[case] transport: &str, #[case] expected: &str) {
        assert_eq!(error_message(Some(&body), transport, FALLBACK), expected);
    }

    #[test]
    fn missing_body_uses_transport_message() {
        assert_eq!(error_message(None, "timeout", FALLBACK), "timeout");
    }

    #[test]
    fn status_description_includes_reason() {
        assert_eq!(
            status_description(StatusCode::NOT_FOUND),
            "Falha na requisição (HTTP 404 Not Found)"
        );
    }

    #[tokio::test]
    async fn check_response_success_passes_through() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp, FALLBACK).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_reads_mensagem() {
        let resp = mock_response(422, r#"{"mensagem":"CPF inválido"}"#);
        let err = check_response(resp, FALLBACK).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 422, ref message } if message == "CPF inválido"
        ));
    }

    #[tokio::test]
    async fn check_response_non_json_body_uses_status_line() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp, FALLBACK).await.unwrap_err();
        assert_eq!(err.message(), "Falha na requisição (HTTP 502 Bad Gateway)");
    }
}
