//! The single configured HTTP client every service call goes through.
//!
//! Every failure (no response, status >= 400, undecodable success body) raises
//! exactly one notice through the injected [`Notifier`] and is then returned to
//! the caller, which may set local error state but must not notify again.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sst_core::Envelope;

use crate::error::ApiError;
use crate::http::{check_response, error_message};
use crate::multipart::RequestBody;
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::query::Query;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);
const DEFAULT_FALLBACK: &str = "Ocorreu um erro inesperado.";

/// Builder for [`Transport`].
pub struct TransportBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    bearer_token: Option<String>,
    notifier: Arc<dyn Notifier>,
    dismiss_after: Duration,
    fallback_message: String,
}

impl TransportBuilder {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send `Authorization: Bearer <token>` on every request. Blank tokens are ignored.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    #[must_use]
    pub const fn dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    #[must_use]
    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the underlying `reqwest::Client`
    /// cannot be built (for example, when no TLS backend is available).
    pub fn build(self) -> Result<Transport, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(Transport {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            bearer_token: self.bearer_token,
            notifier: self.notifier,
            dismiss_after: self.dismiss_after,
            fallback_message: self.fallback_message,
        })
    }
}

/// Configured HTTP client bound to one backend base URL.
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
    notifier: Arc<dyn Notifier>,
    dismiss_after: Duration,
    fallback_message: String,
}

impl Transport {
    /// Start building a transport for `base_url`.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sst-admin/{}", env!("CARGO_PKG_VERSION")),
            bearer_token: None,
            notifier: Arc::new(TracingNotifier),
            dismiss_after: DEFAULT_DISMISS_AFTER,
            fallback_message: DEFAULT_FALLBACK.to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path plus query string.
    #[must_use]
    pub fn url(&self, path: &str, query: &Query) -> String {
        let separator = if path.starts_with('/') { "" } else { "/" };
        format!(
            "{}{separator}{path}{}",
            self.base_url,
            query.to_query_string()
        )
    }

    fn request(&self, method: Method, path: &str, query: &Query) -> RequestBuilder {
        let url = self.url(path, query);
        tracing::debug!(%method, %url, "issuing request");
        let builder = self.http.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and check its status. Failures are notified once.
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(source) => {
                let message = error_message(None, &source.to_string(), &self.fallback_message);
                return Err(self.fail(ApiError::Network { message, source }));
            }
        };
        check_response(resp, &self.fallback_message)
            .await
            .map_err(|error| self.fail(error))
    }

    /// Raise the single notice for `error` and hand it back.
    fn fail(&self, error: ApiError) -> ApiError {
        tracing::warn!(status = ?error.status(), kind = ?error.kind(), %error, "backend call failed");
        self.notifier.notify(Notice::error(
            error.message(),
            error.status(),
            self.dismiss_after,
        ));
        error
    }

    async fn read_value(&self, resp: reqwest::Response) -> Result<Value, ApiError> {
        let bytes = match resp.bytes().await {
            Ok(bytes) => bytes,
            Err(source) => {
                let message = error_message(None, &source.to_string(), &self.fallback_message);
                return Err(self.fail(ApiError::Network { message, source }));
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| self.fail(ApiError::Decode(format!("resposta inválida do servidor: {e}"))))
    }

    fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T, ApiError> {
        serde_json::from_value(value)
            .map_err(|e| self.fail(ApiError::Decode(format!("resposta inválida do servidor: {e}"))))
    }

    /// `GET` a JSON body and decode it as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, error status, or decode failure.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.request(Method::GET, path, query)).await?;
        let value = self.read_value(resp).await?;
        self.decode(value)
    }

    /// `GET` a list endpoint and classify its body as an [`Envelope`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, error status, or when a row
    /// does not decode as `T`.
    pub async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<Envelope<T>, ApiError> {
        let resp = self.send(self.request(Method::GET, path, query)).await?;
        let value = self.read_value(resp).await?;
        Envelope::from_value(value)
            .map_err(|e| self.fail(ApiError::Decode(format!("resposta inválida do servidor: {e}"))))
    }

    /// `GET` a binary body (reports).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or error status.
    pub async fn get_bytes(&self, path: &str, query: &Query) -> Result<Vec<u8>, ApiError> {
        let resp = self.send(self.request(Method::GET, path, query)).await?;
        match resp.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(source) => {
                let message = error_message(None, &source.to_string(), &self.fallback_message);
                Err(self.fail(ApiError::Network { message, source }))
            }
        }
    }

    /// Send a JSON body with `method` and decode the response as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on serialization, transport, status, or decode failure.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path, &Query::new()).json(body);
        let resp = self.send(builder).await?;
        let value = self.read_value(resp).await?;
        self.decode(value)
    }

    /// Send an encoded create/update body and decode the response as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on form assembly, transport, status, or decode failure.
    pub async fn send_body<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        let builder = self.request(method, path, &Query::new());
        let builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart {
                payload_part,
                payload,
                files,
            } => builder.multipart(RequestBody::into_form(payload_part, payload, files)?),
        };
        let resp = self.send(builder).await?;
        let value = self.read_value(resp).await?;
        self.decode(value)
    }

    /// `DELETE` a resource, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or error status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path, &Query::new()))
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> Transport {
        Transport::builder(base).build().unwrap()
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let t = transport("https://sst.example.com/api/");
        let query = Query::new().param("page", 0);
        assert_eq!(
            t.url("/cids", &query),
            "https://sst.example.com/api/cids?page=0"
        );
        assert_eq!(t.url("cids", &Query::new()), "https://sst.example.com/api/cids");
    }

    #[test]
    fn blank_bearer_token_is_dropped() {
        let builder = Transport::builder("http://x").bearer_token("  ");
        assert!(builder.bearer_token.is_none());
        let builder = Transport::builder("http://x").bearer_token("abc");
        assert_eq!(builder.bearer_token.as_deref(), Some("abc"));
    }
}
