//! HTTP transport for the Coinbase REST API.
//!
//! [`Transport`] is the seam between the endpoint methods and the
//! network: three verbs, bytes in and out. [`HttpTransport`] is the
//! production implementation backed by reqwest, adding base-URL
//! composition, request signing, and non-2xx classification. Endpoint
//! code never inspects a [`TransportError`]; it is passed through to the
//! caller unchanged.

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::auth;
use crate::credentials::ApiCredentials;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const HEADER_KEY: HeaderName = HeaderName::from_static("access_key");
const HEADER_SIGNATURE: HeaderName = HeaderName::from_static("access_signature");
const HEADER_NONCE: HeaderName = HeaderName::from_static("access_nonce");

/// Errors produced by the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be completed (connect, timeout, TLS, ...).
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The API key contains bytes that cannot appear in an HTTP header.
    #[error("credential is not a valid header value")]
    InvalidCredential,
}

/// The interface every endpoint operation consumes.
///
/// Implementations own base-URL composition, authentication, and I/O.
/// Each call is one round trip; implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issues a GET to `path` with the given query parameters.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError>;

    /// Issues a POST to `path` with a URL-encoded form body.
    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<Vec<u8>, TransportError>;

    /// Issues a POST to `path` with a JSON body.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-backed [`Transport`] with Coinbase request signing.
///
/// Safe to share across tasks; reqwest's client is internally pooled.
#[derive(Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<ApiCredentials>,
}

impl HttpTransport {
    /// Creates a transport with the default 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        credentials: Option<ApiCredentials>,
    ) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, credentials, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a caller-chosen request timeout.
    ///
    /// Cancellation is by dropping the returned futures; the timeout here
    /// is the only deadline the transport itself enforces.
    pub fn with_timeout(
        base_url: &str,
        credentials: Option<ApiCredentials>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Signs (when credentials are present) and executes a built request,
    /// classifying the response.
    async fn execute(&self, mut request: reqwest::Request) -> Result<Vec<u8>, TransportError> {
        if let Some(credentials) = &self.credentials {
            let nonce = auth::next_nonce();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default();
            let signature = auth::sign(
                credentials.expose_secret(),
                nonce,
                request.url().as_str(),
                &body,
            );

            let headers = request.headers_mut();
            headers.insert(HEADER_KEY, header_value(credentials.api_key())?);
            headers.insert(HEADER_SIGNATURE, header_value(&signature)?);
            headers.insert(HEADER_NONCE, header_value(&nonce.to_string())?);
        }

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, TransportError> {
    HeaderValue::from_str(value).map_err(|_| TransportError::InvalidCredential)
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, TransportError> {
        let mut builder = self.http.get(self.url(path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let request = builder.build()?;
        debug!(path, "GET request");
        self.execute(request).await
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<Vec<u8>, TransportError> {
        let request = self.http.post(self.url(path)).form(form).build()?;
        debug!(path, "POST form request");
        self.execute(request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Vec<u8>, TransportError> {
        let request = self.http.post(self.url(path)).json(body).build()?;
        debug!(path, "POST json request");
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = HttpTransport::new("https://coinbase.com/api/v1", None).unwrap();
        assert_eq!(
            transport.url("account/balance"),
            "https://coinbase.com/api/v1/account/balance"
        );
    }

    #[test]
    fn url_strips_trailing_slash() {
        let transport = HttpTransport::new("https://coinbase.com/api/v1/", None).unwrap();
        assert_eq!(
            transport.url("prices/spot_rate"),
            "https://coinbase.com/api/v1/prices/spot_rate"
        );
    }
}
