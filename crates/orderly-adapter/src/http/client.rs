/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, scheme)
[OUTPUT]: Configured reqwest client producing signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{AuthHeaderBuilder, Credentials, SigningRequest, SigningScheme};
use crate::config::MAINNET_BASE_URL;
use crate::http::{OrderlyError, Result};
use crate::types::HttpMethod;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// JSON envelope returned by every endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// Main HTTP client for the exchange REST API
#[derive(Debug)]
pub struct OrderlyClient {
    http_client: Client,
    base_url: Url,
    credentials: Arc<Credentials>,
    header_builder: AuthHeaderBuilder,
}

impl OrderlyClient {
    /// Create a new mainnet client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default(), MAINNET_BASE_URL)
    }

    /// Create a new client with custom configuration and base URL
    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: Arc::new(credentials),
            header_builder: AuthHeaderBuilder::new(),
        })
    }

    /// Pin the client to an explicit signing scheme revision.
    ///
    /// Only the live scheme is accepted by the production API; the
    /// deprecated revisions exist for compatibility testing.
    pub fn with_signing_scheme(mut self, scheme: SigningScheme) -> Self {
        if scheme.is_deprecated() {
            warn!(?scheme, "using a deprecated signing scheme");
        }
        self.header_builder = AuthHeaderBuilder::with_scheme(scheme);
        self
    }

    /// Get the configured credentials snapshot
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the credentials snapshot atomically.
    ///
    /// Rotation swaps the whole value; in-flight requests keep signing with
    /// the snapshot they started from.
    pub fn rotate_credentials(&mut self, credentials: Credentials) {
        self.credentials = Arc::new(credentials);
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Perform a signed request.
    ///
    /// The signing timestamp is generated here, at the moment of signing;
    /// callers retrying a failure re-enter this method and get a fresh one.
    pub(crate) async fn send_signed(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value> {
        let request = {
            let mut request = SigningRequest::new(method, path).with_query(query);
            if let Some(body) = body {
                request = request.with_body(body);
            }
            request
        };
        let headers = self.header_builder.build(&self.credentials, &request)?;

        let mut url = self.url(path)?;
        let query_string = request.query_string();
        if !query_string.is_empty() {
            // The server reconstructs the signed string from the query it
            // receives, so the wire query must be byte-identical to the
            // signed one. Re-encoding the pairs would percent-escape
            // characters the signed form carries raw.
            url.set_query(Some(&query_string[1..]));
        }

        let mut builder = self.http_client.request(method.into(), url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        // DELETE bodies are sent on the wire even though they are unsigned.
        // The canonical serialization is reused so the wire bytes are the
        // exact bytes that were signed.
        if let Some(body) = &request.body {
            builder = builder.body(crate::auth::canonical_json(body).into_bytes());
        }

        self.send_json(builder).await
    }

    /// Perform an unauthenticated request against a public endpoint.
    pub(crate) async fn send_public(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k, v)));
        }

        let mut builder = self
            .http_client
            .request(method.into(), url)
            .header("Content-Type", "application/json");
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        self.send_json(builder).await
    }

    /// Send a request and decode the JSON envelope.
    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: ApiEnvelope = serde_json::from_str(&text).map_err(|_| {
            if status.is_success() {
                OrderlyError::InvalidResponse(format!("unparseable response body: {text}"))
            } else {
                OrderlyError::api_error(status, text.clone())
            }
        })?;

        if !envelope.success {
            return Err(OrderlyError::Api {
                code: envelope.code.unwrap_or_else(|| i64::from(status.as_u16())),
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            });
        }

        debug!(status = %status, "request succeeded");
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new(
            "6Nn7hUFANgm2wbvy3A43ckuqFKqDCeggnae3219T7Yyq",
            "5Hd7DLap5XV5qP3tkTYKwrbkiB1mzc2v9gk5U1K52FDq",
            "0xd8bc14ea4e7ab8c6ce4e832b1b7ee03f982295002312904d56b169ffb560f3db",
        )
    }

    #[test]
    fn test_client_creation() {
        let client = OrderlyClient::new(test_credentials()).unwrap();
        assert_eq!(client.credentials().account_id().len(), 66);
    }

    #[test]
    fn test_rotate_credentials_swaps_whole_snapshot() {
        let mut client = OrderlyClient::new(test_credentials()).unwrap();
        client.rotate_credentials(Credentials::new("k", "s", "0xother"));
        assert_eq!(client.credentials().account_id(), "0xother");
        assert_eq!(client.credentials().api_key(), "k");
    }

    #[tokio::test]
    async fn test_signed_request_fails_locally_on_missing_credentials() {
        // No network call is attempted when signing cannot complete.
        let client = OrderlyClient::new(Credentials::new("", "", "")).unwrap();
        let err = client
            .send_signed(HttpMethod::Get, "/v1/positions", Vec::new(), None)
            .await
            .unwrap_err();
        assert!(err.is_signing_error());
    }
}
