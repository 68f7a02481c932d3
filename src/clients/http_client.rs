//! HTTP client for Travelbase API communication.
//!
//! This module provides the [`HttpClient`] type for posting JSON bodies to
//! the configured GraphQL endpoint with bearer-token authentication.

use std::collections::HashMap;

use crate::clients::errors::{HttpResponseError, TransportError};
use crate::config::{ApiToken, Endpoint, TravelbaseConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Travelbase API.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and Content-Type
/// - `Authorization: Bearer <token>` on every request
/// - Mapping non-2xx statuses and empty bodies to [`TransportError`]
///
/// Requests are attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint all requests are posted to.
    endpoint: Endpoint,
    /// Token sent as a bearer credential; masked in debug output.
    api_token: ApiToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &TravelbaseConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Travelbase API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            api_token: config.api_token().clone(),
            default_headers,
        })
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not included.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a JSON body to the endpoint and returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - The body cannot be encoded (`Encode`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The response body is empty (`EmptyBody`)
    ///
    /// A whitespace-only body is returned as is and fails later, when it is
    /// deserialized.
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<String, TransportError> {
        let payload = serde_json::to_string(body)?;

        let mut req_builder = self.client.post(self.endpoint.as_ref());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder
            .bearer_auth(self.api_token.as_ref())
            .body(payload)
            .send()
            .await?;

        let status = res.status();
        let body_text = res.text().await?;

        if !status.is_success() {
            return Err(HttpResponseError {
                code: status.as_u16(),
                message: body_text,
            }
            .into());
        }

        if body_text.is_empty() {
            return Err(TransportError::EmptyBody);
        }

        tracing::debug!(
            "Received {} byte response from {}",
            body_text.len(),
            self.endpoint
        );

        Ok(body_text)
    }
}
