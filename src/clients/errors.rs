//! Transport error types for the Travelbase API SDK.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the endpoint
//! - [`TransportError`]: Unified error type for everything that can go wrong
//!   between handing a document to the transport and receiving a body back
//!
//! GraphQL-level `errors` arrays are not inspected here; a body that carries
//! them is still a successful transport result.
//!
//! # Example
//!
//! ```rust,ignore
//! use travelbase_api::clients::TransportError;
//!
//! match http_client.post_graphql(&operation).await {
//!     Ok(body) => println!("{body}"),
//!     Err(TransportError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(TransportError::EmptyBody) => println!("No response body found"),
//!     Err(TransportError::Network(e)) => println!("Network error: {e}"),
//!     Err(TransportError::Encode(e)) => println!("Could not encode request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the endpoint answers with a non-successful status.
///
/// # Example
///
/// ```rust
/// use travelbase_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"message":"Unauthenticated."}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body, if any.
    pub message: String,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request succeeded but the response body was empty.
    #[error("No response body found")]
    EmptyBody,

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request payload could not be encoded as JSON.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}
