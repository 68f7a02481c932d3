//! Error types for the Travelbase API SDK.
//!
//! This module contains the configuration error raised while building a
//! client, and the top-level [`TravelbaseError`] returned by every
//! [`TravelbaseClient`](crate::TravelbaseClient) operation.
//!
//! # Error Handling
//!
//! Configuration problems are detected once, at construction, and returned as
//! [`ConfigError`]. Per-call failures are either transport failures (network,
//! non-2xx status, empty body) or deserialization failures (the body does not
//! match the operation's result shape). Nothing is retried and nothing is
//! replaced by a default value.
//!
//! # Example
//!
//! ```rust
//! use travelbase_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

use crate::clients::graphql::{DeserializationError, GraphqlError};
use crate::clients::TransportError;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No endpoint was passed and the endpoint environment variable is unset.
    #[error("Endpoint not defined. Pass an endpoint explicitly or set {var}.")]
    MissingEndpoint {
        /// The environment variable that was consulted.
        var: &'static str,
    },

    /// No API token was passed and the token environment variable is unset.
    #[error("Api key not defined. Pass an API token explicitly or set {var}.")]
    MissingApiToken {
        /// The environment variable that was consulted.
        var: &'static str,
    },

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Travelbase API token.")]
    EmptyApiToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an http(s) URL such as 'https://api.example.com/graphql'.")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

/// Unified error type for [`TravelbaseClient`](crate::TravelbaseClient) operations.
///
/// # Example
///
/// ```rust,ignore
/// use travelbase_api::{TravelbaseClient, TravelbaseError};
///
/// match client.get_partner(42).await {
///     Ok(partner) => println!("{}", partner.company_name),
///     Err(TravelbaseError::Transport(e)) => println!("request failed: {e}"),
///     Err(TravelbaseError::Deserialization(e)) => println!("unexpected response: {e}"),
///     Err(TravelbaseError::Config(e)) => println!("misconfigured: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TravelbaseError {
    /// The client configuration is invalid or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response did not match the expected result shape.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

impl From<GraphqlError> for TravelbaseError {
    fn from(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Transport(e) => Self::Transport(e),
            GraphqlError::Deserialization(e) => Self::Deserialization(e),
        }
    }
}
