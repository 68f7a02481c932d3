//! GraphQL-specific error types for the Travelbase API SDK.
//!
//! - [`DeserializationError`]: The response body does not match the
//!   operation's result shape
//! - [`GraphqlError`]: Either a transport failure or a deserialization failure
//!
//! GraphQL-level `errors` entries do not raise an error on their own. When a
//! body fails to deserialize, any such messages are attached to the
//! [`DeserializationError`] as context.
//!
//! # Example
//!
//! ```rust,ignore
//! use travelbase_api::clients::graphql::GraphqlError;
//!
//! match graphql_client.execute_as::<PartnerData>(&operation).await {
//!     Ok(data) => println!("{}", data.partner.company_name),
//!     Err(GraphqlError::Transport(e)) => println!("Transport error: {e}"),
//!     Err(GraphqlError::Deserialization(e)) => {
//!         println!("Unexpected response for {}: {e}", e.operation);
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::TransportError;

/// Error returned when a response body cannot be mapped to its result type.
#[derive(Debug, Error)]
#[error(
    "Failed to deserialize {operation} response: {source}{}",
    graphql_context(.graphql_errors)
)]
pub struct DeserializationError {
    /// The operation whose response failed to map.
    pub operation: &'static str,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
    /// Messages from the body's GraphQL `errors` array, if any.
    pub graphql_errors: Vec<String>,
}

fn graphql_context(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(" (GraphQL errors: {})", messages.join("; "))
    }
}

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response did not match the expected result shape.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}
