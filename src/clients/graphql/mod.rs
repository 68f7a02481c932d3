//! GraphQL transport for the Travelbase partner API.
//!
//! This module provides the GraphQL layer built on top of the
//! [`HttpClient`](crate::clients::HttpClient):
//!
//! - [`GraphqlClient`]: Executes an [`Operation`](crate::graphql::Operation)
//!   and returns the raw body or a typed result
//! - [`map_response`]: Maps a raw body into an operation's typed result
//! - [`GraphqlError`] and [`DeserializationError`]: Error types for this layer
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The operation result
//! - `errors`: Any GraphQL errors (still HTTP 200)
//!
//! Only `data` is mapped. `errors` entries are surfaced as context when
//! `data` cannot be mapped.

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::{DeserializationError, GraphqlError};
pub use response::{map_response, GraphqlErrorMessage, GraphqlResponse};
