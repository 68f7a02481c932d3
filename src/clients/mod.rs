//! HTTP and GraphQL transport for Travelbase API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Posts JSON to the configured endpoint with bearer auth
//! - [`TransportError`]: Network failures, non-2xx statuses and empty bodies
//! - [`graphql::GraphqlClient`]: Executes GraphQL operations
//! - [`graphql::GraphqlError`]: Transport or deserialization failure
//!
//! # Retry Behavior
//!
//! Requests are attempted exactly once. Failures are returned to the caller
//! unchanged.

mod errors;
pub mod graphql;
mod http_client;

pub use errors::{HttpResponseError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};

pub use graphql::{DeserializationError, GraphqlClient, GraphqlError};
