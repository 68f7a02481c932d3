//! GraphQL client implementation for the Travelbase partner API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! [`Operation`]s against the configured endpoint.

use serde::de::DeserializeOwned;

use crate::clients::graphql::{map_response, GraphqlError};
use crate::clients::{HttpClient, TransportError};
use crate::config::TravelbaseConfig;
use crate::error::ConfigError;
use crate::graphql::Operation;

/// GraphQL transport for the Travelbase partner API.
///
/// Sends an operation's document and variables as
/// `{"query": ..., "variables": ...}` and returns the raw body, or maps it
/// into a typed result with [`execute_as`](Self::execute_as).
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use travelbase_api::clients::graphql::GraphqlClient;
/// use travelbase_api::graphql::queries;
///
/// let client = GraphqlClient::new(&config)?;
/// let body = client.execute(&queries::rental_unit(301)).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: &TravelbaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes an operation and returns the raw response body.
    ///
    /// GraphQL-level `errors` in the body are not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for network failures, non-2xx responses
    /// and empty bodies.
    pub async fn execute(&self, operation: &Operation) -> Result<String, TransportError> {
        tracing::debug!(
            "Executing {} against {}",
            operation.name(),
            self.http_client.endpoint()
        );

        self.http_client.post_json(&operation.body()).await
    }

    /// Executes an operation and maps the body's `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] if the request fails and
    /// [`GraphqlError::Deserialization`] if the body does not match `T`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        operation: &Operation,
    ) -> Result<T, GraphqlError> {
        let body = self.execute(operation).await?;
        Ok(map_response(operation.name(), &body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, Endpoint};
    use crate::graphql::{Field, Operation};
    use serde::Deserialize;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct UnitData {
        #[serde(rename = "rentalUnit")]
        rental_unit: UnitId,
    }

    #[derive(Debug, Deserialize)]
    struct UnitId {
        id: String,
    }

    fn create_client(endpoint: &str) -> GraphqlClient {
        let config = TravelbaseConfig::builder()
            .endpoint(Endpoint::new(endpoint).unwrap())
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        GraphqlClient::new(&config).unwrap()
    }

    fn unit_operation() -> Operation {
        Operation::query(
            "rentalUnit",
            Field::new("rentalUnit").argument("id", 7_u64).field("id"),
        )
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }

    #[tokio::test]
    async fn test_execute_posts_query_and_variables() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "query": "query { rentalUnit(id: 7) { id } }",
                "variables": {}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"rentalUnit": {"id": "7"}}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server.uri());
        let data: UnitData = client.execute_as(&unit_operation()).await.unwrap();

        assert_eq!(data.rental_unit.id, "7");
    }

    #[tokio::test]
    async fn test_execute_as_reports_shape_mismatch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})),
            )
            .mount(&mock_server)
            .await;

        let client = create_client(&mock_server.uri());
        let result = client.execute_as::<UnitData>(&unit_operation()).await;

        match result {
            Err(GraphqlError::Deserialization(e)) => assert_eq!(e.operation, "rentalUnit"),
            other => panic!("Expected Deserialization error, got: {other:?}"),
        }
    }
}
