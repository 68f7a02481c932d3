//! GraphQL response envelope and mapping.
//!
//! [`map_response`] turns a raw body into an operation's typed result. Only
//! structural mapping is applied: unknown fields are ignored, and a missing
//! or mistyped required field fails with a [`DeserializationError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::graphql::DeserializationError;

/// The standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// The operation result.
    pub data: T,
    /// GraphQL errors reported alongside the data.
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GraphqlErrorMessage {
    /// Human-readable message.
    pub message: String,
    /// Response path the error applies to.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorsOnly {
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

/// Deserializes a response body into the `data` payload of type `T`.
///
/// # Errors
///
/// Returns [`DeserializationError`] if the body is not JSON, has no usable
/// `data`, or `data` does not match `T`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use travelbase_api::clients::graphql::map_response;
///
/// #[derive(Deserialize)]
/// struct Data { message: String }
///
/// let data: Data = map_response("example", r#"{"data": {"message": "ok"}}"#).unwrap();
/// assert_eq!(data.message, "ok");
/// ```
pub fn map_response<T: DeserializeOwned>(
    operation: &'static str,
    body: &str,
) -> Result<T, DeserializationError> {
    match serde_json::from_str::<GraphqlResponse<T>>(body) {
        Ok(response) => {
            if !response.errors.is_empty() {
                tracing::debug!(
                    "{} response carried {} GraphQL error(s) alongside data",
                    operation,
                    response.errors.len()
                );
            }
            Ok(response.data)
        }
        Err(source) => {
            let graphql_errors = serde_json::from_str::<ErrorsOnly>(body)
                .map(|envelope| envelope.errors.into_iter().map(|e| e.message).collect::<Vec<_>>())
                .unwrap_or_default();

            Err(DeserializationError {
                operation,
                source,
                graphql_errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct MessageData {
        message: String,
    }

    #[test]
    fn test_maps_data_payload() {
        let data: MessageData =
            map_response("deleteTrips", r#"{"data": {"message": "deleted"}, "extensions": {}}"#)
                .unwrap();
        assert_eq!(data.message, "deleted");
    }

    #[test]
    fn test_missing_data_is_deserialization_error() {
        let error = map_response::<MessageData>("deleteTrips", r#"{"errors": []}"#).unwrap_err();
        assert_eq!(error.operation, "deleteTrips");
        assert!(error.graphql_errors.is_empty());
    }

    #[test]
    fn test_null_data_collects_graphql_messages() {
        let body = r#"{"data": null, "errors": [{"message": "Partner not found", "path": ["partner"]}]}"#;

        let error = map_response::<MessageData>("partner", body).unwrap_err();
        assert_eq!(error.graphql_errors, vec!["Partner not found".to_string()]);
    }

    #[test]
    fn test_invalid_json_is_deserialization_error() {
        let error = map_response::<MessageData>("partner", "<html>oops</html>").unwrap_err();
        assert!(error.source.is_syntax());
    }
}
