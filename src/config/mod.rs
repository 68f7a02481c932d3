//! Configuration types for the Travelbase API SDK.
//!
//! This module provides the configuration used to construct a
//! [`TravelbaseClient`](crate::TravelbaseClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TravelbaseConfig`]: The configuration struct holding the endpoint and token
//! - [`TravelbaseConfigBuilder`]: A builder for constructing [`TravelbaseConfig`] instances
//! - [`Endpoint`]: A validated GraphQL endpoint URL
//! - [`ApiToken`]: A validated API token with masked debug output
//!
//! # Environment Fallback
//!
//! [`TravelbaseConfig::resolve`] takes explicit values first and falls back to
//! the [`ENDPOINT_ENV_VAR`] and [`API_TOKEN_ENV_VAR`] environment variables,
//! then to [`LEGACY_ENDPOINT_ENV_VAR`] and [`LEGACY_API_TOKEN_ENV_VAR`] as set
//! up for older `TOR_*` deployments. Resolution happens once, when the
//! configuration is created.
//!
//! # Example
//!
//! ```rust
//! use travelbase_api::{TravelbaseConfig, Endpoint, ApiToken};
//!
//! let config = TravelbaseConfig::builder()
//!     .endpoint(Endpoint::new("https://api.example.com/graphql").unwrap())
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, Endpoint};

use crate::error::ConfigError;

/// Environment variable consulted for the endpoint when none is passed.
pub const ENDPOINT_ENV_VAR: &str = "TRAVELBASE_GRAPHQL_ENDPOINT";

/// Environment variable consulted for the API token when none is passed.
pub const API_TOKEN_ENV_VAR: &str = "TRAVELBASE_GRAPHQL_APIKEY";

/// Older name of [`ENDPOINT_ENV_VAR`], consulted when that one is unset.
pub const LEGACY_ENDPOINT_ENV_VAR: &str = "TOR_GRAPHQL_ENDPOINT";

/// Older name of [`API_TOKEN_ENV_VAR`], consulted when that one is unset.
pub const LEGACY_API_TOKEN_ENV_VAR: &str = "TOR_GRAPHQL_APIKEY";

/// Configuration for the Travelbase API SDK.
///
/// # Thread Safety
///
/// `TravelbaseConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct TravelbaseConfig {
    endpoint: Endpoint,
    api_token: ApiToken,
    user_agent_prefix: Option<String>,
}

impl TravelbaseConfig {
    /// Creates a new builder for constructing a `TravelbaseConfig`.
    #[must_use]
    pub fn builder() -> TravelbaseConfigBuilder {
        TravelbaseConfigBuilder::new()
    }

    /// Resolves a configuration from explicit values, falling back to the
    /// process environment for whichever value is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`] or [`ConfigError::MissingApiToken`]
    /// when neither source yields a value, and the newtype validation errors
    /// when a value is present but malformed.
    pub fn resolve(endpoint: Option<&str>, api_token: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_with(endpoint, api_token, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration entirely from the process environment.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    /// Like [`resolve`](Self::resolve), but reads fallback values through
    /// `lookup` instead of the process environment.
    ///
    /// Only `None` falls back to the environment. An explicit value is used
    /// as given, so `Some("")` fails validation instead of being replaced.
    /// Empty environment values count as unset.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with<F>(
        endpoint: Option<&str>,
        api_token: Option<&str>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |vars: [&str; 2]| {
            vars.into_iter()
                .find_map(|var| lookup(var).filter(|value| !value.trim().is_empty()))
        };

        let endpoint = match endpoint {
            Some(endpoint) => endpoint.to_string(),
            None => from_env([ENDPOINT_ENV_VAR, LEGACY_ENDPOINT_ENV_VAR]).ok_or(
                ConfigError::MissingEndpoint {
                    var: ENDPOINT_ENV_VAR,
                },
            )?,
        };
        let api_token = match api_token {
            Some(api_token) => api_token.to_string(),
            None => from_env([API_TOKEN_ENV_VAR, LEGACY_API_TOKEN_ENV_VAR]).ok_or(
                ConfigError::MissingApiToken {
                    var: API_TOKEN_ENV_VAR,
                },
            )?,
        };

        Self::builder()
            .endpoint(Endpoint::new(endpoint)?)
            .api_token(ApiToken::new(api_token)?)
            .build()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify TravelbaseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TravelbaseConfig>();
};

/// Builder for constructing [`TravelbaseConfig`] instances.
///
/// Required fields are `endpoint` and `api_token`.
#[derive(Debug, Default)]
pub struct TravelbaseConfigBuilder {
    endpoint: Option<Endpoint>,
    api_token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
}

impl TravelbaseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TravelbaseConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `api_token` are not set.
    pub fn build(self) -> Result<TravelbaseConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(TravelbaseConfig {
            endpoint,
            api_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_endpoint() {
        let result = TravelbaseConfigBuilder::new()
            .api_token(ApiToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_requires_api_token() {
        let result = TravelbaseConfigBuilder::new()
            .endpoint(Endpoint::new("https://api.example.com/graphql").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_token" })
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_values() {
        let lookup = lookup_from(&[
            (ENDPOINT_ENV_VAR, "https://env.example.com/graphql"),
            (API_TOKEN_ENV_VAR, "env-token"),
        ]);

        let config = TravelbaseConfig::resolve_with(
            Some("https://explicit.example.com/graphql"),
            Some("explicit-token"),
            lookup,
        )
        .unwrap();

        assert_eq!(
            config.endpoint().as_ref(),
            "https://explicit.example.com/graphql"
        );
        assert_eq!(config.api_token().as_ref(), "explicit-token");
    }

    #[test]
    fn test_resolve_falls_back_to_environment() {
        let lookup = lookup_from(&[
            (ENDPOINT_ENV_VAR, "https://env.example.com/graphql"),
            (API_TOKEN_ENV_VAR, "env-token"),
        ]);

        let config = TravelbaseConfig::resolve_with(None, None, lookup).unwrap();

        assert_eq!(config.endpoint().host_name(), "env.example.com");
        assert_eq!(config.api_token().as_ref(), "env-token");
    }

    #[test]
    fn test_resolve_mixes_sources() {
        let lookup = lookup_from(&[(API_TOKEN_ENV_VAR, "env-token")]);

        let config =
            TravelbaseConfig::resolve_with(Some("https://api.example.com"), None, lookup).unwrap();

        assert_eq!(config.api_token().as_ref(), "env-token");
    }

    #[test]
    fn test_resolve_without_any_source_fails_on_endpoint_first() {
        let result = TravelbaseConfig::resolve_with(None, None, lookup_from(&[]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingEndpoint {
                var: ENDPOINT_ENV_VAR
            }
        );
    }

    #[test]
    fn test_resolve_without_token_fails() {
        let result =
            TravelbaseConfig::resolve_with(Some("https://api.example.com"), None, lookup_from(&[]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingApiToken {
                var: API_TOKEN_ENV_VAR
            }
        );
    }

    #[test]
    fn test_resolve_treats_empty_environment_values_as_missing() {
        let lookup = lookup_from(&[(ENDPOINT_ENV_VAR, "")]);

        let result = TravelbaseConfig::resolve_with(None, Some("token"), lookup);

        assert!(matches!(result, Err(ConfigError::MissingEndpoint { .. })));
    }

    #[test]
    fn test_resolve_rejects_explicit_empty_token() {
        let lookup = lookup_from(&[(API_TOKEN_ENV_VAR, "env-token")]);

        let result =
            TravelbaseConfig::resolve_with(Some("https://api.example.com"), Some(""), lookup);

        assert_eq!(result.unwrap_err(), ConfigError::EmptyApiToken);
    }

    #[test]
    fn test_resolve_rejects_explicit_empty_endpoint() {
        let lookup = lookup_from(&[(ENDPOINT_ENV_VAR, "https://env.example.com/graphql")]);

        let result = TravelbaseConfig::resolve_with(Some(""), Some("token"), lookup);

        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_resolve_reads_legacy_variables() {
        let lookup = lookup_from(&[
            (LEGACY_ENDPOINT_ENV_VAR, "https://tor.example.com/graphql"),
            (LEGACY_API_TOKEN_ENV_VAR, "tor-token"),
        ]);

        let config = TravelbaseConfig::resolve_with(None, None, lookup).unwrap();

        assert_eq!(config.endpoint().host_name(), "tor.example.com");
        assert_eq!(config.api_token().as_ref(), "tor-token");
    }

    #[test]
    fn test_resolve_prefers_current_variables_over_legacy() {
        let lookup = lookup_from(&[
            (ENDPOINT_ENV_VAR, "https://env.example.com/graphql"),
            (LEGACY_ENDPOINT_ENV_VAR, "https://tor.example.com/graphql"),
            (API_TOKEN_ENV_VAR, ""),
            (LEGACY_API_TOKEN_ENV_VAR, "tor-token"),
        ]);

        let config = TravelbaseConfig::resolve_with(None, None, lookup).unwrap();

        assert_eq!(config.endpoint().host_name(), "env.example.com");
        assert_eq!(config.api_token().as_ref(), "tor-token");
    }

    #[test]
    fn test_resolve_rejects_malformed_endpoint() {
        let result =
            TravelbaseConfig::resolve_with(Some("not-a-url"), Some("token"), lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = TravelbaseConfig::builder()
            .endpoint(Endpoint::new("https://api.example.com/graphql").unwrap())
            .api_token(ApiToken::new("very-secret").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("TravelbaseConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }
}
