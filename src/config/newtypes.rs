//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated GraphQL endpoint URL.
///
/// The URL must carry an `http` or `https` scheme and a non-empty host.
///
/// # Example
///
/// ```rust
/// use travelbase_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://api.example.com/graphql").unwrap();
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || url[host_start..host_end].contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated Travelbase API token.
///
/// The token is sent as `Authorization: Bearer <token>`. Its value is masked
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use travelbase_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// assert_eq!(token.bearer(), "Bearer my-token");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
