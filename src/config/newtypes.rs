//! Validated newtype wrappers for configuration and credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Apple Music developer token.
///
/// The developer token is the signed JWT that identifies your app to the
/// Apple Music API. It is sent as `Authorization: Bearer <token>` on every
/// catalog request and handed to the capability provider when requesting a
/// user token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `DeveloperToken(*****)`.
///
/// # Example
///
/// ```rust
/// use apple_music_api::DeveloperToken;
///
/// let token = DeveloperToken::new("eyJhbGciOiJFUzI1NiJ9...").unwrap();
/// assert_eq!(format!("{:?}", token), "DeveloperToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DeveloperToken(String);

impl DeveloperToken {
    /// Creates a new validated developer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDeveloperToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyDeveloperToken);
        }
        Ok(Self(token))
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for DeveloperToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeveloperToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeveloperToken(*****)")
    }
}

/// A per-user music token issued by the capability provider.
///
/// Sent as the `Music-User-Token` header alongside the developer token.
/// A `UserToken` is never empty.
///
/// # Example
///
/// ```rust
/// use apple_music_api::UserToken;
///
/// let token = UserToken::new("user-token").unwrap();
/// assert_eq!(token.as_ref(), "user-token");
/// assert_eq!(format!("{:?}", token), "UserToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserToken(String);

impl UserToken {
    /// Creates a new validated user token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserToken`] if the token is empty or
    /// whitespace only.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyUserToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for UserToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserToken(*****)")
    }
}

/// A storefront identifier, such as `us` or `gb`.
///
/// Storefronts scope catalog content to a territory.
///
/// # Example
///
/// ```rust
/// use apple_music_api::StorefrontId;
///
/// let storefront = StorefrontId::new("us").unwrap();
/// assert_eq!(storefront.to_string(), "us");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorefrontId(String);

impl StorefrontId {
    /// Creates a new validated storefront identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefront`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyStorefront);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for StorefrontId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorefrontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StorefrontId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StorefrontId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for the Apple Music API.
///
/// Any trailing `/` is removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use apple_music_api::ApiHost;
///
/// let host = ApiHost::new("https://api.music.apple.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://api.music.apple.com");
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), "api.music.apple.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production Apple Music API host.
    pub const DEFAULT: &'static str = "https://api.music.apple.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Query strings and fragments cannot be followed by API paths
        if url[host_end..].contains(['?', '#']) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
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

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
