//! Configuration types for the Apple Music API client.
//!
//! This module provides the core configuration types used to initialize
//! and configure the client for communication with the Apple Music API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AppleMusicConfig`]: The main configuration struct holding all client settings
//! - [`AppleMusicConfigBuilder`]: A builder for constructing [`AppleMusicConfig`] instances
//! - [`DeveloperToken`]: A validated developer token with masked debug output
//! - [`UserToken`]: A per-user music token with masked debug output
//! - [`StorefrontId`]: A validated storefront identifier
//! - [`ApiHost`]: A validated base URL for the API
//!
//! # Example
//!
//! ```rust
//! use apple_music_api::{AppleMusicConfig, DeveloperToken};
//!
//! let config = AppleMusicConfig::builder()
//!     .developer_token(DeveloperToken::new("my-developer-token").unwrap())
//!     .search_limit(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.search_limit(), 10);
//! ```

mod newtypes;

pub use newtypes::{ApiHost, DeveloperToken, StorefrontId, UserToken};

use crate::error::ConfigError;

/// Default number of results requested by a catalog search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Largest result count the catalog search endpoint accepts.
pub const MAX_SEARCH_LIMIT: u32 = 25;

/// Configuration for the Apple Music API client.
///
/// # Thread Safety
///
/// `AppleMusicConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use apple_music_api::{AppleMusicConfig, ApiHost, DeveloperToken};
///
/// let config = AppleMusicConfig::builder()
///     .developer_token(DeveloperToken::new("token").unwrap())
///     .api_host(ApiHost::new("http://localhost:8080").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_host().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct AppleMusicConfig {
    developer_token: DeveloperToken,
    api_host: ApiHost,
    search_limit: u32,
    user_agent_prefix: Option<String>,
}

impl AppleMusicConfig {
    /// Creates a new builder for constructing an `AppleMusicConfig`.
    #[must_use]
    pub fn builder() -> AppleMusicConfigBuilder {
        AppleMusicConfigBuilder::new()
    }

    /// Returns the developer token.
    #[must_use]
    pub const fn developer_token(&self) -> &DeveloperToken {
        &self.developer_token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the default result count for catalog searches.
    #[must_use]
    pub const fn search_limit(&self) -> u32 {
        self.search_limit
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AppleMusicConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppleMusicConfig>();
};

/// Checks that a search limit is accepted by the catalog API.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSearchLimit`] for `0` or values above
/// [`MAX_SEARCH_LIMIT`].
pub fn validate_search_limit(limit: u32) -> Result<u32, ConfigError> {
    if limit == 0 || limit > MAX_SEARCH_LIMIT {
        return Err(ConfigError::InvalidSearchLimit {
            limit,
            max: MAX_SEARCH_LIMIT,
        });
    }
    Ok(limit)
}

/// Builder for constructing [`AppleMusicConfig`] instances.
///
/// The only required field is `developer_token`.
///
/// # Defaults
///
/// - `api_host`: `https://api.music.apple.com`
/// - `search_limit`: 20
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AppleMusicConfigBuilder {
    developer_token: Option<DeveloperToken>,
    api_host: Option<ApiHost>,
    search_limit: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl AppleMusicConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the developer token (required).
    #[must_use]
    pub fn developer_token(mut self, token: DeveloperToken) -> Self {
        self.developer_token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the default search result count.
    #[must_use]
    pub const fn search_limit(mut self, limit: u32) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AppleMusicConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `developer_token` is
    /// not set, or [`ConfigError::InvalidSearchLimit`] if the search limit is
    /// out of range.
    pub fn build(self) -> Result<AppleMusicConfig, ConfigError> {
        let developer_token = self
            .developer_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "developer_token",
            })?;
        let search_limit =
            validate_search_limit(self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT))?;

        Ok(AppleMusicConfig {
            developer_token,
            api_host: self.api_host.unwrap_or_default(),
            search_limit,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
