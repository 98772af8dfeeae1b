//! Error types for the Apple Music API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use apple_music_api::{ConfigError, DeveloperToken};
//!
//! let result = DeveloperToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyDeveloperToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Developer token cannot be empty.
    #[error("Developer token cannot be empty. Please provide a valid Apple Music developer token.")]
    EmptyDeveloperToken,

    /// User token cannot be empty.
    #[error("User token cannot be empty.")]
    EmptyUserToken,

    /// Storefront identifier cannot be empty.
    #[error("Storefront identifier cannot be empty.")]
    EmptyStorefront,

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.music.apple.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Search limit is outside the range accepted by the catalog API.
    #[error("Invalid search limit {limit}. Expected a value between 1 and {max}.")]
    InvalidSearchLimit {
        /// The invalid limit that was provided.
        limit: u32,
        /// The largest accepted limit.
        max: u32,
    },

    /// Developer token lifetime is not accepted by Apple.
    #[error("Invalid developer token lifetime of {seconds} seconds. Expected a value between 1 and {max} seconds.")]
    InvalidTokenLifetime {
        /// The requested lifetime in seconds.
        seconds: i64,
        /// The longest accepted lifetime in seconds.
        max: i64,
    },

    /// The private key used to sign a developer token could not be used.
    #[error("Invalid signing key: {reason}")]
    InvalidSigningKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
