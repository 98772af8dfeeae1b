//! Authorization error types.
//!
//! - [`ProviderError`]: A failure reported by a [`CapabilityProvider`](crate::auth::CapabilityProvider)
//! - [`AuthorizationError`]: Everything that can go wrong while obtaining a
//!   user token or querying capabilities
//!
//! # Example
//!
//! ```rust
//! use apple_music_api::auth::{AuthorizationError, ProviderError};
//!
//! let error: AuthorizationError = ProviderError::new("user cancelled").into();
//! assert!(error.to_string().contains("user cancelled"));
//!
//! let error = AuthorizationError::MissingToken;
//! assert!(error.to_string().contains("neither a user token nor an error"));
//! ```

use thiserror::Error;

/// A failure reported by the capability provider.
///
/// Providers wrap whatever the platform reported (a cancelled prompt, a
/// missing subscription, a network failure) into a diagnostic message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    /// Diagnostic message from the provider.
    pub message: String,
}

impl ProviderError {
    /// Creates a provider error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised while authorizing against Apple Music.
///
/// Failures are never cached: the next call asks the provider again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The capability provider reported a failure.
    #[error("Capability provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// The provider completed without producing a token or an error.
    #[error("Capability provider returned neither a user token nor an error")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_message() {
        let error = ProviderError::new("SKErrorDomain code 7");
        assert_eq!(error.to_string(), "SKErrorDomain code 7");
    }

    #[test]
    fn test_authorization_error_wraps_provider_error() {
        let error = AuthorizationError::from(ProviderError::new("denied"));
        assert_eq!(error.to_string(), "Capability provider failed: denied");
        assert!(matches!(error, AuthorizationError::Provider(ref e) if e.message == "denied"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &AuthorizationError::MissingToken;
        let _: &dyn std::error::Error = &ProviderError::new("x");
    }
}
