//! Transport error types for the Apple Music API client.
//!
//! This module contains error types for HTTP operations: non-2xx responses,
//! undecodable bodies, and network failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use apple_music_api::clients::{HttpClient, HttpError, Transport};
//!
//! match client.fetch(request).await {
//!     Ok(response) => println!("Document: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidBody(e)) => {
//!         println!("Undecodable body: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use apple_music_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: "Unauthenticated".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: Unauthenticated");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error summary taken from the response body, or the status reason.
    pub message: String,
    /// Reference ID for error reporting, when the server sent one.
    pub error_reference: Option<String>,
}

/// Error returned when a successful response body is not a JSON document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Response from {url} is not a JSON document: {reason}")]
pub struct InvalidBodyError {
    /// The URL that was requested.
    pub url: String,
    /// The parser diagnostic.
    pub reason: String,
}

/// Unified error type for all transport failures.
///
/// # Example
///
/// ```rust
/// use apple_music_api::clients::{HttpError, HttpResponseError};
///
/// let error: HttpError = HttpResponseError {
///     code: 500,
///     message: "Internal Server Error".to_string(),
///     error_reference: None,
/// }
/// .into();
///
/// assert_eq!(error.status(), Some(500));
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be parsed.
    #[error(transparent)]
    InvalidBody(#[from] InvalidBodyError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody(_) => None,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
