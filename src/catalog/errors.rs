//! Catalog error types.
//!
//! [`CatalogError`] is what every catalog operation returns. It keeps
//! transport failures ("the network or API is broken") apart from decode
//! failures ("the response shape changed"):
//!
//! - [`CatalogError::Authorization`]: the user token could not be obtained
//! - [`CatalogError::Transport`]: network failure, non-2xx status, or non-JSON body
//! - [`CatalogError::StorefrontDecode`]: the storefront document had an unexpected shape
//! - [`CatalogError::SearchDecode`]: the search document had an unexpected shape
//! - [`CatalogError::Config`]: the caller passed an invalid argument
//!
//! # Example
//!
//! ```rust,ignore
//! use apple_music_api::CatalogError;
//!
//! match client.search("love", None).await {
//!     Ok(songs) => println!("{} songs", songs.len()),
//!     Err(e) if e.is_decode_error() => println!("Response shape changed: {e}"),
//!     Err(CatalogError::Transport(e)) => println!("API unreachable: {e}"),
//!     Err(e) => println!("Search failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthorizationError;
use crate::clients::HttpError;
use crate::error::ConfigError;

/// Error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The user token could not be obtained.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The storefront response did not contain a usable identifier.
    #[error("Storefront response could not be decoded: {message}")]
    StorefrontDecode {
        /// What was wrong with the document.
        message: String,
    },

    /// The search response did not have the expected shape.
    #[error("Search response could not be decoded: {message}")]
    SearchDecode {
        /// What was wrong with the document.
        message: String,
    },

    /// An argument was rejected before any request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CatalogError {
    /// Returns `true` for response-shape failures.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::StorefrontDecode { .. } | Self::SearchDecode { .. }
        )
    }
}
