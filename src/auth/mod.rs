//! Authorization types for the Apple Music API client.
//!
//! Catalog requests carry two credentials: the app's developer token and a
//! per-user music token. This module obtains and caches the user token and
//! answers authorization and capability questions.
//!
//! # Overview
//!
//! - [`CapabilityProvider`]: The platform seam that issues user tokens and
//!   reports authorization status and capabilities
//! - [`TokenCache`]: Holds the user token for a client's lifetime and
//!   collapses concurrent requests into one provider call
//! - [`Authorization`]: Prompts and capability checks
//! - [`AuthorizationError`]: Provider failures and missing tokens
//! - Developer token signing via [`DeveloperToken::generate`](crate::DeveloperToken::generate)
//!
//! # Example
//!
//! ```rust,ignore
//! use apple_music_api::auth::{TokenCache, TokenState};
//!
//! let cache = TokenCache::new();
//! let token = cache.get_or_fetch(&provider, config.developer_token()).await?;
//! assert_eq!(cache.state(), TokenState::Resolved);
//! ```

mod authorization;
mod developer_token;
mod errors;
mod provider;
mod token_cache;

pub use authorization::Authorization;
pub use developer_token::{DeveloperTokenClaims, MAX_DEVELOPER_TOKEN_TTL_SECS};
pub use errors::{AuthorizationError, ProviderError};
pub use provider::{AuthorizationStatus, Capability, CapabilityProvider, CloudServiceCapabilities};
pub use token_cache::{TokenCache, TokenState};
