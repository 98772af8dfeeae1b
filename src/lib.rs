//! # Apple Music API Rust Client
//!
//! A Rust client for the Apple Music catalog API. It handles user token
//! acquisition through a platform capability provider, storefront
//! resolution, and song search.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AppleMusicConfig`] and [`AppleMusicConfigBuilder`]
//! - Validated newtypes for tokens, storefronts and the API host
//! - A [`CapabilityProvider`] seam for user tokens, authorization and capabilities
//! - A single-slot user token cache shared by concurrent requests
//! - Catalog search and storefront resolution via [`AppleMusicClient`]
//! - Stream-style variants of every operation
//! - ES256 developer token signing via [`DeveloperToken::generate`]
//!
//! ## Quick Start
//!
//! ```rust
//! use apple_music_api::{AppleMusicConfig, DeveloperToken};
//!
//! let config = AppleMusicConfig::builder()
//!     .developer_token(DeveloperToken::new("your-developer-token").unwrap())
//!     .search_limit(10)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Providing User Tokens
//!
//! User tokens come from the platform's music service. Implement
//! [`CapabilityProvider`] to bridge to it:
//!
//! ```rust
//! use apple_music_api::{CapabilityProvider, DeveloperToken, ProviderError};
//! use async_trait::async_trait;
//!
//! struct StaticProvider(String);
//!
//! #[async_trait]
//! impl CapabilityProvider for StaticProvider {
//!     async fn request_user_token(
//!         &self,
//!         _developer_token: &DeveloperToken,
//!     ) -> Result<Option<String>, ProviderError> {
//!         Ok(Some(self.0.clone()))
//!     }
//! }
//! ```
//!
//! ## Searching the Catalog
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use apple_music_api::{AppleMusicClient, AppleMusicConfig, DeveloperToken};
//!
//! let client = AppleMusicClient::new(config, Arc::new(StaticProvider(token)));
//!
//! let storefront = client.storefront().await?;
//! let songs = client.search("my song", None).await?;
//! for song in &songs {
//!     println!("{} by {}", song.name, song.artist_name);
//! }
//! ```
//!
//! ## Signing Developer Tokens
//!
//! ```rust,ignore
//! use apple_music_api::DeveloperToken;
//!
//! let token = DeveloperToken::generate(
//!     "TEAMID1234",
//!     "KEYID12345",
//!     include_bytes!("AuthKey_KEYID12345.p8"),
//!     chrono::Duration::hours(12),
//! )?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure is reported once to the caller

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{
    ApiHost, AppleMusicConfig, AppleMusicConfigBuilder, DeveloperToken, StorefrontId, UserToken,
    DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT,
};
pub use error::ConfigError;

// Re-export authorization types
pub use auth::{
    Authorization, AuthorizationError, AuthorizationStatus, Capability, CapabilityProvider,
    CloudServiceCapabilities, ProviderError, TokenState,
};

// Re-export catalog types
pub use catalog::{AppleMusicClient, CatalogError, Song};

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpRequest, HttpResponse, HttpResponseError, Transport};
