//! Apple Music catalog operations.
//!
//! This module provides [`AppleMusicClient`], the entry point for storefront
//! resolution and song search, along with the building blocks it is made of:
//!
//! - [`storefront_url`] and [`decode_storefront`]: the `/v1/me/storefront` endpoint
//! - [`search_url`] and [`decode_songs`]: the catalog search endpoint
//! - [`single`]: the one-item stream adapter behind every `*_stream` method
//!
//! # Ordering
//!
//! A search needs the user token and the storefront, and the storefront
//! itself needs the user token. Both are requested concurrently; the token
//! cache guarantees the provider is asked only once.

mod client;
mod errors;
mod search;
mod song;
mod storefront;
mod stream;

pub use client::AppleMusicClient;
pub use errors::CatalogError;
pub use search::{decode_songs, encode_term, search_url, SEARCH_TYPES};
pub use song::Song;
pub use storefront::{decode_storefront, resolve_storefront, storefront_url, STOREFRONT_PATH};
pub use stream::single;
