//! Catalog search request construction and response decoding.
//!
//! The search endpoint answers
//! `GET /v1/catalog/{storefront}/search?term=..&types=songs&limit=n` with:
//!
//! ```text
//! { "results": { "songs": { "data": [
//!     { "attributes": { "name", "artistName", "artwork": { "url" }, "playParams": { "id" } } }
//! ] } } }
//! ```
//!
//! Decoding is all-or-nothing: one malformed entry fails the whole response.

use serde::Deserialize;

use crate::catalog::{CatalogError, Song};
use crate::config::{ApiHost, StorefrontId};

/// The only result type requested from the search endpoint.
pub const SEARCH_TYPES: &str = "songs";

/// Encodes a search term for the `term` query parameter.
///
/// The term is percent-encoded and spaces are written as `+`.
///
/// ```rust
/// use apple_music_api::catalog::encode_term;
///
/// assert_eq!(encode_term("my song"), "my+song");
/// assert_eq!(encode_term("AC/DC"), "AC%2FDC");
/// ```
#[must_use]
pub fn encode_term(term: &str) -> String {
    urlencoding::encode(term).replace("%20", "+")
}

/// Builds the catalog search URL.
///
/// ```rust
/// use apple_music_api::catalog::search_url;
/// use apple_music_api::{ApiHost, StorefrontId};
///
/// let url = search_url(&ApiHost::default(), &StorefrontId::new("us").unwrap(), "love", 20);
/// assert_eq!(
///     url,
///     "https://api.music.apple.com/v1/catalog/us/search?term=love&types=songs&limit=20"
/// );
/// ```
#[must_use]
pub fn search_url(host: &ApiHost, storefront: &StorefrontId, term: &str, limit: u32) -> String {
    format!(
        "{}/v1/catalog/{}/search?term={}&types={SEARCH_TYPES}&limit={limit}",
        host.as_ref(),
        urlencoding::encode(storefront.as_ref()),
        encode_term(term),
    )
}

#[derive(Deserialize)]
struct SongResource {
    attributes: SongAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongAttributes {
    name: String,
    artist_name: String,
    artwork: Artwork,
    play_params: PlayParams,
}

#[derive(Deserialize)]
struct Artwork {
    url: String,
}

#[derive(Deserialize)]
struct PlayParams {
    id: String,
}

impl From<SongResource> for Song {
    fn from(resource: SongResource) -> Self {
        let attributes = resource.attributes;
        Self {
            id: attributes.play_params.id,
            name: attributes.name,
            artist_name: attributes.artist_name,
            artwork_url: attributes.artwork.url,
        }
    }
}

/// Decodes the songs in a search document, preserving document order.
///
/// # Errors
///
/// Returns [`CatalogError::SearchDecode`] if `results.songs.data` is missing
/// or not an array, or if any entry lacks one of the required attributes.
pub fn decode_songs(document: &serde_json::Value) -> Result<Vec<Song>, CatalogError> {
    let entries = document
        .pointer("/results/songs/data")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| {
            let message = "`results.songs.data` is missing or not an array".to_string();
            tracing::warn!(%message, "Unexpected search document");
            CatalogError::SearchDecode { message }
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            SongResource::deserialize(entry)
                .map(Song::from)
                .map_err(|e| {
                    let message = format!("`results.songs.data[{index}]`: {e}");
                    tracing::warn!(%message, "Unexpected search document");
                    CatalogError::SearchDecode { message }
                })
        })
        .collect()
}
