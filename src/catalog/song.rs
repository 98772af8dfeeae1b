//! The song type returned by catalog searches.

use serde::{Deserialize, Serialize};

/// One song matched by a catalog search.
///
/// # Example
///
/// ```rust
/// use apple_music_api::Song;
///
/// let song = Song {
///     id: "1440818839".to_string(),
///     name: "Love".to_string(),
///     artist_name: "Kendrick Lamar".to_string(),
///     artwork_url: "https://is1-ssl.mzstatic.com/image/{w}x{h}bb.jpg".to_string(),
/// };
///
/// assert_eq!(
///     song.artwork_url_for(300, 300),
///     "https://is1-ssl.mzstatic.com/image/300x300bb.jpg"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// The playable catalog identifier (`attributes.playParams.id`).
    pub id: String,
    /// The song title.
    pub name: String,
    /// The performing artist.
    pub artist_name: String,
    /// The artwork URL template, containing `{w}` and `{h}` placeholders.
    pub artwork_url: String,
}

impl Song {
    /// Returns the artwork URL with the size placeholders filled in.
    #[must_use]
    pub fn artwork_url_for(&self, width: u32, height: u32) -> String {
        self.artwork_url
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string())
    }
}
