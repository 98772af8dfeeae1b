//! HTTP request types for the Apple Music API client.
//!
//! Every catalog call is an authenticated GET, so an [`HttpRequest`] is just
//! a fully-built URL plus the headers to send with it.

use std::collections::HashMap;

use crate::config::{DeveloperToken, UserToken};

/// Header carrying the per-user music token.
pub const MUSIC_USER_TOKEN_HEADER: &str = "Music-User-Token";

/// A GET request to be sent through a [`Transport`](crate::clients::Transport).
///
/// # Example
///
/// ```rust
/// use apple_music_api::clients::HttpRequest;
///
/// let request = HttpRequest::builder("https://api.music.apple.com/v1/me/storefront")
///     .header("Accept-Language", "en-US")
///     .build();
///
/// assert_eq!(request.url, "https://api.music.apple.com/v1/me/storefront");
/// assert_eq!(request.headers.get("Accept-Language").map(String::as_str), Some("en-US"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The absolute URL, including any query string.
    pub url: String,
    /// Headers to send with the request.
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for the given URL.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url)
    }

    /// Creates a request authenticated with both the developer and user tokens.
    ///
    /// Sets `Authorization: Bearer <developer token>` and
    /// `Music-User-Token: <user token>`.
    #[must_use]
    pub fn authenticated(
        url: impl Into<String>,
        developer_token: &DeveloperToken,
        user_token: &UserToken,
    ) -> Self {
        Self::builder(url)
            .header("Authorization", developer_token.bearer())
            .header(MUSIC_USER_TOKEN_HEADER, user_token.as_ref())
            .build()
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a single header, replacing any previous value.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            url: self.url,
            headers: self.headers,
        }
    }
}
