//! HTTP response types for the Apple Music API client.

use std::collections::HashMap;

/// A successful response from the Apple Music API.
///
/// The body is always a parsed JSON document; transports report undecodable
/// bodies as [`HttpError::InvalidBody`](crate::clients::HttpError::InvalidBody).
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with no headers, mostly useful for
    /// in-memory transports.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header by (case-insensitive) name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request correlation id, if the server sent one.
    ///
    /// Apple returns `x-apple-jingle-correlation-key`; proxies commonly add
    /// `x-request-id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-apple-jingle-correlation-key")
            .or_else(|| self.header("x-request-id"))
    }
}
