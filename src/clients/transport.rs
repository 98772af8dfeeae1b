//! The transport seam between the catalog client and the network.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Issues authenticated GET requests and returns parsed JSON documents.
///
/// [`HttpClient`](crate::clients::HttpClient) is the `reqwest`-backed
/// implementation. Tests and embedders can supply their own, for example to
/// route requests through an existing HTTP stack.
///
/// Implementations must complete exactly once per call and must report:
///
/// - non-2xx statuses as [`HttpError::Response`]
/// - bodies that are not JSON as [`HttpError::InvalidBody`]
///
/// Implementations must not retry.
///
/// # Example
///
/// ```rust
/// use apple_music_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
/// use async_trait::async_trait;
/// use serde_json::json;
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn fetch(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(json!({ "data": [{ "id": "us" }] })))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the parsed response.
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
