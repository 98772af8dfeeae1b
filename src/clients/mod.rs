//! HTTP transport types for Apple Music API communication.
//!
//! This module provides the transport layer used by the catalog client. It
//! handles request construction, response parsing, and transport errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The async seam through which every catalog request is sent
//! - [`HttpClient`]: The `reqwest`-backed [`Transport`]
//! - [`HttpRequest`]: An authenticated GET request
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: Network, status and body failures
//!
//! # Example
//!
//! ```rust,ignore
//! use apple_music_api::clients::{HttpClient, HttpRequest, Transport};
//!
//! let client = HttpClient::new(None);
//! let request = HttpRequest::authenticated(
//!     "https://api.music.apple.com/v1/me/storefront",
//!     &developer_token,
//!     &user_token,
//! );
//!
//! let response = client.fetch(request).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! Transports never retry. A failed request is reported once, and the caller
//! decides whether to try again.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidBodyError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder, MUSIC_USER_TOKEN_HEADER};
pub use http_response::HttpResponse;
pub use transport::Transport;
