//! HTTP client for Apple Music API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used by default.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidBodyError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::AppleMusicConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for sending requests to the Apple Music API.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - Status code checking
/// - JSON body parsing
/// - Error summarisation from Apple's `errors` array
///
/// It never retries; retry policy belongs to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use apple_music_api::clients::{HttpClient, HttpRequest, Transport};
///
/// let client = HttpClient::new(Some(&config));
/// let request = HttpRequest::authenticated(url, config.developer_token(), &user_token);
/// let response = client.fetch(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: Option<&AppleMusicConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(AppleMusicConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Apple Music API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Summarises an error body.
    ///
    /// Apple returns `{ "errors": [ { "title": ..., "detail": ... } ] }`; the
    /// first error's `detail` (or `title`) is used when present.
    fn serialize_error(code: u16, body: &serde_json::Value) -> String {
        body.get("errors")
            .and_then(serde_json::Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| {
                first
                    .get("detail")
                    .or_else(|| first.get("title"))
                    .and_then(serde_json::Value::as_str)
            })
            .map_or_else(
                || {
                    reqwest::StatusCode::from_u16(code)
                        .ok()
                        .and_then(|status| status.canonical_reason())
                        .unwrap_or("Unexpected response status")
                        .to_string()
                },
                ToString::to_string,
            )
    }
}

#[async_trait]
impl Transport for HttpClient {
    /// Sends a GET request to the Apple Music API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The body is not JSON (`InvalidBody`)
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut headers = self.default_headers.clone();
        headers.extend(request.headers);

        let mut req_builder = self.client.get(&request.url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(url = %request.url, "Sending Apple Music API request");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let parsed = if body_text.trim().is_empty() {
            Ok(serde_json::json!({}))
        } else {
            serde_json::from_str::<serde_json::Value>(&body_text)
        };

        if !(200..=299).contains(&code) {
            let body = parsed.unwrap_or_default();
            let response = HttpResponse::new(code, res_headers, body);
            let error = HttpResponseError {
                code,
                message: Self::serialize_error(code, &response.body),
                error_reference: response.request_id().map(String::from),
            };
            tracing::debug!(url = %request.url, code, "Apple Music API returned an error status");
            return Err(error.into());
        }

        let body = parsed.map_err(|e| InvalidBodyError {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        Ok(HttpResponse::new(code, res_headers, body))
    }
}
