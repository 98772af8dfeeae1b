//! The Apple Music catalog client.
//!
//! [`AppleMusicClient`] ties one authenticated session together: the
//! configuration, the capability provider, the transport, and the token
//! cache slot.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use apple_music_api::{AppleMusicClient, AppleMusicConfig, DeveloperToken};
//!
//! let config = AppleMusicConfig::builder()
//!     .developer_token(DeveloperToken::new("developer-token")?)
//!     .build()?;
//! let client = AppleMusicClient::new(config, Arc::new(provider));
//!
//! // Single-shot
//! let songs = client.search("love", None).await?;
//!
//! // Stream-style, same semantics
//! use futures::StreamExt;
//! let mut stream = client.search_stream("love", Some(5));
//! while let Some(result) = stream.next().await {
//!     println!("{:?}", result?);
//! }
//! ```

use std::sync::Arc;

use futures::stream::BoxStream;

use crate::auth::{Authorization, AuthorizationError, CapabilityProvider, TokenCache, TokenState};
use crate::catalog::search::{decode_songs, search_url};
use crate::catalog::storefront::resolve_storefront;
use crate::catalog::stream::single;
use crate::catalog::{CatalogError, Song};
use crate::clients::{HttpClient, HttpRequest, Transport};
use crate::config::{validate_search_limit, AppleMusicConfig, StorefrontId, UserToken};

/// Client for the Apple Music catalog API.
///
/// One client corresponds to one authenticated session. The user token is
/// requested from the provider on first use and cached for the client's
/// lifetime; the storefront is resolved again on every call.
///
/// Every operation is available as an `async fn` and as a `*_stream` method
/// returning a stream that yields the same single result and completes.
///
/// # Thread Safety
///
/// `AppleMusicClient` is `Send + Sync`. Share it behind an `Arc` to reuse the
/// cached token across tasks.
pub struct AppleMusicClient {
    config: AppleMusicConfig,
    provider: Arc<dyn CapabilityProvider>,
    transport: Arc<dyn Transport>,
    token_cache: TokenCache,
}

// Verify AppleMusicClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppleMusicClient>();
};

impl std::fmt::Debug for AppleMusicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppleMusicClient")
            .field("config", &self.config)
            .field("token_state", &self.token_cache.state())
            .finish_non_exhaustive()
    }
}

impl AppleMusicClient {
    /// Creates a client that sends requests through an [`HttpClient`].
    #[must_use]
    pub fn new(config: AppleMusicConfig, provider: Arc<dyn CapabilityProvider>) -> Self {
        let transport = Arc::new(HttpClient::new(Some(&config)));
        Self::with_transport(config, provider, transport)
    }

    /// Creates a client with a custom transport.
    #[must_use]
    pub fn with_transport(
        config: AppleMusicConfig,
        provider: Arc<dyn CapabilityProvider>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            provider,
            transport,
            token_cache: TokenCache::new(),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &AppleMusicConfig {
        &self.config
    }

    /// Returns the state of the user token cache.
    #[must_use]
    pub fn token_state(&self) -> TokenState {
        self.token_cache.state()
    }

    /// Returns an [`Authorization`] helper backed by this client's provider.
    #[must_use]
    pub fn authorization(&self) -> Authorization {
        Authorization::new(Arc::clone(&self.provider))
    }

    /// Returns the user token, requesting it from the provider on first use.
    ///
    /// Concurrent calls share a single provider request. Failures are not
    /// cached.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError`] if the provider fails or returns no token.
    pub async fn user_token(&self) -> Result<UserToken, AuthorizationError> {
        self.token_cache
            .get_or_fetch(self.provider.as_ref(), self.config.developer_token())
            .await
    }

    /// Resolves the user's storefront.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Authorization`] if the user token cannot be obtained
    /// - [`CatalogError::Transport`] if the request fails
    /// - [`CatalogError::StorefrontDecode`] if the response has an unexpected shape
    pub async fn storefront(&self) -> Result<StorefrontId, CatalogError> {
        let user_token = self.user_token().await?;
        self.resolve_storefront(&user_token).await
    }

    /// Resolves the storefront for an already obtained user token.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Transport`] if the request fails
    /// - [`CatalogError::StorefrontDecode`] if the response has an unexpected shape
    pub async fn resolve_storefront(
        &self,
        user_token: &UserToken,
    ) -> Result<StorefrontId, CatalogError> {
        resolve_storefront(self.transport.as_ref(), &self.config, user_token).await
    }

    /// Searches the catalog for songs.
    ///
    /// The user token and the storefront are obtained concurrently; the
    /// search request is sent once both are available. `limit` defaults to
    /// the configured search limit.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Config`] if `limit` is out of range
    /// - [`CatalogError::Authorization`] if the user token cannot be obtained
    /// - [`CatalogError::Transport`] if a request fails
    /// - [`CatalogError::StorefrontDecode`] if the storefront has an unexpected shape
    /// - [`CatalogError::SearchDecode`] if the results have an unexpected shape
    pub async fn search(&self, term: &str, limit: Option<u32>) -> Result<Vec<Song>, CatalogError> {
        let limit = match limit {
            Some(limit) => validate_search_limit(limit)?,
            None => self.config.search_limit(),
        };

        let (user_token, storefront) = tokio::try_join!(
            async { self.user_token().await.map_err(CatalogError::from) },
            self.storefront(),
        )?;

        let url = search_url(self.config.api_host(), &storefront, term, limit);
        tracing::debug!(%storefront, term, limit, "Searching Apple Music catalog");

        let request = HttpRequest::authenticated(url, self.config.developer_token(), &user_token);
        let response = self.transport.fetch(request).await?;
        let songs = decode_songs(&response.body)?;

        tracing::debug!(count = songs.len(), "Catalog search completed");
        Ok(songs)
    }

    /// Stream-style [`user_token`](Self::user_token).
    pub fn user_token_stream(&self) -> BoxStream<'_, Result<UserToken, AuthorizationError>> {
        single(self.user_token())
    }

    /// Stream-style [`storefront`](Self::storefront).
    pub fn storefront_stream(&self) -> BoxStream<'_, Result<StorefrontId, CatalogError>> {
        single(self.storefront())
    }

    /// Stream-style [`search`](Self::search).
    pub fn search_stream<'a>(
        &'a self,
        term: &'a str,
        limit: Option<u32>,
    ) -> BoxStream<'a, Result<Vec<Song>, CatalogError>> {
        single(self.search(term, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ProviderError;
    use crate::clients::{HttpError, HttpResponse};
    use crate::config::DeveloperToken;
    use crate::error::ConfigError;
    use async_trait::async_trait;
    use futures::StreamExt;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct CountingProvider {
        token: Option<&'static str>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CapabilityProvider for CountingProvider {
        async fn request_user_token(
            &self,
            _developer_token: &DeveloperToken,
        ) -> Result<Option<String>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.token
                .map(|token| Some(token.to_string()))
                .ok_or_else(|| ProviderError::new("denied"))
        }
    }

    /// Answers storefront and search requests from memory.
    #[derive(Default)]
    struct RoutingTransport {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transport for RoutingTransport {
        async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.urls.lock().unwrap().push(request.url.clone());
            if request.url.ends_with("/v1/me/storefront") {
                return Ok(HttpResponse::ok(json!({ "data": [ { "id": "us" } ] })));
            }
            Ok(HttpResponse::ok(json!({
                "results": { "songs": { "data": [ {
                    "attributes": {
                        "name": "Love",
                        "artistName": "Artist",
                        "artwork": { "url": "https://example.com/{w}x{h}.jpg" },
                        "playParams": { "id": "42" }
                    }
                } ] } }
            })))
        }
    }

    fn client(
        token: Option<&'static str>,
    ) -> (AppleMusicClient, Arc<CountingProvider>, Arc<RoutingTransport>) {
        let config = AppleMusicConfig::builder()
            .developer_token(DeveloperToken::new("developer-token").unwrap())
            .build()
            .unwrap();
        let provider = Arc::new(CountingProvider {
            token,
            calls: AtomicUsize::new(0),
        });
        let transport = Arc::new(RoutingTransport::default());
        let client = AppleMusicClient::with_transport(config, provider.clone(), transport.clone());
        (client, provider, transport)
    }

    #[tokio::test]
    async fn test_search_resolves_token_once_for_both_branches() {
        let (client, provider, transport) = client(Some("user-token"));
        assert_eq!(client.token_state(), TokenState::Empty);

        let songs = client.search("love", None).await.unwrap();

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, "42");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.token_state(), TokenState::Resolved);

        let urls = transport.urls.lock().unwrap().clone();
        assert_eq!(
            urls,
            vec![
                "https://api.music.apple.com/v1/me/storefront".to_string(),
                "https://api.music.apple.com/v1/catalog/us/search?term=love&types=songs&limit=20"
                    .to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_limit_is_rejected_before_any_request() {
        let (client, provider, transport) = client(Some("user-token"));

        let error = client.search("love", Some(26)).await.unwrap_err();

        assert!(matches!(
            error,
            CatalogError::Config(ConfigError::InvalidSearchLimit { limit: 26, max: 25 })
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(transport.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authorization_failure_sends_no_requests() {
        let (client, _provider, transport) = client(None);

        let error = client.storefront().await.unwrap_err();

        assert!(matches!(error, CatalogError::Authorization(_)));
        assert_eq!(client.token_state(), TokenState::Failed);
        assert!(transport.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storefront_is_resolved_on_every_call() {
        let (client, provider, transport) = client(Some("user-token"));

        assert_eq!(client.storefront().await.unwrap().as_ref(), "us");
        assert_eq!(client.storefront().await.unwrap().as_ref(), "us");

        assert_eq!(transport.urls.lock().unwrap().len(), 2);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stream_variants_yield_one_item() {
        let (client, _provider, _transport) = client(Some("user-token"));

        let tokens: Vec<_> = client.user_token_stream().collect().await;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].as_ref().unwrap().as_ref(), "user-token");

        let mut stream = client.search_stream("love", Some(1));
        assert_eq!(stream.next().await.unwrap().unwrap().len(), 1);
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_debug_does_not_leak_tokens() {
        let (client, _provider, _transport) = client(Some("user-token"));
        let debug = format!("{client:?}");

        assert!(debug.contains("AppleMusicClient"));
        assert!(!debug.contains("developer-token"));
    }
}
