//! Single-slot cache for the user token.
//!
//! The [`TokenCache`] owns the only mutable state in a client. It moves
//! through [`TokenState`]:
//!
//! ```text
//! Empty ──► Resolving ──► Resolved
//!               │  ▲
//!               ▼  │
//!              Failed
//! ```
//!
//! `Resolved` is terminal. Concurrent callers join the in-flight provider
//! call instead of issuing their own and all observe its outcome, success or
//! failure. A failure is not cached: the next call asks the provider again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::OnceCell;

use crate::auth::{AuthorizationError, CapabilityProvider};
use crate::config::{DeveloperToken, UserToken};

/// Where a [`TokenCache`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenState {
    /// No token has been requested yet.
    Empty,
    /// A provider call is in flight.
    Resolving,
    /// A token was obtained and will be returned for the cache's lifetime.
    Resolved,
    /// The last provider call failed; the next request retries.
    Failed,
}

/// Caches the user token for the lifetime of a client.
///
/// # Example
///
/// ```rust,ignore
/// use apple_music_api::auth::{TokenCache, TokenState};
///
/// let cache = TokenCache::new();
/// assert_eq!(cache.state(), TokenState::Empty);
///
/// let token = cache.get_or_fetch(&provider, &developer_token).await?;
/// assert_eq!(cache.state(), TokenState::Resolved);
/// ```
#[derive(Debug)]
pub struct TokenCache {
    slot: OnceCell<UserToken>,
    /// Held for the duration of a provider call; holds the last failure.
    attempt: tokio::sync::Mutex<Option<AuthorizationError>>,
    /// Number of failed attempts so far.
    failures: AtomicU64,
    state: Mutex<TokenState>,
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
            attempt: tokio::sync::Mutex::new(None),
            failures: AtomicU64::new(0),
            state: Mutex::new(TokenState::Empty),
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TokenState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached token, if one has been resolved.
    #[must_use]
    pub fn get(&self) -> Option<&UserToken> {
        self.slot.get()
    }

    /// Returns the cached token, asking the provider for one if needed.
    ///
    /// At most one provider call is in flight at a time. Callers arriving
    /// while it runs receive its result, including its error. Once a token
    /// is resolved the provider is never called again.
    ///
    /// # Errors
    ///
    /// - [`AuthorizationError::Provider`] if the provider reports a failure
    /// - [`AuthorizationError::MissingToken`] if it returns neither a token
    ///   nor an error, or a blank token
    pub async fn get_or_fetch<P>(
        &self,
        provider: &P,
        developer_token: &DeveloperToken,
    ) -> Result<UserToken, AuthorizationError>
    where
        P: CapabilityProvider + ?Sized,
    {
        if let Some(token) = self.slot.get() {
            return Ok(token.clone());
        }

        let observed_failures = self.failures.load(Ordering::Acquire);
        let mut last_failure = self.attempt.lock().await;

        if let Some(token) = self.slot.get() {
            return Ok(token.clone());
        }
        // An attempt failed while this caller was waiting on it.
        if self.failures.load(Ordering::Acquire) != observed_failures {
            if let Some(error) = last_failure.as_ref() {
                return Err(error.clone());
            }
        }

        let result = self.fetch(provider, developer_token).await;
        match &result {
            Ok(token) => {
                // The attempt lock is held, so the slot is still empty.
                let _ = self.slot.set(token.clone());
                *last_failure = None;
            }
            Err(e) => {
                *last_failure = Some(e.clone());
                self.failures.fetch_add(1, Ordering::AcqRel);
            }
        }
        result
    }

    async fn fetch<P>(
        &self,
        provider: &P,
        developer_token: &DeveloperToken,
    ) -> Result<UserToken, AuthorizationError>
    where
        P: CapabilityProvider + ?Sized,
    {
        let resolving = ResolvingGuard::enter(&self.state);
        tracing::debug!("Requesting user token from capability provider");

        let result = match provider.request_user_token(developer_token).await {
            Ok(Some(raw)) => UserToken::new(raw).map_err(|_| AuthorizationError::MissingToken),
            Ok(None) => Err(AuthorizationError::MissingToken),
            Err(e) => Err(AuthorizationError::Provider(e)),
        };

        match &result {
            Ok(_) => {
                resolving.finish(TokenState::Resolved);
                tracing::debug!("User token resolved and cached");
            }
            Err(e) => {
                resolving.finish(TokenState::Failed);
                tracing::warn!(error = %e, "User token request failed");
            }
        }

        result
    }
}

/// Marks the cache `Resolving` for the duration of a provider call and
/// restores the previous state if the call is dropped before it completes.
struct ResolvingGuard<'a> {
    state: &'a Mutex<TokenState>,
    previous: TokenState,
    finished: bool,
}

impl<'a> ResolvingGuard<'a> {
    fn enter(state: &'a Mutex<TokenState>) -> Self {
        let previous = std::mem::replace(
            &mut *state.lock().unwrap_or_else(PoisonError::into_inner),
            TokenState::Resolving,
        );
        Self {
            state,
            previous,
            finished: false,
        }
    }

    fn finish(mut self, outcome: TokenState) {
        self.set(outcome);
        self.finished = true;
    }

    fn set(&self, state: TokenState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("User token request cancelled");
            self.set(self.previous);
        }
    }
}
