//! The capability provider seam and the values it reports.
//!
//! A [`CapabilityProvider`] stands in for the platform's cloud-service
//! controller: it shows the authorization prompt, issues user tokens, and
//! reports what the signed-in account can do.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;

use crate::auth::ProviderError;
use crate::config::DeveloperToken;

/// Whether the user has granted access to their music library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthorizationStatus {
    /// The user has given authorization to access their library.
    Authorized,
    /// The user declined the permission prompt.
    Denied,
    /// Access is restricted, for example on education accounts.
    Restricted,
    /// The user has not been asked yet.
    NotDetermined,
}

impl AuthorizationStatus {
    /// Returns `true` only for [`AuthorizationStatus::Authorized`].
    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorized => write!(f, "authorized"),
            Self::Denied => write!(f, "denied"),
            Self::Restricted => write!(f, "restricted"),
            Self::NotDetermined => write!(f, "not_determined"),
        }
    }
}

/// A single cloud-service capability of the signed-in account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The account can play catalog content.
    MusicCatalogPlayback,
    /// The account can be offered an Apple Music subscription.
    MusicCatalogSubscriptionEligible,
    /// The account can add items to its cloud music library.
    AddToCloudMusicLibrary,
}

/// The set of capabilities reported by a provider.
///
/// # Example
///
/// ```rust
/// use apple_music_api::auth::{Capability, CloudServiceCapabilities};
///
/// let capabilities: CloudServiceCapabilities =
///     [Capability::MusicCatalogPlayback].into_iter().collect();
///
/// assert!(capabilities.contains(Capability::MusicCatalogPlayback));
/// assert!(!capabilities.contains(Capability::AddToCloudMusicLibrary));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloudServiceCapabilities {
    capabilities: HashSet<Capability>,
}

impl CloudServiceCapabilities {
    /// Creates an empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability to the set.
    pub fn insert(&mut self, capability: Capability) {
        self.capabilities.insert(capability);
    }

    /// Returns `true` if the capability is present.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Returns `true` if no capability is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Returns an iterator over the capabilities.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }
}

impl FromIterator<Capability> for CloudServiceCapabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            capabilities: iter.into_iter().collect(),
        }
    }
}

/// The platform authorization subsystem.
///
/// Only [`request_user_token`](Self::request_user_token) is required; the
/// remaining methods default to "not determined" and "no capabilities".
///
/// Each call completes exactly once. The client caches the first token
/// successfully returned, so `request_user_token` is invoked at most once per
/// resolved token.
///
/// # Example
///
/// ```rust
/// use apple_music_api::auth::{CapabilityProvider, ProviderError};
/// use apple_music_api::DeveloperToken;
/// use async_trait::async_trait;
///
/// struct StaticProvider(String);
///
/// #[async_trait]
/// impl CapabilityProvider for StaticProvider {
///     async fn request_user_token(
///         &self,
///         _developer_token: &DeveloperToken,
///     ) -> Result<Option<String>, ProviderError> {
///         Ok(Some(self.0.clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Requests a user token for the given developer token.
    ///
    /// Returning `Ok(None)` signals that the platform produced neither a
    /// token nor an error; the client reports this as
    /// [`AuthorizationError::MissingToken`](crate::auth::AuthorizationError::MissingToken).
    async fn request_user_token(
        &self,
        developer_token: &DeveloperToken,
    ) -> Result<Option<String>, ProviderError>;

    /// Returns the current authorization status without prompting.
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::NotDetermined
    }

    /// Prompts the user for access and returns the resulting status.
    async fn request_authorization(&self) -> AuthorizationStatus {
        self.authorization_status()
    }

    /// Reports the cloud-service capabilities of the signed-in account.
    async fn request_capabilities(&self) -> Result<CloudServiceCapabilities, ProviderError> {
        Ok(CloudServiceCapabilities::new())
    }
}
