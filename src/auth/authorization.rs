//! Authorization prompts and capability checks.

use std::sync::Arc;

use crate::auth::{
    AuthorizationError, AuthorizationStatus, Capability, CapabilityProvider,
    CloudServiceCapabilities,
};

/// Asks the capability provider what the signed-in user may do.
///
/// Every call goes to the provider; nothing here is cached.
///
/// # Example
///
/// ```rust,ignore
/// use apple_music_api::auth::Authorization;
///
/// let authorization = client.authorization();
/// if !authorization.request_authorization().await {
///     println!("Library access was not granted");
/// }
/// if authorization.eligible_for_subscription_offer().await? {
///     println!("Show the subscription offer");
/// }
/// ```
#[derive(Clone)]
pub struct Authorization {
    provider: Arc<dyn CapabilityProvider>,
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorization").finish_non_exhaustive()
    }
}

impl Authorization {
    /// Creates an authorization helper backed by the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn CapabilityProvider>) -> Self {
        Self { provider }
    }

    /// Returns the current authorization status without prompting.
    #[must_use]
    pub fn status(&self) -> AuthorizationStatus {
        self.provider.authorization_status()
    }

    /// Prompts the user for access.
    ///
    /// Returns `true` only if the user ends up [`AuthorizationStatus::Authorized`].
    pub async fn request_authorization(&self) -> bool {
        let status = self.provider.request_authorization().await;
        tracing::debug!(%status, "Authorization prompt completed");
        status.is_authorized()
    }

    /// Returns the raw capability set reported by the provider.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Provider`] if the provider fails.
    pub async fn capabilities(&self) -> Result<CloudServiceCapabilities, AuthorizationError> {
        self.provider.request_capabilities().await.map_err(|e| {
            tracing::warn!(error = %e, "Capability query failed");
            AuthorizationError::from(e)
        })
    }

    /// Tells whether the app may show the subscription offer: the account
    /// can play catalog content and is eligible for a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Provider`] if the provider fails.
    pub async fn eligible_for_subscription_offer(&self) -> Result<bool, AuthorizationError> {
        let capabilities = self.capabilities().await?;
        Ok(capabilities.contains(Capability::MusicCatalogPlayback)
            && capabilities.contains(Capability::MusicCatalogSubscriptionEligible))
    }

    /// Tells whether the account can play catalog content. This does not
    /// imply an active subscription.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Provider`] if the provider fails.
    pub async fn can_play_catalog_content(&self) -> Result<bool, AuthorizationError> {
        Ok(self
            .capabilities()
            .await?
            .contains(Capability::MusicCatalogPlayback))
    }

    /// Tells whether the account can add items to its cloud music library.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Provider`] if the provider fails.
    pub async fn can_add_to_cloud_library(&self) -> Result<bool, AuthorizationError> {
        Ok(self
            .capabilities()
            .await?
            .contains(Capability::AddToCloudMusicLibrary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ProviderError;
    use crate::config::DeveloperToken;
    use async_trait::async_trait;

    struct FixedProvider {
        status: AuthorizationStatus,
        capabilities: Result<CloudServiceCapabilities, ProviderError>,
    }

    #[async_trait]
    impl CapabilityProvider for FixedProvider {
        async fn request_user_token(
            &self,
            _developer_token: &DeveloperToken,
        ) -> Result<Option<String>, ProviderError> {
            Ok(Some("token".to_string()))
        }

        fn authorization_status(&self) -> AuthorizationStatus {
            self.status
        }

        async fn request_authorization(&self) -> AuthorizationStatus {
            self.status
        }

        async fn request_capabilities(&self) -> Result<CloudServiceCapabilities, ProviderError> {
            self.capabilities.clone()
        }
    }

    fn authorization(
        status: AuthorizationStatus,
        capabilities: Result<CloudServiceCapabilities, ProviderError>,
    ) -> Authorization {
        Authorization::new(Arc::new(FixedProvider {
            status,
            capabilities,
        }))
    }

    fn capabilities(list: &[Capability]) -> CloudServiceCapabilities {
        list.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_request_authorization_is_true_only_when_authorized() {
        for (status, expected) in [
            (AuthorizationStatus::Authorized, true),
            (AuthorizationStatus::Denied, false),
            (AuthorizationStatus::Restricted, false),
            (AuthorizationStatus::NotDetermined, false),
        ] {
            let auth = authorization(status, Ok(CloudServiceCapabilities::new()));
            assert_eq!(auth.status(), status);
            assert_eq!(auth.request_authorization().await, expected);
        }
    }

    #[tokio::test]
    async fn test_subscription_offer_needs_playback_and_eligibility() {
        let auth = authorization(
            AuthorizationStatus::Authorized,
            Ok(capabilities(&[Capability::MusicCatalogSubscriptionEligible])),
        );
        assert!(!auth.eligible_for_subscription_offer().await.unwrap());

        let auth = authorization(
            AuthorizationStatus::Authorized,
            Ok(capabilities(&[
                Capability::MusicCatalogPlayback,
                Capability::MusicCatalogSubscriptionEligible,
            ])),
        );
        assert!(auth.eligible_for_subscription_offer().await.unwrap());
    }

    #[tokio::test]
    async fn test_playback_and_library_checks() {
        let auth = authorization(
            AuthorizationStatus::Authorized,
            Ok(capabilities(&[Capability::MusicCatalogPlayback])),
        );
        assert!(auth.can_play_catalog_content().await.unwrap());
        assert!(!auth.can_add_to_cloud_library().await.unwrap());

        let auth = authorization(
            AuthorizationStatus::Authorized,
            Ok(capabilities(&[Capability::AddToCloudMusicLibrary])),
        );
        assert!(!auth.can_play_catalog_content().await.unwrap());
        assert!(auth.can_add_to_cloud_library().await.unwrap());
    }

    #[tokio::test]
    async fn test_capability_failure_is_propagated() {
        let auth = authorization(
            AuthorizationStatus::Authorized,
            Err(ProviderError::new("network unavailable")),
        );

        let error = auth.can_play_catalog_content().await.unwrap_err();
        assert_eq!(
            error,
            AuthorizationError::Provider(ProviderError::new("network unavailable"))
        );
    }
}
