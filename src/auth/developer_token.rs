//! Developer token generation.
//!
//! Apple Music developer tokens are ES256-signed JWTs issued by your team
//! with a MusicKit private key. The header names the key (`kid`) and the
//! claims carry the team id (`iss`), issue time (`iat`) and expiry (`exp`).
//!
//! # Example
//!
//! ```rust,ignore
//! use apple_music_api::DeveloperToken;
//! use chrono::Duration;
//!
//! let pem = std::fs::read("AuthKey_ABC123DEFG.p8")?;
//! let token = DeveloperToken::generate("TEAMID1234", "ABC123DEFG", &pem, Duration::hours(12))?;
//! ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::DeveloperToken;
use crate::error::ConfigError;

/// Longest developer token lifetime Apple accepts, in seconds (about six months).
pub const MAX_DEVELOPER_TOKEN_TTL_SECS: i64 = 15_777_000;

/// Claims carried by a developer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperTokenClaims {
    /// Issuer: the Apple Developer team id.
    pub iss: String,
    /// Issued-at time as a Unix timestamp.
    pub iat: i64,
    /// Expiry time as a Unix timestamp.
    pub exp: i64,
}

impl DeveloperToken {
    /// Signs a new developer token that is valid from now for `ttl`.
    ///
    /// # Errors
    ///
    /// See [`DeveloperToken::generate_at`].
    pub fn generate(
        team_id: &str,
        key_id: &str,
        private_key_pem: &[u8],
        ttl: Duration,
    ) -> Result<Self, ConfigError> {
        Self::generate_at(team_id, key_id, private_key_pem, ttl, Utc::now())
    }

    /// Signs a new developer token issued at `issued_at`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `team_id` or `key_id` is empty
    /// - [`ConfigError::InvalidTokenLifetime`] if `ttl` is not positive or exceeds
    ///   [`MAX_DEVELOPER_TOKEN_TTL_SECS`]
    /// - [`ConfigError::InvalidSigningKey`] if the key is not a PKCS#8 P-256 PEM key
    pub fn generate_at(
        team_id: &str,
        key_id: &str,
        private_key_pem: &[u8],
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, ConfigError> {
        if team_id.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "team_id" });
        }
        if key_id.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "key_id" });
        }

        let seconds = ttl.num_seconds();
        if seconds <= 0 || seconds > MAX_DEVELOPER_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidTokenLifetime {
                seconds,
                max: MAX_DEVELOPER_TOKEN_TTL_SECS,
            });
        }

        let key = EncodingKey::from_ec_pem(private_key_pem).map_err(|e| {
            ConfigError::InvalidSigningKey {
                reason: e.to_string(),
            }
        })?;

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(key_id.to_string());

        let claims = DeveloperTokenClaims {
            iss: team_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        };

        let token = encode(&header, &claims, &key).map_err(|e| ConfigError::InvalidSigningKey {
            reason: e.to_string(),
        })?;

        tracing::debug!(
            key_id,
            expires_at = claims.exp,
            "Generated Apple Music developer token"
        );
        Self::new(token)
    }
}
