//! Storefront resolution.
//!
//! `GET /v1/me/storefront` returns `{ "data": [ { "id": "us", ... } ] }`;
//! the first entry's `id` is the user's storefront. Nothing here is cached.

use crate::catalog::CatalogError;
use crate::clients::{HttpRequest, Transport};
use crate::config::{ApiHost, AppleMusicConfig, StorefrontId, UserToken};

/// Path of the user storefront endpoint.
pub const STOREFRONT_PATH: &str = "/v1/me/storefront";

/// Returns the storefront endpoint URL for the given host.
#[must_use]
pub fn storefront_url(host: &ApiHost) -> String {
    format!("{}{STOREFRONT_PATH}", host.as_ref())
}

/// Extracts the storefront identifier from a storefront document.
///
/// # Errors
///
/// Returns [`CatalogError::StorefrontDecode`] if `data` is missing, not an
/// array, or empty, or if its first entry has no non-empty string `id`.
pub fn decode_storefront(document: &serde_json::Value) -> Result<StorefrontId, CatalogError> {
    let decode_error = |message: &str| {
        tracing::warn!(message, "Unexpected storefront document");
        CatalogError::StorefrontDecode {
            message: message.to_string(),
        }
    };

    let data = document
        .get("data")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| decode_error("`data` is missing or not an array"))?;
    let first = data
        .first()
        .ok_or_else(|| decode_error("`data` is empty"))?;
    let id = first
        .get("id")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| decode_error("`data[0].id` is missing or not a string"))?;

    StorefrontId::new(id).map_err(|_| decode_error("`data[0].id` is empty"))
}

/// Resolves the storefront for a user token with a single request.
///
/// # Errors
///
/// - [`CatalogError::Transport`] if the request fails
/// - [`CatalogError::StorefrontDecode`] if the document has an unexpected shape
pub async fn resolve_storefront(
    transport: &dyn Transport,
    config: &AppleMusicConfig,
    user_token: &UserToken,
) -> Result<StorefrontId, CatalogError> {
    let request = HttpRequest::authenticated(
        storefront_url(config.api_host()),
        config.developer_token(),
        user_token,
    );

    let response = transport.fetch(request).await?;
    let storefront = decode_storefront(&response.body)?;
    tracing::debug!(%storefront, "Resolved storefront");
    Ok(storefront)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_message(document: &serde_json::Value) -> String {
        match decode_storefront(document) {
            Err(CatalogError::StorefrontDecode { message }) => message,
            other => panic!("expected StorefrontDecode, got {other:?}"),
        }
    }

    #[test]
    fn test_storefront_url() {
        assert_eq!(
            storefront_url(&ApiHost::default()),
            "https://api.music.apple.com/v1/me/storefront"
        );
    }

    #[test]
    fn test_decodes_first_entry_id() {
        let document = json!({
            "data": [
                { "id": "us", "type": "storefronts" },
                { "id": "gb", "type": "storefronts" }
            ]
        });
        assert_eq!(decode_storefront(&document).unwrap().as_ref(), "us");
    }

    #[test]
    fn test_empty_or_null_data_fails() {
        assert_eq!(decode_message(&json!({ "data": [] })), "`data` is empty");
        assert_eq!(
            decode_message(&json!({ "data": null })),
            "`data` is missing or not an array"
        );
        assert_eq!(
            decode_message(&json!({})),
            "`data` is missing or not an array"
        );
        assert_eq!(
            decode_message(&json!({ "data": { "id": "us" } })),
            "`data` is missing or not an array"
        );
    }

    #[test]
    fn test_missing_or_invalid_id_fails() {
        assert_eq!(
            decode_message(&json!({ "data": [ { "type": "storefronts" } ] })),
            "`data[0].id` is missing or not a string"
        );
        assert_eq!(
            decode_message(&json!({ "data": [ { "id": 143441 } ] })),
            "`data[0].id` is missing or not a string"
        );
        assert_eq!(
            decode_message(&json!({ "data": [ { "id": "" } ] })),
            "`data[0].id` is empty"
        );
    }
}
