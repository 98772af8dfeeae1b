//! Integration tests for the HTTP transport.
//!
//! These tests run [`HttpClient`] against a local mock server and verify
//! header handling, body parsing, and error summarisation.

use apple_music_api::clients::{HttpClient, HttpError, HttpRequest, Transport};
use apple_music_api::{AppleMusicConfig, DeveloperToken, UserToken};
use serde_json::json;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn developer_token() -> DeveloperToken {
    DeveloperToken::new("developer-token").unwrap()
}

fn user_token() -> UserToken {
    UserToken::new("user-token").unwrap()
}

fn authenticated(server: &MockServer, endpoint: &str) -> HttpRequest {
    HttpRequest::authenticated(
        format!("{}{endpoint}", server.uri()),
        &developer_token(),
        &user_token(),
    )
}

#[tokio::test]
async fn test_sends_credentials_and_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me/storefront"))
        .and(header("Authorization", "Bearer developer-token"))
        .and(header("Music-User-Token", "user-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None);
    let response = client
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_user_agent_prefix_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_regex(
            "User-Agent",
            r"^Jukebox/2\.1 \| Apple Music API Library v\S+ \| Rust ",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = AppleMusicConfig::builder()
        .developer_token(developer_token())
        .user_agent_prefix("Jukebox/2.1")
        .build()
        .unwrap();
    let client = HttpClient::new(Some(&config));
    let response = client
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_error_status_is_summarised_from_errors_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("x-apple-jingle-correlation-key", "JINGLE-123")
                .set_body_json(json!({
                    "errors": [ {
                        "status": "401",
                        "title": "Unauthorized",
                        "detail": "Developer token is expired"
                    } ]
                })),
        )
        .mount(&server)
        .await;

    let error = HttpClient::new(None)
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.message, "Developer token is expired");
            assert_eq!(e.error_reference.as_deref(), Some("JINGLE-123"));
        }
        other => panic!("expected HttpError::Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_without_json_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let error = HttpClient::new(None)
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(503));
    assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/me/storefront", server.uri());
    let error = HttpClient::new(None)
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap_err();

    match error {
        HttpError::InvalidBody(e) => assert_eq!(e.url, url),
        other => panic!("expected HttpError::InvalidBody, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = HttpClient::new(None)
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await
        .unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_failures_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let result = HttpClient::new(None)
        .fetch(authenticated(&server, "/v1/me/storefront"))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    let request = HttpRequest::authenticated(
        "http://127.0.0.1:1/v1/me/storefront",
        &developer_token(),
        &user_token(),
    );

    let error = HttpClient::new(None).fetch(request).await.unwrap_err();

    assert!(matches!(error, HttpError::Network(_)));
    assert_eq!(error.status(), None);
}
