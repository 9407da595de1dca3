//! Surface tests for client construction and error types.
//!
//! These tests verify the client API surface without requiring a running
//! server.

use rewardskit::{ApiErrorPayload, BoundClient, Client, ClientError, DEFAULT_BASE_URL};
use std::time::Duration;

#[test]
fn server_client_construction() {
    let client = Client::new("sk_test");
    drop(client);
    assert!(DEFAULT_BASE_URL.starts_with("https://"));
}

#[test]
fn base_url_override() {
    assert!(Client::new("k").with_base_url("http://localhost:8080").is_ok());
    assert!(Client::new("k").with_base_url("https://api.example.com").is_ok());
}

#[test]
fn base_url_requires_scheme() {
    let result = Client::new("k").with_base_url("localhost:8080");
    match result {
        Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
        _ => panic!("expected InvalidUrl error"),
    }
}

#[test]
fn builder_pattern_chains() {
    let client = Client::new("k")
        .with_api_key_header("x-api-key")
        .with_base_url("http://localhost:8080")
        .and_then(|c| c.with_timeout(Duration::from_secs(60)));
    assert!(client.is_ok());
}

#[test]
fn bound_client_construction() {
    let client = BoundClient::new("pk_test", "app-user-1");
    assert_eq!(client.app_user_id(), "app-user-1");
}

#[test]
fn bound_client_base_url_requires_scheme() {
    let result = BoundClient::new("pk", "u").with_base_url("not-a-url");
    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
}

#[test]
fn invalid_url_display() {
    let err = ClientError::InvalidUrl("test error".to_string());
    let display = format!("{err}");
    assert!(display.contains("invalid base URL"));
    assert!(display.contains("test error"));
}

#[test]
fn api_error_display() {
    let err = ClientError::Api(ApiErrorPayload {
        status_code: 404,
        details: Vec::new(),
    });
    assert!(format!("{err}").contains("404"));
}
