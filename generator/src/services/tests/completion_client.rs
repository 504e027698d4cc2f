//! Tests for RealCompletionClient

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{TEST_KEY, endpoint_for};
use crate::config::ProviderEndpoint;
use crate::error::GenerationError;
use crate::services::completion_client::RealCompletionClient;
use crate::traits::CompletionClient;

const GENERATE_PATH: &str = "/models/gemini-pro:generateContent";

fn client(endpoint: ProviderEndpoint) -> RealCompletionClient {
    RealCompletionClient::new(reqwest::Client::new(), endpoint)
}

#[tokio::test]
async fn test_returns_first_text_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", TEST_KEY))
        .and(body_json(json!({"contents": [{"parts": [{"text": "Say hi"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "hi"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(endpoint_for(&server))
        .complete("gemini-pro", "Say hi", Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(text, "hi");
}

#[tokio::test]
async fn test_429_is_quota_signal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .mount(&server)
        .await;

    let result = client(endpoint_for(&server))
        .complete("gemini-pro", "prompt", Duration::from_secs(5))
        .await;

    assert_eq!(result, Err(GenerationError::QuotaExceeded));
}

#[tokio::test]
async fn test_other_status_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let result = client(endpoint_for(&server))
        .complete("gemini-pro", "prompt", Duration::from_secs(5))
        .await;

    assert_eq!(
        result,
        Err(GenerationError::Upstream {
            status: 503,
            body: "overloaded".to_string()
        })
    );
}

#[tokio::test]
async fn test_no_candidates_is_empty_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let result = client(endpoint_for(&server))
        .complete("gemini-pro", "prompt", Duration::from_secs(5))
        .await;

    assert_eq!(result, Err(GenerationError::EmptyCompletion));
}

#[tokio::test]
async fn test_no_parts_is_empty_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": [{"content": {"parts": []}}]})))
        .mount(&server)
        .await;

    let result = client(endpoint_for(&server))
        .complete("gemini-pro", "prompt", Duration::from_secs(5))
        .await;

    assert_eq!(result, Err(GenerationError::EmptyCompletion));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"candidates": [{"content": {"parts": [{"text": "late"}]}}]}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client(endpoint_for(&server))
        .complete("gemini-pro", "prompt", Duration::from_millis(100))
        .await;

    assert!(matches!(result, Err(GenerationError::Transport(_))));
}

#[tokio::test]
async fn test_missing_credential_is_configuration_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(ProviderEndpoint::new(server.uri(), "  "))
        .complete("gemini-pro", "prompt", Duration::from_secs(5))
        .await;

    assert_eq!(result, Err(GenerationError::Configuration));
}
