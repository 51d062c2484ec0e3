//! Wiremock integration tests for AnthropicClient.
//!
//! These tests verify correct HTTP interaction and error handling using mocked responses.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordweave::providers::{AnthropicClient, ModelClient};
use wordweave::{InvokeOptions, WordweaveError};

const MODEL: &str = "claude-test";

fn client(server: &MockServer) -> AnthropicClient {
    AnthropicClient::with_base_url("test_key", MODEL, server.uri()).unwrap()
}

fn text_reply(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_1",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

/// Test a successful invocation and the request shape.
#[tokio::test]
async fn test_invoke_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test_key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": MODEL,
            "max_tokens": 3000,
            "messages": [{"role": "user", "content": "write"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("{\"poem\": \"x\"}")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = InvokeOptions::new(3000).temperature(0.3).top_p(0.9);
    let text = client(&mock_server).invoke("write", &options).await.unwrap();
    assert_eq!(text, "{\"poem\": \"x\"}");
}

/// Optional sampling fields are omitted when unset.
#[tokio::test]
async fn test_unset_sampling_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("ok")))
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .invoke("hi", &InvokeOptions::new(10))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("temperature").is_none());
    assert!(body.get("top_p").is_none());
    assert_eq!(body["max_tokens"], 10);
}

/// Non-text blocks are skipped.
#[tokio::test]
async fn test_first_text_block_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "thinking", "thinking": "hmm"},
                {"type": "text", "text": "answer"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let text = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "answer");
}

#[tokio::test]
async fn test_empty_content_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::EmptyResponse));
}

// ============================================================================
// Status mapping
// ============================================================================

#[tokio::test]
async fn test_rate_limited_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    match err {
        WordweaveError::Throttled { retry_after } => {
            assert_eq!(retry_after, Some(Duration::from_secs(7)));
        }
        other => panic!("expected Throttled, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_without_hint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::Throttled { retry_after: None }));
}

#[tokio::test]
async fn test_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::AccessDenied));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_server_error_is_transient() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(529))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::Api { status: 529, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1.
    let client = AnthropicClient::with_base_url("k", MODEL, "http://127.0.0.1:1").unwrap();
    let err = client
        .invoke("q", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordweaveError::Network(_)), "got {err:?}");
}

#[test]
fn test_identity() {
    let client = AnthropicClient::new("k", MODEL).unwrap();
    assert_eq!(client.name(), "anthropic");
    assert_eq!(client.model_id(), MODEL);
}
