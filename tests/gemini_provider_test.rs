// ABOUTME: Gemini provider tests against a local mock of the generateContent endpoint
// ABOUTME: Checks request shape, reply extraction, and HTTP error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitai_planner::errors::ErrorCode;
use fitai_planner::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    target: String,
    key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct MockGemini {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn handle_generate(
    State(mock): State<MockGemini>,
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.captured.lock().unwrap().push(Captured {
        target,
        key: query.get("key").cloned(),
        body,
    });
    (mock.status, Json(mock.reply.clone()))
}

async fn handle_list_models(
    State(mock): State<MockGemini>,
    Query(query): Query<HashMap<String, String>>,
) -> StatusCode {
    if query.get("key").is_some_and(|key| key == "test-key") {
        StatusCode::OK
    } else {
        mock.status
    }
}

/// Serve a mock Gemini API and return its base URL
async fn spawn_mock(mock: MockGemini) -> String {
    let app = Router::new()
        .route("/models", get(handle_list_models))
        .route("/models/*target", post(handle_generate))
        .with_state(mock);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/")
}

fn mock(status: StatusCode, reply: Value) -> MockGemini {
    MockGemini {
        status,
        reply,
        captured: Arc::new(Mutex::new(Vec::new())),
    }
}

fn enhancement_request() -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system("Bạn là huấn luyện viên"),
        ChatMessage::user("Viết nguyên tắc tập luyện"),
    ])
    .with_temperature(0.5)
    .with_max_tokens(256)
}

#[tokio::test]
async fn test_complete_sends_gemini_request_and_joins_parts() {
    let server = mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"principles\": []"}, {"text": ", \"notes\": []}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20}
        }),
    );
    let captured = Arc::clone(&server.captured);
    let base_url = spawn_mock(server).await;

    let provider = GeminiProvider::new("test-key")
        .with_default_model("gemini-1.5-flash")
        .with_base_url(base_url);
    let response = provider.complete(&enhancement_request()).await.unwrap();

    assert_eq!(response.content, "{\"principles\": [], \"notes\": []}");
    assert_eq!(response.model, "gemini-1.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, 20);

    let calls = captured.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.target, "gemini-1.5-flash:generateContent");
    assert_eq!(call.key.as_deref(), Some("test-key"));
    assert_eq!(
        call.body["systemInstruction"]["parts"][0]["text"],
        "Bạn là huấn luyện viên"
    );
    assert_eq!(call.body["contents"].as_array().unwrap().len(), 1);
    assert_eq!(call.body["contents"][0]["role"], "user");
    assert_eq!(call.body["generationConfig"]["temperature"], 0.5);
    assert_eq!(call.body["generationConfig"]["maxOutputTokens"], 256);
}

#[tokio::test]
async fn test_request_model_overrides_default() {
    let server = mock(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}),
    );
    let captured = Arc::clone(&server.captured);
    let base_url = spawn_mock(server).await;

    let provider = GeminiProvider::new("test-key").with_base_url(base_url);
    let request = ChatRequest::new(vec![ChatMessage::user("hi")]).with_model("gemini-1.5-pro");
    let response = provider.complete(&request).await.unwrap();

    assert_eq!(response.model, "gemini-1.5-pro");
    let calls = captured.lock().unwrap().clone();
    assert_eq!(calls[0].target, "gemini-1.5-pro:generateContent");
    assert!(calls[0].body.get("generationConfig").is_none());
}

#[tokio::test]
async fn test_quota_error_maps_to_rate_limited() {
    let server = mock(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Quota exceeded for metric. Please retry in 6.4s."}}),
    );
    let base_url = spawn_mock(server).await;

    let provider = GeminiProvider::new("test-key").with_base_url(base_url);
    let err = provider
        .complete(&enhancement_request())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert!(err.message.contains("7 seconds"));
}

#[tokio::test]
async fn test_rejected_key_maps_to_auth_failure() {
    let server = mock(
        StatusCode::FORBIDDEN,
        json!({"error": {"message": "API key not valid"}}),
    );
    let base_url = spawn_mock(server).await;

    let provider = GeminiProvider::new("bad-key").with_base_url(base_url);
    let err = provider
        .complete(&enhancement_request())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert!(err.message.contains("API key not valid"));
    assert!(!err.message.contains("bad-key"));
}

#[tokio::test]
async fn test_empty_candidates_is_an_external_error() {
    let server = mock(StatusCode::OK, json!({"candidates": []}));
    let base_url = spawn_mock(server).await;

    let provider = GeminiProvider::new("test-key").with_base_url(base_url);
    let err = provider
        .complete(&enhancement_request())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_unreachable_api_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GeminiProvider::new("test-key").with_base_url(format!("http://{addr}"));
    let err = provider
        .complete(&enhancement_request())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(!err.message.contains("test-key"));
}

#[tokio::test]
async fn test_health_check_reports_key_acceptance() {
    let base_url = spawn_mock(mock(StatusCode::FORBIDDEN, json!({}))).await;

    let accepted = GeminiProvider::new("test-key").with_base_url(base_url.clone());
    assert!(accepted.health_check().await.unwrap());
    assert_eq!(accepted.display_name(), "Google Gemini");

    let rejected = GeminiProvider::new("other-key").with_base_url(base_url);
    assert!(!rejected.health_check().await.unwrap());
}
