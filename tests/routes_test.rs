// ABOUTME: HTTP route tests for health, plan generation, and plan adjustment endpoints
// ABOUTME: Drives the assembled router with oneshot requests and checks status codes and bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::error::Error;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    Router,
};
use common::{adjust_request, generate_request};
use fitai_intelligence::WorkoutPlanGenerator;
use fitai_planner::config::ServerConfig;
use fitai_planner::routes::build_router;
use fitai_planner::services::PlanService;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(
        Arc::new(PlanService::new(WorkoutPlanGenerator::default())),
        &ServerConfig::default(),
    )
}

async fn post_json(uri: &str, body: &Value) -> Result<(StatusCode, Value), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;

    let response = app().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_health_reports_service_state() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/health").body(Body::empty())?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["gemini_available"], false);
    assert!(body["timestamp"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_generate_plan_returns_weekly_plan() -> Result<(), Box<dyn Error>> {
    let (status, body) = post_json("/generate_plan", &serde_json::to_value(generate_request())?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["week_start"], "2024-01-01");
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 4);
    for day in days {
        assert!(!day["sessions"].as_array().unwrap().is_empty());
        assert!(day["estimated_minutes"].as_u64().unwrap() <= 60);
    }
    assert!(!body["principles"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_generate_plan_is_deterministic_over_http() -> Result<(), Box<dyn Error>> {
    let payload = serde_json::to_value(generate_request())?;

    let (_, first) = post_json("/generate_plan", &payload).await?;
    let (_, second) = post_json("/generate_plan", &payload).await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_generate_plan_rejects_out_of_range_days() -> Result<(), Box<dyn Error>> {
    let mut payload = serde_json::to_value(generate_request())?;
    payload["profile"]["days_per_week"] = json!(9);

    let (status, body) = post_json("/generate_plan", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("days_per_week"));

    Ok(())
}

#[tokio::test]
async fn test_generate_plan_rejects_unknown_muscle_group() -> Result<(), Box<dyn Error>> {
    let mut payload = serde_json::to_value(generate_request())?;
    payload["exercises"][0]["muscle_group"] = json!("neck");

    let (status, body) = post_json("/generate_plan", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    Ok(())
}

#[tokio::test]
async fn test_generate_plan_rejects_malformed_body() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .method("POST")
        .uri("/generate_plan")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_adjust_plan_prepends_adjustment_notes() -> Result<(), Box<dyn Error>> {
    let (status, body) = post_json("/adjust_plan", &serde_json::to_value(adjust_request())?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["week_start"], "2024-01-08");
    assert_eq!(body["days"].as_array().unwrap().len(), 4);
    let first_note = body["notes"][0].as_str().unwrap();
    assert!(first_note.contains("5.0/5"));

    Ok(())
}

#[tokio::test]
async fn test_adjust_plan_rejects_inconsistent_statistics() -> Result<(), Box<dyn Error>> {
    let mut payload = serde_json::to_value(adjust_request())?;
    payload["logs_summary"]["completion_rate"] = json!(140);

    let (status, body) = post_json("/adjust_plan", &payload).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");

    Ok(())
}
