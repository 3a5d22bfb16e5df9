// ABOUTME: Health check route for service monitoring
// ABOUTME: Reports service identity, version, and whether narrative enhancement is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route for service monitoring

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use fitai_core::constants::service_names;
use serde::{Deserialize, Serialize};

use crate::services::PlanService;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// Service name
    pub service: String,
    /// Package version
    pub version: String,
    /// Whether a narrative enhancer is attached
    pub gemini_available: bool,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(service: Arc<PlanService>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(service)
    }

    async fn handle_health(State(service): State<Arc<PlanService>>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_owned(),
            service: service_names::FITAI_PLANNER.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            gemini_available: service.enhancement_available(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
