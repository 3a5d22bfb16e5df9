// ABOUTME: Route module organization for the plan service HTTP endpoints
// ABOUTME: Assembles health and plan routes with request tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the plan service
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`PlanService`].

/// Health check route
pub mod health;
/// Initial and adjusted plan routes
pub mod plans;

pub use health::{HealthResponse, HealthRoutes};
pub use plans::PlanRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::services::PlanService;

/// Build the complete application router
pub fn build_router(service: Arc<PlanService>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&service)))
        .merge(PlanRoutes::routes(service))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(config))
}
