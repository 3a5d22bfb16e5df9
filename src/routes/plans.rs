// ABOUTME: Plan generation route handlers for initial and adjusted weekly plans
// ABOUTME: Thin handlers that decode JSON bodies and delegate to the plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan routes
//!
//! Malformed bodies (bad JSON, unknown catalog values, invalid dates) are
//! rejected with the same `INVALID_INPUT` error shape as failed validation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use fitai_core::models::Plan;

use crate::errors::AppError;
use crate::services::{AdjustPlanRequest, GeneratePlanRequest, PlanService};

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan generation routes
    pub fn routes(service: Arc<PlanService>) -> Router {
        Router::new()
            .route("/generate_plan", post(Self::handle_generate_plan))
            .route("/adjust_plan", post(Self::handle_adjust_plan))
            .with_state(service)
    }

    fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
        payload
            .map(|Json(body)| body)
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
    }

    /// Handle POST /generate_plan
    async fn handle_generate_plan(
        State(service): State<Arc<PlanService>>,
        payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
    ) -> Result<Json<Plan>, AppError> {
        let request = Self::decode(payload)?;
        Ok(Json(service.generate(&request).await?))
    }

    /// Handle POST /adjust_plan
    async fn handle_adjust_plan(
        State(service): State<Arc<PlanService>>,
        payload: Result<Json<AdjustPlanRequest>, JsonRejection>,
    ) -> Result<Json<Plan>, AppError> {
        let request = Self::decode(payload)?;
        Ok(Json(service.adjust(&request).await?))
    }
}
