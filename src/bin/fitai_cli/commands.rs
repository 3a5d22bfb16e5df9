// ABOUTME: Command implementations for the FitAI CLI
// ABOUTME: Reads request files, runs the plan service, and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use fitai_intelligence::WorkoutPlanGenerator;
use fitai_planner::{
    config::EnhancementConfig,
    llm::GeminiProvider,
    models::Plan,
    seed::{derive_seed, seed_text, SeedKind},
    services::{AdjustPlanRequest, GeneratePlanRequest, LlmPlanEnhancer, PlanService},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| anyhow!("Invalid request in {}: {e}", path.display()))
}

fn build_service(no_enhance: bool) -> Result<PlanService> {
    let service = PlanService::new(WorkoutPlanGenerator::new());
    if no_enhance {
        debug!("Narrative enhancement skipped by flag");
        return Ok(service);
    }

    let config = EnhancementConfig::from_env()?;
    Ok(match GeminiProvider::from_config(&config) {
        Some(provider) => {
            info!(model = %config.model, "Using Gemini narrative enhancement");
            service.with_enhancer(Arc::new(LlmPlanEnhancer::from_config(
                Arc::new(provider),
                &config,
            )))
        }
        None => service,
    })
}

fn print_plan(plan: &Plan) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

pub async fn generate(path: &Path, no_enhance: bool) -> Result<()> {
    let request: GeneratePlanRequest = read_request(path)?;
    let plan = build_service(no_enhance)?.generate(&request).await?;
    print_plan(&plan)
}

pub async fn adjust(path: &Path, no_enhance: bool) -> Result<()> {
    let request: AdjustPlanRequest = read_request(path)?;
    let plan = build_service(no_enhance)?.adjust(&request).await?;
    print_plan(&plan)
}

pub fn seed(user_id: i64, week_start: NaiveDate, adjusted: bool) {
    let kind = if adjusted {
        SeedKind::Adjusted
    } else {
        SeedKind::Initial
    };
    println!(
        "{} -> {}",
        seed_text(user_id, week_start, kind),
        derive_seed(user_id, week_start, kind)
    );
}
