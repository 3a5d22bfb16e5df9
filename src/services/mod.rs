// ABOUTME: Domain service layer for plan generation and narrative enhancement
// ABOUTME: Protocol-agnostic services shared by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Best-effort LLM rewriting of principles and notes
pub mod enhancement;

/// Request validation, seeding, generation and enhancement
pub mod plan_service;

pub use enhancement::{parse_enhancement, LlmPlanEnhancer, NarrativeEnhancement, PlanEnhancer};
pub use plan_service::{AdjustPlanRequest, GeneratePlanRequest, PlanService};
