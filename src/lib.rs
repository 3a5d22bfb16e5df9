// ABOUTME: Main library entry point for the FitAI weekly workout plan service
// ABOUTME: Wires configuration, logging, seeding, plan service, LLM enhancement, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitAI` Planner
//!
//! An HTTP service and CLI around the deterministic rule-based generator in
//! `fitai-intelligence`. Each request is validated, seeded from the caller's
//! identity and week, generated, and then optionally passed to a language
//! model that may rewrite the plan's principles and notes.
//!
//! ## Architecture
//!
//! - **Config**: environment and Gemini file configuration
//! - **Services**: request validation, plan generation, narrative enhancement
//! - **LLM**: provider abstraction and the Gemini client
//! - **Routes**: axum handlers for `/health`, `/generate_plan`, `/adjust_plan`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitai_planner::config::ServerConfig;
//! use fitai_planner::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitAI planner will listen on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Error types
pub mod errors;

/// Language model providers and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Deterministic seed derivation
pub mod seed;

/// Domain services
pub mod services;

pub use fitai_core::models;
