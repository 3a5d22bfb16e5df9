// ABOUTME: Configuration management module for service settings
// ABOUTME: Re-exports server, CORS, and narrative enhancement configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the `FitAI` planner service
//!
//! Generator tuning (`AdjustmentConfig`) lives in `fitai-intelligence`; this
//! module covers what the service layer owns.

/// Environment and server configuration
pub mod environment;

pub use environment::{EnhancementConfig, GeminiFileConfig, GenerationSettings, ServerConfig};
