// ABOUTME: Configuration module for the fitai-intelligence crate
// ABOUTME: Re-exports adjustment policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Adjustment policy thresholds and step sizes
pub mod adjustment;
/// Configuration error types
pub mod error;

pub use adjustment::AdjustmentConfig;
pub use error::ConfigError;
