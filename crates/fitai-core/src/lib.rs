// ABOUTME: Core types and constants for the FitAI workout planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitAI` Core
//!
//! Foundation crate providing shared types and constants for the `FitAI`
//! workout planner. The generator crate and the service crate both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Rule-table constants shared by generator and validation
//! - **models**: Profile, exercise catalog, plan, and workout-log types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Exercise, Plan, logs)
pub mod models;
