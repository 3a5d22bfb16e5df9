// ABOUTME: Rule-based workout plan generation for the FitAI planner
// ABOUTME: Split selection, exercise filtering, day composition, guidance text, and adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitAI` Intelligence
//!
//! Deterministic plan generation. Given a profile, an exercise catalog, a week
//! start and a seed, [`WorkoutPlanGenerator`] always produces the same plan.
//! All randomness comes from one `ChaCha8Rng` created per call, consumed in
//! split order and, within a day, in muscle-group order.
//!
//! The crate performs no I/O and has no failure modes: unknown or out-of-range
//! inputs inside the type contract resolve to documented defaults.

/// Adjustment policy: adapt a profile from last week's logs
pub mod adjustment;
/// Generator configuration
pub mod config;
/// Single-day exercise selection and prescription
pub mod day_composer;
/// Equipment and difficulty filtering of the catalog
pub mod exercise_filter;
/// Plan generator entry points
pub mod generator;
/// Weekly principles and notes
pub mod guidance;
/// Workout day placement within the week
pub mod schedule;
/// Split tables per weekly frequency
pub mod split;
/// Goal templates and level modifiers
pub mod templates;

pub use adjustment::{adjust_profile, adjustment_notes};
pub use config::{AdjustmentConfig, ConfigError};
pub use generator::WorkoutPlanGenerator;
pub use split::{SplitDay, TrainingFrequency};
