// ABOUTME: Core data models for the FitAI workout planner
// ABOUTME: Re-exports profile, exercise, plan, and workout-log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod exercise;
mod logs;
mod plan;
mod profile;

pub use exercise::{Exercise, MuscleGroup};
pub use logs::{LogStatus, LogSummary, LogsStatistics, PreviousPlan};
pub use plan::{Plan, PlanDay, SessionItem};
pub use profile::{
    deserialize_lenient, Availability, DayAvailability, Equipment, Goal, LenientParse, Level,
    Profile,
};
