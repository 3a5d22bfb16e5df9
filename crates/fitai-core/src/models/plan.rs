// ABOUTME: Weekly workout plan value objects: plan, day, and session entries
// ABOUTME: Plans are fully determined by their generating inputs and seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::session::MINUTES_PER_EXERCISE;

/// One exercise prescription inside a workout day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionItem {
    /// Exercise name from the catalog
    pub exercise: String,
    /// Number of working sets (always within 2-5)
    pub sets: u32,
    /// Rep range, e.g. "8-10"
    pub reps: String,
    /// Rest between sets in seconds
    pub rest_sec: u32,
    /// Exercise description carried over from the catalog
    #[serde(default)]
    pub notes: Option<String>,
}

/// A single scheduled workout day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Split title, e.g. "Push" or "Upper A"
    pub title: String,
    /// Ordered exercise prescriptions
    pub sessions: Vec<SessionItem>,
    /// Estimated duration, derived from the session count
    pub estimated_minutes: u32,
}

impl PlanDay {
    /// Build a day, deriving `estimated_minutes` from the sessions
    #[must_use]
    pub fn new(date: NaiveDate, title: impl Into<String>, sessions: Vec<SessionItem>) -> Self {
        let count = u32::try_from(sessions.len()).unwrap_or(u32::MAX);
        Self {
            date,
            title: title.into(),
            estimated_minutes: count.saturating_mul(MINUTES_PER_EXERCISE),
            sessions,
        }
    }
}

/// A seven-day training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// First day of the plan week
    pub week_start: NaiveDate,
    /// Workout days in calendar order
    pub days: Vec<PlanDay>,
    /// Training principles for the week
    pub principles: Vec<String>,
    /// Practical notes for the week
    pub notes: Vec<String>,
}
