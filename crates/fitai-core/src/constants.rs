// ABOUTME: Application constants for plan generation, validation, and enhancement
// ABOUTME: Groups fixed rule-table values by domain so callers share one source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session composition limits
pub mod session {
    /// Fixed time cost of one exercise entry, in minutes
    pub const MINUTES_PER_EXERCISE: u32 = 6;
    /// Lowest sets value a session may carry
    pub const MIN_SETS: u32 = 2;
    /// Highest sets value a session may carry
    pub const MAX_SETS: u32 = 5;
}

/// Profile defaults applied when a field is missing
pub mod profile_defaults {
    /// Days per week when unspecified
    pub const DAYS_PER_WEEK: u32 = 3;
    /// Session length when unspecified
    pub const SESSION_MINUTES: u32 = 45;
}

/// Caller-level validation bounds (outer limits, not the rule-table ranges)
pub mod validation {
    /// Smallest accepted `days_per_week`
    pub const MIN_DAYS_PER_WEEK: u32 = 1;
    /// Largest accepted `days_per_week`
    pub const MAX_DAYS_PER_WEEK: u32 = 7;
    /// Smallest accepted `session_minutes`
    pub const MIN_SESSION_MINUTES: u32 = 10;
    /// Largest accepted `session_minutes`
    pub const MAX_SESSION_MINUTES: u32 = 180;
    /// Upper bound of `completion_rate`
    pub const MAX_COMPLETION_RATE: u32 = 100;
    /// Fatigue scale bounds
    pub const MIN_FATIGUE: f64 = 1.0;
    /// Fatigue scale bounds
    pub const MAX_FATIGUE: f64 = 5.0;
}

/// Narrative enhancement limits
pub mod enhancement {
    /// Maximum entries kept per enhanced list
    pub const MAX_ITEMS_PER_LIST: usize = 5;
    /// Default model request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
}

/// Service identity
pub mod service_names {
    /// Service name reported by health checks and logs
    pub const FITAI_PLANNER: &str = "FitAI Plan Generator";
}
