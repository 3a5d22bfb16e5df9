// ABOUTME: Goal templates and level modifiers driving sets, reps, rest, and volume
// ABOUTME: Immutable constant tables; unknown inputs are already mapped to defaults upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::models::{Goal, Level};

/// Sets, reps, rest, and volume prescription for a training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    /// Lowest base sets value (inclusive)
    pub sets_min: u32,
    /// Highest base sets value (inclusive)
    pub sets_max: u32,
    /// Candidate rep strings; repeated entries weight the draw
    pub reps_options: &'static [&'static str],
    /// Rest between sets in seconds
    pub rest_sec: u32,
    /// Exercises selected per muscle group before level adjustment
    pub exercises_per_group: u32,
}

/// Fat loss: higher reps, short rest
pub const FAT_LOSS: GoalTemplate = GoalTemplate {
    sets_min: 3,
    sets_max: 4,
    reps_options: &["12-15", "15-20", "12-15"],
    rest_sec: 45,
    exercises_per_group: 2,
};

/// Muscle gain: moderate reps, long rest, more volume
pub const MUSCLE_GAIN: GoalTemplate = GoalTemplate {
    sets_min: 3,
    sets_max: 4,
    reps_options: &["8-10", "10-12", "6-8"],
    rest_sec: 90,
    exercises_per_group: 3,
};

/// Maintenance: fewer sets, moderate reps
pub const MAINTENANCE: GoalTemplate = GoalTemplate {
    sets_min: 2,
    sets_max: 3,
    reps_options: &["10-12", "12-15"],
    rest_sec: 60,
    exercises_per_group: 2,
};

impl GoalTemplate {
    /// Template for a goal
    #[must_use]
    pub const fn for_goal(goal: Goal) -> &'static Self {
        match goal {
            Goal::FatLoss => &FAT_LOSS,
            Goal::MuscleGain => &MUSCLE_GAIN,
            Goal::Maintenance => &MAINTENANCE,
        }
    }
}

/// Signed adjustments applied on top of a goal template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelModifier {
    /// Added to every drawn sets value before clamping
    pub sets_mod: i32,
    /// Added to the per-group exercise count
    pub exercises_mod: i32,
}

impl LevelModifier {
    /// Modifier for an experience level
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Beginner => Self {
                sets_mod: -1,
                exercises_mod: -1,
            },
            Level::Intermediate => Self {
                sets_mod: 0,
                exercises_mod: 0,
            },
            Level::Advanced => Self {
                sets_mod: 1,
                exercises_mod: 1,
            },
        }
    }

    /// Per-group exercise count after applying this modifier, never negative
    #[must_use]
    pub fn exercises_per_group(self, template: &GoalTemplate) -> usize {
        let base = i64::from(template.exercises_per_group) + i64::from(self.exercises_mod);
        usize::try_from(base.max(0)).unwrap_or(0)
    }
}
