// ABOUTME: Split strategy tables mapping weekly frequency to named training days
// ABOUTME: Each split day resolves to a fixed, ordered list of target muscle groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Split strategy selection
//!
//! | days/week | split                                   |
//! |-----------|-----------------------------------------|
//! | 3         | Full Body A, Full Body B, Full Body C   |
//! | 4         | Upper A, Lower A, Upper B, Lower B      |
//! | 5         | Push, Pull, Legs, Upper, Lower          |
//! | 6         | Push, Pull, Legs, Push, Pull, Legs      |
//!
//! Any other frequency uses the 3-day full-body table. That is a documented
//! fallback, not an error.

use fitai_core::models::MuscleGroup::{self, Back, Biceps, Chest, Core, Legs, Shoulders, Triceps};
use serde::{Deserialize, Serialize};

/// Weekly training frequency with a defined split table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingFrequency {
    /// Three full-body days
    Three,
    /// Upper/lower, twice each
    Four,
    /// Push/pull/legs plus upper/lower
    Five,
    /// Push/pull/legs, twice
    Six,
}

impl TrainingFrequency {
    /// Resolve a requested `days_per_week`, falling back to the 3-day table
    #[must_use]
    pub const fn from_days(days_per_week: u32) -> Self {
        match days_per_week {
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            _ => Self::Three,
        }
    }

    /// Number of workout days this frequency schedules
    #[must_use]
    pub const fn day_count(self) -> usize {
        self.splits().len()
    }

    /// Ordered split days, one per workout day
    #[must_use]
    pub const fn splits(self) -> &'static [SplitDay] {
        match self {
            Self::Three => &[SplitDay::FullBodyA, SplitDay::FullBodyB, SplitDay::FullBodyC],
            Self::Four => &[
                SplitDay::UpperA,
                SplitDay::LowerA,
                SplitDay::UpperB,
                SplitDay::LowerB,
            ],
            Self::Five => &[
                SplitDay::Push,
                SplitDay::Pull,
                SplitDay::Legs,
                SplitDay::Upper,
                SplitDay::Lower,
            ],
            Self::Six => &[
                SplitDay::Push,
                SplitDay::Pull,
                SplitDay::Legs,
                SplitDay::Push,
                SplitDay::Pull,
                SplitDay::Legs,
            ],
        }
    }
}

/// A named training day within a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitDay {
    /// Full body, chest/back emphasis
    FullBodyA,
    /// Full body, shoulders/arms emphasis
    FullBodyB,
    /// Full body, chest/shoulders emphasis
    FullBodyC,
    /// Upper body, pressing and rows
    UpperA,
    /// Upper body, pulling and arms
    UpperB,
    /// Lower body and core
    LowerA,
    /// Lower body and core
    LowerB,
    /// Full upper body
    Upper,
    /// Full lower body
    Lower,
    /// Chest, shoulders, triceps
    Push,
    /// Back, biceps
    Pull,
    /// Legs and core
    Legs,
}

impl SplitDay {
    /// Display title used on plan days
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FullBodyA => "Full Body A",
            Self::FullBodyB => "Full Body B",
            Self::FullBodyC => "Full Body C",
            Self::UpperA => "Upper A",
            Self::UpperB => "Upper B",
            Self::LowerA => "Lower A",
            Self::LowerB => "Lower B",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
        }
    }

    /// Target muscle groups in selection order
    #[must_use]
    pub const fn target_muscles(self) -> &'static [MuscleGroup] {
        match self {
            Self::FullBodyA => &[Chest, Back, Legs, Core],
            Self::FullBodyB => &[Shoulders, Back, Legs, Biceps, Triceps],
            Self::FullBodyC => &[Chest, Shoulders, Legs, Core],
            Self::UpperA => &[Chest, Back, Shoulders],
            Self::UpperB => &[Back, Biceps, Triceps, Shoulders],
            Self::LowerA | Self::LowerB | Self::Lower | Self::Legs => &[Legs, Core],
            Self::Upper => &[Chest, Back, Shoulders, Biceps, Triceps],
            Self::Push => &[Chest, Shoulders, Triceps],
            Self::Pull => &[Back, Biceps],
        }
    }
}
