// ABOUTME: Exercise catalog entry and muscle-group enumeration
// ABOUTME: Exercises are supplied by callers; the generator only filters and selects them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::{Equipment, Level};

/// Muscle groups an exercise can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Quads, hamstrings, glutes, calves
    Legs,
    /// Abdominals and trunk
    Core,
}

impl MuscleGroup {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog exercise
///
/// `name` is the unique key within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise name
    pub name: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Minimum equipment tier required
    pub equipment: Equipment,
    /// Difficulty tier
    pub difficulty: Level,
    /// Coaching description, copied onto sessions as notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Exercise {
    /// Create an exercise without a description
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        equipment: Equipment,
        difficulty: Level,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group,
            equipment,
            difficulty,
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
