// ABOUTME: Training profile model with goal, level, equipment, and weekly availability
// ABOUTME: Unknown enumeration values fall back to documented defaults instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::profile_defaults;

/// Lenient string parsing used for profile enumerations
///
/// Profile fields never reject unknown values; each type names its own fallback.
pub trait LenientParse: Sized {
    /// Parse a wire value, substituting the type's fallback for unknown input
    fn parse_lenient(value: &str) -> Self;
}

/// Deserialize any [`LenientParse`] type from a string without failing on unknown values
///
/// # Errors
///
/// Returns an error only when the input is not a string at all.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: LenientParse,
{
    let raw = String::deserialize(deserializer)?;
    Ok(T::parse_lenient(&raw))
}

/// Training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Reduce body fat while keeping muscle
    FatLoss,
    /// Build muscle and strength
    MuscleGain,
    /// Keep current fitness
    #[default]
    Maintenance,
}

impl Goal {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
        }
    }
}

impl LenientParse for Goal {
    fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "fat_loss" => Self::FatLoss,
            "muscle_gain" => Self::MuscleGain,
            // Default to Maintenance for unrecognized values
            _ => Self::Maintenance,
        }
    }
}

/// Training experience tier, also used as exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// New to resistance training
    Beginner,
    /// Some consistent training history
    Intermediate,
    /// Long, consistent training history
    Advanced,
}

impl Level {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl LenientParse for Level {
    fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "advanced" => Self::Advanced,
            // Default to Intermediate for unrecognized values
            _ => Self::Intermediate,
        }
    }
}

/// Equipment tier, cumulative: `none` ⊆ `home` ⊆ `gym`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Bodyweight only
    #[default]
    None,
    /// Dumbbells, bands, and similar home gear
    Home,
    /// Full commercial gym
    Gym,
}

impl Equipment {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Home => "home",
            Self::Gym => "gym",
        }
    }
}

impl LenientParse for Equipment {
    fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "home" => Self::Home,
            "gym" => Self::Gym,
            // Default to bodyweight for unrecognized values
            _ => Self::None,
        }
    }
}

/// Availability flag for a single weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayAvailability {
    /// Whether the user can train on this weekday
    #[serde(default)]
    pub available: bool,
}

/// Weekday availability map keyed by lowercase weekday name (`monday` .. `sunday`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Availability(pub BTreeMap<String, DayAvailability>);

impl Availability {
    /// Lowercase key used for a weekday in the availability map
    #[must_use]
    pub const fn weekday_key(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    /// Whether the weekday is flagged available; unlisted days are unavailable
    #[must_use]
    pub fn is_available(&self, day: Weekday) -> bool {
        self.0
            .get(Self::weekday_key(day))
            .is_some_and(|entry| entry.available)
    }

    /// Set the availability flag for a weekday
    pub fn set(&mut self, day: Weekday, available: bool) {
        self.0
            .insert(Self::weekday_key(day).to_owned(), DayAvailability { available });
    }

    /// True when no weekday is listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Weekday, bool)> for Availability {
    fn from_iter<I: IntoIterator<Item = (Weekday, bool)>>(iter: I) -> Self {
        let mut availability = Self::default();
        for (day, available) in iter {
            availability.set(day, available);
        }
        availability
    }
}

const fn default_days_per_week() -> u32 {
    profile_defaults::DAYS_PER_WEEK
}

const fn default_session_minutes() -> u32 {
    profile_defaults::SESSION_MINUTES
}

const fn default_level() -> Level {
    Level::Beginner
}

/// User training profile, the generator's primary input
///
/// Profiles are treated as immutable values: the adjustment policy derives a new
/// profile instead of mutating the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Training goal
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub goal: Goal,
    /// Experience tier
    #[serde(default = "default_level", deserialize_with = "deserialize_lenient")]
    pub level: Level,
    /// Requested workout days per week (3-6 are defined; others use the 3-day table)
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    /// Time budget per session in minutes
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    /// Equipment tier
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub equipment: Equipment,
    /// Free-text constraints (injuries, preferences); not used by the rule table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    /// Optional weekday availability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            level: default_level(),
            days_per_week: default_days_per_week(),
            session_minutes: default_session_minutes(),
            equipment: Equipment::default(),
            constraints: None,
            availability: None,
        }
    }
}
