// ABOUTME: Adjustment policy configuration: completion and fatigue thresholds, minute steps and bounds
// ABOUTME: Defaults reproduce the fixed rule table; callers may inject validated alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adjustment policy configuration
//!
//! The process environment is never consulted: plan output depends only on the
//! request and the seed. Alternative thresholds are passed explicitly to
//! `WorkoutPlanGenerator::with_config`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Thresholds and step sizes used to adapt a profile from last week's logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Completion rate below which training days are reduced
    pub low_completion_rate: u32,
    /// Completion rate at or above which the week is praised and intensity may rise
    pub high_completion_rate: u32,
    /// Average fatigue at or above which sessions get shorter
    pub high_fatigue: f64,
    /// Average fatigue at or below which sessions may get longer
    pub low_fatigue: f64,
    /// Minutes added or removed per adjustment
    pub session_minutes_step: u32,
    /// Shortest session a fatigue reduction produces
    pub min_session_minutes: u32,
    /// Longest session an intensity increase produces
    pub max_session_minutes: u32,
    /// Days per week never reduced below this value
    pub min_days_per_week: u32,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            low_completion_rate: 50,
            high_completion_rate: 80,
            high_fatigue: 4.0,
            low_fatigue: 2.0,
            session_minutes_step: 10,
            min_session_minutes: 20,
            max_session_minutes: 90,
            min_days_per_week: 3,
        }
    }
}

impl AdjustmentConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are inverted or outside their scales
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high_completion_rate > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "high_completion_rate must be <= 100",
            ));
        }
        if self.low_completion_rate > self.high_completion_rate {
            return Err(ConfigError::InvalidRange(
                "low_completion_rate must not exceed high_completion_rate",
            ));
        }

        let fatigue_scale = 1.0..=5.0;
        if !fatigue_scale.contains(&self.low_fatigue) || !fatigue_scale.contains(&self.high_fatigue)
        {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue thresholds must be within 1-5",
            ));
        }
        if self.low_fatigue >= self.high_fatigue {
            return Err(ConfigError::InvalidRange(
                "low_fatigue must be below high_fatigue",
            ));
        }

        if self.session_minutes_step == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "session_minutes_step must be > 0",
            ));
        }
        if self.min_session_minutes >= self.max_session_minutes {
            return Err(ConfigError::InvalidRange(
                "min_session_minutes must be below max_session_minutes",
            ));
        }

        if !(1..=7).contains(&self.min_days_per_week) {
            return Err(ConfigError::ValueOutOfRange(
                "min_days_per_week must be within 1-7",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AdjustmentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_fatigue_rejected() {
        let config = AdjustmentConfig {
            low_fatigue: 4.0,
            high_fatigue: 3.0,
            ..AdjustmentConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
