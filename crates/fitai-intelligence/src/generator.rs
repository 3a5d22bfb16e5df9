// ABOUTME: Workout plan generator entry points for initial and adjusted weekly plans
// ABOUTME: Seeds a call-scoped ChaCha RNG so identical inputs always produce identical plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitai_core::models::{Exercise, LogsStatistics, Plan, PreviousPlan, Profile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::adjustment::{adjust_profile, adjustment_notes};
use crate::config::AdjustmentConfig;
use crate::day_composer::{compose_day, DayPrescription};
use crate::exercise_filter::filter_exercises;
use crate::guidance;
use crate::schedule::workout_dates;
use crate::split::TrainingFrequency;
use crate::templates::{GoalTemplate, LevelModifier};

/// Rule-based weekly plan generator
///
/// Holds only configuration; every call builds its own RNG from the seed, so a
/// single generator can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPlanGenerator {
    config: AdjustmentConfig,
}

impl WorkoutPlanGenerator {
    /// Create a generator using the default adjustment rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdjustmentConfig::default())
    }

    /// Create a generator with explicit adjustment configuration
    #[must_use]
    pub const fn with_config(config: AdjustmentConfig) -> Self {
        Self { config }
    }

    /// Adjustment configuration in use
    #[must_use]
    pub const fn config(&self) -> &AdjustmentConfig {
        &self.config
    }

    /// Generate a plan for the week starting at `week_start`
    #[must_use]
    pub fn generate_plan(
        &self,
        profile: &Profile,
        catalog: &[Exercise],
        week_start: NaiveDate,
        seed: u64,
    ) -> Plan {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let pool = filter_exercises(catalog, profile.equipment, profile.level);
        let frequency = TrainingFrequency::from_days(profile.days_per_week);
        let dates = workout_dates(
            week_start,
            profile.days_per_week,
            profile.availability.as_ref(),
        );
        let prescription = DayPrescription {
            template: GoalTemplate::for_goal(profile.goal),
            modifier: LevelModifier::for_level(profile.level),
            session_minutes: profile.session_minutes,
        };

        debug!(
            seed,
            goal = profile.goal.as_str(),
            level = profile.level.as_str(),
            equipment = profile.equipment.as_str(),
            catalog = catalog.len(),
            pool = pool.len(),
            ?frequency,
            "Generating workout plan"
        );

        let days = dates
            .into_iter()
            .zip(frequency.splits())
            .map(|(date, split)| compose_day(&mut rng, date, *split, &pool, &prescription))
            .collect();

        Plan {
            week_start,
            days,
            principles: guidance::principles(profile.goal, profile.level, profile.days_per_week),
            notes: guidance::notes(profile.goal, profile.equipment),
        }
    }

    /// Generate next week's plan adapted to last week's logs
    ///
    /// The profile is adjusted first, the plan is generated from the adjusted
    /// profile, and the adjustment notes are placed ahead of the base notes.
    /// `previous_plan` is recorded in logs only; selection does not depend on it.
    #[must_use]
    pub fn generate_adjusted_plan(
        &self,
        profile: &Profile,
        catalog: &[Exercise],
        week_start: NaiveDate,
        previous_plan: &PreviousPlan,
        stats: &LogsStatistics,
        seed: u64,
    ) -> Plan {
        let adjusted = adjust_profile(profile, stats, &self.config);

        info!(
            previous_week = %previous_plan.week_start,
            completion_rate = stats.completion_rate,
            average_fatigue = ?stats.average_fatigue,
            days_per_week = adjusted.days_per_week,
            session_minutes = adjusted.session_minutes,
            "Adjusting workout plan from previous week"
        );

        let mut plan = self.generate_plan(&adjusted, catalog, week_start, seed);

        let mut notes = adjustment_notes(stats, profile, &adjusted, &self.config);
        notes.append(&mut plan.notes);
        plan.notes = notes;

        plan
    }
}
