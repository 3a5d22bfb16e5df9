// ABOUTME: Plan service validating requests, deriving seeds, generating plans, and enhancing narrative
// ABOUTME: Shared by the HTTP routes and the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use fitai_core::constants::validation::{
    MAX_COMPLETION_RATE, MAX_DAYS_PER_WEEK, MAX_FATIGUE, MAX_SESSION_MINUTES, MIN_DAYS_PER_WEEK,
    MIN_FATIGUE, MIN_SESSION_MINUTES,
};
use fitai_core::models::{Exercise, LogsStatistics, Plan, PreviousPlan, Profile};
use fitai_intelligence::WorkoutPlanGenerator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::enhancement::PlanEnhancer;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::seed::{derive_seed, SeedKind};

/// Request body for an initial weekly plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Caller identity, part of the seed
    pub user_id: i64,
    /// First day of the plan week
    pub week_start: NaiveDate,
    /// Trainee profile
    pub profile: Profile,
    /// Exercise catalog to draw from
    pub exercises: Vec<Exercise>,
}

impl GeneratePlanRequest {
    /// Check caller-level limits before generation
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for profile values outside the accepted limits
    /// and `InvalidInput` for an empty or duplicated exercise name.
    pub fn validate(&self) -> AppResult<()> {
        validate_profile(&self.profile)?;
        validate_catalog(&self.exercises)
    }
}

/// Request body for a plan adjusted from last week's logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustPlanRequest {
    /// Caller identity, part of the seed
    pub user_id: i64,
    /// First day of the new plan week
    pub week_start: NaiveDate,
    /// Trainee profile before adjustment
    pub profile: Profile,
    /// Exercise catalog to draw from
    pub exercises: Vec<Exercise>,
    /// Last week's plan and day logs
    pub previous_plan: PreviousPlan,
    /// Aggregated statistics over last week's logs
    pub logs_summary: LogsStatistics,
}

impl AdjustPlanRequest {
    /// Check caller-level limits before generation
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for profile or statistics values outside the
    /// accepted limits and `InvalidInput` for inconsistent statistics or a bad
    /// catalog.
    pub fn validate(&self) -> AppResult<()> {
        validate_profile(&self.profile)?;
        validate_catalog(&self.exercises)?;
        validate_statistics(&self.logs_summary)
    }
}

fn validate_profile(profile: &Profile) -> AppResult<()> {
    if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&profile.days_per_week) {
        return Err(AppError::out_of_range(format!(
            "days_per_week must be between {MIN_DAYS_PER_WEEK} and {MAX_DAYS_PER_WEEK}, got {}",
            profile.days_per_week
        )));
    }
    if !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&profile.session_minutes) {
        return Err(AppError::out_of_range(format!(
            "session_minutes must be between {MIN_SESSION_MINUTES} and {MAX_SESSION_MINUTES}, got {}",
            profile.session_minutes
        )));
    }
    Ok(())
}

fn validate_catalog(exercises: &[Exercise]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(exercises.len());
    for exercise in exercises {
        if exercise.name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }
        if !seen.insert(exercise.name.as_str()) {
            return Err(AppError::invalid_input(format!(
                "Duplicate exercise name: {}",
                exercise.name
            )));
        }
    }
    Ok(())
}

fn validate_statistics(stats: &LogsStatistics) -> AppResult<()> {
    if stats.completion_rate > MAX_COMPLETION_RATE {
        return Err(AppError::out_of_range(format!(
            "completion_rate must be at most {MAX_COMPLETION_RATE}, got {}",
            stats.completion_rate
        )));
    }
    // an average of 0 means no ratings were given and carries no fatigue signal
    if let Some(fatigue) = stats.average_fatigue {
        let unrated = fatigue.abs() < f64::EPSILON;
        if !unrated && !(MIN_FATIGUE..=MAX_FATIGUE).contains(&fatigue) {
            return Err(AppError::out_of_range(format!(
                "average_fatigue must be between {MIN_FATIGUE} and {MAX_FATIGUE}, got {fatigue}"
            )));
        }
    }
    if stats.completed_days > stats.total_days {
        return Err(AppError::invalid_input(format!(
            "completed_days ({}) exceeds total_days ({})",
            stats.completed_days, stats.total_days
        )));
    }
    Ok(())
}

/// Validates, generates and optionally enhances weekly plans
#[derive(Clone, Default)]
pub struct PlanService {
    generator: WorkoutPlanGenerator,
    enhancer: Option<Arc<dyn PlanEnhancer>>,
}

impl PlanService {
    /// Create a rule-only service
    #[must_use]
    pub const fn new(generator: WorkoutPlanGenerator) -> Self {
        Self {
            generator,
            enhancer: None,
        }
    }

    /// Attach a narrative enhancer
    #[must_use]
    pub fn with_enhancer(mut self, enhancer: Arc<dyn PlanEnhancer>) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    /// Whether narrative enhancement is configured
    #[must_use]
    pub fn enhancement_available(&self) -> bool {
        self.enhancer.is_some()
    }

    /// Generate the initial plan for a week
    ///
    /// # Errors
    ///
    /// Returns a validation error when the request is outside accepted limits.
    /// Enhancement failures never surface as errors.
    pub async fn generate(&self, request: &GeneratePlanRequest) -> AppResult<Plan> {
        request.validate()?;
        let started = Instant::now();

        let seed = derive_seed(request.user_id, request.week_start, SeedKind::Initial);
        debug!(user_id = request.user_id, seed, "Derived plan seed");

        let mut plan = self.generator.generate_plan(
            &request.profile,
            &request.exercises,
            request.week_start,
            seed,
        );

        let enhancement = match &self.enhancer {
            Some(enhancer) => enhancer.enhance_plan(&plan, &request.profile).await,
            None => None,
        };
        let enhanced = enhancement.is_some();
        if let Some(enhancement) = enhancement {
            enhancement.apply(&mut plan);
        }

        Self::log_outcome(
            request.user_id,
            request.week_start,
            SeedKind::Initial,
            &plan,
            enhanced,
            started,
        );
        Ok(plan)
    }

    /// Generate next week's plan adapted to the previous week's logs
    ///
    /// # Errors
    ///
    /// Returns a validation error when the request is outside accepted limits.
    /// Enhancement failures never surface as errors.
    pub async fn adjust(&self, request: &AdjustPlanRequest) -> AppResult<Plan> {
        request.validate()?;
        let started = Instant::now();

        let seed = derive_seed(request.user_id, request.week_start, SeedKind::Adjusted);
        debug!(user_id = request.user_id, seed, "Derived adjusted plan seed");

        let mut plan = self.generator.generate_adjusted_plan(
            &request.profile,
            &request.exercises,
            request.week_start,
            &request.previous_plan,
            &request.logs_summary,
            seed,
        );

        let enhancement = match &self.enhancer {
            Some(enhancer) => {
                enhancer
                    .enhance_adjusted_plan(&plan, &request.profile, &request.logs_summary)
                    .await
            }
            None => None,
        };
        let enhanced = enhancement.is_some();
        if let Some(enhancement) = enhancement {
            enhancement.apply(&mut plan);
        }

        Self::log_outcome(
            request.user_id,
            request.week_start,
            SeedKind::Adjusted,
            &plan,
            enhanced,
            started,
        );
        Ok(plan)
    }

    fn log_outcome(
        user_id: i64,
        week_start: NaiveDate,
        kind: SeedKind,
        plan: &Plan,
        enhanced: bool,
        started: Instant,
    ) {
        AppLogger::log_plan_generated(
            user_id,
            &week_start.to_string(),
            kind.as_str(),
            plan.days.len(),
            enhanced,
            started.elapsed().as_millis() as u64,
        );
    }
}
