// ABOUTME: Shared test utilities and fixtures for plan service integration tests
// ABOUTME: Provides sample catalogs, request builders, and scripted LLM providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitai_planner`

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use fitai_planner::errors::AppError;
use fitai_planner::llm::{ChatRequest, ChatResponse, LlmProvider};
use fitai_planner::models::{
    Equipment, Exercise, Goal, Level, LogStatus, LogSummary, LogsStatistics, MuscleGroup,
    PreviousPlan, Profile,
};
use fitai_planner::services::{AdjustPlanRequest, GeneratePlanRequest};
use tokio::time::sleep;
use tracing::Level as LogLevel;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => LogLevel::TRACE,
            Ok("DEBUG") => LogLevel::DEBUG,
            Ok("INFO") => LogLevel::INFO,
            _ => LogLevel::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

const GROUPS: [MuscleGroup; 7] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Legs,
    MuscleGroup::Core,
];

/// Four exercises per muscle group across equipment and difficulty tiers
pub fn sample_catalog() -> Vec<Exercise> {
    let tiers = [
        (Equipment::None, Level::Beginner),
        (Equipment::Home, Level::Beginner),
        (Equipment::Gym, Level::Intermediate),
        (Equipment::Gym, Level::Advanced),
    ];

    GROUPS
        .iter()
        .flat_map(|group| {
            tiers
                .iter()
                .enumerate()
                .map(move |(i, (equipment, level))| {
                    Exercise::new(format!("{group} move {i}"), *group, *equipment, *level)
                        .with_description(format!("Keep the {group} braced"))
                })
        })
        .collect()
}

pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn sample_profile() -> Profile {
    Profile {
        goal: Goal::MuscleGain,
        level: Level::Intermediate,
        days_per_week: 4,
        session_minutes: 60,
        equipment: Equipment::Gym,
        ..Profile::default()
    }
}

pub fn generate_request() -> GeneratePlanRequest {
    GeneratePlanRequest {
        user_id: 42,
        week_start: week_start(),
        profile: sample_profile(),
        exercises: sample_catalog(),
    }
}

pub fn adjust_request() -> AdjustPlanRequest {
    let previous_week = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    let logs = vec![
        LogSummary {
            date: previous_week,
            title: "Upper A".to_owned(),
            status: LogStatus::Done,
            fatigue_rating: Some(5),
            notes: None,
        },
        LogSummary {
            date: NaiveDate::from_ymd_opt(2023, 12, 26).unwrap(),
            title: "Lower A".to_owned(),
            status: LogStatus::Skipped,
            fatigue_rating: None,
            notes: Some("Busy".to_owned()),
        },
    ];
    let stats = LogsStatistics::from_logs(&logs);

    AdjustPlanRequest {
        user_id: 42,
        week_start: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        profile: sample_profile(),
        exercises: sample_catalog(),
        previous_plan: PreviousPlan {
            week_start: previous_week,
            principles: None,
            days: logs,
        },
        logs_summary: stats,
    }
}

/// Provider scripted with a fixed reply and an optional delay
pub struct ScriptedProvider {
    reply: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_owned()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_owned()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Provider"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "scripted-model".to_owned()),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Err(message) => Err(AppError::external_service("scripted", message.clone())),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
