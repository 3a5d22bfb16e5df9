// ABOUTME: Workout log models and the aggregate statistics used for plan adjustment
// ABOUTME: Includes per-day log summaries, the previous plan record, and log statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a scheduled workout day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    /// Workout completed
    Done,
    /// Workout skipped
    Skipped,
    /// Not yet logged
    #[default]
    Pending,
}

/// Log entry for one day of a previous plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    /// Workout date
    pub date: NaiveDate,
    /// Split title of the day
    pub title: String,
    /// Completion status
    #[serde(default)]
    pub status: LogStatus,
    /// Self-reported fatigue (1-5)
    #[serde(default)]
    pub fatigue_rating: Option<u8>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// The previous week's plan as recorded in the workout log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousPlan {
    /// Start of the previous week
    pub week_start: NaiveDate,
    /// Principles shown with the previous plan
    #[serde(default)]
    pub principles: Option<Vec<String>>,
    /// Per-day log entries
    pub days: Vec<LogSummary>,
}

/// Aggregate completion and fatigue statistics for a logged week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsStatistics {
    /// Days marked done
    pub completed_days: u32,
    /// Days scheduled
    pub total_days: u32,
    /// Completed share of scheduled days, 0-100
    pub completion_rate: u32,
    /// Mean fatigue rating on the 1-5 scale, absent when nothing was rated
    #[serde(default)]
    pub average_fatigue: Option<f64>,
}

impl LogsStatistics {
    /// Aggregate statistics from per-day log entries
    #[must_use]
    pub fn from_logs(logs: &[LogSummary]) -> Self {
        let total_days = u32::try_from(logs.len()).unwrap_or(u32::MAX);
        let completed_days = u32::try_from(
            logs.iter()
                .filter(|log| log.status == LogStatus::Done)
                .count(),
        )
        .unwrap_or(u32::MAX);

        let completion_rate = if total_days == 0 {
            0
        } else {
            (f64::from(completed_days) * 100.0 / f64::from(total_days)).round() as u32
        };

        let ratings: Vec<f64> = logs
            .iter()
            .filter_map(|log| log.fatigue_rating.map(f64::from))
            .collect();
        let average_fatigue = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        Self {
            completed_days,
            total_days,
            completion_rate,
            average_fatigue,
        }
    }

    /// Fatigue signal, treating absent or non-positive values as "no signal"
    #[must_use]
    pub fn fatigue_signal(&self) -> Option<f64> {
        self.average_fatigue.filter(|fatigue| *fatigue > 0.0)
    }
}
