// ABOUTME: Prompt templates for narrative plan enhancement loaded at compile time
// ABOUTME: Renders the initial-plan and adjusted-plan prompts from plan, profile, and log data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Enhancement Prompts
//!
//! Templates live beside this module as markdown files and use `{{name}}`
//! placeholders. Both ask the model for a JSON object with `principles` and
//! `notes` string arrays.

use fitai_core::models::{Goal, Level, LogsStatistics, Plan, Profile};

/// Prompt for enhancing a freshly generated plan
pub const ENHANCE_PLAN_TEMPLATE: &str = include_str!("enhance_plan.md");

/// Prompt for enhancing a plan adjusted from last week's logs
pub const ADJUST_PLAN_TEMPLATE: &str = include_str!("adjust_plan.md");

const fn goal_description(goal: Goal) -> &'static str {
    match goal {
        Goal::FatLoss => "giảm mỡ và duy trì cơ bắp",
        Goal::MuscleGain => "tăng cơ và sức mạnh",
        Goal::Maintenance => "duy trì thể lực hiện tại",
    }
}

const fn level_description(level: Level) -> &'static str {
    match level {
        Level::Beginner => "người mới bắt đầu",
        Level::Intermediate => "trung cấp",
        Level::Advanced => "nâng cao",
    }
}

// The adjustment prompt uses shorter descriptions
const fn short_goal_description(goal: Goal) -> &'static str {
    match goal {
        Goal::FatLoss => "giảm mỡ",
        Goal::MuscleGain => "tăng cơ",
        Goal::Maintenance => "duy trì thể lực",
    }
}

const fn short_level_description(level: Level) -> &'static str {
    match level {
        Level::Beginner => "người mới",
        Level::Intermediate => "trung cấp",
        Level::Advanced => "nâng cao",
    }
}

fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
        })
        .trim_end()
        .to_owned()
}

/// Render the prompt for a freshly generated plan
#[must_use]
pub fn enhance_plan_prompt(plan: &Plan, profile: &Profile) -> String {
    let days = plan.days.len().to_string();
    let titles = plan
        .days
        .iter()
        .map(|day| day.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    render(
        ENHANCE_PLAN_TEMPLATE,
        &[
            ("goal", goal_description(profile.goal)),
            ("level", level_description(profile.level)),
            ("days", days.as_str()),
            ("equipment", profile.equipment.as_str()),
            ("split_titles", titles.as_str()),
        ],
    )
}

/// Render the prompt for an adjusted plan
#[must_use]
pub fn adjust_plan_prompt(profile: &Profile, stats: &LogsStatistics) -> String {
    let completion_rate = stats.completion_rate.to_string();
    let average_fatigue = stats
        .average_fatigue
        .map_or_else(|| "N/A".to_owned(), |fatigue| format!("{fatigue:?}"));

    render(
        ADJUST_PLAN_TEMPLATE,
        &[
            ("completion_rate", completion_rate.as_str()),
            ("average_fatigue", average_fatigue.as_str()),
            ("goal", short_goal_description(profile.goal)),
            ("level", short_level_description(profile.level)),
        ],
    )
}
