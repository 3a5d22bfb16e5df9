// ABOUTME: Adjustment policy adapting a profile from last week's completion and fatigue
// ABOUTME: Produces the adjusted profile and the explanation notes prepended to the new plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::models::{LogsStatistics, Profile};

use crate::config::AdjustmentConfig;

/// Derive next week's profile from last week's statistics
///
/// Rules apply independently, in order, on a copy of `profile`:
/// 1. low completion with more than the minimum days drops one day
/// 2. high fatigue shortens sessions, floored at the configured minimum
/// 3. low fatigue with high completion lengthens sessions, capped at the configured maximum
///
/// The floor and cap are applied as written, so a session already outside them
/// is moved onto the bound.
#[must_use]
pub fn adjust_profile(
    profile: &Profile,
    stats: &LogsStatistics,
    config: &AdjustmentConfig,
) -> Profile {
    let mut adjusted = profile.clone();
    let fatigue = stats.fatigue_signal();

    if stats.completion_rate < config.low_completion_rate
        && adjusted.days_per_week > config.min_days_per_week
    {
        adjusted.days_per_week -= 1;
    }

    if fatigue.is_some_and(|f| f >= config.high_fatigue) {
        adjusted.session_minutes = adjusted
            .session_minutes
            .saturating_sub(config.session_minutes_step)
            .max(config.min_session_minutes);
    }

    if fatigue.is_some_and(|f| f <= config.low_fatigue)
        && stats.completion_rate >= config.high_completion_rate
    {
        adjusted.session_minutes = adjusted
            .session_minutes
            .saturating_add(config.session_minutes_step)
            .min(config.max_session_minutes);
    }

    adjusted
}

/// Explanation notes for an adjustment, in display order
///
/// At most one completion note and one fatigue note, then one note per changed
/// field. The low-completion note is emitted whether or not days were reduced.
#[must_use]
pub fn adjustment_notes(
    stats: &LogsStatistics,
    original: &Profile,
    adjusted: &Profile,
    config: &AdjustmentConfig,
) -> Vec<String> {
    let mut notes = Vec::new();
    let rate = stats.completion_rate;

    if rate < config.low_completion_rate {
        notes.push(format!(
            "Dựa trên tỷ lệ hoàn thành {rate}% tuần trước, chúng tôi đã giảm số ngày tập để dễ tuân thủ hơn"
        ));
    } else if rate >= config.high_completion_rate {
        notes.push(format!(
            "Tuyệt vời! Bạn đã hoàn thành {rate}% bài tập tuần trước!"
        ));
    }

    if let Some(fatigue) = stats.fatigue_signal() {
        if fatigue >= config.high_fatigue {
            notes.push(format!(
                "Mức độ mệt mỏi trung bình của bạn cao ({fatigue:?}/5). Các buổi tập tuần này sẽ ngắn hơn để phục hồi tốt hơn"
            ));
        } else if fatigue <= config.low_fatigue {
            notes.push(format!(
                "Mức độ mệt mỏi của bạn thấp ({fatigue:?}/5). Cân nhắc tăng cường độ tuần này"
            ));
        }
    }

    if adjusted.session_minutes != original.session_minutes {
        notes.push(format!(
            "Thời lượng buổi tập được điều chỉnh thành {} phút",
            adjusted.session_minutes
        ));
    }
    if adjusted.days_per_week != original.days_per_week {
        notes.push(format!(
            "Số ngày tập được điều chỉnh thành {} ngày/tuần",
            adjusted.days_per_week
        ));
    }

    notes
}
