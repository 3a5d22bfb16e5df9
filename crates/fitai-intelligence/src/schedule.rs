// ABOUTME: Day scheduler placing workout days on calendar dates within a plan week
// ABOUTME: Uses weekday availability when it covers the frequency, otherwise a fixed pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate, Weekday};
use fitai_core::models::Availability;

use crate::split::TrainingFrequency;

/// Weekdays in offset order: Monday is offset 0, Sunday is offset 6
const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Default day offsets spreading workouts across the week
#[must_use]
pub const fn default_offsets(frequency: TrainingFrequency) -> &'static [u64] {
    match frequency {
        // Mon, Wed, Fri
        TrainingFrequency::Three => &[0, 2, 4],
        // Mon, Tue, Thu, Fri
        TrainingFrequency::Four => &[0, 1, 3, 4],
        // Mon-Wed, Fri, Sat
        TrainingFrequency::Five => &[0, 1, 2, 4, 5],
        // Mon-Sat
        TrainingFrequency::Six => &[0, 1, 2, 3, 4, 5],
    }
}

/// Select day offsets for the week
///
/// Available weekdays are used, in weekday order, only if there are at least as
/// many as the requested `days_per_week` and the frequency's table needs.
/// Otherwise availability is ignored entirely and the default pattern applies.
#[must_use]
pub fn workout_offsets(days_per_week: u32, availability: Option<&Availability>) -> Vec<u64> {
    let frequency = TrainingFrequency::from_days(days_per_week);
    let needed = frequency.day_count();
    let required = usize::try_from(days_per_week).unwrap_or(usize::MAX).max(needed);

    if let Some(availability) = availability.filter(|a| !a.is_empty()) {
        let available: Vec<u64> = (0_u64..)
            .zip(WEEKDAY_ORDER)
            .filter(|(_, day)| availability.is_available(*day))
            .map(|(offset, _)| offset)
            .collect();

        if available.len() >= required {
            return available.into_iter().take(needed).collect();
        }
    }

    default_offsets(frequency).to_vec()
}

/// Calendar dates of the workout days, as `week_start` plus each offset
///
/// Offsets count from `week_start` itself, whatever weekday it falls on.
#[must_use]
pub fn workout_dates(
    week_start: NaiveDate,
    days_per_week: u32,
    availability: Option<&Availability>,
) -> Vec<NaiveDate> {
    workout_offsets(days_per_week, availability)
        .into_iter()
        .map(|offset| {
            week_start
                .checked_add_days(Days::new(offset))
                .unwrap_or(NaiveDate::MAX)
        })
        .collect()
}
