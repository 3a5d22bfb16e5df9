// ABOUTME: Day composer selecting and prescribing exercises for one split day
// ABOUTME: Consumes the call-scoped RNG in muscle order: shuffle candidates, then draw sets and reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::NaiveDate;
use fitai_core::constants::session::{MAX_SETS, MIN_SETS, MINUTES_PER_EXERCISE};
use fitai_core::models::{Exercise, PlanDay, SessionItem};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::split::SplitDay;
use crate::templates::{GoalTemplate, LevelModifier};

/// Inputs shared by every day of one plan
#[derive(Debug, Clone, Copy)]
pub struct DayPrescription<'a> {
    /// Goal template for sets, reps, and rest
    pub template: &'a GoalTemplate,
    /// Level adjustments applied on top of the template
    pub modifier: LevelModifier,
    /// Session length cap in minutes
    pub session_minutes: u32,
}

impl DayPrescription<'_> {
    /// Most sessions that fit in the time budget
    #[must_use]
    pub fn max_sessions(&self) -> usize {
        usize::try_from(self.session_minutes / MINUTES_PER_EXERCISE).unwrap_or(usize::MAX)
    }

    fn draw_sets<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let base = rng.gen_range(self.template.sets_min..=self.template.sets_max);
        let adjusted = i64::from(base) + i64::from(self.modifier.sets_mod);
        adjusted.clamp(i64::from(MIN_SETS), i64::from(MAX_SETS)) as u32
    }

    fn draw_reps<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.template
            .reps_options
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_owned()
    }
}

/// Compose one workout day from the filtered exercise pool
///
/// Candidates for each target muscle exclude names already used on this day,
/// so a day never repeats an exercise. A thin pool yields fewer sessions. The
/// session list is cut to the time budget after all draws are made, keeping the
/// RNG stream independent of `session_minutes`.
pub fn compose_day<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    split: SplitDay,
    pool: &[&Exercise],
    prescription: &DayPrescription<'_>,
) -> PlanDay {
    let per_group = prescription.modifier.exercises_per_group(prescription.template);
    let mut used: HashSet<&str> = HashSet::new();
    let mut sessions = Vec::new();

    for muscle in split.target_muscles() {
        let mut candidates: Vec<&Exercise> = pool
            .iter()
            .copied()
            .filter(|exercise| exercise.muscle_group == *muscle)
            .filter(|exercise| !used.contains(exercise.name.as_str()))
            .collect();

        candidates.shuffle(rng);

        for exercise in candidates.into_iter().take(per_group) {
            used.insert(exercise.name.as_str());
            sessions.push(SessionItem {
                exercise: exercise.name.clone(),
                sets: prescription.draw_sets(rng),
                reps: prescription.draw_reps(rng),
                rest_sec: prescription.template.rest_sec,
                notes: exercise.description.clone(),
            });
        }
    }

    let drawn = sessions.len();
    sessions.truncate(prescription.max_sessions());

    debug!(
        split = split.title(),
        %date,
        drawn,
        kept = sessions.len(),
        "Composed workout day"
    );

    PlanDay::new(date, split.title(), sessions)
}
