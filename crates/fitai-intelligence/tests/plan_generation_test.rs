// ABOUTME: Integration tests for weekly plan generation and adjustment
// ABOUTME: Covers determinism, scheduling, selection invariants, and the adjustment policy end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;
use std::env;

use chrono::{NaiveDate, Weekday};
use fitai_core::models::{
    Availability, Equipment, Exercise, Goal, Level, LogsStatistics, MuscleGroup, Plan,
    PreviousPlan, Profile,
};
use fitai_intelligence::{AdjustmentConfig, WorkoutPlanGenerator};
use serde_json::json;
use serial_test::serial;

const GROUPS: [MuscleGroup; 7] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Legs,
    MuscleGroup::Core,
];

/// Six exercises per muscle group spread across every equipment and difficulty tier
fn catalog() -> Vec<Exercise> {
    let tiers = [
        (Equipment::None, Level::Beginner),
        (Equipment::None, Level::Intermediate),
        (Equipment::Home, Level::Beginner),
        (Equipment::Home, Level::Advanced),
        (Equipment::Gym, Level::Intermediate),
        (Equipment::None, Level::Beginner),
    ];

    GROUPS
        .iter()
        .flat_map(|group| {
            tiers
                .iter()
                .enumerate()
                .map(move |(i, (equipment, level))| {
                    Exercise::new(format!("{group} drill {i}"), *group, *equipment, *level)
                        .with_description(format!("Controlled {group} movement"))
                })
        })
        .collect()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn generator() -> WorkoutPlanGenerator {
    WorkoutPlanGenerator::with_config(AdjustmentConfig::default())
}

fn profile(goal: Goal, level: Level, days_per_week: u32, session_minutes: u32) -> Profile {
    Profile {
        goal,
        level,
        days_per_week,
        session_minutes,
        equipment: Equipment::Gym,
        ..Profile::default()
    }
}

fn assert_day_invariants(plan: &Plan, session_minutes: u32) {
    for day in &plan.days {
        let names: HashSet<&str> = day.sessions.iter().map(|s| s.exercise.as_str()).collect();
        assert_eq!(names.len(), day.sessions.len(), "repeat on {}", day.date);
        assert_eq!(day.estimated_minutes, 6 * day.sessions.len() as u32);
        assert!(day.sessions.len() as u32 <= session_minutes / 6);
        for session in &day.sessions {
            assert!((2..=5).contains(&session.sets));
        }
    }
}

#[test]
fn test_end_to_end_beginner_fat_loss_week() {
    let profile = Profile {
        goal: Goal::FatLoss,
        level: Level::Beginner,
        days_per_week: 3,
        session_minutes: 45,
        equipment: Equipment::None,
        ..Profile::default()
    };
    let catalog = catalog();

    let plan = generator().generate_plan(&profile, &catalog, monday(), 42);

    let dates: Vec<String> = plan.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-03", "2024-01-05"]);
    let titles: Vec<&str> = plan.days.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Full Body A", "Full Body B", "Full Body C"]);

    for day in &plan.days {
        assert!(day.estimated_minutes <= 45);
        for session in &day.sessions {
            let exercise = catalog.iter().find(|e| e.name == session.exercise).unwrap();
            assert_eq!(exercise.equipment, Equipment::None);
            assert_eq!(exercise.difficulty, Level::Beginner);
            assert_eq!(session.rest_sec, 45);
            assert_eq!(session.notes, exercise.description);
        }
    }

    // one exercise per target muscle for a beginner
    let counts: Vec<usize> = plan.days.iter().map(|d| d.sessions.len()).collect();
    assert_eq!(counts, [4, 5, 4]);
    assert_day_invariants(&plan, 45);

    assert_eq!(plan.week_start, monday());
    assert_eq!(plan.principles.len(), 4);
    assert_eq!(plan.notes.len(), 5);
}

#[test]
fn test_generation_is_deterministic() {
    let profile = profile(Goal::MuscleGain, Level::Advanced, 5, 60);
    let catalog = catalog();
    let generator = generator();

    let first = generator.generate_plan(&profile, &catalog, monday(), 1234);
    let second = generator.generate_plan(&profile, &catalog, monday(), 1234);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_seed_changes_selection() {
    let profile = profile(Goal::MuscleGain, Level::Intermediate, 4, 60);
    let catalog = catalog();
    let generator = generator();

    let baseline = generator.generate_plan(&profile, &catalog, monday(), 42);
    let diverged = (0..10)
        .map(|seed| generator.generate_plan(&profile, &catalog, monday(), seed))
        .any(|plan| plan.days != baseline.days);

    assert!(diverged);
}

#[test]
fn test_day_count_follows_frequency() {
    let catalog = catalog();
    let generator = generator();

    for days in 3..=6 {
        let plan = generator.generate_plan(
            &profile(Goal::Maintenance, Level::Intermediate, days, 45),
            &catalog,
            monday(),
            7,
        );
        assert_eq!(plan.days.len(), days as usize);
        assert_day_invariants(&plan, 45);
    }

    for days in [1, 2, 7] {
        let plan = generator.generate_plan(
            &profile(Goal::Maintenance, Level::Intermediate, days, 45),
            &catalog,
            monday(),
            7,
        );
        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.days[0].title, "Full Body A");
    }
}

#[test]
fn test_time_budget_caps_sessions() {
    let catalog = catalog();
    let plan = generator().generate_plan(
        &profile(Goal::MuscleGain, Level::Advanced, 3, 20),
        &catalog,
        monday(),
        99,
    );

    for day in &plan.days {
        assert_eq!(day.sessions.len(), 3);
        assert_eq!(day.estimated_minutes, 18);
    }
}

#[test]
fn test_sets_stay_clamped_for_all_levels() {
    let catalog = catalog();
    let generator = generator();

    for goal in [Goal::FatLoss, Goal::MuscleGain, Goal::Maintenance] {
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            for seed in [0, 1, 2] {
                let plan =
                    generator.generate_plan(&profile(goal, level, 6, 90), &catalog, monday(), seed);
                assert_day_invariants(&plan, 90);
            }
        }
    }
}

#[test]
fn test_insufficient_availability_uses_default_pattern() {
    let availability: Availability = [(Weekday::Tue, true), (Weekday::Thu, true)]
        .into_iter()
        .collect();
    let profile = Profile {
        availability: Some(availability),
        ..profile(Goal::Maintenance, Level::Beginner, 3, 45)
    };

    let plan = generator().generate_plan(&profile, &catalog(), monday(), 5);

    let dates: Vec<String> = plan.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-03", "2024-01-05"]);
}

#[test]
fn test_sufficient_availability_schedules_available_days() {
    let availability: Availability = [
        (Weekday::Tue, true),
        (Weekday::Wed, false),
        (Weekday::Thu, true),
        (Weekday::Sat, true),
    ]
    .into_iter()
    .collect();
    let profile = Profile {
        availability: Some(availability),
        ..profile(Goal::Maintenance, Level::Beginner, 3, 45)
    };

    let plan = generator().generate_plan(&profile, &catalog(), monday(), 5);

    let dates: Vec<String> = plan.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-04", "2024-01-06"]);
}

#[test]
fn test_availability_below_requested_days_uses_default_pattern() {
    let availability: Availability = [
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
    .into_iter()
    .map(|day| (day, true))
    .collect();
    let profile = Profile {
        availability: Some(availability),
        ..profile(Goal::Maintenance, Level::Beginner, 7, 45)
    };

    let plan = generator().generate_plan(&profile, &catalog(), monday(), 5);

    let dates: Vec<String> = plan.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-03", "2024-01-05"]);
}

#[test]
#[serial]
fn test_default_generator_ignores_process_environment() {
    env::set_var("FITAI_ADJUST_LOW_COMPLETION_RATE", "20");

    let generator = WorkoutPlanGenerator::new();
    let profile = profile(Goal::Maintenance, Level::Intermediate, 5, 45);
    let stats = LogsStatistics {
        completed_days: 3,
        total_days: 10,
        completion_rate: 30,
        average_fatigue: None,
    };
    let previous = PreviousPlan {
        week_start: NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
        principles: None,
        days: Vec::new(),
    };
    let plan =
        generator.generate_adjusted_plan(&profile, &catalog(), monday(), &previous, &stats, 9);

    env::remove_var("FITAI_ADJUST_LOW_COMPLETION_RATE");

    assert_eq!(generator.config(), &AdjustmentConfig::default());
    assert_eq!(plan.days.len(), 4);
}

#[test]
fn test_adjusted_plan_reduces_days_and_prepends_notes() {
    let profile = profile(Goal::FatLoss, Level::Intermediate, 5, 45);
    let catalog = catalog();
    let previous: PreviousPlan = serde_json::from_value(json!({
        "week_start": "2023-12-25",
        "days": [
            { "date": "2023-12-25", "title": "Push", "status": "done", "fatigue_rating": 5 },
            { "date": "2023-12-26", "title": "Pull", "status": "skipped" },
            { "date": "2023-12-27", "title": "Legs", "status": "skipped" },
            { "date": "2023-12-29", "title": "Upper", "status": "done", "fatigue_rating": 4 },
            { "date": "2023-12-30", "title": "Lower", "status": "skipped" }
        ]
    }))
    .unwrap();
    let stats = LogsStatistics::from_logs(&previous.days);
    assert_eq!(stats.completion_rate, 40);

    let plan = generator().generate_adjusted_plan(
        &profile,
        &catalog,
        monday(),
        &previous,
        &stats,
        42,
    );

    assert_eq!(plan.days.len(), 4);
    assert_eq!(plan.days[0].title, "Upper A");
    assert_day_invariants(&plan, 35);

    assert!(plan.notes[0].contains("40%"));
    assert!(plan.notes[1].contains("(4.5/5)"));
    assert!(plan.notes[2].contains("35 phút"));
    assert!(plan.notes[3].contains("4 ngày/tuần"));
    assert_eq!(plan.notes[4], "Khởi động 5-10 phút trước mỗi buổi tập");
}

#[test]
fn test_adjusted_plan_with_unchanged_profile_matches_initial_days() {
    let profile = profile(Goal::Maintenance, Level::Intermediate, 3, 45);
    let catalog = catalog();
    let stats = LogsStatistics {
        completed_days: 2,
        total_days: 3,
        completion_rate: 67,
        average_fatigue: Some(3.0),
    };
    let previous = PreviousPlan {
        week_start: NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
        principles: None,
        days: Vec::new(),
    };
    let generator = generator();

    let initial = generator.generate_plan(&profile, &catalog, monday(), 77);
    let adjusted =
        generator.generate_adjusted_plan(&profile, &catalog, monday(), &previous, &stats, 77);

    assert_eq!(adjusted.days, initial.days);
    assert_eq!(adjusted.notes, initial.notes);
}

#[test]
fn test_catalog_from_json_rejects_unknown_muscle_group() {
    let valid: Result<Vec<Exercise>, _> = serde_json::from_value(json!([
        { "name": "Push-up", "muscle_group": "chest", "equipment": "none", "difficulty": "beginner" }
    ]));
    assert_eq!(valid.unwrap()[0].muscle_group, MuscleGroup::Chest);

    let invalid: Result<Vec<Exercise>, _> = serde_json::from_value(json!([
        { "name": "Calf Raise", "muscle_group": "calves", "equipment": "none", "difficulty": "beginner" }
    ]));
    assert!(invalid.is_err());
}
