// ABOUTME: Exercise filter restricting a catalog by cumulative equipment and difficulty tiers
// ABOUTME: Pure, order-preserving, and free of randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitai_core::models::{Equipment, Exercise, Level};

/// Equipment tiers usable with a profile's equipment (`none` ⊆ `home` ⊆ `gym`)
#[must_use]
pub const fn allowed_equipment(equipment: Equipment) -> &'static [Equipment] {
    match equipment {
        Equipment::None => &[Equipment::None],
        Equipment::Home => &[Equipment::None, Equipment::Home],
        Equipment::Gym => &[Equipment::None, Equipment::Home, Equipment::Gym],
    }
}

/// Difficulty tiers suitable for a level (`beginner` ⊆ `intermediate` ⊆ `advanced`)
#[must_use]
pub const fn allowed_difficulty(level: Level) -> &'static [Level] {
    match level {
        Level::Beginner => &[Level::Beginner],
        Level::Intermediate => &[Level::Beginner, Level::Intermediate],
        Level::Advanced => &[Level::Beginner, Level::Intermediate, Level::Advanced],
    }
}

/// Keep only exercises the profile can perform, in catalog order
#[must_use]
pub fn filter_exercises(catalog: &[Exercise], equipment: Equipment, level: Level) -> Vec<&Exercise> {
    let equipment_tiers = allowed_equipment(equipment);
    let difficulty_tiers = allowed_difficulty(level);

    catalog
        .iter()
        .filter(|exercise| {
            equipment_tiers.contains(&exercise.equipment)
                && difficulty_tiers.contains(&exercise.difficulty)
        })
        .collect()
}
