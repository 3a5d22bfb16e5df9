// ABOUTME: Deterministic seed derivation from caller identity and plan week
// ABOUTME: Same user and week always yield the same seed; adjustment calls use a distinct stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Which generation call a seed is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    /// First plan for a week
    Initial,
    /// Plan regenerated from last week's logs
    Adjusted,
}

impl SeedKind {
    /// Label used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Adjusted => "adjusted",
        }
    }
}

/// Text hashed to produce a seed
#[must_use]
pub fn seed_text(user_id: i64, week_start: NaiveDate, kind: SeedKind) -> String {
    match kind {
        SeedKind::Initial => format!("{user_id}-{week_start}"),
        SeedKind::Adjusted => format!("{user_id}-{week_start}-adjusted"),
    }
}

/// Derive a 32-bit seed: the first four SHA-256 digest bytes, big-endian
#[must_use]
pub fn derive_seed(user_id: i64, week_start: NaiveDate, kind: SeedKind) -> u64 {
    let digest = Sha256::digest(seed_text(user_id, week_start, kind).as_bytes());
    let prefix = [digest[0], digest[1], digest[2], digest[3]];
    u64::from(u32::from_be_bytes(prefix))
}
