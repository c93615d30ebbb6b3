// ABOUTME: Intelligence module wiring for scoring, ranking, scheduling, challenges, and streaks
// ABOUTME: Hosts the seeded RNG helper that makes randomized policies reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! Cognitive Intelligence
//!
//! The algorithmic core of the engine. Every randomized operation (exercise
//! picks, challenge templates, completion scores) takes a caller-supplied
//! random-number source so behavior is reproducible under test; production
//! callers pass [`rand::thread_rng`] or a [`seeded_rng`] stream.

/// Tagged-union test-phase state machines for the four mini-games
pub mod assessment;

/// Daily challenge generation and store-backed tracking
pub mod challenges;

/// Engine constants (scoring bounds, focus table, reward formulas)
pub mod cognitive_constants;

/// Weekly training-plan scheduling and editing
pub mod planner;

/// Weakest-first domain ranking
pub mod ranking;

/// Domain score computation
pub mod scoring;

/// Calendar-day completion streak state machine
pub mod streaks;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a deterministic random-number stream from a seed.
///
/// Scheduling and challenge generation accept any [`rand::Rng`]; passing a
/// seeded stream makes a generated plan or challenge set reproducible.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
