// ABOUTME: Static per-domain exercise catalog for plan scheduling and challenge pools
// ABOUTME: Three games per cognitive domain with difficulty, duration, and description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! The reference exercise catalog.
//!
//! Three games per domain. Accessors build fresh vectors so callers own
//! their copies; catalog entries are value objects, not shared state.

use crate::models::{CognitiveDomain, Difficulty, GameInfo};

fn game(
    id: &str,
    name: &str,
    difficulty: Difficulty,
    duration_minutes: u32,
    description: &str,
) -> GameInfo {
    GameInfo {
        id: id.to_owned(),
        name: name.to_owned(),
        difficulty,
        duration_minutes,
        description: description.to_owned(),
    }
}

/// Catalog games for a single cognitive domain
#[must_use]
pub fn games_for_domain(domain: CognitiveDomain) -> Vec<GameInfo> {
    match domain {
        CognitiveDomain::Memory => vec![
            game(
                "game-1",
                "Memory Match",
                Difficulty::Easy,
                10,
                "Match pairs of cards to test your visual memory.",
            ),
            game(
                "game-2",
                "Sequence Memory",
                Difficulty::Medium,
                15,
                "Remember and repeat increasingly complex patterns.",
            ),
            game(
                "game-3",
                "Word Recall",
                Difficulty::Hard,
                20,
                "Memorize and recall lists of words under time pressure.",
            ),
        ],
        CognitiveDomain::Attention => vec![
            game(
                "game-4",
                "Focus Filter",
                Difficulty::Medium,
                12,
                "Filter out distractions and focus on specific targets.",
            ),
            game(
                "game-5",
                "Divided Attention",
                Difficulty::Hard,
                18,
                "Track multiple objects simultaneously.",
            ),
            game(
                "game-6",
                "Attention Span",
                Difficulty::Easy,
                8,
                "Maintain focus on a single task for increasing durations.",
            ),
        ],
        CognitiveDomain::ProcessingSpeed => vec![
            game(
                "game-7",
                "Quick React",
                Difficulty::Easy,
                5,
                "React as quickly as possible to visual and audio cues.",
            ),
            game(
                "game-8",
                "Speed Sort",
                Difficulty::Medium,
                10,
                "Sort items into categories at increasing speeds.",
            ),
            game(
                "game-9",
                "Pattern Speed",
                Difficulty::Hard,
                15,
                "Identify patterns as quickly as possible.",
            ),
        ],
        CognitiveDomain::Reasoning => vec![
            game(
                "game-10",
                "Logic Puzzles",
                Difficulty::Medium,
                20,
                "Solve logic-based puzzles of increasing complexity.",
            ),
            game(
                "game-11",
                "Pattern Completion",
                Difficulty::Hard,
                25,
                "Complete complex visual and numerical patterns.",
            ),
            game(
                "game-12",
                "Decision Making",
                Difficulty::Easy,
                15,
                "Make quick decisions based on multiple factors.",
            ),
        ],
    }
}

/// The full domain-agnostic game pool, in domain declaration order
#[must_use]
pub fn all_games() -> Vec<GameInfo> {
    CognitiveDomain::ALL
        .into_iter()
        .flat_map(games_for_domain)
        .collect()
}
