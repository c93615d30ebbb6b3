// ABOUTME: Engine constants for scoring, scheduling, challenges, and assessment stimuli
// ABOUTME: Single source of truth for the focus-distribution table and reward formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! Numeric policy constants used throughout the intelligence modules.
//!
//! These values define the engine's scoring and scheduling behavior and are
//! shared with the assessment content pipeline; change them only alongside a
//! migration of previously persisted plans and challenge sets.

/// Score normalization bounds and time budgets
pub mod scoring {
    /// Lower bound of a normalized domain score
    pub const SCORE_MIN: i32 = 0;

    /// Upper bound of a normalized domain score
    pub const SCORE_MAX: i32 = 100;

    /// Time budget for the timed ascending sort, in seconds. Exceeding it
    /// zeroes the time component; completion still contributes.
    pub const SORT_TIME_BUDGET_SECS: f64 = 60.0;

    /// Weight of the completion component in the processing-speed score
    pub const SORT_COMPLETION_WEIGHT: f64 = 0.5;

    /// Weight of the time component in the processing-speed score
    pub const SORT_TIME_WEIGHT: f64 = 0.5;
}

/// Fixed baseline scores used when no assessment has been run
pub mod baselines {
    /// Baseline memory score
    pub const BASELINE_MEMORY: i32 = 70;

    /// Baseline attention score
    pub const BASELINE_ATTENTION: i32 = 65;

    /// Baseline processing-speed score
    pub const BASELINE_PROCESSING_SPEED: i32 = 75;

    /// Baseline reasoning score
    pub const BASELINE_REASONING: i32 = 60;
}

/// Weekly plan scheduling policy
pub mod scheduling {
    /// Days in a generated training plan
    pub const PLAN_LENGTH_DAYS: usize = 7;

    /// Maximum exercises admitted per plan day
    pub const MAX_EXERCISES_PER_DAY: usize = 3;

    /// Focus-distribution table: row = day of the plan, entries = rank
    /// indices into the weakest-first domain ordering, in priority order.
    /// Rank index 0 (the weakest domain) appears most often early in the
    /// week, which is what biases scheduling toward deficient areas.
    pub const FOCUS_DISTRIBUTION: [[usize; 4]; 7] = [
        [0, 1, 0, 3],
        [0, 2, 0, 1],
        [1, 2, 3, 0],
        [1, 0, 2, 3],
        [2, 3, 0, 1],
        [2, 0, 3, 1],
        [3, 1, 2, 0],
    ];

    /// Minimum completion score assigned when an exercise is marked done
    pub const COMPLETION_SCORE_MIN: i32 = 500;

    /// Maximum completion score assigned when an exercise is marked done
    pub const COMPLETION_SCORE_MAX: i32 = 1000;
}

/// Daily challenge generation policy
pub mod challenges {
    /// Challenges generated per calendar day
    pub const CHALLENGES_PER_DAY: usize = 3;

    /// Score-threshold template: base requirement and per-position step
    pub const SCORE_REQUIREMENT_BASE: u32 = 500;
    /// Per-position increment of the score requirement
    pub const SCORE_REQUIREMENT_STEP: u32 = 200;
    /// Score-threshold template XP: base reward
    pub const SCORE_XP_BASE: u32 = 50;
    /// Per-position increment of the score-template XP
    pub const SCORE_XP_STEP: u32 = 25;

    /// Play-duration template: base minutes (requirement is stored in seconds)
    pub const TIME_REQUIREMENT_BASE_MINUTES: u32 = 2;
    /// Play-duration template XP: base reward
    pub const TIME_XP_BASE: u32 = 30;
    /// Per-position increment of the duration-template XP
    pub const TIME_XP_STEP: u32 = 20;

    /// In-game correct-streak template: base run length and per-position step
    pub const STREAK_REQUIREMENT_BASE: u32 = 5;
    /// Per-position increment of the streak requirement
    pub const STREAK_REQUIREMENT_STEP: u32 = 3;
    /// Correct-streak template XP: base reward
    pub const STREAK_XP_BASE: u32 = 40;
    /// Per-position increment of the streak-template XP
    pub const STREAK_XP_STEP: u32 = 30;
}

/// Assessment stimulus generation parameters
pub mod assessment {
    /// Items shown in the recall test
    pub const RECALL_ITEM_COUNT: usize = 10;

    /// Seconds the recall items stay on screen
    pub const RECALL_DISPLAY_SECS: u32 = 30;

    /// Seconds allowed for entering recalled items
    pub const RECALL_INPUT_SECS: u32 = 30;

    /// Letters in the sustained-attention sequence
    pub const ATTENTION_SEQUENCE_LENGTH: usize = 30;

    /// Probability that a letter following an A becomes an X target
    pub const ATTENTION_TARGET_PROBABILITY: f64 = 0.3;

    /// Numbers presented in the timed ascending sort
    pub const SORT_ITEM_COUNT: usize = 10;

    /// Inclusive lower bound of generated sort numbers
    pub const SORT_ITEM_MIN: u32 = 1;

    /// Inclusive upper bound of generated sort numbers
    pub const SORT_ITEM_MAX: u32 = 100;

    /// Seconds allowed for the timed sort
    pub const SORT_TIME_LIMIT_SECS: u32 = 60;
}
