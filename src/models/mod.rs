// ABOUTME: Shared data structures for the Cognia engine
// ABOUTME: Re-exports domain, exercise, and challenge model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

/// Daily challenge, streak, and completion-history types
pub mod challenge;
/// Cognitive domain and score types
pub mod domain;
/// Exercise catalog and training-plan types
pub mod exercise;

pub use challenge::{
    ChallengeHistory, ChallengeProgress, CompletionReceipt, DailyChallenge, RequirementKind,
    RewardKind, StreakState,
};
pub use domain::{CognitiveDomain, DomainScore, DomainScoreSet};
pub use exercise::{Difficulty, Exercise, GameInfo, PlanProgress, TrainingPlan, TrainingPlanDay};
