// ABOUTME: Daily challenge records, streak state, and completion-history structures
// ABOUTME: Defines the persisted shapes for challenges_<date> and challengeHistory keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // Safe: rounded percentages of bounded counts
#![allow(clippy::cast_sign_loss)] // Safe: percentages are non-negative

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::exercise::GameInfo;

/// What a daily challenge asks the player to achieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// Reach a point threshold within the game
    Score,
    /// Play for a minimum duration (requirement is in seconds)
    Time,
    /// Achieve a run of consecutive correct answers within the game
    Streak,
}

/// Reward tier granted on challenge completion, fixed by challenge position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    /// Soft-currency reward (position 0)
    Coins,
    /// Consumable power-up (position 1)
    Powerup,
    /// Collectible badge (position 2)
    Badge,
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coins => f.write_str("Coins"),
            Self::Powerup => f.write_str("Power-up"),
            Self::Badge => f.write_str("Badge"),
        }
    }
}

/// One generated daily challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    /// Unique challenge identifier
    pub id: Uuid,
    /// The game the challenge is played in
    pub game: GameInfo,
    /// Player-facing objective description
    pub description: String,
    /// What kind of objective this is
    pub requirement_type: RequirementKind,
    /// Numeric objective (points, seconds, or consecutive answers)
    pub requirement: u32,
    /// Experience points granted on completion
    pub xp: u32,
    /// Reward tier granted on completion
    pub reward: RewardKind,
    /// Whether the challenge has been completed
    pub completed: bool,
    /// Completion progress, 0..=100
    pub progress: u8,
}

/// Aggregate completion progress for one day's challenge set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeProgress {
    /// Challenges in the set
    pub total: usize,
    /// Completed challenges
    pub completed: usize,
    /// Rounded completion percentage (0 for an empty set)
    pub percentage: u32,
}

impl ChallengeProgress {
    /// Compute progress over a day's challenge set
    #[must_use]
    pub fn for_set(challenges: &[DailyChallenge]) -> Self {
        let total = challenges.len();
        let completed = challenges.iter().filter(|c| c.completed).count();
        let percentage = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total,
            completed,
            percentage,
        }
    }

    /// Whether every challenge in a non-empty set is complete
    #[must_use]
    pub const fn all_completed(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Day-over-day completion streak state
///
/// The only cross-session mutable state in the engine. Mutated exclusively by
/// [`StreakState::record_completion`](crate::intelligence::streaks) when a
/// full day's challenge set reaches 100%.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakState {
    /// Consecutive calendar days with all challenges completed
    pub streak: u32,
    /// Date of the most recent all-challenges-completed event
    #[serde(default, rename = "lastCompletedDate")]
    pub last_completed: Option<NaiveDate>,
}

/// Receipt for one completed challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReceipt {
    /// The completed challenge
    pub challenge_id: Uuid,
    /// When the completion was recorded
    pub completed_at: DateTime<Utc>,
}

/// Persisted challenge history: streak state plus completion receipts
///
/// Serializes to the flat object shape stored under the `challengeHistory`
/// key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeHistory {
    /// Current streak state
    #[serde(flatten)]
    pub streak: StreakState,
    /// Receipts for every completed challenge, oldest first
    #[serde(rename = "completedChallenges")]
    pub completed_challenges: Vec<CompletionReceipt>,
}
