// ABOUTME: Exercise catalog entries and the 7-day training plan structures
// ABOUTME: Defines games, scheduled exercises, plan days, and plan-wide progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)] // Safe: rounded percentages of bounded counts
#![allow(clippy::cast_sign_loss)] // Safe: percentages are non-negative

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::CognitiveDomain;

/// Exercise difficulty tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    /// Entry-level exercise
    Easy,
    /// Intermediate exercise
    Medium,
    /// Advanced exercise
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => f.write_str("Easy"),
            Self::Medium => f.write_str("Medium"),
            Self::Hard => f.write_str("Hard"),
        }
    }
}

/// A mini-game from the exercise catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Expected play duration in minutes
    pub duration_minutes: u32,
    /// Short player-facing description
    pub description: String,
}

/// One scheduled exercise within a training-plan day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Cognitive domain this exercise trains
    pub domain: CognitiveDomain,
    /// The catalog game to play
    pub game: GameInfo,
    /// Whether the exercise has been completed
    pub completed: bool,
    /// Completion score; 0 until completed
    pub score: i32,
}

impl Exercise {
    /// Create a fresh, uncompleted exercise for a domain/game pairing
    #[must_use]
    pub const fn new(domain: CognitiveDomain, game: GameInfo) -> Self {
        Self {
            domain,
            game,
            completed: false,
            score: 0,
        }
    }
}

/// One day of the 7-day training plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPlanDay {
    /// Calendar date of this plan day
    pub date: NaiveDate,
    /// Scheduled exercises, at most one per domain, capped per day
    pub exercises: Vec<Exercise>,
}

impl TrainingPlanDay {
    /// Whether the day already schedules an exercise for the given domain
    #[must_use]
    pub fn has_domain(&self, domain: CognitiveDomain) -> bool {
        self.exercises.iter().any(|ex| ex.domain == domain)
    }
}

/// Aggregate completion progress over a full plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanProgress {
    /// Total scheduled exercises
    pub total: usize,
    /// Completed exercises
    pub completed: usize,
    /// Rounded completion percentage (0 when the plan is empty)
    pub percentage: u32,
}

/// A 7-day training plan starting at its generation date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPlan {
    /// Consecutive plan days, index 0 = generation date
    pub days: Vec<TrainingPlanDay>,
}

impl TrainingPlan {
    /// Look up the plan day for a calendar date
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&TrainingPlanDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Mutable lookup of the plan day for a calendar date
    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut TrainingPlanDay> {
        self.days.iter_mut().find(|day| day.date == date)
    }

    /// Aggregate completion progress across the whole plan
    #[must_use]
    pub fn progress(&self) -> PlanProgress {
        let total: usize = self.days.iter().map(|day| day.exercises.len()).sum();
        let completed: usize = self
            .days
            .iter()
            .map(|day| day.exercises.iter().filter(|ex| ex.completed).count())
            .sum();
        let percentage = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        PlanProgress {
            total,
            completed,
            percentage,
        }
    }

    /// Number of scheduled exercises per domain across the week, in domain
    /// declaration order. Feeds the focus-area summary on the dashboard.
    #[must_use]
    pub fn domain_counts(&self) -> [(CognitiveDomain, usize); 4] {
        CognitiveDomain::ALL.map(|domain| {
            let count = self
                .days
                .iter()
                .map(|day| day.exercises.iter().filter(|ex| ex.domain == domain).count())
                .sum();
            (domain, count)
        })
    }
}
