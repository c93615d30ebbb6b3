// ABOUTME: Domain score computation from raw mini-game results
// ABOUTME: Enum-dispatch scorer with one normalization formula per cognitive domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation)] // Safe: scores rounded from bounded ratios
#![allow(clippy::cast_precision_loss)] // Safe: counts are small

//! Domain Scoring
//!
//! Converts the raw result of each timed mini-game into a normalized score.
//! Each variant of [`AssessmentOutcome`] carries the raw fields its formula
//! needs; `calculate` is deterministic and never fails.
//!
//! All scores are clamped to [0, 100] at computation time except attention,
//! where the hit-rate minus false-alarm-rate formula can go negative and the
//! clamping behavior is a configured policy rather than a hard rule.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::cognitive_constants::scoring::{
    SCORE_MAX, SCORE_MIN, SORT_COMPLETION_WEIGHT, SORT_TIME_BUDGET_SECS, SORT_TIME_WEIGHT,
};
use crate::models::{CognitiveDomain, DomainScoreSet};

/// Policy for attention scores below zero
///
/// The sustained-attention formula subtracts the false-alarm rate from the
/// hit rate, so heavy false-alarming can push the score negative. Whether a
/// negative value is meaningful (signalling impairment) or should be floored
/// is a product question; both behaviors are available.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttentionScorePolicy {
    /// Keep negative scores as computed (reference behavior)
    #[default]
    Preserve,
    /// Clamp the score into [0, 100] like the other domains
    Clamp,
}

/// Raw result of one completed mini-game, tagged by domain
///
/// Produced once per test instance by the state machines in
/// [`assessment`](super::assessment); immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentOutcome {
    /// Memory: free recall of a shown item list
    Recall {
        /// The items that were shown
        items: Vec<String>,
        /// The tokens the user entered during the recall phase
        recalled: Vec<String>,
    },
    /// Attention: AX continuous-performance task
    SustainedAttention {
        /// Responses landing on true A-then-X targets
        correct_responses: u32,
        /// Responses landing on non-target positions
        false_alarms: u32,
        /// True A-then-X targets in the sequence
        total_targets: u32,
        /// Length of the presented letter sequence
        sequence_length: u32,
    },
    /// Processing speed: timed ascending number sort
    TimedSort {
        /// Numbers the user selected before time ran out
        items_selected: u32,
        /// Numbers presented
        total_items: u32,
        /// Seconds elapsed when the test completed
        elapsed_seconds: f64,
        /// Whether the selections were in ascending order
        sorted_correctly: bool,
    },
    /// Reasoning: pattern completion
    PatternCompletion {
        /// Positionally correct answers
        correct_answers: u32,
        /// Patterns presented
        total_patterns: u32,
    },
}

impl AssessmentOutcome {
    /// The cognitive domain this outcome belongs to
    #[must_use]
    pub const fn domain(&self) -> CognitiveDomain {
        match self {
            Self::Recall { .. } => CognitiveDomain::Memory,
            Self::SustainedAttention { .. } => CognitiveDomain::Attention,
            Self::TimedSort { .. } => CognitiveDomain::ProcessingSpeed,
            Self::PatternCompletion { .. } => CognitiveDomain::Reasoning,
        }
    }

    /// Compute the normalized domain score for this outcome
    #[must_use]
    pub fn calculate(&self, policy: AttentionScorePolicy) -> i32 {
        match self {
            Self::Recall { items, recalled } => score_recall(items, recalled),
            Self::SustainedAttention {
                correct_responses,
                false_alarms,
                total_targets,
                sequence_length,
            } => score_attention(
                *correct_responses,
                *false_alarms,
                *total_targets,
                *sequence_length,
                policy,
            ),
            Self::TimedSort {
                items_selected,
                total_items,
                elapsed_seconds,
                ..
            } => score_timed_sort(*items_selected, *total_items, *elapsed_seconds),
            Self::PatternCompletion {
                correct_answers,
                total_patterns,
            } => score_pattern_completion(*correct_answers, *total_patterns),
        }
    }
}

/// Memory: fraction of shown items recalled, as a percentage.
///
/// An item counts as recalled when any entered token matches it
/// case-insensitively. Each item counts at most once, so extra or wrong
/// entries reduce nothing beyond not counting.
fn score_recall(items: &[String], recalled: &[String]) -> i32 {
    if items.is_empty() {
        return SCORE_MIN;
    }
    let correct = items
        .iter()
        .filter(|item| {
            recalled
                .iter()
                .any(|entry| entry.eq_ignore_ascii_case(item))
        })
        .count();
    let score = (correct as f64 / items.len() as f64 * 100.0).round() as i32;
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Attention: hit rate minus false-alarm rate, as a percentage.
///
/// A sequence with no true targets has hit rate 0, leaving the score to the
/// false-alarm term alone.
fn score_attention(
    correct_responses: u32,
    false_alarms: u32,
    total_targets: u32,
    sequence_length: u32,
    policy: AttentionScorePolicy,
) -> i32 {
    if sequence_length == 0 {
        return SCORE_MIN;
    }
    let hit_rate = if total_targets > 0 {
        f64::from(correct_responses) / f64::from(total_targets)
    } else {
        0.0
    };
    let false_alarm_rate = f64::from(false_alarms) / f64::from(sequence_length);
    let score = ((hit_rate - false_alarm_rate) * 100.0).round() as i32;
    match policy {
        AttentionScorePolicy::Preserve => score.min(SCORE_MAX),
        AttentionScorePolicy::Clamp => score.clamp(SCORE_MIN, SCORE_MAX),
    }
}

/// Processing speed: equal-weighted completion fraction and time score.
///
/// The time score decays linearly over the 60-second budget and floors at
/// zero, so a full timeout still scores the completion half.
fn score_timed_sort(items_selected: u32, total_items: u32, elapsed_seconds: f64) -> i32 {
    if total_items == 0 {
        return SCORE_MIN;
    }
    let completion = f64::from(items_selected) / f64::from(total_items);
    let time_score = (100.0 - elapsed_seconds / SORT_TIME_BUDGET_SECS * 100.0).max(0.0);
    let score = ((completion * SORT_COMPLETION_WEIGHT + time_score / 100.0 * SORT_TIME_WEIGHT)
        * 100.0)
        .round() as i32;
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Reasoning: fraction of patterns answered correctly, as a percentage
fn score_pattern_completion(correct_answers: u32, total_patterns: u32) -> i32 {
    if total_patterns == 0 {
        return SCORE_MIN;
    }
    let score = (f64::from(correct_answers) / f64::from(total_patterns) * 100.0).round() as i32;
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Aggregate one assessment session's outcomes into a timestamped score set.
///
/// Domains with no recorded outcome score zero, matching the platform's
/// treatment of skipped tests. Later outcomes for the same domain overwrite
/// earlier ones.
#[must_use]
pub fn score_assessment(
    outcomes: &[AssessmentOutcome],
    policy: AttentionScorePolicy,
) -> DomainScoreSet {
    let mut scores = DomainScoreSet::new(0, 0, 0, 0);
    for outcome in outcomes {
        scores.set(outcome.domain(), outcome.calculate(policy));
    }
    scores.recorded_at = Some(Utc::now());
    scores
}
