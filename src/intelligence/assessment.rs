// ABOUTME: Tagged-union test-phase state machines for the four assessment mini-games
// ABOUTME: Tick-driven countdowns with a single completion event per test instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation)] // Safe: stimulus counts are small

//! Assessment Test Runners
//!
//! Each mini-game is an explicit state machine driven by one-second `tick`
//! calls and user input. Phase transitions are encoded in the state, so a
//! test emits its [`AssessmentOutcome`] exactly once: every tick or input
//! after completion is a no-op returning `None`. This replaces the phase
//! flags and overlapping timer callbacks of earlier releases, where a stale
//! timer could race a user-triggered completion.

use rand::Rng;

use super::cognitive_constants::assessment::{
    ATTENTION_SEQUENCE_LENGTH, ATTENTION_TARGET_PROBABILITY, RECALL_DISPLAY_SECS,
    RECALL_INPUT_SECS, SORT_ITEM_COUNT, SORT_ITEM_MAX, SORT_ITEM_MIN, SORT_TIME_LIMIT_SECS,
};
use super::scoring::{score_assessment, AssessmentOutcome, AttentionScorePolicy};
use crate::models::DomainScoreSet;

// ============================================================================
// Stimulus generation
// ============================================================================

/// The reference recall item list
#[must_use]
pub fn reference_recall_items() -> Vec<String> {
    [
        "Apple", "Car", "Chair", "Dog", "House", "Key", "Book", "Pencil", "Phone", "Tree",
    ]
    .map(str::to_owned)
    .to_vec()
}

/// Generate a sustained-attention letter sequence.
///
/// Letters are drawn from {A, X}; a letter following an A becomes an X
/// target with the configured probability, so target density stays roughly
/// constant across generated sequences.
#[must_use]
pub fn generate_attention_sequence<R: Rng>(rng: &mut R) -> Vec<char> {
    let mut sequence: Vec<char> = Vec::with_capacity(ATTENTION_SEQUENCE_LENGTH);
    for i in 0..ATTENTION_SEQUENCE_LENGTH {
        let after_a = i > 0 && sequence[i - 1] == 'A';
        if after_a && rng.gen_bool(ATTENTION_TARGET_PROBABILITY) {
            sequence.push('X');
        } else if rng.gen_bool(0.5) {
            sequence.push('A');
        } else {
            sequence.push('X');
        }
    }
    sequence
}

/// Generate the unique numbers for the timed ascending sort
#[must_use]
pub fn generate_sort_items<R: Rng>(rng: &mut R) -> Vec<u32> {
    let mut numbers: Vec<u32> = Vec::with_capacity(SORT_ITEM_COUNT);
    while numbers.len() < SORT_ITEM_COUNT {
        let candidate = rng.gen_range(SORT_ITEM_MIN..=SORT_ITEM_MAX);
        if !numbers.contains(&candidate) {
            numbers.push(candidate);
        }
    }
    numbers
}

/// One pattern-completion puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The shown number sequence
    pub sequence: Vec<i64>,
    /// Answer options presented to the user
    pub options: Vec<i64>,
    /// The correct continuation
    pub answer: i64,
}

/// The reference pattern set (arithmetic, doubling, and doubling-from-3)
#[must_use]
pub fn reference_patterns() -> Vec<Pattern> {
    vec![
        Pattern {
            sequence: vec![1, 3, 5, 7],
            options: vec![8, 9, 11, 10],
            answer: 9,
        },
        Pattern {
            sequence: vec![2, 4, 8, 16],
            options: vec![24, 32, 31, 30],
            answer: 32,
        },
        Pattern {
            sequence: vec![3, 6, 12, 24],
            options: vec![36, 48, 72, 96],
            answer: 48,
        },
    ]
}

// ============================================================================
// Memory: free recall
// ============================================================================

/// Phase of the recall test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallPhase {
    /// Items are on screen; the countdown runs toward the recall phase
    Memorize {
        /// Seconds left in the memorize phase
        remaining_secs: u32,
    },
    /// The user enters recalled items against a countdown
    Recall {
        /// Seconds left in the recall phase
        remaining_secs: u32,
    },
    /// The test has completed and emitted its outcome
    Complete,
}

/// State machine for the memory recall test
#[derive(Debug, Clone)]
pub struct RecallTest {
    items: Vec<String>,
    entries: Vec<String>,
    recall_secs: u32,
    phase: RecallPhase,
}

impl RecallTest {
    /// Start a recall test with the reference durations
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self::with_durations(items, RECALL_DISPLAY_SECS, RECALL_INPUT_SECS)
    }

    /// Start a recall test with explicit phase durations (in seconds)
    #[must_use]
    pub fn with_durations(items: Vec<String>, display_secs: u32, recall_secs: u32) -> Self {
        Self {
            items,
            entries: Vec::new(),
            recall_secs,
            phase: RecallPhase::Memorize {
                remaining_secs: display_secs,
            },
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> RecallPhase {
        self.phase
    }

    /// Submit a recalled token. Only accepted during the recall phase;
    /// blank tokens and exact repeats are ignored.
    pub fn submit_entry(&mut self, token: &str) {
        if !matches!(self.phase, RecallPhase::Recall { .. }) {
            return;
        }
        let token = token.trim();
        if token.is_empty() || self.entries.iter().any(|e| e == token) {
            return;
        }
        self.entries.push(token.to_owned());
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the outcome when the recall phase expires; `None` on every
    /// other tick, including all ticks after completion.
    pub fn tick(&mut self) -> Option<AssessmentOutcome> {
        match &mut self.phase {
            RecallPhase::Memorize { remaining_secs } => {
                *remaining_secs = remaining_secs.saturating_sub(1);
                if *remaining_secs == 0 {
                    self.phase = RecallPhase::Recall {
                        remaining_secs: self.recall_secs,
                    };
                }
                None
            }
            RecallPhase::Recall { remaining_secs } => {
                *remaining_secs = remaining_secs.saturating_sub(1);
                if *remaining_secs == 0 {
                    self.phase = RecallPhase::Complete;
                    Some(AssessmentOutcome::Recall {
                        items: self.items.clone(),
                        recalled: self.entries.clone(),
                    })
                } else {
                    None
                }
            }
            RecallPhase::Complete => None,
        }
    }
}

// ============================================================================
// Attention: AX continuous performance
// ============================================================================

/// State machine for the sustained-attention (AX) test
///
/// A response applies to the letter shown before the current one: the user
/// reacts to an X while the display has already advanced past the A that
/// preceded it, so `respond` records at the previous position.
#[derive(Debug, Clone)]
pub struct SustainedAttentionTest {
    sequence: Vec<char>,
    responses: Vec<bool>,
    cursor: usize,
    done: bool,
}

impl SustainedAttentionTest {
    /// Start a test over the given letter sequence
    #[must_use]
    pub fn new(sequence: Vec<char>) -> Self {
        let responses = vec![false; sequence.len()];
        Self {
            sequence,
            responses,
            cursor: 0,
            done: false,
        }
    }

    /// The letter currently displayed, if the sequence has not run out
    #[must_use]
    pub fn current_letter(&self) -> Option<char> {
        self.sequence.get(self.cursor).copied()
    }

    /// Record a response for the previously shown letter
    pub fn respond(&mut self) {
        if self.done || self.cursor == 0 {
            return;
        }
        if let Some(slot) = self.responses.get_mut(self.cursor - 1) {
            *slot = true;
        }
    }

    /// Advance to the next letter.
    ///
    /// Returns the outcome when the sequence is exhausted; `None` before
    /// that and on every call after completion.
    pub fn advance(&mut self) -> Option<AssessmentOutcome> {
        if self.done {
            return None;
        }
        self.cursor += 1;
        if self.cursor < self.sequence.len() {
            return None;
        }
        self.done = true;
        Some(self.outcome())
    }

    /// Score the recorded responses. The final position cannot begin an
    /// A-then-X pair, so the scan stops one short of the sequence end.
    fn outcome(&self) -> AssessmentOutcome {
        let mut correct_responses = 0;
        let mut false_alarms = 0;
        let mut total_targets = 0;
        for i in 0..self.sequence.len().saturating_sub(1) {
            let is_target = self.sequence[i] == 'A' && self.sequence[i + 1] == 'X';
            if is_target {
                total_targets += 1;
                if self.responses[i] {
                    correct_responses += 1;
                }
            } else if self.responses[i] {
                false_alarms += 1;
            }
        }
        AssessmentOutcome::SustainedAttention {
            correct_responses,
            false_alarms,
            total_targets,
            sequence_length: self.sequence.len() as u32,
        }
    }
}

// ============================================================================
// Processing speed: timed ascending sort
// ============================================================================

/// State machine for the timed ascending sort test
#[derive(Debug, Clone)]
pub struct TimedSortTest {
    items: Vec<u32>,
    selected: Vec<u32>,
    time_limit_secs: u32,
    elapsed_secs: u32,
    done: bool,
}

impl TimedSortTest {
    /// Start a sort test with the reference time limit
    #[must_use]
    pub fn new(items: Vec<u32>) -> Self {
        Self::with_time_limit(items, SORT_TIME_LIMIT_SECS)
    }

    /// Start a sort test with an explicit time limit (in seconds)
    #[must_use]
    pub const fn with_time_limit(items: Vec<u32>, time_limit_secs: u32) -> Self {
        Self {
            items,
            selected: Vec::new(),
            time_limit_secs,
            elapsed_secs: 0,
            done: false,
        }
    }

    /// Select a number. Unknown numbers and repeats are ignored. Returns
    /// the outcome when this selection completes the set.
    pub fn select(&mut self, number: u32) -> Option<AssessmentOutcome> {
        if self.done || !self.items.contains(&number) || self.selected.contains(&number) {
            return None;
        }
        self.selected.push(number);
        if self.selected.len() == self.items.len() {
            return Some(self.complete());
        }
        None
    }

    /// Advance the clock by one second. Returns the outcome when the time
    /// limit expires; `None` before that and after completion.
    pub fn tick(&mut self) -> Option<AssessmentOutcome> {
        if self.done {
            return None;
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.time_limit_secs {
            return Some(self.complete());
        }
        None
    }

    fn complete(&mut self) -> AssessmentOutcome {
        self.done = true;
        let sorted_correctly = self.selected.windows(2).all(|pair| pair[0] <= pair[1]);
        AssessmentOutcome::TimedSort {
            items_selected: self.selected.len() as u32,
            total_items: self.items.len() as u32,
            elapsed_seconds: f64::from(self.elapsed_secs),
            sorted_correctly,
        }
    }
}

// ============================================================================
// Reasoning: pattern completion
// ============================================================================

/// State machine for the pattern-completion test
#[derive(Debug, Clone)]
pub struct PatternCompletionTest {
    patterns: Vec<Pattern>,
    answers: Vec<i64>,
    done: bool,
}

impl PatternCompletionTest {
    /// Start a test over the given pattern set
    #[must_use]
    pub const fn new(patterns: Vec<Pattern>) -> Self {
        Self {
            patterns,
            answers: Vec::new(),
            done: false,
        }
    }

    /// The pattern currently presented, if any remain
    #[must_use]
    pub fn current_pattern(&self) -> Option<&Pattern> {
        if self.done {
            return None;
        }
        self.patterns.get(self.answers.len())
    }

    /// Record the answer for the current pattern. Answers are positional;
    /// the outcome is emitted after the final pattern is answered.
    pub fn answer(&mut self, choice: i64) -> Option<AssessmentOutcome> {
        if self.done || self.answers.len() >= self.patterns.len() {
            return None;
        }
        self.answers.push(choice);
        if self.answers.len() < self.patterns.len() {
            return None;
        }
        self.done = true;
        let correct_answers = self
            .answers
            .iter()
            .zip(&self.patterns)
            .filter(|(answer, pattern)| **answer == pattern.answer)
            .count() as u32;
        Some(AssessmentOutcome::PatternCompletion {
            correct_answers,
            total_patterns: self.patterns.len() as u32,
        })
    }
}

// ============================================================================
// Session aggregation
// ============================================================================

/// Collects outcomes across the four tests of one assessment session
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    outcomes: Vec<AssessmentOutcome>,
    policy: AttentionScorePolicy,
}

impl AssessmentSession {
    /// Start a session with the given attention-score policy
    #[must_use]
    pub const fn new(policy: AttentionScorePolicy) -> Self {
        Self {
            outcomes: Vec::new(),
            policy,
        }
    }

    /// Record a completed test's outcome
    pub fn record(&mut self, outcome: AssessmentOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outcomes recorded so far
    #[must_use]
    pub fn outcomes(&self) -> &[AssessmentOutcome] {
        &self.outcomes
    }

    /// Score the session into a timestamped domain score set. Domains with
    /// no recorded outcome (skipped tests) score zero.
    #[must_use]
    pub fn finish(&self) -> DomainScoreSet {
        score_assessment(&self.outcomes, self.policy)
    }
}
