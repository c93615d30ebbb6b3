// ABOUTME: Integration tests for domain score computation across all four formulas
// ABOUTME: Covers literal worked examples, clamping bounds, and attention score policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cognia::intelligence::scoring::{
    score_assessment, AssessmentOutcome, AttentionScorePolicy,
};
use cognia::models::CognitiveDomain;

fn recall_outcome(items: &[&str], recalled: &[&str]) -> AssessmentOutcome {
    AssessmentOutcome::Recall {
        items: items.iter().map(|s| (*s).to_owned()).collect(),
        recalled: recalled.iter().map(|s| (*s).to_owned()).collect(),
    }
}

// === Memory (recall) ===

#[test]
fn test_memory_full_recall_scores_100() {
    let outcome = recall_outcome(
        &["Apple", "Car", "Chair", "Dog"],
        &["apple", "CAR", "chair", "Dog"],
    );
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 100);
}

#[test]
fn test_memory_partial_recall() {
    let outcome = recall_outcome(
        &["Apple", "Car", "Chair", "Dog", "House", "Key", "Book", "Pencil", "Phone", "Tree"],
        &["apple", "dog", "tree", "house", "key", "book", "phone"],
    );
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 70);
}

#[test]
fn test_memory_wrong_entries_are_not_penalized() {
    let outcome = recall_outcome(
        &["Apple", "Car"],
        &["apple", "banana", "car", "spaceship", "lawnmower"],
    );
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 100);
}

#[test]
fn test_memory_duplicate_matches_count_once() {
    let outcome = recall_outcome(&["Apple", "Car"], &["apple", "APPLE", "Apple "]);
    // Only one catalog item matched; trailing-space entry does not match.
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 50);
}

#[test]
fn test_memory_nothing_recalled_scores_0() {
    let outcome = recall_outcome(&["Apple", "Car"], &[]);
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 0);
}

// === Attention (AX task) ===

#[test]
fn test_attention_literal_example() {
    // Sequence length 30, 5 true targets, 4 correct responses, 2 false alarms:
    // hit rate 0.8, false-alarm rate 2/30 -> round(73.33) = 73
    let outcome = AssessmentOutcome::SustainedAttention {
        correct_responses: 4,
        false_alarms: 2,
        total_targets: 5,
        sequence_length: 30,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 73);
}

#[test]
fn test_attention_score_can_go_negative_when_preserved() {
    let outcome = AssessmentOutcome::SustainedAttention {
        correct_responses: 0,
        false_alarms: 15,
        total_targets: 5,
        sequence_length: 30,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), -50);
}

#[test]
fn test_attention_clamp_policy_floors_at_zero() {
    let outcome = AssessmentOutcome::SustainedAttention {
        correct_responses: 0,
        false_alarms: 15,
        total_targets: 5,
        sequence_length: 30,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Clamp), 0);
}

#[test]
fn test_attention_perfect_run_scores_100() {
    let outcome = AssessmentOutcome::SustainedAttention {
        correct_responses: 5,
        false_alarms: 0,
        total_targets: 5,
        sequence_length: 30,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 100);
}

#[test]
fn test_attention_no_targets_scores_from_false_alarms_alone() {
    let outcome = AssessmentOutcome::SustainedAttention {
        correct_responses: 0,
        false_alarms: 3,
        total_targets: 0,
        sequence_length: 30,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), -10);
    assert_eq!(outcome.calculate(AttentionScorePolicy::Clamp), 0);
}

// === Processing speed (timed sort) ===

#[test]
fn test_processing_speed_literal_example() {
    // 10/10 selected in 45s: completion 1.0, time score 25 -> round(62.5) = 63
    let outcome = AssessmentOutcome::TimedSort {
        items_selected: 10,
        total_items: 10,
        elapsed_seconds: 45.0,
        sorted_correctly: true,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 63);
}

#[test]
fn test_processing_speed_timeout_keeps_completion_half() {
    // Past the 60s budget the time component floors at zero; full completion
    // still contributes its 50 points.
    let outcome = AssessmentOutcome::TimedSort {
        items_selected: 10,
        total_items: 10,
        elapsed_seconds: 90.0,
        sorted_correctly: true,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 50);
}

#[test]
fn test_processing_speed_instant_full_completion_scores_100() {
    let outcome = AssessmentOutcome::TimedSort {
        items_selected: 10,
        total_items: 10,
        elapsed_seconds: 0.0,
        sorted_correctly: true,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 100);
}

// === Reasoning (pattern completion) ===

#[test]
fn test_reasoning_all_patterns_correct() {
    let outcome = AssessmentOutcome::PatternCompletion {
        correct_answers: 3,
        total_patterns: 3,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 100);
}

#[test]
fn test_reasoning_two_of_three() {
    let outcome = AssessmentOutcome::PatternCompletion {
        correct_answers: 2,
        total_patterns: 3,
    };
    assert_eq!(outcome.calculate(AttentionScorePolicy::Preserve), 67);
}

// === Session aggregation ===

#[test]
fn test_score_assessment_maps_outcomes_to_domains() {
    let outcomes = vec![
        recall_outcome(&["Apple", "Car"], &["apple", "car"]),
        AssessmentOutcome::PatternCompletion {
            correct_answers: 2,
            total_patterns: 3,
        },
    ];
    let scores = score_assessment(&outcomes, AttentionScorePolicy::Preserve);

    assert_eq!(scores.memory, 100);
    assert_eq!(scores.reasoning, 67);
    // Skipped tests score zero.
    assert_eq!(scores.attention, 0);
    assert_eq!(scores.processing_speed, 0);
    assert!(scores.recorded_at.is_some());
}

#[test]
fn test_outcome_domain_mapping() {
    assert_eq!(
        recall_outcome(&[], &[]).domain(),
        CognitiveDomain::Memory
    );
    let sort = AssessmentOutcome::TimedSort {
        items_selected: 0,
        total_items: 10,
        elapsed_seconds: 60.0,
        sorted_correctly: true,
    };
    assert_eq!(sort.domain(), CognitiveDomain::ProcessingSpeed);
}

#[test]
fn test_overall_score_is_rounded_mean() {
    let scores = cognia::models::DomainScoreSet::new(80, 65, 75, 60);
    assert_eq!(scores.overall(), 70);
}

// === Serialization ===

#[test]
fn test_domain_score_set_round_trip_and_field_names() {
    let scores = cognia::models::DomainScoreSet::default_baseline();
    let json = serde_json::to_value(&scores).unwrap();

    assert_eq!(json["memory"], 70);
    assert_eq!(json["attention"], 65);
    assert_eq!(json["processingSpeed"], 75);
    assert_eq!(json["reasoning"], 60);

    let restored: cognia::models::DomainScoreSet = serde_json::from_value(json).unwrap();
    assert_eq!(restored, scores);
}
