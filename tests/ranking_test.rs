// ABOUTME: Integration tests for weakest-first domain ranking
// ABOUTME: Covers stability, declaration-order tie-breaks, and the baseline fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cognia::intelligence::ranking::{rank_domains, rank_domains_or_baseline};
use cognia::models::{CognitiveDomain, DomainScoreSet};

#[test]
fn test_tied_scores_break_in_declaration_order() {
    // memory 80, attention 60, processingSpeed 60, reasoning 90: the two 60s
    // keep declaration order (attention before processingSpeed).
    let scores = DomainScoreSet::new(80, 60, 60, 90);
    assert_eq!(
        rank_domains(&scores),
        [
            CognitiveDomain::Attention,
            CognitiveDomain::ProcessingSpeed,
            CognitiveDomain::Memory,
            CognitiveDomain::Reasoning,
        ]
    );
}

#[test]
fn test_all_equal_scores_keep_declaration_order() {
    let scores = DomainScoreSet::new(50, 50, 50, 50);
    assert_eq!(rank_domains(&scores), CognitiveDomain::ALL);
}

#[test]
fn test_ranking_is_deterministic() {
    let scores = DomainScoreSet::new(42, 17, 88, 63);
    assert_eq!(rank_domains(&scores), rank_domains(&scores));
}

#[test]
fn test_baseline_fallback_ranking() {
    // Baseline: memory 70, attention 65, processingSpeed 75, reasoning 60.
    assert_eq!(
        rank_domains_or_baseline(None),
        [
            CognitiveDomain::Reasoning,
            CognitiveDomain::Attention,
            CognitiveDomain::Memory,
            CognitiveDomain::ProcessingSpeed,
        ]
    );
}

#[test]
fn test_explicit_scores_override_baseline() {
    let scores = DomainScoreSet::new(10, 90, 90, 90);
    let ranked = rank_domains_or_baseline(Some(&scores));
    assert_eq!(ranked[0], CognitiveDomain::Memory);
}
