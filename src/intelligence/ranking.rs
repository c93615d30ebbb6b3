// ABOUTME: Weakest-first cognitive domain ranking used to bias weekly scheduling
// ABOUTME: Stable ascending sort with declaration-order tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! Domain Ranking
//!
//! Orders the four domains ascending by score so the scheduler can direct
//! more exercise slots at deficient areas. The sort is stable and ties break
//! in domain declaration order (memory, attention, processing speed,
//! reasoning), which keeps ranking fully deterministic.

use crate::models::{CognitiveDomain, DomainScoreSet};

/// Rank the four domains weakest-first.
///
/// Index 0 of the result is the weakest domain; the focus-distribution table
/// addresses domains by this rank index.
#[must_use]
pub fn rank_domains(scores: &DomainScoreSet) -> [CognitiveDomain; 4] {
    let mut ranked = CognitiveDomain::ALL;
    // Stable sort; ALL is declaration order, so equal scores keep it.
    ranked.sort_by_key(|domain| scores.get(*domain));
    ranked
}

/// Rank domains from stored scores, falling back to the fixed baseline when
/// no assessment has been run. Missing data is not an error.
#[must_use]
pub fn rank_domains_or_baseline(scores: Option<&DomainScoreSet>) -> [CognitiveDomain; 4] {
    match scores {
        Some(scores) => rank_domains(scores),
        None => rank_domains(&DomainScoreSet::default_baseline()),
    }
}
