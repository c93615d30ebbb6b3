// ABOUTME: Engine configuration structures with reference defaults
// ABOUTME: Scoring policy and persistence sizing in one injectable bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! Engine configuration.
//!
//! Everything here defaults to the reference behavior; construct a config
//! only to deviate (for instance to clamp negative attention scores).

use serde::{Deserialize, Serialize};

use crate::cache::StoreConfig;
use crate::intelligence::scoring::AttentionScorePolicy;

/// Scoring configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// How to treat attention scores below zero
    pub attention_policy: AttentionScorePolicy,
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default)]
pub struct IntelligenceConfig {
    /// Scoring configuration
    pub scoring: ScoringConfig,
    /// Persistence store sizing
    pub store: StoreConfig,
}

impl IntelligenceConfig {
    /// Configuration matching the reference platform behavior
    #[must_use]
    pub fn reference() -> Self {
        Self::default()
    }
}
