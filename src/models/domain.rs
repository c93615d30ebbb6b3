// ABOUTME: Cognitive domain enumeration and per-domain score structures
// ABOUTME: Defines the four assessed domains and the persisted score map with baseline defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation)] // Safe: rounded means of bounded score values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::intelligence::cognitive_constants::baselines::{
    BASELINE_ATTENTION, BASELINE_MEMORY, BASELINE_PROCESSING_SPEED, BASELINE_REASONING,
};

/// Enumeration of the four assessed cognitive domains
///
/// Declaration order is significant: it is the tie-break order used when
/// ranking domains with equal scores, and must stay memory, attention,
/// processing speed, reasoning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CognitiveDomain {
    /// Recall of previously shown items
    Memory,
    /// Sustained attention (AX continuous-performance task)
    Attention,
    /// Speeded processing (timed ascending sort)
    ProcessingSpeed,
    /// Logical reasoning (pattern completion)
    Reasoning,
}

impl CognitiveDomain {
    /// All domains in declaration (tie-break) order
    pub const ALL: [Self; 4] = [
        Self::Memory,
        Self::Attention,
        Self::ProcessingSpeed,
        Self::Reasoning,
    ];

    /// Human-readable display name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Memory => "Memory",
            Self::Attention => "Attention",
            Self::ProcessingSpeed => "Processing Speed",
            Self::Reasoning => "Reasoning",
        }
    }
}

impl fmt::Display for CognitiveDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CognitiveDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "attention" => Ok(Self::Attention),
            "processingSpeed" => Ok(Self::ProcessingSpeed),
            "reasoning" => Ok(Self::Reasoning),
            other => Err(format!("Unknown cognitive domain: {other}")),
        }
    }
}

/// A single normalized domain score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainScore {
    /// The scored domain
    pub domain: CognitiveDomain,
    /// Normalized score. Clamped to [0, 100] at computation time for every
    /// domain except attention, whose clamping is a configured policy.
    pub value: i32,
}

/// The full per-domain score map produced by one assessment session
///
/// Serializes to the flat object shape the platform persists under the
/// `cognitiveDomainScores` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainScoreSet {
    /// Memory domain score
    pub memory: i32,
    /// Attention domain score
    pub attention: i32,
    /// Processing speed domain score
    pub processing_speed: i32,
    /// Reasoning domain score
    pub reasoning: i32,
    /// When the assessment producing these scores finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl DomainScoreSet {
    /// Create a score set from explicit per-domain values
    #[must_use]
    pub const fn new(memory: i32, attention: i32, processing_speed: i32, reasoning: i32) -> Self {
        Self {
            memory,
            attention,
            processing_speed,
            reasoning,
            recorded_at: None,
        }
    }

    /// Fixed baseline used when no assessment has been run.
    ///
    /// Missing data is not an error condition: scheduling proceeds against
    /// this set instead.
    #[must_use]
    pub const fn default_baseline() -> Self {
        Self::new(
            BASELINE_MEMORY,
            BASELINE_ATTENTION,
            BASELINE_PROCESSING_SPEED,
            BASELINE_REASONING,
        )
    }

    /// Score for a single domain
    #[must_use]
    pub const fn get(&self, domain: CognitiveDomain) -> i32 {
        match domain {
            CognitiveDomain::Memory => self.memory,
            CognitiveDomain::Attention => self.attention,
            CognitiveDomain::ProcessingSpeed => self.processing_speed,
            CognitiveDomain::Reasoning => self.reasoning,
        }
    }

    /// Set the score for a single domain
    pub fn set(&mut self, domain: CognitiveDomain, value: i32) {
        match domain {
            CognitiveDomain::Memory => self.memory = value,
            CognitiveDomain::Attention => self.attention = value,
            CognitiveDomain::ProcessingSpeed => self.processing_speed = value,
            CognitiveDomain::Reasoning => self.reasoning = value,
        }
    }

    /// The four scores as `DomainScore` records in declaration order
    #[must_use]
    pub fn scores(&self) -> [DomainScore; 4] {
        CognitiveDomain::ALL.map(|domain| DomainScore {
            domain,
            value: self.get(domain),
        })
    }

    /// Overall assessment score: the rounded mean of the four domain scores
    #[must_use]
    pub fn overall(&self) -> i32 {
        let sum = self.memory + self.attention + self.processing_speed + self.reasoning;
        (f64::from(sum) / 4.0).round() as i32
    }
}
