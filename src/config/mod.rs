// ABOUTME: Configuration module for the Cognia engine
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

/// Engine configuration (scoring policy, store sizing)
pub mod intelligence;

pub use intelligence::{IntelligenceConfig, ScoringConfig};
