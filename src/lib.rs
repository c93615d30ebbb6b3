// ABOUTME: Main library entry point for the Cognia cognitive training engine
// ABOUTME: Provides assessment scoring, weekly plan scheduling, daily challenges, and streak tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

#![deny(unsafe_code)]

//! # Cognia Engine
//!
//! The adaptive cognitive assessment and training-plan engine behind the
//! Cognia caregiver platform. The engine scores timed mini-games across four
//! cognitive domains, ranks domains by weakness, schedules a 7-day exercise
//! plan biased toward deficient areas, and keeps daily-challenge and streak
//! state across sessions.
//!
//! ## Architecture
//!
//! - **Models**: Shared data structures (domains, scores, exercises, challenges)
//! - **Intelligence**: Scoring formulas, ranking, scheduling, and streak logic
//! - **Cache**: Pluggable key-value persistence port with an in-memory backend
//! - **Config**: Engine configuration (scoring policy, store sizing)
//!
//! ## Example
//!
//! ```rust,no_run
//! use cognia::intelligence::ranking::rank_domains;
//! use cognia::intelligence::planner::generate_plan;
//! use cognia::intelligence::seeded_rng;
//! use cognia::models::DomainScoreSet;
//! use chrono::Utc;
//!
//! let scores = DomainScoreSet::default_baseline();
//! let ranked = rank_domains(&scores);
//! let mut rng = seeded_rng(42);
//! let plan = generate_plan(&ranked, Utc::now().date_naive(), &mut rng);
//! println!("{} days scheduled", plan.days.len());
//! ```

/// Pluggable key-value persistence port and in-memory backend
pub mod cache;

/// Static per-domain exercise catalog
pub mod catalog;

/// Engine configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Scoring, ranking, scheduling, challenge, and streak logic
pub mod intelligence;

/// Shared data structures
pub mod models;
