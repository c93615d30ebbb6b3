// ABOUTME: Weekly training-plan scheduler driven by the focus-distribution table
// ABOUTME: Plan generation, capacity-checked editing, completion, and store-seeded ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation)] // Safe: plan indices fit in u64 day offsets

//! Training-Plan Scheduling
//!
//! Turns a weakest-first domain ranking into a 7-day exercise plan. Each row
//! of the focus-distribution table lists rank indices in priority order; the
//! scheduler walks the row, skips domains already placed that day, draws one
//! catalog game per admitted domain uniformly at random, and stops at the
//! per-day capacity.
//!
//! Plan edits re-validate the same two invariants the generator enforces:
//! at most three exercises per day, at most one exercise per domain per day.
//! Violations are rejected without mutating the plan and carry error codes
//! the caller surfaces as warnings.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::cognitive_constants::scheduling::{
    COMPLETION_SCORE_MAX, COMPLETION_SCORE_MIN, FOCUS_DISTRIBUTION, MAX_EXERCISES_PER_DAY,
};
use super::ranking::{rank_domains, rank_domains_or_baseline};
use crate::cache::{StoreKey, StoreProvider};
use crate::catalog;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CognitiveDomain, DomainScoreSet, Exercise, TrainingPlan, TrainingPlanDay,
};

/// Generate a 7-day training plan from a weakest-first domain ranking.
///
/// The plan starts at `start_date`; day *d* follows row *d* of the
/// focus-distribution table. Game picks are uniform over the domain's
/// catalog, so a seeded `rng` reproduces the plan exactly.
#[must_use]
pub fn generate_plan<R: Rng>(
    ranked: &[CognitiveDomain; 4],
    start_date: NaiveDate,
    rng: &mut R,
) -> TrainingPlan {
    debug!(?ranked, %start_date, "generating training plan");
    let days = FOCUS_DISTRIBUTION
        .iter()
        .enumerate()
        .map(|(day_index, row)| {
            let date = start_date + Days::new(day_index as u64);
            let mut exercises: Vec<Exercise> = Vec::with_capacity(MAX_EXERCISES_PER_DAY);
            for &rank_index in row {
                if exercises.len() >= MAX_EXERCISES_PER_DAY {
                    break;
                }
                let domain = ranked[rank_index];
                if exercises.iter().any(|ex| ex.domain == domain) {
                    continue;
                }
                let games = catalog::games_for_domain(domain);
                if let Some(game) = games.choose(rng) {
                    exercises.push(Exercise::new(domain, game.clone()));
                }
            }
            TrainingPlanDay { date, exercises }
        })
        .collect();
    TrainingPlan { days }
}

impl TrainingPlan {
    /// Add an exercise to a plan day.
    ///
    /// # Errors
    ///
    /// Rejects without mutating the plan when the date is not in the plan,
    /// the day is at capacity (`PlanCapacityExceeded`), or the day already
    /// covers the exercise's domain (`PlanDomainConflict`). The last two are
    /// user-facing warnings, not failures.
    pub fn add_exercise(&mut self, date: NaiveDate, exercise: Exercise) -> AppResult<()> {
        let day = self
            .day_mut(date)
            .ok_or_else(|| AppError::not_found(format!("plan day {date}")))?;
        if day.exercises.len() >= MAX_EXERCISES_PER_DAY {
            return Err(AppError::plan_capacity(format!(
                "Maximum {MAX_EXERCISES_PER_DAY} exercises per day allowed"
            )));
        }
        if day.has_domain(exercise.domain) {
            return Err(AppError::plan_domain_conflict(format!(
                "Already have a {} exercise for this day",
                exercise.domain
            )));
        }
        day.exercises.push(exercise);
        Ok(())
    }

    /// Remove an exercise from a plan day, identified by domain and game id.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the date is not in the plan or no
    /// matching exercise is scheduled.
    pub fn remove_exercise(
        &mut self,
        date: NaiveDate,
        domain: CognitiveDomain,
        game_id: &str,
    ) -> AppResult<()> {
        let day = self
            .day_mut(date)
            .ok_or_else(|| AppError::not_found(format!("plan day {date}")))?;
        let before = day.exercises.len();
        day.exercises
            .retain(|ex| !(ex.domain == domain && ex.game.id == game_id));
        if day.exercises.len() == before {
            return Err(AppError::not_found(format!(
                "{domain} exercise {game_id} on {date}"
            )));
        }
        Ok(())
    }

    /// Mark an exercise complete, assigning a uniform random score in
    /// [500, 1000]. Completing an already-completed exercise is a no-op that
    /// returns the existing score.
    ///
    /// The completion score is unrelated to the 0-100 domain scores that
    /// ranked the plan; it feeds the platform's reward display only.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the date is not in the plan or no
    /// matching exercise is scheduled.
    pub fn complete_exercise<R: Rng>(
        &mut self,
        date: NaiveDate,
        domain: CognitiveDomain,
        game_id: &str,
        rng: &mut R,
    ) -> AppResult<i32> {
        let day = self
            .day_mut(date)
            .ok_or_else(|| AppError::not_found(format!("plan day {date}")))?;
        let exercise = day
            .exercises
            .iter_mut()
            .find(|ex| ex.domain == domain && ex.game.id == game_id)
            .ok_or_else(|| {
                AppError::not_found(format!("{domain} exercise {game_id} on {date}"))
            })?;
        if exercise.completed {
            return Ok(exercise.score);
        }
        exercise.completed = true;
        exercise.score = rng.gen_range(COMPLETION_SCORE_MIN..=COMPLETION_SCORE_MAX);
        Ok(exercise.score)
    }
}

/// Store-seeded plan generation.
///
/// Reads the last assessment's scores from the persistence port to rank
/// domains; a missing or unreadable score set falls back to the fixed
/// baseline, which is never an error condition.
pub struct TrainingPlanner<S> {
    store: S,
}

impl<S: StoreProvider> TrainingPlanner<S> {
    /// Create a planner over a persistence port
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored assessment scores, if any.
    ///
    /// A store failure is logged and treated as no stored assessment; the
    /// session proceeds on in-memory defaults.
    pub async fn stored_scores(&self) -> Option<DomainScoreSet> {
        match self.store.get(&StoreKey::DomainScores).await {
            Ok(scores) => scores,
            Err(err) => {
                warn!(error = %err, "failed to read stored domain scores; using baseline");
                None
            }
        }
    }

    /// Persist a completed assessment's scores for future plan generation.
    ///
    /// A store failure is logged and swallowed: the caller keeps its
    /// in-memory copy and the session continues.
    pub async fn save_assessment(&self, scores: &DomainScoreSet) {
        if let Err(err) = self.store.set(&StoreKey::DomainScores, scores, None).await {
            warn!(error = %err, "failed to persist domain scores; continuing in-memory");
        }
    }

    /// Generate a plan starting at `start_date`, ranked from stored scores
    /// or the baseline when none exist.
    pub async fn generate<R: Rng + Send>(
        &self,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> TrainingPlan {
        let ranked = match self.stored_scores().await {
            Some(scores) => rank_domains(&scores),
            None => rank_domains_or_baseline(None),
        };
        generate_plan(&ranked, start_date, rng)
    }
}
