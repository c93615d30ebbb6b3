// ABOUTME: Daily challenge generation and store-backed challenge tracking
// ABOUTME: Date-keyed caching, explicit refresh, completion receipts, and streak wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health
#![allow(clippy::cast_possible_truncation)] // Safe: challenge positions are 0..3

//! Daily Challenges
//!
//! Three challenges are generated per calendar day from the domain-agnostic
//! game pool: shuffle, take three, and give each position one of three
//! objective templates at random. Requirements and XP scale with position,
//! and the reward tier is fixed by position (coins, power-up, badge).
//!
//! [`ChallengeTracker`] caches the generated set under the day's store key
//! so repeated views return the same set; only an explicit refresh discards
//! it. Store failures are logged and the tracker continues on its in-memory
//! session state, so a broken store never surfaces to the user.

use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use super::cognitive_constants::challenges::{
    CHALLENGES_PER_DAY, SCORE_REQUIREMENT_BASE, SCORE_REQUIREMENT_STEP, SCORE_XP_BASE,
    SCORE_XP_STEP, STREAK_REQUIREMENT_BASE, STREAK_REQUIREMENT_STEP, STREAK_XP_BASE,
    STREAK_XP_STEP, TIME_REQUIREMENT_BASE_MINUTES, TIME_XP_BASE, TIME_XP_STEP,
};
use crate::cache::{StoreKey, StoreProvider, TTL_DAILY_CHALLENGES_SECS};
use crate::catalog;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ChallengeHistory, ChallengeProgress, CompletionReceipt, DailyChallenge, GameInfo,
    RequirementKind, RewardKind,
};

/// Generate one day's challenge set from the available game pool.
///
/// Shuffles the pool and takes the first three games. Position `i` gets one
/// of three objective templates uniformly at random; requirement and XP grow
/// with the position, and the reward tier is fixed by it.
#[must_use]
pub fn generate_daily_challenges<R: Rng>(pool: &[GameInfo], rng: &mut R) -> Vec<DailyChallenge> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(CHALLENGES_PER_DAY)
        .enumerate()
        .map(|(position, game)| challenge_for_position(position, game, rng))
        .collect()
}

fn challenge_for_position<R: Rng>(position: usize, game: GameInfo, rng: &mut R) -> DailyChallenge {
    let position_u32 = position as u32;
    let (requirement_type, requirement, description, xp) = match rng.gen_range(0..3_u8) {
        0 => {
            let requirement = SCORE_REQUIREMENT_BASE + position_u32 * SCORE_REQUIREMENT_STEP;
            (
                RequirementKind::Score,
                requirement,
                format!("Score {requirement} points in {}", game.name),
                SCORE_XP_BASE + position_u32 * SCORE_XP_STEP,
            )
        }
        1 => {
            let minutes = TIME_REQUIREMENT_BASE_MINUTES + position_u32;
            (
                RequirementKind::Time,
                minutes * 60,
                format!("Play {} for at least {minutes} minutes", game.name),
                TIME_XP_BASE + position_u32 * TIME_XP_STEP,
            )
        }
        _ => {
            let requirement = STREAK_REQUIREMENT_BASE + position_u32 * STREAK_REQUIREMENT_STEP;
            (
                RequirementKind::Streak,
                requirement,
                format!(
                    "Get a streak of {requirement} correct answers in {}",
                    game.name
                ),
                STREAK_XP_BASE + position_u32 * STREAK_XP_STEP,
            )
        }
    };
    let reward = match position {
        0 => RewardKind::Coins,
        1 => RewardKind::Powerup,
        _ => RewardKind::Badge,
    };
    DailyChallenge {
        id: Uuid::new_v4(),
        game,
        description,
        requirement_type,
        requirement,
        xp,
        reward,
        completed: false,
        progress: 0,
    }
}

/// Result of recording a challenge completion
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// The challenge after the completion was applied
    pub challenge: DailyChallenge,
    /// Progress over the day's set after the completion
    pub progress: ChallengeProgress,
    /// Whether this completion finished the whole set
    pub all_completed: bool,
    /// The streak after any transition fired by this completion
    pub streak: u32,
}

/// Session-local fallback state used when the store is unavailable
#[derive(Debug, Default)]
struct SessionState {
    challenges: Option<(NaiveDate, Vec<DailyChallenge>)>,
    history: Option<ChallengeHistory>,
}

/// Store-backed daily challenge tracking.
///
/// Holds the day's challenge set, completion receipts, and streak state.
/// Every read prefers the persistence port; when the port fails the tracker
/// logs and continues on its session state so the failure never reaches the
/// user (the state simply does not outlive the session).
pub struct ChallengeTracker<S> {
    store: S,
    pool: Vec<GameInfo>,
    session: RwLock<SessionState>,
}

impl<S: StoreProvider> ChallengeTracker<S> {
    /// Create a tracker drawing challenges from the full exercise catalog
    pub fn new(store: S) -> Self {
        Self::with_pool(store, catalog::all_games())
    }

    /// Create a tracker drawing challenges from a custom game pool
    pub fn with_pool(store: S, pool: Vec<GameInfo>) -> Self {
        Self {
            store,
            pool,
            session: RwLock::new(SessionState::default()),
        }
    }

    /// The challenge set for `date`, generating and caching it on first use.
    ///
    /// Repeated calls within the same day return the cached set unchanged;
    /// only [`refresh`](Self::refresh) regenerates.
    pub async fn todays_challenges<R: Rng + Send>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> Vec<DailyChallenge> {
        let mut session = self.session.write().await;
        if let Some((cached_date, cached)) = &session.challenges {
            if *cached_date == date {
                return cached.clone();
            }
        }

        match self.store.get(&StoreKey::DailyChallenges(date)).await {
            Ok(Some(stored)) => {
                debug!(%date, "loaded cached challenge set");
                session.challenges = Some((date, stored));
            }
            Ok(None) => {
                let generated = self.generate_and_store(date, rng).await;
                session.challenges = Some((date, generated));
            }
            Err(err) => {
                warn!(error = %err, %date, "challenge store read failed; using session state");
                let generated = self.generate_and_store(date, rng).await;
                session.challenges = Some((date, generated));
            }
        }

        session
            .challenges
            .as_ref()
            .map(|(_, set)| set.clone())
            .unwrap_or_default()
    }

    /// Discard any cached set for `date` and generate a fresh one
    pub async fn refresh<R: Rng + Send>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> Vec<DailyChallenge> {
        let mut session = self.session.write().await;
        let generated = self.generate_and_store(date, rng).await;
        session.challenges = Some((date, generated.clone()));
        generated
    }

    /// Record a challenge completion.
    ///
    /// Marks the challenge complete, appends a completion receipt, and when
    /// the whole set is complete fires the streak transition (idempotent
    /// within a day). Completing an already-completed challenge changes
    /// nothing and appends no receipt.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no challenge with `id` exists for
    /// `date`.
    pub async fn complete_challenge(
        &self,
        date: NaiveDate,
        id: Uuid,
    ) -> AppResult<CompletionOutcome> {
        let mut session = self.session.write().await;

        let mut challenges = match &session.challenges {
            Some((cached_date, cached)) if *cached_date == date => cached.clone(),
            _ => match self.store.get(&StoreKey::DailyChallenges(date)).await {
                Ok(Some(stored)) => stored,
                Ok(None) => Vec::new(),
                Err(err) => {
                    warn!(error = %err, %date, "challenge store read failed; using session state");
                    Vec::new()
                }
            },
        };

        let challenge = challenges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("challenge {id} for {date}")))?;

        let mut history = self.load_history(&session).await;
        let already_completed = challenge.completed;
        if !already_completed {
            challenge.completed = true;
            challenge.progress = 100;
            history.completed_challenges.push(CompletionReceipt {
                challenge_id: id,
                completed_at: Utc::now(),
            });
        }
        let challenge = challenge.clone();

        let progress = ChallengeProgress::for_set(&challenges);
        let all_completed = progress.all_completed();
        if !already_completed {
            if all_completed {
                history.streak.record_completion(date);
            }
            self.persist_set(date, &challenges).await;
            self.persist_history(&history).await;
        }

        let streak = history.streak.streak;
        session.challenges = Some((date, challenges));
        session.history = Some(history);

        Ok(CompletionOutcome {
            challenge,
            progress,
            all_completed,
            streak,
        })
    }

    /// The persisted challenge history (streak state plus receipts)
    pub async fn history(&self) -> ChallengeHistory {
        let mut session = self.session.write().await;
        let history = self.load_history(&session).await;
        session.history = Some(history.clone());
        history
    }

    async fn load_history(&self, session: &SessionState) -> ChallengeHistory {
        if let Some(history) = &session.history {
            return history.clone();
        }
        match self.store.get(&StoreKey::ChallengeHistory).await {
            Ok(Some(history)) => history,
            Ok(None) => ChallengeHistory::default(),
            Err(err) => {
                warn!(error = %err, "history store read failed; using session state");
                ChallengeHistory::default()
            }
        }
    }

    async fn generate_and_store<R: Rng + Send>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> Vec<DailyChallenge> {
        let generated = generate_daily_challenges(&self.pool, rng);
        debug!(%date, count = generated.len(), "generated challenge set");
        self.persist_set(date, &generated).await;
        generated
    }

    async fn persist_set(&self, date: NaiveDate, challenges: &[DailyChallenge]) {
        let ttl = Some(Duration::from_secs(TTL_DAILY_CHALLENGES_SECS));
        if let Err(err) = self
            .store
            .set(&StoreKey::DailyChallenges(date), &challenges, ttl)
            .await
        {
            warn!(error = %err, %date, "failed to persist challenge set; continuing in-memory");
        }
    }

    async fn persist_history(&self, history: &ChallengeHistory) {
        if let Err(err) = self
            .store
            .set(&StoreKey::ChallengeHistory, history, None)
            .await
        {
            warn!(error = %err, "failed to persist challenge history; continuing in-memory");
        }
    }
}
