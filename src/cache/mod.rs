// ABOUTME: Key-value persistence port for challenge, streak, and score state
// ABOUTME: Pluggable backend trait with typed keys following the provider pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

/// In-memory store implementation
pub mod memory;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::errors::AppResult;

/// Default maximum entries for the in-memory store
pub const DEFAULT_STORE_MAX_ENTRIES: usize = 1024;

/// TTL for a date's cached challenge set (48 hours). A day's challenges stop
/// mattering once the following day has passed.
pub const TTL_DAILY_CHALLENGES_SECS: u64 = 172_800;

/// Store provider trait for pluggable backend implementations
///
/// The engine treats persistence as an instantaneous local key-value access:
/// no retries or backoff live at this layer, and callers are expected to
/// log-and-continue when a store operation fails rather than surface the
/// failure to the user.
///
/// # Examples
///
/// ```rust,no_run
/// use cognia::cache::{memory::MemoryStore, StoreConfig, StoreKey, StoreProvider};
/// use cognia::models::DomainScoreSet;
/// # async fn example() -> Result<(), cognia::errors::AppError> {
/// let store = MemoryStore::new(StoreConfig::default());
///
/// let scores = DomainScoreSet::default_baseline();
/// store.set(&StoreKey::DomainScores, &scores, None).await?;
///
/// let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await?;
/// assert_eq!(cached, Some(scores));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait StoreProvider: Send + Sync {
    /// Store a value under a key, optionally expiring after `ttl`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &StoreKey,
        value: &T,
        ttl: Option<Duration>,
    ) -> AppResult<()>;

    /// Retrieve a value, `None` when absent or expired
    ///
    /// # Errors
    ///
    /// Returns an error if retrieval or deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &StoreKey) -> AppResult<Option<T>>;

    /// Remove a single entry
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails
    async fn delete(&self, key: &StoreKey) -> AppResult<()>;
}

/// Typed keys for everything the engine persists
///
/// Rendered key strings match the platform's existing storage layout so the
/// engine reads state written by earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The generated challenge set for a calendar day
    DailyChallenges(chrono::NaiveDate),
    /// Streak state plus completion receipts
    ChallengeHistory,
    /// The last completed assessment's domain scores
    DomainScores,
}

impl StoreKey {
    /// Render the storage key string for this key
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            Self::DailyChallenges(date) => format!("challenges_{}", date.format("%Y-%m-%d")),
            Self::ChallengeHistory => "challengeHistory".to_owned(),
            Self::DomainScores => "cognitiveDomainScores".to_owned(),
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of entries (for the in-memory store)
    pub max_entries: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_STORE_MAX_ENTRIES,
        }
    }
}
