// ABOUTME: In-memory store implementation with LRU eviction and TTL support
// ABOUTME: Expired entries are dropped lazily on read; no background task at this layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::{StoreConfig, StoreKey, StoreProvider};
use crate::errors::AppResult;

/// In-memory store entry with optional expiration
#[derive(Debug, Clone)]
struct StoreEntry {
    data: Vec<u8>,
    expires_at: Option<Instant>,
}

impl StoreEntry {
    fn new(data: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            data,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// In-memory store with LRU eviction
///
/// Uses `Arc<RwLock<LruCache>>` so clones share one underlying map, matching
/// how the engine hands a single store to multiple trackers. Expired entries
/// are evicted on the read path; the engine's keys are too few to warrant a
/// cleanup task.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<LruCache<String, StoreEntry>>>,
}

impl MemoryStore {
    /// Fallback capacity when config specifies zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a new in-memory store
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of live (unexpired) entries, for diagnostics and tests
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.iter().filter(|(_, e)| !e.is_expired()).count()
    }

    /// Whether the store holds no live entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[async_trait::async_trait]
impl StoreProvider for MemoryStore {
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &StoreKey,
        value: &T,
        ttl: Option<Duration>,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let entry = StoreEntry::new(serialized, ttl);
        let mut entries = self.entries.write().await;
        entries.put(key.storage_key(), entry);
        drop(entries);
        tracing::debug!(key = %key, "stored entry");
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &StoreKey) -> AppResult<Option<T>> {
        let storage_key = key.storage_key();
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get(&storage_key) else {
            return Ok(None);
        };
        if entry.is_expired() {
            entries.pop(&storage_key);
            drop(entries);
            tracing::debug!(key = %key, "entry expired");
            return Ok(None);
        }
        let value = serde_json::from_slice(&entry.data)?;
        Ok(Some(value))
    }

    async fn delete(&self, key: &StoreKey) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.pop(&key.storage_key());
        Ok(())
    }
}
