// ABOUTME: Integration tests for the in-memory store backend
// ABOUTME: Covers round-trips, TTL expiry, LRU eviction, and rendered key strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use cognia::cache::memory::MemoryStore;
use cognia::cache::{StoreConfig, StoreKey, StoreProvider};
use cognia::models::DomainScoreSet;
use std::time::Duration;

fn challenge_key(d: u32) -> StoreKey {
    StoreKey::DailyChallenges(NaiveDate::from_ymd_opt(2026, 8, d).unwrap())
}

#[tokio::test]
async fn test_set_and_get_round_trip() {
    let store = MemoryStore::default();
    let scores = DomainScoreSet::default_baseline();

    store.set(&StoreKey::DomainScores, &scores, None).await.unwrap();
    let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await.unwrap();
    assert_eq!(cached, Some(scores));
}

#[tokio::test]
async fn test_get_missing_key_returns_none() {
    let store = MemoryStore::default();
    let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await.unwrap();
    assert_eq!(cached, None);
}

#[tokio::test]
async fn test_delete_removes_the_entry() {
    let store = MemoryStore::default();
    let scores = DomainScoreSet::default_baseline();

    store.set(&StoreKey::DomainScores, &scores, None).await.unwrap();
    store.delete(&StoreKey::DomainScores).await.unwrap();
    let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await.unwrap();
    assert_eq!(cached, None);
}

#[tokio::test]
async fn test_expired_entries_read_as_absent() {
    let store = MemoryStore::default();
    let scores = DomainScoreSet::default_baseline();

    store
        .set(
            &StoreKey::DomainScores,
            &scores,
            Some(Duration::from_millis(30)),
        )
        .await
        .unwrap();
    let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await.unwrap();
    assert!(cached.is_some());

    tokio::time::sleep(Duration::from_millis(80)).await;
    let cached: Option<DomainScoreSet> = store.get(&StoreKey::DomainScores).await.unwrap();
    assert_eq!(cached, None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_lru_evicts_oldest_entry_at_capacity() {
    let store = MemoryStore::new(StoreConfig { max_entries: 2 });

    for d in 1..=3 {
        store.set(&challenge_key(d), &vec![d], None).await.unwrap();
    }

    let first: Option<Vec<u32>> = store.get(&challenge_key(1)).await.unwrap();
    let last: Option<Vec<u32>> = store.get(&challenge_key(3)).await.unwrap();
    assert_eq!(first, None);
    assert_eq!(last, Some(vec![3]));
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_clones_share_the_underlying_store() {
    let store = MemoryStore::default();
    let clone = store.clone();
    let scores = DomainScoreSet::default_baseline();

    store.set(&StoreKey::DomainScores, &scores, None).await.unwrap();
    let cached: Option<DomainScoreSet> = clone.get(&StoreKey::DomainScores).await.unwrap();
    assert_eq!(cached, Some(scores));
}

#[test]
fn test_store_keys_render_the_platform_layout() {
    assert_eq!(challenge_key(7).storage_key(), "challenges_2026-08-07");
    assert_eq!(StoreKey::ChallengeHistory.storage_key(), "challengeHistory");
    assert_eq!(StoreKey::DomainScores.storage_key(), "cognitiveDomainScores");
}
