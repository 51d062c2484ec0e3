//! Tests for the cache gateway over in-memory and misbehaving stores.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use wordweave::cache::{CacheCategory, CacheConfig, CacheGateway, CacheKey, CacheStore, StoredEntry};
use wordweave::{PoemRequest, Result, WordweaveError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Payload {
    poem: String,
    score: f64,
}

fn payload() -> Payload {
    Payload {
        poem: "stars fall\ninto the sea".to_string(),
        score: 0.75,
    }
}

fn poem_key() -> CacheKey {
    CacheKey::for_words(CacheCategory::Poem, &PoemRequest::new("drift", "silver", "moon"))
}

// ============================================================================
// Mock stores
// ============================================================================

/// Every call fails.
struct BrokenStore {
    calls: AtomicU32,
}

#[async_trait]
impl CacheStore for BrokenStore {
    async fn get(&self, _: CacheCategory, _: &str) -> Result<Option<StoredEntry>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(WordweaveError::Cache("connection refused".into()))
    }

    async fn put(&self, _: CacheCategory, _: &str, _: StoredEntry) -> Result<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(WordweaveError::Cache("connection refused".into()))
    }

    async fn delete(&self, _: CacheCategory, _: &str) -> Result<()> {
        Err(WordweaveError::Cache("connection refused".into()))
    }

    async fn health(&self) -> Result<()> {
        Err(WordweaveError::Cache("connection refused".into()))
    }
}

/// Every call hangs.
struct SlowStore;

#[async_trait]
impl CacheStore for SlowStore {
    async fn get(&self, _: CacheCategory, _: &str) -> Result<Option<StoredEntry>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(None)
    }

    async fn put(&self, _: CacheCategory, _: &str, _: StoredEntry) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }

    async fn delete(&self, _: CacheCategory, _: &str) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }

    async fn health(&self) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }
}

/// Always returns the same entry, expired or not.
struct FixedStore(StoredEntry);

#[async_trait]
impl CacheStore for FixedStore {
    async fn get(&self, _: CacheCategory, _: &str) -> Result<Option<StoredEntry>> {
        Ok(Some(self.0.clone()))
    }

    async fn put(&self, _: CacheCategory, _: &str, _: StoredEntry) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _: CacheCategory, _: &str) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Round trip and expiry
// ============================================================================

#[tokio::test]
async fn round_trip() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    let key = poem_key();

    assert_eq!(cache.get::<Payload>(&key).await, None);
    cache.put(&key, &payload()).await;
    assert_eq!(cache.get::<Payload>(&key).await, Some(payload()));
}

#[tokio::test]
async fn normalized_inputs_share_an_entry() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    let stored = CacheKey::for_text(CacheCategory::ThemeAnalysis, "Stars fall\r\nInto the sea");
    let lookup = CacheKey::for_text(CacheCategory::ThemeAnalysis, "  stars fall\ninto the sea  ");

    cache.put(&stored, &payload()).await;
    assert_eq!(cache.get::<Payload>(&lookup).await, Some(payload()));
}

#[tokio::test]
async fn zero_ttl_is_absent() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    let key = poem_key();

    cache.put_with_ttl(&key, &payload(), Duration::ZERO).await;
    assert_eq!(cache.get::<Payload>(&key).await, None);
}

#[tokio::test]
async fn expired_entry_from_store_is_a_miss() {
    let stale = StoredEntry {
        value: json!({"poem": "old", "score": 1.0}),
        expires_at: Utc::now() - chrono::Duration::hours(1),
        created_at: Utc::now() - chrono::Duration::hours(25),
    };
    let cache = CacheGateway::new(Arc::new(FixedStore(stale)), CacheConfig::default());

    assert_eq!(cache.get::<Payload>(&poem_key()).await, None);
}

#[tokio::test]
async fn undecodable_entry_is_a_miss() {
    let entry = StoredEntry::new(json!({"unexpected": true}), Duration::from_secs(60));
    let cache = CacheGateway::new(Arc::new(FixedStore(entry)), CacheConfig::default());

    assert_eq!(cache.get::<Payload>(&poem_key()).await, None);
}

#[tokio::test]
async fn delete_removes() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    let key = poem_key();

    cache.put(&key, &payload()).await;
    cache.delete(&key).await;
    assert_eq!(cache.get::<Payload>(&key).await, None);
}

#[tokio::test]
async fn categories_do_not_collide() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    let poem = CacheKey::for_text(CacheCategory::Poem, "same");
    let theme = CacheKey::for_text(CacheCategory::ThemeAnalysis, "same");

    cache.put(&poem, &payload()).await;
    assert_eq!(cache.get::<Payload>(&theme).await, None);
}

#[tokio::test]
async fn capacity_is_bounded() {
    let config = CacheConfig::new().max_entries(CacheCategory::Poem, 2);
    let store = wordweave::MemoryStore::new(&config);
    for i in 0..20 {
        let entry = StoredEntry::new(json!(i), Duration::from_secs(60));
        store
            .put(CacheCategory::Poem, &format!("k{i}"), entry)
            .await
            .unwrap();
    }
    assert!(store.entry_count(CacheCategory::Poem).await <= 2);
}

// ============================================================================
// Failure tolerance
// ============================================================================

#[tokio::test]
async fn store_errors_are_misses() {
    let store = Arc::new(BrokenStore {
        calls: AtomicU32::new(0),
    });
    let cache = CacheGateway::new(store.clone(), CacheConfig::default());
    let key = poem_key();

    cache.put(&key, &payload()).await;
    assert_eq!(cache.get::<Payload>(&key).await, None);
    cache.delete(&key).await;
    assert!(!cache.health().await);
    assert_eq!(store.calls.load(Ordering::Relaxed), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_store_times_out() {
    let config = CacheConfig::new().timeout(Duration::from_millis(100));
    let cache = CacheGateway::new(Arc::new(SlowStore), config);
    let key = poem_key();

    let start = tokio::time::Instant::now();
    cache.put(&key, &payload()).await;
    assert_eq!(cache.get::<Payload>(&key).await, None);
    assert!(!cache.health().await);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn memory_store_is_healthy() {
    let cache = CacheGateway::in_memory(CacheConfig::default());
    assert!(cache.health().await);
}
