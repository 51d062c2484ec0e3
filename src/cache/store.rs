//! Cache storage backends.
//!
//! [`CacheStore`] is the seam for a shared backend; [`MemoryStore`] is the
//! bundled in-process implementation on top of moka. Entries carry their own
//! expiry so a store never has to know category TTLs.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use serde::{Deserialize, Serialize};

use super::{CacheCategory, CacheConfig};
use crate::Result;

/// A cached value with its lifetime bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub value: serde_json::Value,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl StoredEntry {
    /// Wrap `value` so it expires `ttl` from now.
    pub fn new(value: serde_json::Value, ttl: Duration) -> Self {
        let created_at = Utc::now();
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = created_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            value,
            expires_at,
            created_at,
        }
    }

    /// True once `expires_at` is no longer in the future.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Key-value storage for cache entries, partitioned by category.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch an entry. Expired entries may still be returned; the gateway
    /// checks expiry itself.
    async fn get(&self, category: CacheCategory, key: &str) -> Result<Option<StoredEntry>>;

    /// Insert or replace an entry.
    async fn put(&self, category: CacheCategory, key: &str, entry: StoredEntry) -> Result<()>;

    /// Remove an entry. Removing a missing key is not an error.
    async fn delete(&self, category: CacheCategory, key: &str) -> Result<()>;

    /// Reachability check for the health endpoint.
    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

struct EntryExpiry;

impl Expiry<String, StoredEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.remaining())
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.remaining())
    }
}

/// In-process store with one bounded moka cache per category.
///
/// Each category is capped at its configured `max_entries` and evicts
/// entries eagerly once their own `expires_at` passes.
pub struct MemoryStore {
    caches: HashMap<CacheCategory, Cache<String, StoredEntry>>,
}

impl MemoryStore {
    /// Create a store sized from `config`.
    pub fn new(config: &CacheConfig) -> Self {
        let caches = CacheCategory::ALL
            .iter()
            .map(|&category| {
                let cache = Cache::builder()
                    .max_capacity(config.policy(category).max_entries)
                    .expire_after(EntryExpiry)
                    .build();
                (category, cache)
            })
            .collect();
        Self { caches }
    }

    fn cache(&self, category: CacheCategory) -> Option<&Cache<String, StoredEntry>> {
        self.caches.get(&category)
    }

    /// Number of live entries in `category` (approximate, for diagnostics).
    pub async fn entry_count(&self, category: CacheCategory) -> u64 {
        match self.cache(category) {
            Some(cache) => {
                cache.run_pending_tasks().await;
                cache.entry_count()
            }
            None => 0,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, category: CacheCategory, key: &str) -> Result<Option<StoredEntry>> {
        Ok(match self.cache(category) {
            Some(cache) => cache.get(key).await,
            None => None,
        })
    }

    async fn put(&self, category: CacheCategory, key: &str, entry: StoredEntry) -> Result<()> {
        if let Some(cache) = self.cache(category) {
            cache.insert(key.to_string(), entry).await;
        }
        Ok(())
    }

    async fn delete(&self, category: CacheCategory, key: &str) -> Result<()> {
        if let Some(cache) = self.cache(category) {
            cache.invalidate(key).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_expiry() {
        let live = StoredEntry::new(json!(1), Duration::from_secs(60));
        assert!(!live.is_expired());
        assert!(live.expires_at > live.created_at);

        let dead = StoredEntry::new(json!(1), Duration::ZERO);
        assert!(dead.is_expired());
    }

    #[test]
    fn huge_ttl_saturates() {
        let entry = StoredEntry::new(json!(1), Duration::MAX);
        assert!(!entry.is_expired());
    }

    #[tokio::test]
    async fn categories_are_isolated() {
        let store = MemoryStore::default();
        let entry = StoredEntry::new(json!("poem"), Duration::from_secs(60));
        store
            .put(CacheCategory::Poem, "k", entry.clone())
            .await
            .unwrap();

        assert_eq!(
            store.get(CacheCategory::Poem, "k").await.unwrap(),
            Some(entry)
        );
        assert_eq!(
            store.get(CacheCategory::ThemeAnalysis, "k").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let store = MemoryStore::default();
        let entry = StoredEntry::new(json!(1), Duration::from_secs(60));
        store.put(CacheCategory::Poem, "k", entry).await.unwrap();
        store.delete(CacheCategory::Poem, "k").await.unwrap();
        assert_eq!(store.get(CacheCategory::Poem, "k").await.unwrap(), None);

        // missing key
        store.delete(CacheCategory::Poem, "nope").await.unwrap();
    }
}
