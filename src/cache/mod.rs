//! Caching subsystem.
//!
//! [`CacheGateway`] sits in front of a [`CacheStore`] and owns everything
//! category-specific: key derivation, TTLs, lazy expiry, the per-call
//! timeout and hit/miss metrics. Store failures never reach the caller; a
//! failed read is a miss and a failed write is skipped, both with a `warn!`.
//!
//! Keys are `wordweave:{category}:{sha256}` over the normalized request
//! input, so the same words or poem text hit the same entry regardless of
//! case, surrounding whitespace or line endings.

pub mod store;

pub use store::{CacheStore, MemoryStore, StoredEntry};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::telemetry;
use crate::types::PoemRequest;

/// What a cache entry holds. Each category has its own TTL and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    Poem,
    ThemeAnalysis,
}

impl CacheCategory {
    pub const ALL: [CacheCategory; 2] = [CacheCategory::Poem, CacheCategory::ThemeAnalysis];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poem => "poem",
            Self::ThemeAnalysis => "theme_analysis",
        }
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable cache key derived from normalized request input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    category: CacheCategory,
    hash: String,
}

impl CacheKey {
    /// Key for free text (a poem).
    pub fn for_text(category: CacheCategory, text: &str) -> Self {
        Self {
            category,
            hash: sha256_hex(&normalize(text)),
        }
    }

    /// Key for a generation request: words joined with `-`.
    pub fn for_words(category: CacheCategory, words: &PoemRequest) -> Self {
        let joined = format!(
            "{}-{}-{}",
            normalize(&words.verb),
            normalize(&words.adjective),
            normalize(&words.noun)
        );
        Self {
            category,
            hash: sha256_hex(&joined),
        }
    }

    pub fn category(&self) -> CacheCategory {
        self.category
    }

    /// Lowercase hex SHA-256 of the normalized input.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wordweave:{}:{}", self.category, self.hash)
    }
}

/// Trim, lowercase and unify line endings.
fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn sha256_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

// ============================================================================
// Configuration
// ============================================================================

/// TTL and capacity for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Duration,
    pub max_entries: u64,
}

/// Cache configuration for every category.
///
/// ```rust
/// # use wordweave::cache::{CacheCategory, CacheConfig};
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .ttl(CacheCategory::Poem, Duration::from_secs(3600))
///     .timeout(Duration::from_millis(500));
/// assert_eq!(config.policy(CacheCategory::Poem).max_entries, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Policy for generated poems. Default: 24 hours, 1,000 entries.
    pub poem: CachePolicy,
    /// Policy for theme analyses. Default: 7 days, 500 entries.
    pub theme_analysis: CachePolicy,
    /// Upper bound on any single store call. Default: 2 seconds.
    pub timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            poem: CachePolicy {
                ttl: Duration::from_secs(24 * 60 * 60),
                max_entries: 1_000,
            },
            theme_analysis: CachePolicy {
                ttl: Duration::from_secs(7 * 24 * 60 * 60),
                max_entries: 500,
            },
            timeout: Duration::from_secs(2),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(&self, category: CacheCategory) -> CachePolicy {
        match category {
            CacheCategory::Poem => self.poem,
            CacheCategory::ThemeAnalysis => self.theme_analysis,
        }
    }

    fn policy_mut(&mut self, category: CacheCategory) -> &mut CachePolicy {
        match category {
            CacheCategory::Poem => &mut self.poem,
            CacheCategory::ThemeAnalysis => &mut self.theme_analysis,
        }
    }

    /// Set the time-to-live for a category.
    pub fn ttl(mut self, category: CacheCategory, ttl: Duration) -> Self {
        self.policy_mut(category).ttl = ttl;
        self
    }

    /// Set the maximum number of entries for a category.
    pub fn max_entries(mut self, category: CacheCategory, n: u64) -> Self {
        self.policy_mut(category).max_entries = n;
        self
    }

    /// Set the per-call store timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Typed, failure-tolerant access to a [`CacheStore`].
#[derive(Clone)]
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    config: CacheConfig,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    /// Gateway over a fresh [`MemoryStore`] sized from `config`.
    pub fn in_memory(config: CacheConfig) -> Self {
        let store = Arc::new(MemoryStore::new(&config));
        Self::new(store, config)
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up a live entry and decode it.
    ///
    /// Expired entries, undecodable values, store errors and timeouts all
    /// come back as `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let category = key.category().as_str();
        let id = key.to_string();

        let entry = match tokio::time::timeout(
            self.config.timeout,
            self.store.get(key.category(), &id),
        )
        .await
        {
            Ok(Ok(entry)) => entry,
            Ok(Err(e)) => {
                self.record_error(key, "get", &e.to_string());
                None
            }
            Err(_) => {
                self.record_error(key, "get", "timed out");
                None
            }
        };

        let value = entry.filter(|e| !e.is_expired()).and_then(|e| {
            serde_json::from_value(e.value)
                .map_err(|err| self.record_error(key, "decode", &err.to_string()))
                .ok()
        });

        if value.is_some() {
            debug!(key = %id, "cache hit");
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "category" => category).increment(1);
        } else {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "category" => category).increment(1);
        }
        value
    }

    /// Store `value` with its category's TTL.
    pub async fn put<T: Serialize>(&self, key: &CacheKey, value: &T) {
        let ttl = self.config.policy(key.category()).ttl;
        self.put_with_ttl(key, value, ttl).await;
    }

    /// Store `value` with an explicit TTL.
    pub async fn put_with_ttl<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: Duration) {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                self.record_error(key, "encode", &e.to_string());
                return;
            }
        };
        let entry = StoredEntry::new(value, ttl);
        let id = key.to_string();

        match tokio::time::timeout(
            self.config.timeout,
            self.store.put(key.category(), &id, entry),
        )
        .await
        {
            Ok(Ok(())) => debug!(key = %id, ttl_secs = ttl.as_secs(), "cached"),
            Ok(Err(e)) => self.record_error(key, "put", &e.to_string()),
            Err(_) => self.record_error(key, "put", "timed out"),
        }
    }

    /// Remove an entry.
    pub async fn delete(&self, key: &CacheKey) {
        let id = key.to_string();
        match tokio::time::timeout(self.config.timeout, self.store.delete(key.category(), &id))
            .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.record_error(key, "delete", &e.to_string()),
            Err(_) => self.record_error(key, "delete", "timed out"),
        }
    }

    /// Whether the backing store answers within the timeout.
    pub async fn health(&self) -> bool {
        matches!(
            tokio::time::timeout(self.config.timeout, self.store.health()).await,
            Ok(Ok(()))
        )
    }

    fn record_error(&self, key: &CacheKey, op: &'static str, error: &str) {
        warn!(key = %key, op, error, "cache operation failed");
        metrics::counter!(
            telemetry::CACHE_ERRORS_TOTAL,
            "category" => key.category().as_str(),
            "op" => op
        )
        .increment(1);
    }
}
