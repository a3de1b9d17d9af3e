//! Cache entry and statistics types

use crate::core::types::EmotionScore;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// Stored classifier output for one text.
///
/// Immutable once built; re-insertion replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Scores in the order they were stored
    pub scores: Arc<[EmotionScore]>,
    /// When the entry was stored
    pub created_at: Instant,
}

impl CacheEntry {
    pub fn new(scores: Vec<EmotionScore>) -> Self {
        Self {
            scores: scores.into(),
            created_at: Instant::now(),
        }
    }

    /// Expired once strictly older than `ttl`
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }

    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }
}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub(super) struct AtomicCacheStats {
    pub(super) hits: AtomicU64,
    pub(super) misses: AtomicU64,
    pub(super) expired_evictions: AtomicU64,
    pub(super) capacity_evictions: AtomicU64,
}

impl AtomicCacheStats {
    pub(super) fn snapshot(&self, entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired_evictions: self.expired_evictions.load(Ordering::Relaxed),
            capacity_evictions: self.capacity_evictions.load(Ordering::Relaxed),
            entries,
        }
    }
}

/// Cache statistics snapshot
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries removed because they outlived the TTL
    pub expired_evictions: u64,
    /// Entries removed to respect `max_entries`
    pub capacity_evictions: u64,
    /// Entries currently stored
    pub entries: usize,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
