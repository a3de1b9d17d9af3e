//! In-memory TTL cache backed by a sharded map

use super::ScoreCache;
use super::types::{AtomicCacheStats, CacheEntry, CacheStats};
use crate::config::CacheConfig;
use crate::core::types::EmotionScore;
use crate::utils::error::{Result, SentimentError};
use crate::utils::task::PeriodicTask;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

const STOP_GRACE: Duration = Duration::from_secs(5);

/// TTL cache of sentiment scores keyed by exact text
pub struct SentimentCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
    cleanup_interval: Duration,
    max_entries: Option<usize>,
    stats: Arc<AtomicCacheStats>,
    sweeper: Mutex<Option<PeriodicTask>>,
}

impl SentimentCache {
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
            cleanup_interval,
            max_entries: None,
            stats: Arc::new(AtomicCacheStats::default()),
            sweeper: Mutex::new(None),
        }
    }

    /// Build from configuration
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl(), config.cleanup_interval()).with_max_entries(config.max_entries)
    }

    /// Bound the number of stored entries.
    ///
    /// The bound is soft: eviction and insertion are separate steps, so
    /// concurrent writers of new keys may each overshoot it by one entry.
    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `text` is stored, expired or not
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Remove every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        sweep(&self.entries, self.ttl, &self.stats)
    }

    pub fn is_running(&self) -> bool {
        self.sweeper.lock().is_some()
    }

    fn lookup(&self, text: &str) -> Option<Vec<EmotionScore>> {
        let now = Instant::now();
        let found = self
            .entries
            .get(text)
            .map(|entry| (entry.is_expired_at(now, self.ttl), entry.scores.clone()));

        match found {
            Some((false, scores)) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(scores.to_vec())
            }
            Some((true, _)) => {
                let ttl = self.ttl;
                // A concurrent set may have refreshed the entry since the read.
                if self
                    .entries
                    .remove_if(text, |_, entry| entry.is_expired_at(Instant::now(), ttl))
                    .is_some()
                {
                    self.stats.expired_evictions.fetch_add(1, Ordering::Relaxed);
                    debug!("Evicted expired cache entry on lookup");
                }
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Remove the oldest entry; `false` when the cache is empty
    fn evict_oldest(&self) -> bool {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());

        match oldest {
            Some(key) => {
                if self.entries.remove(&key).is_some() {
                    self.stats.capacity_evictions.fetch_add(1, Ordering::Relaxed);
                }
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ScoreCache for SentimentCache {
    fn get(&self, text: &str) -> Result<Option<Vec<EmotionScore>>> {
        Ok(self.lookup(text))
    }

    fn set(&self, text: &str, scores: Vec<EmotionScore>) -> Result<()> {
        if scores.is_empty() {
            return Err(SentimentError::cache("Refusing to cache an empty score list"));
        }

        if let Some(max) = self.max_entries {
            if !self.entries.contains_key(text) {
                while self.entries.len() >= max && self.evict_oldest() {}
            }
        }

        self.entries.insert(text.to_string(), CacheEntry::new(scores));
        Ok(())
    }

    /// Spawn the sweep task; calling it again while running does nothing
    fn start(&self) {
        let mut sweeper = self.sweeper.lock();
        if sweeper.is_some() {
            return;
        }

        let entries = self.entries.clone();
        let stats = self.stats.clone();
        let ttl = self.ttl;

        *sweeper = Some(PeriodicTask::spawn(
            "cache-sweep",
            self.cleanup_interval,
            move || {
                let removed = sweep(&entries, ttl, &stats);
                if removed > 0 {
                    debug!(removed, remaining = entries.len(), "Cache sweep removed expired entries");
                }
            },
        ));

        info!(
            ttl_secs = self.ttl.as_secs(),
            interval_secs = self.cleanup_interval.as_secs(),
            "Cache sweep started"
        );
    }

    async fn stop(&self) {
        let sweeper = self.sweeper.lock().take();
        if let Some(task) = sweeper {
            task.shutdown(STOP_GRACE).await;
            info!("Cache sweep stopped");
        }
    }
}

fn sweep(entries: &DashMap<String, CacheEntry>, ttl: Duration, stats: &AtomicCacheStats) -> usize {
    let now = Instant::now();
    let mut removed = 0;
    entries.retain(|_, entry| {
        let keep = !entry.is_expired_at(now, ttl);
        if !keep {
            removed += 1;
        }
        keep
    });

    stats
        .expired_evictions
        .fetch_add(removed as u64, Ordering::Relaxed);
    removed
}
