//! Core rate limiter implementation

use super::types::{RateLimitDecision, RateLimitState};
use crate::config::RateLimitConfig;
use crate::utils::task::PeriodicTask;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

const STOP_GRACE: Duration = Duration::from_secs(5);

/// Fixed window rate limiter keyed by caller identity
pub struct RateLimiter {
    name: &'static str,
    enabled: bool,
    /// Limit applied by [`RateLimiter::check`]
    default_limit: u32,
    window: Duration,
    cleanup_interval: Duration,
    max_tracked_keys: Option<usize>,
    entries: Arc<DashMap<String, RateLimitState>>,
    cleaner: Mutex<Option<PeriodicTask>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(default_limit: u32, window: Duration) -> Self {
        Self {
            name: "rate-limiter",
            enabled: true,
            default_limit,
            window,
            cleanup_interval: window,
            max_tracked_keys: None,
            entries: Arc::new(DashMap::new()),
            cleaner: Mutex::new(None),
        }
    }

    /// Limiter for the analysis endpoint
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.requests_per_window, config.window())
            .named("api-rate-limiter")
            .with_enabled(config.enabled)
            .with_cleanup_interval(config.cleanup_interval())
            .with_max_tracked_keys(config.max_tracked_keys)
    }

    /// IP-keyed limiter for the health endpoint
    pub fn health_from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.health_requests_per_window, config.window())
            .named("health-rate-limiter")
            .with_enabled(config.enabled)
            .with_cleanup_interval(config.cleanup_interval())
            .with_max_tracked_keys(config.max_tracked_keys)
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }

    /// Bound the number of tracked keys.
    ///
    /// The bound is soft: concurrent first requests from new keys may each
    /// overshoot it by one entry.
    pub fn with_max_tracked_keys(mut self, max: Option<usize>) -> Self {
        self.max_tracked_keys = max;
        self
    }

    /// Count a request against the default limit and window
    pub fn check(&self, key: &str) -> RateLimitDecision {
        self.check_and_increment(key, self.default_limit, self.window)
    }

    /// Atomically count a request for `key` and decide whether it is allowed.
    ///
    /// The shard lock is held from reading the window to writing the new
    /// count. Rejected requests still count.
    pub fn check_and_increment(&self, key: &str, limit: u32, window: Duration) -> RateLimitDecision {
        if !self.enabled {
            return RateLimitDecision::unlimited(limit);
        }

        let now = Instant::now();

        if let Some(max) = self.max_tracked_keys {
            if !self.entries.contains_key(key) && self.entries.len() >= max {
                self.make_room(max, now);
            }
        }

        let (count, reset_at) = {
            let mut state = self
                .entries
                .entry(key.to_string())
                .or_insert_with(|| RateLimitState::new(now, window));

            if state.is_expired_at(now) {
                state.reset(now, window);
            }
            state.count = state.count.saturating_add(1);
            (state.count, state.window_reset_at)
        };

        let allowed = count <= limit;
        if !allowed {
            debug!(limiter = self.name, count, limit, "Rate limit exceeded");
        }

        RateLimitDecision {
            allowed,
            count,
            limit,
            remaining: limit.saturating_sub(count),
            retry_after: reset_at.saturating_duration_since(now),
        }
    }

    /// Remove keys whose window has passed, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        purge(&self.entries, Instant::now())
    }

    fn make_room(&self, max: usize, now: Instant) {
        purge(&self.entries, now);
        if self.entries.len() < max {
            return;
        }

        while self.entries.len() >= max {
            let earliest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().window_reset_at)
                .map(|entry| entry.key().clone());

            match earliest {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }

    /// Start background purge task
    pub fn start_cleanup_task(&self) {
        let mut cleaner = self.cleaner.lock();
        if cleaner.is_some() || !self.enabled {
            return;
        }

        let entries = self.entries.clone();
        let name = self.name;
        *cleaner = Some(PeriodicTask::spawn(name, self.cleanup_interval, move || {
            let removed = purge(&entries, Instant::now());
            if removed > 0 {
                debug!(limiter = name, removed, "Purged expired rate limit windows");
            }
        }));

        info!(limiter = self.name, "Rate limiter cleanup started");
    }

    /// Stop background purge task
    pub async fn stop(&self) {
        let cleaner = self.cleaner.lock().take();
        if let Some(task) = cleaner {
            task.shutdown(STOP_GRACE).await;
            info!(limiter = self.name, "Rate limiter cleanup stopped");
        }
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.default_limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

fn purge(entries: &DashMap<String, RateLimitState>, now: Instant) -> usize {
    let mut removed = 0;
    entries.retain(|_, state| {
        let keep = !state.is_expired_at(now);
        if !keep {
            removed += 1;
        }
        keep
    });
    removed
}
