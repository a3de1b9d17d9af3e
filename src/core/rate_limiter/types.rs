//! Rate limiter types and data structures

use std::time::Duration;
use tokio::time::Instant;

/// Outcome of one counted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Requests counted in the current window, including this one
    pub count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Time until the window resets
    pub retry_after: Duration,
}

impl RateLimitDecision {
    /// Decision used when limiting is disabled
    pub fn unlimited(limit: u32) -> Self {
        Self {
            allowed: true,
            count: 0,
            limit,
            remaining: limit,
            retry_after: Duration::ZERO,
        }
    }

    /// Whole seconds for a `Retry-After` header, never less than one
    pub fn retry_after_secs(&self) -> u64 {
        let secs = self.retry_after.as_secs();
        let rounded = if self.retry_after.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        };
        rounded.max(1)
    }
}

/// Window length used when `now + window` overflows
const MAX_WINDOW: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// End of a window starting at `now`, saturating instead of overflowing
pub(super) fn window_end(now: Instant, window: Duration) -> Instant {
    now.checked_add(window).unwrap_or_else(|| now + MAX_WINDOW.min(window))
}

/// Counter for one key
#[derive(Debug, Clone, Copy)]
pub(super) struct RateLimitState {
    pub(super) count: u32,
    pub(super) window_reset_at: Instant,
}

impl RateLimitState {
    pub(super) fn new(now: Instant, window: Duration) -> Self {
        Self {
            count: 0,
            window_reset_at: window_end(now, window),
        }
    }

    pub(super) fn is_expired_at(&self, now: Instant) -> bool {
        now > self.window_reset_at
    }

    pub(super) fn reset(&mut self, now: Instant, window: Duration) {
        self.count = 0;
        self.window_reset_at = window_end(now, window);
    }
}
