//! Brute-force protection for the login endpoint

use crate::config::AuthConfig;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Per-client failure tracking with exponential lockout.
///
/// Locked-out clients are refused before their credentials are forwarded to
/// the identity provider.
pub struct LoginRateLimiter {
    attempts: DashMap<String, AttemptTracker>,
    max_attempts: u32,
    window: Duration,
    base_lockout: Duration,
}

struct AttemptTracker {
    failure_count: u32,
    window_start: Instant,
    lockout_until: Option<Instant>,
    lockout_count: u32,
}

impl AttemptTracker {
    fn new(now: Instant) -> Self {
        Self {
            failure_count: 0,
            window_start: now,
            lockout_until: None,
            lockout_count: 0,
        }
    }
}

impl LoginRateLimiter {
    /// Build the limiter from configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            attempts: DashMap::new(),
            max_attempts: config.login_max_attempts,
            window: Duration::from_secs(config.login_window_secs),
            base_lockout: Duration::from_secs(config.login_lockout_secs),
        }
    }

    /// Check whether the client may attempt a login.
    ///
    /// Returns the remaining lockout in seconds when refused.
    pub fn check_allowed(&self, client_id: &str) -> Result<(), u64> {
        let now = Instant::now();
        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AttemptTracker::new(now));
        let tracker = entry.value_mut();

        if let Some(lockout_until) = tracker.lockout_until {
            if now < lockout_until {
                return Err(lockout_until.duration_since(now).as_secs().max(1));
            }
            tracker.lockout_until = None;
        }

        if now.duration_since(tracker.window_start) > self.window {
            tracker.failure_count = 0;
            tracker.window_start = now;
        }

        Ok(())
    }

    /// Record a failed attempt; returns the lockout in seconds when the
    /// failure budget is exhausted.
    pub fn record_failure(&self, client_id: &str) -> Option<u64> {
        let now = Instant::now();
        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AttemptTracker::new(now));
        let tracker = entry.value_mut();

        tracker.failure_count += 1;
        if tracker.failure_count < self.max_attempts {
            return None;
        }

        let multiplier = 2u64.saturating_pow(tracker.lockout_count);
        let lockout_secs = self.base_lockout.as_secs().saturating_mul(multiplier);
        tracker.lockout_until = Some(now + Duration::from_secs(lockout_secs));
        tracker.lockout_count += 1;
        tracker.failure_count = 0;
        tracker.window_start = now;

        warn!(client_id, lockout_secs, "login lockout engaged");
        Some(lockout_secs)
    }

    /// Clear the failure window after a successful login
    pub fn record_success(&self, client_id: &str) {
        self.attempts.remove(client_id);
    }
}
