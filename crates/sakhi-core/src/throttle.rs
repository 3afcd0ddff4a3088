//! Minimum-spacing throttle for outbound completion requests
//!
//! The gate holds the instant of the last accepted dispatch behind a single
//! lock, so the check and the update happen in one critical section: two
//! near-simultaneous callers can never both see the gate as idle.
//!
//! Cloning a [`ThrottleGate`] shares the underlying state, the same way the
//! rate limiter clones coordinate through an `Arc`.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default minimum spacing between accepted requests
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 3_000;

/// Result of a throttle check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// The call may proceed; `last_accepted` now equals the check time
    Accepted,
    /// The call came too soon after the last accepted one
    Rejected {
        /// How long until the gate is idle again
        retry_after: Duration,
    },
}

impl ThrottleDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Observable gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleState {
    /// Ready to accept
    Idle,
    /// Within the minimum interval of the last accepted call
    Cooling { remaining: Duration },
}

/// Process-wide pacing guard
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    min_interval: Duration,
    last_accepted: Arc<Mutex<Option<Instant>>>,
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::from_millis(DEFAULT_MIN_INTERVAL_MS)
    }
}

impl ThrottleGate {
    /// Create a gate with the given minimum spacing
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: Arc::new(Mutex::new(None)),
        }
    }

    pub fn from_millis(min_interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_interval_ms))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Check the gate at `now`, advancing it on acceptance.
    ///
    /// A rejected call leaves the last-accepted instant untouched.
    pub fn try_acquire(&self, now: Instant) -> ThrottleDecision {
        let mut last = self.last_accepted.lock();

        if let Some(remaining) = Self::remaining(*last, now, self.min_interval) {
            debug!(
                "Throttle gate: rejected, {}ms until idle",
                remaining.as_millis()
            );
            return ThrottleDecision::Rejected {
                retry_after: remaining,
            };
        }

        *last = Some(now);
        ThrottleDecision::Accepted
    }

    /// Current state as seen at `now`. Does not mutate.
    pub fn state(&self, now: Instant) -> ThrottleState {
        let last = self.last_accepted.lock();
        match Self::remaining(*last, now, self.min_interval) {
            Some(remaining) => ThrottleState::Cooling { remaining },
            None => ThrottleState::Idle,
        }
    }

    // `now` earlier than `last` counts as zero elapsed.
    fn remaining(last: Option<Instant>, now: Instant, min_interval: Duration) -> Option<Duration> {
        let last = last?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed >= min_interval {
            None
        } else {
            Some(min_interval - elapsed)
        }
    }
}
