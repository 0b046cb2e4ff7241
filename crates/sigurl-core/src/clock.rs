//! Time source and expiry-timestamp helpers.
//!
//! Expiry timestamps are plain Unix seconds. The [`Clock`] trait lets the
//! signer and the verifier read "now" from an injected source so expiry
//! boundaries can be tested exactly.

use std::fmt;

use chrono::Utc;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// Seconds in a day.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// A source of the current Unix time in seconds.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> i64;

    /// `now() + minutes * 60`.
    fn now_plus_minutes(&self, minutes: i64) -> i64 {
        self.now().saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
    }

    /// `now() + hours * 3600`.
    fn now_plus_hours(&self, hours: i64) -> i64 {
        self.now().saturating_add(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    /// `now() + days * 86400`.
    fn now_plus_days(&self, days: i64) -> i64 {
        self.now().saturating_add(days.saturating_mul(SECONDS_PER_DAY))
    }
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock frozen at a fixed instant.
///
/// # Examples
///
/// ```
/// use sigurl_core::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_700_000_000);
/// assert_eq!(clock.now_plus_hours(1), 1_700_003_600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(i64);

impl FixedClock {
    /// Create a clock that always reports `timestamp`.
    #[must_use]
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Current Unix time plus `minutes` minutes.
#[must_use]
pub fn now_plus_minutes(minutes: i64) -> i64 {
    SystemClock.now_plus_minutes(minutes)
}

/// Current Unix time plus `hours` hours.
#[must_use]
pub fn now_plus_hours(hours: i64) -> i64 {
    SystemClock.now_plus_hours(hours)
}

/// Current Unix time plus `days` days.
#[must_use]
pub fn now_plus_days(days: i64) -> i64 {
    SystemClock.now_plus_days(days)
}
