//! Injected time source.
//!
//! Every workflow reads the current time through the [`Clock`] capability
//! rather than an ambient system clock, keeping TTL and expiry checks
//! deterministic under test.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Months, TimeZone, Utc};

/// Time source injected into every mutation.
pub trait Clock {
    /// Current time as Unix epoch seconds.
    fn now(&self) -> u64;
}

/// Wall-clock time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Cloneable handle: tests keep one handle to advance time while a borrowed
/// handle sits inside the operation context.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock fixed at the given epoch seconds.
    pub fn at(now: u64) -> Self {
        Self { now: Arc::new(AtomicU64::new(now)) }
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advances the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Adds whole calendar years to an epoch-seconds timestamp.
///
/// Calendar-correct: Feb 29 clamps to Feb 28 in a non-leap target year.
/// Timestamps outside chrono's representable range fall back to flat
/// 365-day years.
pub fn add_years(now_secs: u64, years: u32) -> u64 {
    const FALLBACK_YEAR_SECS: u64 = 365 * 24 * 60 * 60;

    let months = Months::new(years.saturating_mul(12));
    let added = Utc
        .timestamp_opt(i64::try_from(now_secs).unwrap_or(i64::MAX), 0)
        .single()
        .and_then(|dt| dt.checked_add_months(months));

    match added {
        Some(dt) => dt.timestamp().max(0) as u64,
        None => now_secs.saturating_add(u64::from(years).saturating_mul(FALLBACK_YEAR_SECS)),
    }
}
