//! Time sources for version 1 generation.

use chrono::{DateTime, Utc};

/// Seconds between the Gregorian reform (1582-10-15T00:00:00Z) and the Unix epoch.
const GREGORIAN_TO_UNIX_SECS: i64 = 12_219_292_800;
const TICKS_PER_SEC: i64 = 10_000_000;
const NANOS_PER_TICK: u32 = 100;
/// Version 1 timestamps are 60 bits wide.
const TIMESTAMP_MASK: u64 = 0x0FFF_FFFF_FFFF_FFFF;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Count of 100-nanosecond intervals since 1582-10-15T00:00:00Z, truncated to 60 bits.
    ///
    /// Instants before the Gregorian epoch clamp to zero.
    fn gregorian_ticks(&self) -> u64 {
        let now = self.now();
        let secs = now.timestamp().saturating_add(GREGORIAN_TO_UNIX_SECS);
        let ticks = secs
            .saturating_mul(TICKS_PER_SEC)
            .saturating_add(i64::from(now.timestamp_subsec_nanos() / NANOS_PER_TICK));
        u64::try_from(ticks).unwrap_or(0) & TIMESTAMP_MASK
    }
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
