//! Duration intervals with explicit time units

use std::ops::Add;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Resolution of an [`Interval`] magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// A duration expressed as magnitude plus unit, e.g. "30 minutes".
///
/// Slots and metered rates are configured in intervals; comparisons are by
/// resolved duration length, not by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub magnitude: i64,
    pub unit: TimeUnit,
}

impl Interval {
    /// Sentinel for "no configured end": roughly 270 years, far beyond any
    /// realistic rental, so it never wins a `min(...)` against a real bound.
    pub const UNBOUNDED: Interval = Interval::new(100_000, TimeUnit::Days);

    pub const fn new(magnitude: i64, unit: TimeUnit) -> Self {
        Interval { magnitude, unit }
    }

    pub fn as_duration(self) -> Duration {
        match self.unit {
            TimeUnit::Seconds => Duration::seconds(self.magnitude),
            TimeUnit::Minutes => Duration::minutes(self.magnitude),
            TimeUnit::Hours => Duration::hours(self.magnitude),
            TimeUnit::Days => Duration::days(self.magnitude),
        }
    }

    pub fn as_millis(self) -> i64 {
        self.as_duration().num_milliseconds()
    }
}

impl Add<Interval> for DateTime<Utc> {
    type Output = DateTime<Utc>;

    /// Saturates at the calendar maximum; the unbounded sentinel must stay
    /// addable to any realistic timestamp without overflow.
    fn add(self, rhs: Interval) -> DateTime<Utc> {
        self.checked_add_signed(rhs.as_duration())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

// ── Tests ──────────────────────────────────────────────────────
