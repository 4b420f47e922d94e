//! Tariff aggregate
//!
//! A tariff combines a set of rates with a time/slot structure. Tariffs are
//! immutable, already-validated inputs; the calculators never mutate them.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::rate::{Rate, RateId};

/// Opaque tariff identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TariffId(pub u64);

impl fmt::Display for TariffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tariff variants, dispatched by the top-level [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tariff {
    /// Offset-based slots repeating per billing period.
    SlotBased(SlotBasedTariff),
    /// Weekly wall-clock schedule in a fixed time zone.
    TimeBased(TimeBasedTariff),
}

impl Tariff {
    pub fn id(&self) -> TariffId {
        match self {
            Tariff::SlotBased(t) => t.id,
            Tariff::TimeBased(t) => t.id,
        }
    }
}

/// A tariff whose slots are offsets from the start of each billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotBasedTariff {
    pub id: TariffId,
    /// Leading grace period in seconds, deducted before billing begins.
    #[serde(default)]
    pub free_seconds: u32,
    /// Recurring reset period; `None` means one infinite billing period.
    #[serde(default)]
    pub billing_interval: Option<Interval>,
    pub rates: Vec<Rate>,
    pub slots: Vec<Slot>,
}

/// One offset window within a billing period, mapped to a rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Offset of the slot start from the billing period start.
    pub start: Interval,
    /// Offset of the slot end; `None` means the slot has no configured end.
    pub end: Option<Interval>,
    pub rate: RateId,
}

impl Slot {
    /// Whether this slot's offset window intersects the first billing
    /// period `[rental_start, billing_end)`. Start offsets are
    /// non-negative, so only the lower bound can disqualify a slot.
    pub fn matches(&self, rental_start: DateTime<Utc>, billing_end: DateTime<Utc>) -> bool {
        rental_start + self.start < billing_end
    }

    /// Resolved span of the slot: end offset minus start offset, or the
    /// unbounded sentinel when no end is configured.
    pub fn span(&self) -> Duration {
        match self.end {
            Some(end) => end.as_duration() - self.start.as_duration(),
            None => Interval::UNBOUNDED.as_duration(),
        }
    }

    /// Sort key: resolved end offset in milliseconds, unbounded last.
    pub fn end_offset_millis(&self) -> i64 {
        self.end.map(Interval::as_millis).unwrap_or(i64::MAX)
    }
}

/// A tariff with a recurring weekly schedule of wall-clock slots,
/// interpreted in a fixed time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBasedTariff {
    pub id: TariffId,
    #[serde(default)]
    pub free_seconds: u32,
    /// Carried for model parity with slot-based tariffs; the calendar
    /// walker resets on slot boundaries, not billing periods.
    #[serde(default)]
    pub billing_interval: Option<Interval>,
    pub rates: Vec<Rate>,
    pub time_slots: Vec<TimeSlot>,
    #[serde(with = "tz_offset")]
    pub time_zone: FixedOffset,
}

/// One weekly window `[from, to)` mapped to a rate. `to` may fall on a
/// later day-of-week than `from`, modeling overnight spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub from: SlotTime,
    pub to: SlotTime,
    pub rate: RateId,
}

/// A wall-clock instant within the week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotTime {
    pub day: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    /// Seconds since Monday 00:00 of the same week.
    pub fn week_offset_secs(&self) -> i64 {
        i64::from(self.day.num_days_from_monday()) * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
    }
}

/// Serde helper for [`FixedOffset`]: seconds east of UTC.
mod tz_offset {
    use chrono::FixedOffset;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(offset: &FixedOffset, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(offset.local_minus_utc())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FixedOffset, D::Error> {
        let secs = i32::deserialize(deserializer)?;
        FixedOffset::east_opt(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid UTC offset: {secs}s")))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interval::TimeUnit;
    use chrono::TimeZone;

    #[test]
    fn slot_span_resolves_offsets() {
        let slot = Slot {
            start: Interval::new(2, TimeUnit::Hours),
            end: Some(Interval::new(4, TimeUnit::Hours)),
            rate: RateId(1),
        };
        assert_eq!(slot.span(), Duration::hours(2));
    }

    #[test]
    fn open_ended_slot_spans_unbounded_and_sorts_last() {
        let open = Slot {
            start: Interval::new(0, TimeUnit::Minutes),
            end: None,
            rate: RateId(1),
        };
        let closed = Slot {
            start: Interval::new(0, TimeUnit::Minutes),
            end: Some(Interval::new(8, TimeUnit::Hours)),
            rate: RateId(2),
        };
        assert_eq!(open.span(), Interval::UNBOUNDED.as_duration());
        assert!(open.end_offset_millis() > closed.end_offset_millis());
    }

    #[test]
    fn slot_matches_first_billing_period() {
        let start = Utc.with_ymd_and_hms(2021, 4, 19, 0, 0, 0).unwrap();
        let billing_end = start + Interval::new(1, TimeUnit::Days);
        let inside = Slot {
            start: Interval::new(8, TimeUnit::Hours),
            end: Some(Interval::new(22, TimeUnit::Hours)),
            rate: RateId(1),
        };
        let beyond = Slot {
            start: Interval::new(30, TimeUnit::Hours),
            end: None,
            rate: RateId(1),
        };
        assert!(inside.matches(start, billing_end));
        assert!(!beyond.matches(start, billing_end));
    }

    #[test]
    fn slot_time_week_offset() {
        let mon_midnight = SlotTime {
            day: Weekday::Mon,
            hour: 0,
            minute: 0,
        };
        let tue_eight_thirty = SlotTime {
            day: Weekday::Tue,
            hour: 8,
            minute: 30,
        };
        assert_eq!(mon_midnight.week_offset_secs(), 0);
        assert_eq!(tue_eight_thirty.week_offset_secs(), 86_400 + 8 * 3_600 + 30 * 60);
    }

    #[test]
    fn tariff_roundtrips_through_json() {
        let tariff = Tariff::TimeBased(TimeBasedTariff {
            id: TariffId(7),
            free_seconds: 0,
            billing_interval: None,
            rates: vec![],
            time_slots: vec![TimeSlot {
                from: SlotTime {
                    day: Weekday::Mon,
                    hour: 8,
                    minute: 0,
                },
                to: SlotTime {
                    day: Weekday::Mon,
                    hour: 22,
                    minute: 0,
                },
                rate: RateId(1),
            }],
            time_zone: FixedOffset::east_opt(3_600).unwrap(),
        });
        let json = serde_json::to_string(&tariff).unwrap();
        let back: Tariff = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tariff);
    }
}
