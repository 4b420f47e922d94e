//! Calendar slot walker
//!
//! Walks the rental window through a recurring weekly schedule of
//! wall-clock slots, localized to the tariff's fixed time zone. Slot
//! boundaries may cross days (overnight spans) and the schedule wraps
//! from the last slot of the week back to the first.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Utc};
use tracing::debug;

use super::{check_window, deduct_free_seconds, rate};
use crate::domain::error::{CalculationError, CalculationResult};
use crate::domain::rate::{Rate, RateId};
use crate::domain::receipt::Receipt;
use crate::domain::tariff::{TimeBasedTariff, TimeSlot};
use crate::util::CyclicList;

const WEEK_SECS: i64 = 7 * 86_400;

/// Calculate the receipt for a rental against a calendar-scheduled tariff.
pub fn calculate(
    tariff: &TimeBasedTariff,
    rental_start: DateTime<Utc>,
    rental_end: DateTime<Utc>,
) -> CalculationResult<Receipt> {
    check_window(rental_start, rental_end)?;

    let rate_map: HashMap<RateId, &Rate> = tariff.rates.iter().map(|r| (r.id(), r)).collect();
    let mut positions = Vec::new();

    let effective_end =
        deduct_free_seconds(&tariff.rates, tariff.free_seconds, rental_end, &mut positions);
    if rental_start >= effective_end {
        return Ok(positions.into_iter().collect());
    }

    let mut slots: Vec<&TimeSlot> = tariff.time_slots.iter().collect();
    slots.sort_by_key(|s| s.from.week_offset_secs());
    let slots =
        CyclicList::new(slots).ok_or(CalculationError::NoMatchingSlot(tariff.id))?;

    let start_offset = week_offset_secs(rental_start.with_timezone(&tariff.time_zone));
    let mut index = first_intersecting_index(&slots, start_offset)
        .ok_or(CalculationError::NoMatchingSlot(tariff.id))?;

    let mut segment_start = rental_start;
    loop {
        let slot = slots.get(index);
        let rate = rate_map
            .get(&slot.rate)
            .ok_or(CalculationError::UndefinedRate {
                tariff: tariff.id,
                rate: slot.rate,
            })?;

        // Next absolute occurrence of the slot's `to` boundary, strictly
        // after the segment start.
        let current_offset = week_offset_secs(segment_start.with_timezone(&tariff.time_zone));
        let mut delta = (slot.to.week_offset_secs() - current_offset).rem_euclid(WEEK_SECS);
        if delta == 0 {
            delta = WEEK_SECS;
        }
        let boundary = segment_start + Duration::seconds(delta);
        let segment_end = boundary.min(effective_end);

        let position = rate::evaluate(rate, segment_start, segment_end);
        debug!(
            tariff = %tariff.id,
            from = %segment_start,
            to = %segment_end,
            price = position.price.minor_units(),
            "calendar segment priced"
        );
        positions.push(position);

        if segment_end >= effective_end {
            break;
        }
        segment_start = segment_end;
        index += 1;
    }

    Ok(positions.into_iter().collect())
}

/// Seconds since Monday 00:00 in the localized week.
fn week_offset_secs(local: DateTime<FixedOffset>) -> i64 {
    i64::from(local.weekday().num_days_from_monday()) * 86_400
        + i64::from(local.num_seconds_from_midnight())
}

/// Index of the slot whose `[from, to)` window, interpreted cyclically
/// over the week, contains the given week offset.
fn first_intersecting_index(slots: &CyclicList<&TimeSlot>, offset: i64) -> Option<i64> {
    (0..slots.len() as i64).find(|&index| {
        let slot = slots.get(index);
        let from = slot.from.week_offset_secs();
        let to = slot.to.week_offset_secs();
        if from < to {
            offset >= from && offset < to
        } else {
            // Wraps over the end of the week (or covers the whole week).
            offset >= from || offset < to
        }
    })
}

// ── Tests ──────────────────────────────────────────────────────
