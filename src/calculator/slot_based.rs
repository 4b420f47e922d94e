//! Slot-based tariff walker
//!
//! Walks the rental window through a repeating, offset-based slot schedule
//! combined with an optional recurring billing period. Each segment is
//! priced by the rate calculator; the billing period restarts the slot
//! sequence so every cycle bills the same way.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{check_window, deduct_free_seconds, rate};
use crate::domain::error::{CalculationError, CalculationResult};
use crate::domain::interval::Interval;
use crate::domain::rate::{Rate, RateId};
use crate::domain::receipt::Receipt;
use crate::domain::tariff::{Slot, SlotBasedTariff};
use crate::util::CyclicList;

/// Calculate the receipt for a rental against a slot-based tariff.
pub fn calculate(
    tariff: &SlotBasedTariff,
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

    let mut current_billing_end = match tariff.billing_interval {
        None => effective_end,
        Some(interval) => rental_start + interval,
    };

    let mut slots: Vec<&Slot> = tariff
        .slots
        .iter()
        .filter(|s| s.matches(rental_start, current_billing_end))
        .collect();
    slots.sort_by_key(|s| s.end_offset_millis());
    let slots =
        CyclicList::new(slots).ok_or(CalculationError::NoMatchingSlot(tariff.id))?;

    let mut index: i64 = 0;
    let mut slot_start = rental_start;
    // The first bound is taken from the slot's raw configured end offset;
    // subsequent bounds use the resolved span. These coincide only when
    // the first active slot starts at offset zero. Historical receipts
    // depend on this asymmetry, so it is kept as-is.
    let mut slot_end = min3(
        effective_end,
        current_billing_end,
        slot_start + slots[index].end.unwrap_or(Interval::UNBOUNDED),
    );

    while slot_start < effective_end {
        let slot = slots.get(index);
        let rate = rate_map
            .get(&slot.rate)
            .ok_or(CalculationError::UndefinedRate {
                tariff: tariff.id,
                rate: slot.rate,
            })?;

        let position = rate::evaluate(rate, slot_start, slot_end);
        debug!(
            tariff = %tariff.id,
            from = %slot_start,
            to = %slot_end,
            price = position.price.minor_units(),
            "slot segment priced"
        );
        positions.push(position);

        slot_start = slot_end;
        if let Some(interval) = tariff.billing_interval {
            if current_billing_end == slot_end {
                // A billing period ended exactly here; open the next one.
                current_billing_end = current_billing_end + interval;
            }
        }
        if current_billing_end != slot_end {
            index += 1;
        }
        slot_end = min3(
            effective_end,
            current_billing_end,
            slot_start
                .checked_add_signed(slots.get(index).span())
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
    }

    Ok(positions.into_iter().collect())
}

fn min3(a: DateTime<Utc>, b: DateTime<Utc>, c: DateTime<Utc>) -> DateTime<Utc> {
    a.min(b).min(c)
}

// ── Tests ──────────────────────────────────────────────────────
