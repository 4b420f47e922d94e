//! Rental price calculation
//!
//! Walks a rental window through a tariff's slot structure, prices each
//! segment with the rate calculator and folds the line items into a
//! receipt. All entry points are pure and synchronous.

pub mod rate;
pub mod slot_based;
pub mod time_based;

use chrono::{DateTime, Duration, Utc};

use crate::domain::error::{CalculationError, CalculationResult};
use crate::domain::money::Price;
use crate::domain::rate::Rate;
use crate::domain::receipt::{CalculatedPrice, Receipt};
use crate::domain::tariff::Tariff;

/// Calculate the receipt for a rental window, dispatching on the tariff
/// variant.
pub fn calculate(
    tariff: &Tariff,
    rental_start: DateTime<Utc>,
    rental_end: DateTime<Utc>,
) -> CalculationResult<Receipt> {
    match tariff {
        Tariff::SlotBased(t) => slot_based::calculate(t, rental_start, rental_end),
        Tariff::TimeBased(t) => time_based::calculate(t, rental_start, rental_end),
    }
}

/// Reject inverted rental windows before walking.
pub(crate) fn check_window(
    rental_start: DateTime<Utc>,
    rental_end: DateTime<Utc>,
) -> CalculationResult<()> {
    if rental_start > rental_end {
        return Err(CalculationError::InvalidRentalWindow {
            start: rental_start,
            end: rental_end,
        });
    }
    Ok(())
}

/// Deduct the leading grace period: emit an informational zero-price line
/// item and move the effective rental end backwards by `free_seconds`.
pub(crate) fn deduct_free_seconds(
    rates: &[Rate],
    free_seconds: u32,
    rental_end: DateTime<Utc>,
    positions: &mut Vec<CalculatedPrice>,
) -> DateTime<Utc> {
    if free_seconds == 0 {
        return rental_end;
    }
    if let Some(rate) = rates.first() {
        positions.push(CalculatedPrice {
            price: Price::ZERO,
            currency: rate.currency().clone(),
            description: format!("{} free minutes were deducted", free_seconds / 60),
        });
    }
    rental_end - Duration::seconds(i64::from(free_seconds))
}

// ── Tests ──────────────────────────────────────────────────────
