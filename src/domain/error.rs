//! Calculation errors

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::rate::RateId;
use super::tariff::TariffId;

/// Result type for calculation operations.
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Failures surfaced by the calculation core. None of these are retried
/// internally; the computation is deterministic and a retry would
/// reproduce the identical failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// A slot references a rate id absent from the tariff's rate set.
    #[error("tariff {tariff} references rate {rate} which is not defined")]
    UndefinedRate { tariff: TariffId, rate: RateId },

    /// The rental window is inverted.
    #[error("rental start {start} is after rental end {end}")]
    InvalidRentalWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// No slot covers the rental window (or the slot set is empty).
    #[error("tariff {0} has no slot matching the rental window")]
    NoMatchingSlot(TariffId),
}
