//! Rate definitions
//!
//! A rate is one pricing rule within a tariff: either a flat charge or a
//! metered per-interval charge with a min/max corridor.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::money::{Currency, Price};

/// Opaque rate identifier, unique within one tariff's rate set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RateId(pub u64);

impl fmt::Display for RateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pricing rule variants. Dispatch is a closed match in the rate
/// calculator; a new variant is a compile-time-checked, localized change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rate {
    Fixed(FixedRate),
    TimeBased(TimeBasedRate),
}

impl Rate {
    pub fn id(&self) -> RateId {
        match self {
            Rate::Fixed(r) => r.id,
            Rate::TimeBased(r) => r.id,
        }
    }

    pub fn currency(&self) -> &Currency {
        match self {
            Rate::Fixed(r) => &r.currency,
            Rate::TimeBased(r) => &r.currency,
        }
    }
}

/// A flat charge, independent of how long the priced segment is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRate {
    pub id: RateId,
    pub currency: Currency,
    pub price: Price,
}

/// A metered charge: base price plus a per-interval price, with partial
/// intervals rounded up and the result clamped to `[min_price, max_price]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBasedRate {
    pub id: RateId,
    pub currency: Currency,
    pub interval: Interval,
    pub base_price: Price,
    pub price_per_interval: Price,
    pub min_price: Price,
    pub max_price: Price,
}
