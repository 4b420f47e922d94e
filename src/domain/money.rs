//! Money value types

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units (e.g. cents).
///
/// Arithmetic is exact integer addition; prices in this domain are never
/// fractional and never negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Clamp into `[min, max]`. A misconfigured rate with `min > max`
    /// resolves in favour of the upper bound instead of panicking.
    pub fn clamp_to(self, min: Price, max: Price) -> Price {
        Price(self.0.max(min.0).min(max.0))
    }

    /// Format as human-readable amount, e.g. `12.34 EUR`.
    pub fn format(self, currency: &Currency) -> String {
        format!(
            "{}.{:02} {}",
            self.0 / 100,
            (self.0 % 100).abs(),
            currency.code()
        )
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency code associated with a rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency(code.to_owned())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_sum() {
        let total: Price = [Price(100), Price(50), Price(0)].into_iter().sum();
        assert_eq!(total, Price(150));
        assert_eq!(Price(100) + Price(23), Price(123));
    }

    #[test]
    fn clamp_to_range() {
        assert_eq!(Price(4800).clamp_to(Price(0), Price(1500)), Price(1500));
        assert_eq!(Price(-10).clamp_to(Price(0), Price(1500)), Price::ZERO);
        assert_eq!(Price(700).clamp_to(Price(0), Price(1500)), Price(700));
    }

    #[test]
    fn clamp_with_inverted_bounds_prefers_upper() {
        assert_eq!(Price(500).clamp_to(Price(1000), Price(200)), Price(200));
    }

    #[test]
    fn currency_exposes_its_code() {
        assert_eq!(Currency::from("EUR").code(), "EUR");
    }

    #[test]
    fn format_minor_units() {
        let eur = Currency::from("EUR");
        assert_eq!(Price(12345).format(&eur), "123.45 EUR");
        assert_eq!(Price(5).format(&eur), "0.05 EUR");
        assert_eq!(Price::ZERO.format(&eur), "0.00 EUR");
    }
}
