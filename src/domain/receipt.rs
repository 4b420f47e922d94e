//! Receipts and line items

use serde::{Deserialize, Serialize};

use super::money::{Currency, Price};

/// The priced result of one rental segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedPrice {
    pub price: Price,
    pub currency: Currency,
    pub description: String,
}

/// Itemized and totaled result of a calculation.
///
/// The total is the exact sum of all positions; the currency is taken from
/// the first position (callers guarantee currency consistency within one
/// tariff). An empty position list yields a zero total and no currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub total: Price,
    pub currency: Option<Currency>,
    pub positions: Vec<CalculatedPrice>,
}

impl Receipt {
    pub fn from_positions(positions: Vec<CalculatedPrice>) -> Receipt {
        let total = positions.iter().map(|p| p.price).sum();
        let currency = positions.first().map(|p| p.currency.clone());
        Receipt {
            total,
            currency,
            positions,
        }
    }

    /// Human-readable total, e.g. `2.50 EUR`.
    pub fn formatted_total(&self) -> String {
        match &self.currency {
            Some(currency) => self.total.format(currency),
            None => self.total.to_string(),
        }
    }
}

impl FromIterator<CalculatedPrice> for Receipt {
    fn from_iter<I: IntoIterator<Item = CalculatedPrice>>(iter: I) -> Receipt {
        Receipt::from_positions(iter.into_iter().collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, description: &str) -> CalculatedPrice {
        CalculatedPrice {
            price: Price(price),
            currency: Currency::from("EUR"),
            description: description.to_owned(),
        }
    }

    #[test]
    fn empty_receipt_has_zero_total_and_no_currency() {
        let receipt = Receipt::from_positions(vec![]);
        assert_eq!(receipt.total, Price::ZERO);
        assert_eq!(receipt.currency, None);
        assert!(receipt.positions.is_empty());
    }

    #[test]
    fn sums_positions_and_takes_first_currency() {
        let receipt: Receipt = vec![item(100, "a"), item(50, "b"), item(100, "c")]
            .into_iter()
            .collect();
        assert_eq!(receipt.total, Price(250));
        assert_eq!(receipt.currency, Some(Currency::from("EUR")));
    }

    #[test]
    fn preserves_position_order() {
        let receipt = Receipt::from_positions(vec![item(1, "first"), item(2, "second")]);
        assert_eq!(receipt.positions[0].description, "first");
        assert_eq!(receipt.positions[1].description, "second");
    }

    #[test]
    fn formats_total_with_currency() {
        let receipt = Receipt::from_positions(vec![item(250, "x")]);
        assert_eq!(receipt.formatted_total(), "2.50 EUR");
    }
}
