//! Rate evaluation
//!
//! Prices one concrete time span against a single rate definition. Callers
//! guarantee `start <= end`.

use chrono::{DateTime, Utc};

use crate::domain::rate::Rate;
use crate::domain::receipt::CalculatedPrice;
use crate::domain::money::Price;

/// Produce the line item for `[start, end)` under the given rate.
pub fn evaluate(rate: &Rate, start: DateTime<Utc>, end: DateTime<Utc>) -> CalculatedPrice {
    if start == end {
        return CalculatedPrice {
            price: Price::ZERO,
            currency: rate.currency().clone(),
            description: "zero-length segment".to_owned(),
        };
    }
    match rate {
        Rate::Fixed(rate) => CalculatedPrice {
            price: rate.price,
            currency: rate.currency.clone(),
            description: "flat rate".to_owned(),
        },
        Rate::TimeBased(rate) => {
            let duration_millis = (end - start).num_milliseconds();
            // A zero-length rate interval would divide by zero.
            let interval_millis = rate.interval.as_millis().max(1);
            let intervals = (duration_millis + interval_millis - 1) / interval_millis;
            let raw = Price(
                rate.base_price.minor_units()
                    + intervals * rate.price_per_interval.minor_units(),
            );
            CalculatedPrice {
                price: raw.clamp_to(rate.min_price, rate.max_price),
                currency: rate.currency.clone(),
                description: format!("{intervals} billed interval(s)"),
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interval::{Interval, TimeUnit};
    use crate::domain::money::Currency;
    use crate::domain::rate::{FixedRate, RateId, TimeBasedRate};
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 4, 19, 16, 0, 0).unwrap()
    }

    fn metered(min: i64, max: i64) -> Rate {
        Rate::TimeBased(TimeBasedRate {
            id: RateId(1),
            currency: Currency::from("EUR"),
            interval: Interval::new(30, TimeUnit::Minutes),
            base_price: Price::ZERO,
            price_per_interval: Price(100),
            min_price: Price(min),
            max_price: Price(max),
        })
    }

    #[test]
    fn fixed_rate_is_independent_of_duration() {
        let rate = Rate::Fixed(FixedRate {
            id: RateId(1),
            currency: Currency::from("EUR"),
            price: Price(100),
        });
        let short = evaluate(&rate, start(), start() + Duration::minutes(5));
        let long = evaluate(&rate, start(), start() + Duration::days(3));
        assert_eq!(short.price, Price(100));
        assert_eq!(long.price, Price(100));
    }

    #[test]
    fn partial_intervals_round_up() {
        // 31 minutes against a 30-minute interval bills 2 intervals.
        let item = evaluate(&metered(0, 100_000), start(), start() + Duration::minutes(31));
        assert_eq!(item.price, Price(200));
        assert_eq!(item.description, "2 billed interval(s)");
    }

    #[test]
    fn exact_interval_multiple_bills_exactly() {
        let item = evaluate(&metered(0, 100_000), start(), start() + Duration::minutes(60));
        assert_eq!(item.price, Price(200));
    }

    #[test]
    fn base_price_is_added() {
        let rate = Rate::TimeBased(TimeBasedRate {
            id: RateId(1),
            currency: Currency::from("EUR"),
            interval: Interval::new(30, TimeUnit::Minutes),
            base_price: Price(500),
            price_per_interval: Price(100),
            min_price: Price::ZERO,
            max_price: Price(100_000),
        });
        let item = evaluate(&rate, start(), start() + Duration::minutes(30));
        assert_eq!(item.price, Price(600));
    }

    #[test]
    fn price_is_clamped_to_max() {
        let item = evaluate(&metered(0, 1500), start(), start() + Duration::hours(24));
        assert_eq!(item.price, Price(1500));
    }

    #[test]
    fn price_is_clamped_to_min() {
        let item = evaluate(&metered(250, 100_000), start(), start() + Duration::minutes(1));
        assert_eq!(item.price, Price(250));
    }

    #[test]
    fn zero_length_segment_is_free() {
        let item = evaluate(&metered(250, 100_000), start(), start());
        assert_eq!(item.price, Price::ZERO);
        assert_eq!(item.description, "zero-length segment");
    }
}
