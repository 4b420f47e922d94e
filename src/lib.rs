//! # Tariff Engine
//!
//! Pricing core for rental sessions (parking, charging, sharing): given a
//! tariff definition and a rental window, produce an itemized receipt.
//!
//! ## Architecture
//!
//! - **domain**: money, interval and tariff value types plus the receipt
//! - **calculator**: rate evaluation and the slot/calendar walkers
//! - **storage**: tariff repository interface with an in-memory implementation
//! - **util**: cyclic indexing used to repeat finite slot schedules
//!
//! All calculations are pure functions over immutable inputs; the engine
//! keeps no state between calls and is safe to use from multiple threads.

pub mod calculator;
pub mod domain;
pub mod storage;
pub mod util;

pub use calculator::calculate;
pub use domain::error::{CalculationError, CalculationResult};
pub use domain::interval::{Interval, TimeUnit};
pub use domain::money::{Currency, Price};
pub use domain::rate::{FixedRate, Rate, RateId, TimeBasedRate};
pub use domain::receipt::{CalculatedPrice, Receipt};
pub use domain::tariff::{
    Slot, SlotBasedTariff, SlotTime, Tariff, TariffId, TimeBasedTariff, TimeSlot,
};
pub use storage::{InMemoryTariffRepository, RepositoryError, TariffRepository};
