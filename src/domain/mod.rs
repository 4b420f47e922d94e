//! Core domain types and traits

pub mod error;
pub mod interval;
pub mod money;
pub mod rate;
pub mod receipt;
pub mod tariff;

pub use error::{CalculationError, CalculationResult};
pub use interval::{Interval, TimeUnit};
pub use money::{Currency, Price};
pub use rate::{FixedRate, Rate, RateId, TimeBasedRate};
pub use receipt::{CalculatedPrice, Receipt};
pub use tariff::{Slot, SlotBasedTariff, SlotTime, Tariff, TariffId, TimeBasedTariff, TimeSlot};
