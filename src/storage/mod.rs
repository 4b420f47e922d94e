//! Tariff storage
//!
//! The calculation core treats tariffs as externally owned, validated
//! aggregates. This module supplies the lookup contract the API layer
//! consumes, plus an in-memory implementation for tests and development.

pub mod memory;

use thiserror::Error;

use crate::domain::tariff::{Tariff, TariffId};

pub use memory::InMemoryTariffRepository;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("tariff not found: {0}")]
    NotFound(TariffId),

    #[error("tariff already exists: {0}")]
    AlreadyExists(TariffId),
}

/// Lookup and lifecycle of tariff aggregates.
pub trait TariffRepository: Send + Sync {
    /// Store a new tariff; fails on duplicate id.
    fn create(&self, tariff: Tariff) -> RepositoryResult<()>;

    fn get(&self, id: TariffId) -> RepositoryResult<Tariff>;

    /// Replace an existing tariff; fails if the id is unknown.
    fn update(&self, tariff: Tariff) -> RepositoryResult<()>;

    fn delete(&self, id: TariffId) -> RepositoryResult<()>;

    fn list(&self) -> Vec<Tariff>;
}
