//! In-memory tariff repository

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::{RepositoryError, RepositoryResult, TariffRepository};
use crate::domain::tariff::{Tariff, TariffId};

/// Thread-safe in-memory repository, used in tests and development.
#[derive(Debug, Default)]
pub struct InMemoryTariffRepository {
    tariffs: DashMap<TariffId, Tariff>,
}

impl InMemoryTariffRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TariffRepository for InMemoryTariffRepository {
    fn create(&self, tariff: Tariff) -> RepositoryResult<()> {
        match self.tariffs.entry(tariff.id()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(tariff.id())),
            Entry::Vacant(entry) => {
                entry.insert(tariff);
                Ok(())
            }
        }
    }

    fn get(&self, id: TariffId) -> RepositoryResult<Tariff> {
        self.tariffs
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(RepositoryError::NotFound(id))
    }

    fn update(&self, tariff: Tariff) -> RepositoryResult<()> {
        match self.tariffs.entry(tariff.id()) {
            Entry::Occupied(mut entry) => {
                entry.insert(tariff);
                Ok(())
            }
            Entry::Vacant(_) => Err(RepositoryError::NotFound(tariff.id())),
        }
    }

    fn delete(&self, id: TariffId) -> RepositoryResult<()> {
        self.tariffs
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    fn list(&self) -> Vec<Tariff> {
        self.tariffs
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────
