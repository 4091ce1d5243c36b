//! In-memory store implementation

use std::collections::HashMap;

use log::debug;

use super::DataStore;
use super::seed;
use crate::error::StoreError;
use crate::model::EntityKind;
use crate::model::Record;

/// An in-memory store holding one collection per entity kind.
///
/// Collections are loaded once at construction and handed out by clone;
/// the store itself is never mutated afterwards, which is what lets the
/// table layer treat every source collection as read-only.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::EntityKind;
/// use crewdesk_lib::store::{DataStore, InMemoryStore};
///
/// let store = InMemoryStore::seeded();
/// let candidates = store.load(EntityKind::Candidate).unwrap();
/// assert!(!candidates.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: HashMap<EntityKind, Vec<Record>>,
}

impl InMemoryStore {
    /// Creates an empty store with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the demo back-office dataset.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.put(EntityKind::Client, seed::clients());
        store.put(EntityKind::Candidate, seed::candidates());
        store.put(EntityKind::User, seed::users());
        store.put(EntityKind::Transaction, seed::transactions());
        store
    }

    /// Creates a store holding a single collection, for tests.
    pub fn with_records(kind: EntityKind, records: Vec<Record>) -> Self {
        let mut store = Self::new();
        store.put(kind, records);
        store
    }

    /// Inserts or replaces the collection for one entity kind.
    pub fn put(&mut self, kind: EntityKind, records: Vec<Record>) {
        self.collections.insert(kind, records);
    }

    /// Returns the number of loaded collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns `true` if no collections are loaded.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        let records = self
            .collections
            .get(&kind)
            .ok_or_else(|| StoreError::unknown_entity(kind))?;
        debug!("store: loaded {} {} records", records.len(), kind);
        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_serves_every_kind() {
        let store = InMemoryStore::seeded();
        for kind in EntityKind::ALL {
            let records = store.load(kind).unwrap();
            assert!(!records.is_empty(), "no records for {}", kind);
            assert!(records.iter().all(|r| r.kind() == kind));
        }
    }

    #[test]
    fn test_unknown_kind_errors() {
        let store = InMemoryStore::with_records(EntityKind::Client, Vec::new());
        assert!(matches!(
            store.load(EntityKind::Candidate),
            Err(StoreError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn test_load_hands_out_independent_copies() {
        let store = InMemoryStore::seeded();
        let mut first = store.load(EntityKind::User).unwrap();
        first.clear();
        let second = store.load(EntityKind::User).unwrap();
        assert!(!second.is_empty());
    }
}
