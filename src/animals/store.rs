//! # Record Store
//!
//! Owned, in-memory list of animals loaded once from a persistence backend.
//! The only mutation is [`AnimalStore::create`], which appends and then
//! rewrites the backing store with the full list.

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{AnimalError, AnimalResult};
use super::filter::{filter_by_query, AnimalQuery};
use super::persistence::Persistence;
use super::record::AnimalRecord;
use super::validator;

/// Return the first record whose id equals `id`
pub fn find_by_id<'a>(id: &str, animals: &'a [AnimalRecord]) -> Option<&'a AnimalRecord> {
    animals.iter().find(|a| a.id == id)
}

pub struct AnimalStore {
    animals: Vec<AnimalRecord>,
    persistence: Box<dyn Persistence>,
}

impl std::fmt::Debug for AnimalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalStore")
            .field("len", &self.animals.len())
            .field("persistence", &self.persistence)
            .finish()
    }
}

impl AnimalStore {
    /// Load the store from `persistence`
    pub fn open<P: Persistence + 'static>(persistence: P) -> AnimalResult<Self> {
        let animals = persistence.load()?;
        let count = animals.len().to_string();
        log_event_with_fields(Event::StoreLoaded, &[("count", count.as_str())]);

        Ok(Self {
            animals,
            persistence: Box::new(persistence),
        })
    }

    pub fn animals(&self) -> &[AnimalRecord] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Records matching `query`, in store order
    pub fn filter(&self, query: &AnimalQuery) -> Vec<AnimalRecord> {
        filter_by_query(query, &self.animals)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&AnimalRecord> {
        find_by_id(id, &self.animals)
    }

    /// Validate `candidate`, assign it the next id and persist the full list.
    ///
    /// The id is the current length as a string. If the save fails the record
    /// is removed again, so memory never runs ahead of the backing store.
    pub fn create(&mut self, candidate: &Value) -> AnimalResult<AnimalRecord> {
        let id = self.animals.len().to_string();

        let record = validator::to_record(candidate, id).map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(Event::AnimalRejected, &[("reason", reason.as_str())]);
            AnimalError::from(e)
        })?;

        self.append(record.clone())?;

        log_event_with_fields(
            Event::AnimalCreated,
            &[("id", record.id.as_str()), ("species", record.species.as_str())],
        );
        Ok(record)
    }

    fn append(&mut self, record: AnimalRecord) -> AnimalResult<()> {
        self.animals.push(record);

        if let Err(e) = self.persistence.save(&self.animals) {
            self.animals.pop();
            let error = e.to_string();
            log_event_with_fields(Event::StorePersistFailed, &[("error", error.as_str())]);
            return Err(e);
        }

        log_event_with_fields(
            Event::StorePersisted,
            &[("count", self.animals.len().to_string().as_str())],
        );
        Ok(())
    }
}
