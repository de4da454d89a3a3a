//! RecordRepository - typed accessor for record CRUD operations.

use std::marker::PhantomData;

use super::{Record, RecordStore, StoreError};

/// Typed repository wrapper for records of one type.
///
/// Provides short method names by delegating to `RecordStore`.
pub struct RecordRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> RecordRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Result<Option<M>, StoreError> {
        self.store.get_record(id)
    }

    /// Insert a new record. Fails if the id is taken.
    pub fn insert(&self, record: &M) -> Result<(), StoreError> {
        self.store.insert(record)
    }

    /// Insert or overwrite a record.
    pub fn save(&self, record: &M) -> Result<(), StoreError> {
        self.store.save(record)
    }

    /// Delete a record by ID. Returns true if it existed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete::<M>(id)
    }

    /// Find records matching a predicate.
    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, StoreError> {
        self.store.find_records(predicate)
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed record repository.
    fn records<M: Record>(&self) -> RecordRepository<'_, Self, M> {
        RecordRepository::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
