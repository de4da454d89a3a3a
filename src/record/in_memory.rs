//! InMemoryRecordStore - HashMap-backed record store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Record, RecordStore, StoreError};

/// Internal stored representation of a record.
struct StoredRecord {
    bytes: Vec<u8>,
    /// Insertion sequence; kept when a record is overwritten.
    seq: u64,
}

#[derive(Default)]
struct Storage {
    records: HashMap<String, StoredRecord>,
    next_seq: u64,
}

impl Storage {
    fn put(&mut self, key: String, bytes: Vec<u8>) {
        let seq = match self.records.get(&key) {
            Some(existing) => existing.seq,
            None => {
                self.next_seq += 1;
                self.next_seq
            }
        };
        self.records.insert(key, StoredRecord { bytes, seq });
    }
}

/// In-memory record store backed by a HashMap.
///
/// Storage key is `"COLLECTION:id"`. Clone-friendly via Arc; clones share
/// the same data.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Storage>, StoreError> {
        self.storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Storage>, StoreError> {
        self.storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }
}

fn encode<M: Record>(record: &M) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(record).map_err(|e| StoreError::Serde(e.to_string()))
}

fn decode<M: Record>(bytes: &[u8]) -> Result<M, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
}

impl RecordStore for InMemoryRecordStore {
    fn get_record<M: Record>(&self, id: &str) -> Result<Option<M>, StoreError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self.read()?;

        storage
            .records
            .get(&key)
            .map(|stored| decode(&stored.bytes))
            .transpose()
    }

    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        let key = Self::make_key(M::COLLECTION, record.id());
        let bytes = encode(record)?;
        let mut storage = self.write()?;

        if storage.records.contains_key(&key) {
            return Err(StoreError::Conflict {
                collection: M::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }

        storage.put(key, bytes);
        Ok(())
    }

    fn save<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        let key = Self::make_key(M::COLLECTION, record.id());
        let bytes = encode(record)?;
        self.write()?.put(key, bytes);
        Ok(())
    }

    fn delete<M: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let key = Self::make_key(M::COLLECTION, id);
        Ok(self.write()?.records.remove(&key).is_some())
    }

    fn find_records<M: Record>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<M>, StoreError> {
        let storage = self.read()?;
        let prefix = format!("{}:", M::COLLECTION);

        let mut matches = Vec::new();
        for (key, stored) in storage.records.iter() {
            if key.starts_with(&prefix) {
                let record: M = decode(&stored.bytes)?;
                if predicate(&record) {
                    matches.push((stored.seq, record));
                }
            }
        }

        matches.sort_by_key(|(seq, _)| *seq);
        Ok(matches.into_iter().map(|(_, record)| record).collect())
    }
}
