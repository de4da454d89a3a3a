//! RecordStore - abstract CRUD storage for records.

use super::{Record, StoreError};

/// Abstract CRUD storage for records.
///
/// Methods that read a single record or search use a `_record` suffix so
/// they read clearly next to `RecordRepository`'s short names.
pub trait RecordStore: Send + Sync {
    /// Get a record by ID. Returns None if not found.
    fn get_record<M: Record>(&self, id: &str) -> Result<Option<M>, StoreError>;

    /// Insert a new record. Fails with `Conflict` if the id is taken.
    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Insert or overwrite a record. Last writer wins.
    fn save<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Delete a record by ID. Returns true if it existed.
    fn delete<M: Record>(&self, id: &str) -> Result<bool, StoreError>;

    /// Find records matching a predicate, in insertion order.
    fn find_records<M: Record>(&self, predicate: &dyn Fn(&M) -> bool)
        -> Result<Vec<M>, StoreError>;
}
