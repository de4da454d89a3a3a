//! Records - the data access layer behind the views.
//!
//! A record is a typed, serde-serializable row living in a named collection
//! (`todos`, `comments`). Stores offer plain CRUD plus predicate search;
//! writes are last-writer-wins.
//!
//! ## Example
//!
//! ```ignore
//! use todo_comments::{InMemoryRecordStore, RecordsExt, Todo};
//!
//! let store = InMemoryRecordStore::new();
//! store.records::<Todo>().insert(&todo)?;
//! let loaded = store.records::<Todo>().get(&todo.id)?;
//! ```

mod in_memory;
mod repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be kept in a record store.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection this record type lives in.
    const COLLECTION: &'static str;

    /// Returns the unique identifier of this record.
    fn id(&self) -> &str;
}

/// A record owned by exactly one user.
pub trait Owned {
    /// The id of the owning user.
    fn owner_id(&self) -> &str;
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert of an id that already exists.
    Conflict { collection: String, id: String },
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Conflict { collection, id } => {
                write!(f, "record already exists: {}:{}", collection, id)
            }
            StoreError::Serde(msg) => write!(f, "record serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "record storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryRecordStore;
pub use repository::{RecordRepository, RecordsExt};
pub use store::RecordStore;
