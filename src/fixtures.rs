//! Seed data loading.
//!
//! Todos are created outside these views, so a fresh in-memory store is
//! seeded from a JSON document:
//!
//! ```json
//! {
//!   "todos": [{ "id": "t1", "user_id": "alice", "title": "Buy milk",
//!               "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z" }],
//!   "comments": []
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::models::{Comment, Todo};
use crate::record::{RecordStore, RecordsExt, StoreError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A comment points at a todo that is neither in the store nor in the file.
    OrphanComment { comment_id: String, todo_id: String },
    Store(StoreError),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "failed to read fixtures: {}", e),
            FixtureError::Parse(e) => write!(f, "invalid fixtures: {}", e),
            FixtureError::OrphanComment {
                comment_id,
                todo_id,
            } => write!(f, "comment {} references unknown todo {}", comment_id, todo_id),
            FixtureError::Store(e) => write!(f, "failed to store fixtures: {}", e),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            FixtureError::Parse(e) => Some(e),
            FixtureError::Store(e) => Some(e),
            FixtureError::OrphanComment { .. } => None,
        }
    }
}

impl From<StoreError> for FixtureError {
    fn from(err: StoreError) -> Self {
        FixtureError::Store(err)
    }
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        serde_json::from_str(json).map_err(FixtureError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(FixtureError::Io)?;
        Self::from_json(&json)
    }

    /// Insert everything into `store`, todos first. Existing ids are
    /// overwritten. Returns `(todos, comments)` counts.
    ///
    /// Every comment's todo is checked before the first write, so an orphan
    /// leaves the store untouched.
    pub fn load_into<S: RecordStore>(&self, store: &S) -> Result<(usize, usize), FixtureError> {
        self.check_comment_todos(store)?;

        for todo in &self.todos {
            store.records::<Todo>().save(todo)?;
        }
        for comment in &self.comments {
            store.records::<Comment>().save(comment)?;
        }

        info!(
            todos = self.todos.len(),
            comments = self.comments.len(),
            "fixtures loaded"
        );
        Ok((self.todos.len(), self.comments.len()))
    }

    fn check_comment_todos<S: RecordStore>(&self, store: &S) -> Result<(), FixtureError> {
        let in_file: HashSet<&str> = self.todos.iter().map(|t| t.id.as_str()).collect();
        for comment in &self.comments {
            if in_file.contains(comment.todo_id.as_str()) {
                continue;
            }
            if store.records::<Todo>().get(&comment.todo_id)?.is_none() {
                return Err(FixtureError::OrphanComment {
                    comment_id: comment.id.clone(),
                    todo_id: comment.todo_id.clone(),
                });
            }
        }
        Ok(())
    }
}
