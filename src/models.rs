//! Stored records: todos and the comments attached to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_comments_macros::Record;
use uuid::Uuid;

/// A user-owned task that comments attach to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "todos")]
pub struct Todo {
    pub id: String,
    /// Owner.
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// A new, incomplete todo with a fresh id.
    pub fn new(user_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            title: title.into(),
            description: String::new(),
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A user-authored note attached to exactly one todo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "comments")]
pub struct Comment {
    pub id: String,
    pub todo_id: String,
    /// Author, and owner for access checks.
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        todo_id: impl Into<String>,
        user_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new_at(todo_id, user_id, message, Utc::now())
    }

    /// A comment stamped with an explicit creation time.
    pub fn new_at(
        todo_id: impl Into<String>,
        user_id: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            todo_id: todo_id.into(),
            user_id: user_id.into(),
            message: message.into(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace the message and bump `updated_at`.
    pub fn edit(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.updated_at = Utc::now();
    }
}
