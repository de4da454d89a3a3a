//! Per-user todos with comments.
//!
//! A todo's owner (or a superuser) can open its detail page, which shows the
//! todo, a blank comment form, and its comments newest first, five to a
//! page. Signed-in users can add comments; a comment's author (or a
//! superuser) can edit or delete it. Records the acting user may not touch
//! answer "not found", exactly like records that do not exist.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_comments::web::{Request, Session};
//! use todo_comments::{InMemoryRecordStore, RecordsExt, Todo};
//!
//! let store = InMemoryRecordStore::new();
//! store.records::<Todo>().insert(&Todo::new("alice", "Buy milk").with_id("t1"))?;
//!
//! let service = Arc::new(todo_comments::app(store));
//! let page = service.dispatch(
//!     "todo.detail",
//!     Request::get(Session::user("alice")).with_param("pk", "t1"),
//! )?;
//!
//! // HTTP transport (requires "http" feature)
//! // todo_comments::web::serve(service, "0.0.0.0:8000").await?;
//! ```

extern crate self as todo_comments;

pub mod fixtures;
pub mod form;
pub mod guard;
pub mod handlers;
mod models;
pub mod paginate;
mod record;
mod settings;
pub mod web;

#[cfg(feature = "http")]
pub mod config;

pub use fixtures::{FixtureError, Fixtures};
pub use form::{CleanComment, CommentForm};
pub use guard::{ensure_owner, Access};
pub use models::{Comment, Todo};
pub use paginate::{Page, Paginator};
pub use record::{
    InMemoryRecordStore, Owned, Record, RecordRepository, RecordStore, RecordsExt, StoreError,
};
pub use settings::Settings;
pub use todo_comments_macros::Record;

/// The service with every view registered.
pub fn app<S: RecordStore + 'static>(store: S) -> web::Service<S> {
    register_routes!(
        web::Service::new(store),
        handlers::todo_detail,
        handlers::comment_create,
        handlers::comment_update,
        handlers::comment_delete,
    )
}
