//! View dispatch for the todo/comment pages.
//!
//! Views are plain functions registered by name on a `Service`. Each one
//! receives a `Context<S>` with the request, the session, and the record
//! store, and spells out its own steps: fetch, guard, validate, mutate,
//! respond.
//!
//! ## Handler Convention
//!
//! Each handler file under `handlers/` follows this convention:
//!
//! ```ignore
//! // src/handlers/comment_delete.rs
//!
//! pub const ROUTE: &str = urls::COMMENT_DELETE;
//!
//! pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
//!     let comment = fetch_comment(ctx, Access::DeleteComment)?;
//!     // ...
//!     Ok(Response::redirect(urls::todo_detail_url(&comment.todo_id)))
//! }
//! ```

mod context;
mod error;
mod request;
mod service;
mod session;
pub mod urls;

pub use context::Context;
pub use error::HandlerError;
pub use request::{Method, Request, Response};
pub use service::Service;
pub use session::{Session, SUPERUSER_HEADER, USER_ID_HEADER};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `ROUTE: &str`, the route name
/// - `handle(ctx) -> Result<Response, HandlerError>`, the view
///
/// # Example
/// ```ignore
/// let service = todo_comments::register_routes!(
///     web::Service::new(InMemoryRecordStore::new()),
///     handlers::todo_detail,
///     handlers::comment_create,
/// );
/// ```
#[macro_export]
macro_rules! register_routes {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .route(
                $($seg)::+::ROUTE,
                $($seg)::+::handle,
            )
        )+
    };
}
