//! Service - named route registry and dispatch.
//!
//! `Service<S>` holds a record store, the settings, and a set of named view
//! handlers. Each handler receives a `Context<S>` and returns
//! `Result<Response, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use todo_comments::web::{Request, Service, Session};
//! use todo_comments::InMemoryRecordStore;
//!
//! let service = todo_comments::app(InMemoryRecordStore::new());
//! let request = Request::get(Session::user("alice")).with_param("pk", "t1");
//! let response = service.dispatch("todo.detail", request)?;
//! ```

use std::collections::HashMap;

use tracing::debug;

use super::context::Context;
use super::error::HandlerError;
use super::request::{Request, Response};
use crate::settings::Settings;

type HandleFn<S> = dyn Fn(&Context<S>) -> Result<Response, HandlerError> + Send + Sync;

/// Routes view requests to handler functions by route name.
///
/// Every route requires an authenticated session: anonymous requests are
/// rejected with `HandlerError::Unauthenticated` before the handler runs.
pub struct Service<S> {
    store: S,
    settings: Settings,
    routes: HashMap<String, Box<HandleFn<S>>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a service with default settings and no routes.
    pub fn new(store: S) -> Self {
        Self {
            store,
            settings: Settings::default(),
            routes: HashMap::new(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Register a view handler under `name`.
    ///
    /// Builder style; returns `self` for chaining.
    pub fn route<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Response, HandlerError> + Send + Sync + 'static,
    {
        self.routes.insert(name.to_string(), Box::new(handler));
        self
    }

    /// Dispatch a request to the route called `route`.
    pub fn dispatch(&self, route: &str, request: Request) -> Result<Response, HandlerError> {
        let handler = self
            .routes
            .get(route)
            .ok_or_else(|| HandlerError::UnknownRoute(route.to_string()))?;

        if !request.session.is_authenticated() {
            debug!(route, "anonymous request rejected");
            return Err(HandlerError::Unauthenticated);
        }

        debug!(
            route,
            method = ?request.method,
            user = request.session.user_id().unwrap_or_default(),
            "dispatching"
        );
        let ctx = Context::new(route.to_string(), request, &self.store, &self.settings);
        handler(&ctx)
    }

    /// List registered route names.
    pub fn routes(&self) -> Vec<&str> {
        self.routes.keys().map(|s| s.as_str()).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
