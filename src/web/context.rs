//! Context passed to view handlers.
//!
//! Carries the request, the record store, and the settings. Handlers reach
//! everything they need through the context.

use serde_json::Value;

use super::error::HandlerError;
use super::request::{Method, Request};
use super::session::Session;
use crate::settings::Settings;

/// The context passed to every view handler.
///
/// Generic over `S` (the record store type) so handlers work against
/// whatever store the service is configured with.
pub struct Context<'a, S> {
    route: String,
    request: Request,
    store: &'a S,
    settings: &'a Settings,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(route: String, request: Request, store: &'a S, settings: &'a Settings) -> Self {
        Self {
            route,
            request,
            store,
            settings,
        }
    }

    /// The route name being handled.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn is_post(&self) -> bool {
        self.request.method == Method::Post
    }

    /// A required path parameter. A missing one means the URL matched no
    /// record, so it surfaces as `NotFound`.
    pub fn param(&self, name: &str) -> Result<&str, HandlerError> {
        self.request
            .params
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| HandlerError::NotFound(format!("missing path parameter `{}`", name)))
    }

    /// An optional query string parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.request.query.get(name).map(String::as_str)
    }

    /// The submitted form fields.
    pub fn form(&self) -> &Value {
        &self.request.form
    }

    pub fn session(&self) -> &Session {
        &self.request.session
    }

    /// The acting user's id. Returns `Unauthenticated` if absent.
    pub fn user_id(&self) -> Result<&str, HandlerError> {
        self.request
            .session
            .user_id()
            .ok_or(HandlerError::Unauthenticated)
    }

    pub fn store(&self) -> &S {
        self.store
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }
}
