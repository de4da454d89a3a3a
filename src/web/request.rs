//! Transport-neutral request and response types for view dispatch.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::error::HandlerError;
use super::session::Session;

/// The two methods views distinguish: GET renders, POST submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// An inbound view request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub method: Method,
    /// Path parameters (`pk`, `todo_id`).
    pub params: HashMap<String, String>,
    /// Query string parameters (`page`).
    pub query: HashMap<String, String>,
    /// Submitted form fields.
    pub form: Value,
    pub session: Session,
}

impl Request {
    pub fn get(session: Session) -> Self {
        Self {
            method: Method::Get,
            form: Value::Null,
            session,
            ..Self::default()
        }
    }

    pub fn post(session: Session, form: Value) -> Self {
        Self {
            method: Method::Post,
            form,
            session,
            ..Self::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// What a view handler decided to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Render the view model.
    Render(Value),
    /// Re-render a submitted form together with its field errors.
    Invalid(Value),
    /// Redirect to a URL.
    Redirect(String),
}

impl Response {
    pub fn render<T: Serialize>(view: &T) -> Result<Self, HandlerError> {
        Ok(Response::Render(serde_json::to_value(view)?))
    }

    pub fn invalid<T: Serialize>(view: &T) -> Result<Self, HandlerError> {
        Ok(Response::Invalid(serde_json::to_value(view)?))
    }

    pub fn redirect(url: impl Into<String>) -> Self {
        Response::Redirect(url.into())
    }

    /// The view model, for `Render` and `Invalid`.
    pub fn view(&self) -> Option<&Value> {
        match self {
            Response::Render(v) | Response::Invalid(v) => Some(v),
            Response::Redirect(_) => None,
        }
    }

    /// The target URL, for `Redirect`.
    pub fn location(&self) -> Option<&str> {
        match self {
            Response::Redirect(url) => Some(url),
            _ => None,
        }
    }
}
