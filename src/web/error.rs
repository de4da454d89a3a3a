//! Error types for view handlers.

use std::error::Error;
use std::fmt;

use crate::record::StoreError;

/// Error type for view handler operations.
///
/// Form validation failures are not errors; handlers turn them into
/// `Response::Invalid` so the form can be shown again.
#[derive(Debug)]
pub enum HandlerError {
    /// No route registered under this name.
    UnknownRoute(String),
    /// Record missing, or hidden from the acting user.
    NotFound(String),
    /// No authenticated user in the session.
    Unauthenticated,
    /// Record store failure.
    Store(StoreError),
    /// View model could not be serialized.
    Render(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownRoute(name) => write!(f, "unknown route: {}", name),
            HandlerError::NotFound(msg) => write!(f, "not found: {}", msg),
            HandlerError::Unauthenticated => write!(f, "authentication required"),
            HandlerError::Store(e) => write!(f, "store error: {}", e),
            HandlerError::Render(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Render(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownRoute(_) => 404,
            HandlerError::NotFound(_) => 404,
            HandlerError::Unauthenticated => 401,
            HandlerError::Store(_) => 500,
            HandlerError::Render(_) => 500,
        }
    }
}
