//! Session variables forwarded by the authenticating layer in front of us.

use std::collections::HashMap;

/// Header / variable carrying the acting user's id.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header / variable flagging the acting user as a superuser (`true` or `1`).
pub const SUPERUSER_HEADER: &str = "x-user-superuser";

/// Parsed session variables from the incoming request.
///
/// Authentication itself happens upstream; a request whose session has no
/// user id is treated as anonymous.
///
/// ```json
/// {
///   "x-user-id": "user-42",
///   "x-user-superuser": "false"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: HashMap<String, String>,
}

impl Session {
    /// Create an empty (anonymous) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Session for a regular user.
    pub fn user(user_id: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set(USER_ID_HEADER, user_id);
        session
    }

    /// Session for a superuser.
    pub fn superuser(user_id: impl Into<String>) -> Self {
        let mut session = Self::user(user_id);
        session.set(SUPERUSER_HEADER, "true");
        session
    }

    /// The acting user's id. Blank ids count as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.get(USER_ID_HEADER).filter(|id| !id.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    pub fn is_superuser(&self) -> bool {
        matches!(
            self.get(SUPERUSER_HEADER).map(|v| v.trim().to_ascii_lowercase()),
            Some(ref v) if v == "true" || v == "1"
        )
    }

    /// Get a session variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a session variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }
}
