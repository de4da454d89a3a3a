//! The comment form: one required `message` field.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Longest accepted message, in characters.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Field name -> messages. Ordered so re-rendered forms are stable.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Comment form state, either blank, pre-filled, or bound to submitted data.
///
/// Serializes to what a template needs to draw the form: the current value
/// and any field errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentForm {
    pub message: String,
    pub errors: FieldErrors,
    #[serde(skip)]
    bound: bool,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanComment {
    pub message: String,
}

impl CommentForm {
    /// A blank, unbound form.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unbound form pre-filled with an existing message.
    pub fn with_initial(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Bind submitted data. Scalars are taken as text; anything else,
    /// including a missing field, counts as empty.
    pub fn bind(input: &Value) -> Self {
        let message = match input.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        };
        Self {
            message,
            errors: FieldErrors::new(),
            bound: true,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Validate a bound form.
    ///
    /// On failure the form comes back with its errors filled in, ready to be
    /// rendered again.
    pub fn clean(mut self) -> Result<CleanComment, CommentForm> {
        self.errors.clear();
        let message = self.message.trim().to_string();
        let chars = message.chars().count();

        if !self.bound || message.is_empty() {
            self.add_error("message", "This field is required.".to_string());
        } else if chars > MESSAGE_MAX_CHARS {
            self.add_error(
                "message",
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    MESSAGE_MAX_CHARS, chars
                ),
            );
        }

        if self.errors.is_empty() {
            Ok(CleanComment { message })
        } else {
            Err(self)
        }
    }

    fn add_error(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_default().push(message);
    }
}
