//! Argument decoding for untrusted `create message` payloads.

use serde_json::{Map, Value};

use crate::message::error::ValidationError;

/// Validated arguments for the `create message` operation.
///
/// Produced by [`CreateMessageArgs::from_payload`], the only place where
/// runtime type checking occurs; once decoded, the arguments flow through
/// statically typed signatures. Empty strings are accepted for both
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageArgs {
    author: String,
    text: String,
}

impl CreateMessageArgs {
    /// Decodes and validates an untrusted JSON payload.
    ///
    /// The payload must be an object with `author` and `text` entries,
    /// both JSON strings. All failures are collected before returning, so
    /// a payload with two bad arguments reports both.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the payload is not an object, if
    /// either argument is absent, or if either argument is not a string.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationError::NotAnObject {
                actual: json_type_name(payload).to_owned(),
            });
        };

        let mut errors = Vec::new();
        let author_arg = extract_text(object, "author", &mut errors);
        let text_arg = extract_text(object, "text", &mut errors);

        match (author_arg, text_arg) {
            (Some(author), Some(text)) => Ok(Self { author, text }),
            _ => Err(ValidationError::multiple(errors)),
        }
    }

    /// Returns the author argument.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the text argument.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the arguments, yielding `(author, text)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.author, self.text)
    }
}

/// Extracts a required string entry, recording a failure otherwise.
fn extract_text(
    object: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match object.get(name) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            errors.push(ValidationError::argument_type(name, json_type_name(other)));
            None
        }
        None => {
            errors.push(ValidationError::missing_argument(name));
            None
        }
    }
}

/// Returns the JSON type name of a value for error reporting.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
