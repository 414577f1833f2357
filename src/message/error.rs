//! Error types for message validation and persistence.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised when a request payload fails argument validation.
///
/// Validation runs before any persistence engine interaction; a payload
/// that fails never reaches the store.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("payload must be an object, got {actual}")]
    NotAnObject {
        /// The JSON type of the payload that was supplied.
        actual: String,
    },

    /// A required argument is absent from the payload.
    #[error("missing argument '{0}'")]
    MissingArgument(String),

    /// An argument is present but is not a text value.
    #[error("argument '{name}' must be a string, got {actual}")]
    ArgumentType {
        /// The argument name.
        name: String,
        /// The JSON type of the value that was supplied.
        actual: String,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates a validation error for a non-text argument.
    #[must_use]
    pub fn argument_type(name: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ArgumentType {
            name: name.into(),
            actual: actual.into(),
        }
    }

    /// Creates a validation error for a missing argument.
    #[must_use]
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than
    /// wrapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns a
    /// placeholder missing-argument error.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::MissingArgument("internal error: no validation errors".into())
            }
            1 => {
                // Length is verified to be 1 immediately above, so this will always succeed.
                errors.into_iter().next().unwrap_or_else(|| {
                    Self::MissingArgument("internal error: no validation errors".into())
                })
            }
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Errors raised when the persistence engine cannot complete a read or
/// write.
///
/// Engine failures are propagated unmodified: no retry, no partial-failure
/// recovery, no local suppression.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A connection error occurred.
    #[error("connection error: {0}")]
    Connection(String),
}

impl StoreError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        // All Diesel errors surface as database errors; the store applies
        // no interpretation of its own.
        Self::database(err)
    }
}

/// Errors surfaced by the request handlers.
///
/// A handler call fails with exactly one of the two kinds: the payload was
/// rejected before the store was touched, or the store itself failed.
#[derive(Debug, Error)]
pub enum RequestError {
    /// An input argument failed its declared type constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence engine could not complete the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
