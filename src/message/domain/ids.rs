//! Identifier newtype for message records.
//!
//! Wraps the engine-assigned UUID to prevent accidental mixing with other
//! identifier types elsewhere in a hosting application.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a message in the log.
///
/// Identifiers are assigned exactly once, at insertion time, by the store
/// adapter standing in for the persistence engine. They are opaque to
/// callers and immutable thereafter.
///
/// # Examples
///
/// ```
/// use chatlog::message::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `MessageId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
