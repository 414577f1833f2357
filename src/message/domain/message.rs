//! The Message record stored in the log.

use super::MessageId;
use serde::{Deserialize, Serialize};

/// A single record in the message log.
///
/// Messages are immutable after creation. A message carries exactly three
/// fields: the engine-assigned identifier, the author, and the text content.
///
/// # Invariants
///
/// - `id` is assigned exactly once, at insertion, and never changes
/// - `author` and `text` are always present; both may be empty strings
/// - No other fields exist on a message
///
/// # Examples
///
/// ```
/// use chatlog::message::domain::{Message, MessageId};
///
/// let message = Message::new(MessageId::new(), "alice", "hello");
/// assert_eq!(message.author(), "alice");
/// assert_eq!(message.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// Who wrote the message.
    author: String,

    /// The message content.
    text: String,
}

impl Message {
    /// Creates a message record with the given identifier and fields.
    ///
    /// Intended for store adapters reconstructing records they own; callers
    /// creating new messages go through the request handlers instead, which
    /// leave identifier assignment to the store.
    #[must_use]
    pub fn new(id: MessageId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
