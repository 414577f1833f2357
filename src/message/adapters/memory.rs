//! In-memory implementation of the `MessageStore` port.
//!
//! Provides a simple, thread-safe store for unit testing and embedding
//! without database dependencies. Not suitable for production use.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{Message, MessageId},
    error::StoreError,
    ports::store::{MessageStore, StoreResult},
};

/// In-memory implementation of [`MessageStore`].
///
/// Thread-safe via internal [`RwLock`]. The enumeration order of
/// [`MessageStore::list_all`] is insertion order. Identifiers are assigned
/// at insertion from random UUIDs.
///
/// # Example
///
/// ```
/// use chatlog::message::adapters::memory::InMemoryMessageStore;
/// use chatlog::message::ports::store::MessageStore;
///
/// let store = InMemoryMessageStore::new();
/// // Use store in tests...
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store. For error-propagating access, use the
    /// store trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list_all(&self) -> StoreResult<Vec<Message>> {
        let guard = self
            .messages
            .read()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard.clone())
    }

    async fn insert(&self, author: String, text: String) -> StoreResult<MessageId> {
        let mut guard = self
            .messages
            .write()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        let id = MessageId::new();
        guard.push(Message::new(id, author, text));
        Ok(id)
    }
}
