//! Request handlers exposing the message store operations.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::message::domain::{Message, MessageId};
use crate::message::error::{RequestError, StoreError};
use crate::message::ports::store::MessageStore;
use crate::message::validation::CreateMessageArgs;

/// Request handlers for the message log.
///
/// Each call is a single stateless request/response: validate if the
/// operation has inputs, delegate to the store, return the result
/// verbatim. The service holds no state beyond the store handle and
/// performs no retry, caching, or buffering of its own.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chatlog::message::adapters::memory::InMemoryMessageStore;
/// use chatlog::message::services::MessageService;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let service = MessageService::new(Arc::new(InMemoryMessageStore::new()));
/// let id = service.create_message("alice", "hello").await?;
/// assert_eq!(service.list_messages().await?.len(), 1);
/// # Ok::<(), chatlog::message::error::RequestError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MessageService<S>
where
    S: MessageStore,
{
    store: Arc<S>,
}

impl<S> MessageService<S>
where
    S: MessageStore,
{
    /// Creates a new service backed by the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists every message currently stored.
    ///
    /// Takes no arguments, so no validation applies. The store's result is
    /// returned verbatim, in the engine's native enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persistence engine cannot complete
    /// the read.
    pub async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let messages = self.store.list_all().await?;
        debug!(count = messages.len(), "listed messages");
        Ok(messages)
    }

    /// Creates a new message and returns its engine-assigned identifier.
    ///
    /// The argument types are the validation: any caller reaching this
    /// signature has already satisfied the text constraint. Empty strings
    /// are accepted for both fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persistence engine cannot complete
    /// the write.
    pub async fn create_message(
        &self,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<MessageId, StoreError> {
        let id = self.store.insert(author.into(), text.into()).await?;
        debug!(%id, "created message");
        Ok(id)
    }

    /// Creates a new message from an untrusted JSON payload.
    ///
    /// Decodes and validates the payload before any store interaction: a
    /// payload whose `author` or `text` is not a string fails with
    /// [`RequestError::Validation`] and persists nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Validation`] if the payload fails argument
    /// validation, or [`RequestError::Store`] if the persistence engine
    /// cannot complete the write.
    pub async fn create_message_from_payload(
        &self,
        payload: &Value,
    ) -> Result<MessageId, RequestError> {
        let args = CreateMessageArgs::from_payload(payload)?;
        let (author, text) = args.into_parts();
        Ok(self.create_message(author, text).await?)
    }
}
