//! Store port for message persistence.
//!
//! Defines the abstract interface for appending to and reading the message
//! collection, allowing different persistence implementations
//! (`PostgreSQL`, in-memory, etc.).

use crate::message::{
    domain::{Message, MessageId},
    error::StoreError,
};
use async_trait::async_trait;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for the message collection held by the persistence engine.
///
/// Implementations provide the actual storage mechanism while the handlers
/// remain storage-agnostic. The collection is append-only: no update or
/// delete operation exists on this port.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Identifiers are assigned exactly once, at insertion
/// - Each insert is atomic and independent; no cross-record transaction
/// - Concurrent access is handled safely by the implementation
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Retrieves every message currently stored.
    ///
    /// Messages are yielded in the engine's native enumeration order; no
    /// sort, filter, or limit is applied. Returns an empty vector for an
    /// empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the engine cannot complete the read.
    async fn list_all(&self) -> StoreResult<Vec<Message>>;

    /// Appends one new message and returns its engine-assigned identifier.
    ///
    /// No deduplication and no existence check: every call durably persists
    /// one new record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the engine cannot complete the write.
    async fn insert(&self, author: String, text: String) -> StoreResult<MessageId>;
}
