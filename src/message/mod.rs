//! Message log types, persistence port, and request handlers.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::MessageId`])
//! - **Ports**: Abstract trait interfaces ([`ports::store::MessageStore`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessageStore`],
//!   [`adapters::postgres::PostgresMessageStore`])
//! - **Services**: Request handlers exposing the store operations with input
//!   validation ([`services::MessageService`])
//! - **Validation**: Argument checking for untrusted request payloads
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chatlog::message::adapters::memory::InMemoryMessageStore;
//! use chatlog::message::services::MessageService;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let service = MessageService::new(Arc::new(InMemoryMessageStore::new()));
//! let id = service.create_message("alice", "hello").await?;
//!
//! let messages = service.list_messages().await?;
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].id(), id);
//! # Ok::<(), chatlog::message::error::RequestError>(())
//! # }).unwrap();
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
