//! Chatlog: a validated append-only message log.
//!
//! This crate mediates all access to a single collection of messages held by
//! an external persistence engine. It exposes two operations: a
//! full-collection read and a validated single-record append. Records are
//! never updated or deleted.
//!
//! # Architecture
//!
//! Chatlog follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the persistence engine
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`message`]: Message types, the store port, adapters, and the request
//!   handlers built on top of them

pub mod message;
