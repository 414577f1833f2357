//! Diesel model types for message persistence.
//!
//! These types map database rows to Rust structs using Diesel's derive
//! macros. They serve as the boundary between the database and domain
//! layers.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::messages;
use crate::message::domain::{Message, MessageId};

/// Database row representation of a message.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Engine-assigned record identifier.
    pub id: Uuid,
    /// Who wrote the message.
    pub author: String,
    /// The message content.
    pub text: String,
}

impl MessageRow {
    /// Converts the row into its domain representation.
    #[must_use]
    pub fn into_domain(self) -> Message {
        Message::new(MessageId::from_uuid(self.id), self.author, self.text)
    }
}

/// Data for inserting a new message.
///
/// Carries no `id`: the database assigns one via its column default and
/// the insert reads it back with a `RETURNING` clause.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Who wrote the message.
    pub author: String,
    /// The message content.
    pub text: String,
}

impl NewMessageRow {
    /// Creates an insertable row from caller-supplied fields.
    #[must_use]
    pub const fn new(author: String, text: String) -> Self {
        Self { author, text }
    }
}
