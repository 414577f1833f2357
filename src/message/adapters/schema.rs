//! Diesel table definition for the message collection.
//!
//! Mirrors the SQL schema applied by the migrations under `migrations/`.
//! The `id` column is populated by the database's `gen_random_uuid()`
//! default, so inserts never supply it.

diesel::table! {
    /// The single append-only collection of messages.
    messages (id) {
        /// Engine-assigned record identifier.
        id -> Uuid,
        /// Who wrote the message.
        author -> Text,
        /// The message content.
        text -> Text,
    }
}
