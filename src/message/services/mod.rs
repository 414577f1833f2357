//! Application services for the message log.
//!
//! Services expose the store port as externally callable operations,
//! validating inputs where an operation has any.

mod requests;

pub use requests::MessageService;
