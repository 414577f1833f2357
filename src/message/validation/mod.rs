//! Validation for untrusted request payloads.
//!
//! Runtime type checking lives only here, at the external-input boundary
//! where static typing cannot reach. Validation runs before any
//! persistence engine interaction and is never retried.

mod args;

pub use args::{CreateMessageArgs, json_type_name};
