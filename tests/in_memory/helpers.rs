//! Shared test helpers for in-memory integration tests.

use std::io;
use std::sync::Arc;

use chatlog::message::adapters::memory::InMemoryMessageStore;
use chatlog::message::services::MessageService;
use rstest::fixture;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a service over a fresh in-memory store for each test.
#[fixture]
pub fn service() -> MessageService<InMemoryMessageStore> {
    init_tracing();
    MessageService::new(Arc::new(InMemoryMessageStore::new()))
}

/// Installs a test-writer tracing subscriber for the binary.
///
/// Later calls are no-ops: only one global subscriber can exist.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
