//! Untrusted payload tests through the full service/store stack.

use crate::in_memory::helpers::{runtime, service};
use chatlog::message::adapters::memory::InMemoryMessageStore;
use chatlog::message::error::RequestError;
use chatlog::message::services::MessageService;
use rstest::rstest;
use serde_json::json;
use std::io;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// An accepted payload appends exactly one record.
#[rstest]
fn accepted_payload_appends_one_record(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let payload = json!({"author": "alice", "text": "hello"});
    let id = rt.block_on(service.create_message_from_payload(&payload))?;

    let messages = rt.block_on(service.list_messages())?;
    assert_eq!(messages.len(), 1);
    let stored = messages.first().ok_or("one record expected")?;
    assert_eq!(stored.id(), id);
    Ok(())
}

/// A non-text author fails validation and the collection stays empty.
#[rstest]
fn rejected_payload_leaves_empty_collection_empty(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let payload = json!({"author": 42, "text": "hello"});
    let err = rt
        .block_on(service.create_message_from_payload(&payload))
        .expect_err("author is not text");
    assert!(matches!(err, RequestError::Validation(_)));

    let messages = rt.block_on(service.list_messages())?;
    assert!(messages.is_empty());
    Ok(())
}

/// A rejected payload does not disturb previously stored records.
#[rstest]
fn rejected_payload_leaves_count_unchanged(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(service.create_message("alice", "hello"))?;

    let payload = json!({"author": "bob", "text": ["not", "text"]});
    let err = rt
        .block_on(service.create_message_from_payload(&payload))
        .expect_err("text is not text");
    assert!(matches!(err, RequestError::Validation(_)));

    let messages = rt.block_on(service.list_messages())?;
    assert_eq!(messages.len(), 1);
    Ok(())
}

/// Empty strings pass validation end to end.
#[rstest]
fn empty_string_arguments_are_accepted(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let payload = json!({"author": "", "text": ""});
    rt.block_on(service.create_message_from_payload(&payload))?;

    let messages = rt.block_on(service.list_messages())?;
    assert_eq!(messages.len(), 1);
    Ok(())
}
