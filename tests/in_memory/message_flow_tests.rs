//! Create/list flow tests over the in-memory store.
//!
//! Exercises the externally contracted behaviour: full-collection reads,
//! engine-assigned identifiers, and append-only semantics.

use crate::in_memory::helpers::{runtime, service};
use chatlog::message::adapters::memory::InMemoryMessageStore;
use chatlog::message::services::MessageService;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Listing an empty collection returns an empty sequence.
#[rstest]
fn empty_collection_lists_empty(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let messages = rt.block_on(service.list_messages())?;

    assert!(messages.is_empty());
    Ok(())
}

/// Listing twice with no intervening writes returns equal sequences.
#[rstest]
fn listing_is_idempotent_without_writes(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(service.create_message("alice", "hello"))?;

    let first = rt.block_on(service.list_messages())?;
    let second = rt.block_on(service.list_messages())?;

    assert_eq!(first, second);
    Ok(())
}

/// Creating a message on an empty collection yields exactly that record.
#[rstest]
fn single_create_lists_exactly_that_record(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let id = rt.block_on(service.create_message("alice", "hello"))?;
    let messages = rt.block_on(service.list_messages())?;

    assert_eq!(messages.len(), 1);
    let stored = messages.first().ok_or("one record expected")?;
    assert_eq!(stored.id(), id);
    assert_eq!(stored.author(), "alice");
    assert_eq!(stored.text(), "hello");
    Ok(())
}

/// Two sequential creates yield distinct identifiers, and both records are
/// present exactly once.
#[rstest]
fn sequential_creates_yield_distinct_records(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let first = rt.block_on(service.create_message("a", "1"))?;
    let second = rt.block_on(service.create_message("b", "2"))?;
    assert_ne!(first, second);

    let messages = rt.block_on(service.list_messages())?;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.iter().filter(|m| m.id() == first).count(), 1);
    assert_eq!(messages.iter().filter(|m| m.id() == second).count(), 1);
    Ok(())
}

/// Every create returns an identifier not equal to any previously returned
/// one, and the matching record is visible to a subsequent list.
#[rstest]
fn created_identifiers_never_repeat(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    let mut seen = Vec::new();
    for n in 0..5 {
        let id = rt.block_on(service.create_message("bot", format!("tick {n}")))?;
        assert!(!seen.contains(&id));
        seen.push(id);
    }

    let messages = rt.block_on(service.list_messages())?;
    assert_eq!(messages.len(), seen.len());
    for id in &seen {
        assert!(messages.iter().any(|m| m.id() == *id));
    }
    Ok(())
}

/// Empty author and text are accepted; the permissive contract is
/// preserved end to end.
#[rstest]
fn empty_fields_are_stored(
    runtime: io::Result<Runtime>,
    service: MessageService<InMemoryMessageStore>,
) -> TestResult {
    let rt = runtime?;

    rt.block_on(service.create_message("", ""))?;
    let messages = rt.block_on(service.list_messages())?;

    let stored = messages.first().ok_or("one record expected")?;
    assert_eq!(stored.author(), "");
    assert_eq!(stored.text(), "");
    Ok(())
}
