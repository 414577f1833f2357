//! `PostgreSQL` implementation of the `MessageStore` port using Diesel ORM.
//!
//! Provides production-grade persistence for the message collection. All
//! database operations are offloaded to a blocking thread pool via
//! [`tokio::task::spawn_blocking`] to avoid blocking the async runtime.

use async_trait::async_trait;
use diesel::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use uuid::Uuid;

use super::models::{MessageRow, NewMessageRow};
use super::schema::messages;
use crate::message::{
    domain::{Message, MessageId},
    error::StoreError,
    ports::store::{MessageStore, StoreResult},
};

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for internal use.
type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Runs a blocking database operation on a dedicated thread pool.
///
/// Wraps the closure in [`tokio::task::spawn_blocking`] to prevent
/// blocking the async executor's worker threads.
async fn run_blocking<F, T>(f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::connection(format!("task join error: {e}")))?
}

/// Obtains a connection from the pool.
fn get_conn(pool: &PgPool) -> StoreResult<PooledConn> {
    pool.get()
        .map_err(|e| StoreError::connection(e.to_string()))
}

/// `PostgreSQL` implementation of [`MessageStore`].
///
/// Uses Diesel ORM with connection pooling via r2d2. Thread-safe for
/// concurrent access. Record identifiers are assigned by the database's
/// `gen_random_uuid()` column default and read back with `RETURNING`.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool};
/// use diesel::PgConnection;
/// use chatlog::message::adapters::postgres::PostgresMessageStore;
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let store = PostgresMessageStore::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn list_all(&self) -> StoreResult<Vec<Message>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let rows = messages::table
                .select(MessageRow::as_select())
                .load::<MessageRow>(&mut conn)
                .map_err(StoreError::from)?;

            Ok(rows.into_iter().map(MessageRow::into_domain).collect())
        })
        .await
    }

    async fn insert(&self, author: String, text: String) -> StoreResult<MessageId> {
        let pool = self.pool.clone();
        let new_row = NewMessageRow::new(author, text);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let id = diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(messages::id)
                .get_result::<Uuid>(&mut conn)
                .map_err(StoreError::from)?;

            Ok(MessageId::from_uuid(id))
        })
        .await
    }
}
