//! Storage adapter
//!
//! Typed JSON key/value storage over an embedded redb database.
//!
//! | Layer | Type | Purpose |
//! |-------|------|---------|
//! | backend | [`KvBackend`] / [`RedbBackend`] | raw string key/value, one write transaction per call |
//! | adapter | [`LocalStorage`] | namespaced keys, JSON (de)serialization, fallbacks |
//!
//! Reads never fail: absent or corrupt entries yield the caller's fallback.
//! Writes return [`StorageResult`] after logging, so callers can keep their
//! in-memory state authoritative when the disk is unavailable.

mod backend;
mod local;

pub use backend::{KvBackend, RedbBackend};
pub use local::{DEFAULT_PREFIX, LocalStorage};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::AppError {
    fn from(err: StorageError) -> Self {
        shared::AppError::storage(err.to_string())
    }
}
