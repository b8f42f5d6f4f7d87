//! Key-value storage backends for the persisted cart.
//!
//! The cart treats storage as a single opaque slot: one fixed key, always
//! read and written in full as a JSON text blob. The [`CartStorage`]
//! trait is the seam between the store and the device; [`JsonFileStorage`]
//! is the production backend, [`MemoryStorage`] backs tests and embedded
//! use.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing document exists but cannot be parsed.
    #[error("storage document corrupt at {path}: {reason}")]
    Corrupt {
        /// The file involved.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Backend-specific failure (e.g. an injected test failure).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Asynchronous key-value storage for serialized cart snapshots.
///
/// Values are textual JSON blobs; keys are namespaced strings such as
/// `@GoMarketplace:products`. Implementations must be safe to share
/// behind an `Arc` across tasks.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` when nothing has
    /// been stored yet.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
