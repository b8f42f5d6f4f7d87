//! Cart operation errors.
//!
//! The taxonomy is deliberately small. Load-time read or parse failures
//! never surface here: an unreadable saved cart is treated as "no saved
//! cart" and the store starts empty. Operations only fail when the
//! freshly published snapshot cannot be written back to storage; the
//! in-memory state keeps the mutation in that case, so callers that see
//! `Err` know storage is now behind.

use thiserror::Error;

use crate::storage::StorageError;

/// Error type for cart store operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected the write.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart snapshot could not be encoded for storage.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = CartError::from(StorageError::Backend("disk full".to_string()));
        assert_eq!(err.to_string(), "storage error: storage backend error: disk full");
    }
}
