//! Newtype ID for type-safe product references.
//!
//! Product IDs come from the upstream catalog and are treated as opaque
//! strings: stable across sessions, never parsed, never validated.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a product, stable across sessions.
///
/// Wrapping the raw string prevents accidentally mixing product IDs with
/// other string-typed values (titles, image URLs, storage keys).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a raw catalog identifier.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
