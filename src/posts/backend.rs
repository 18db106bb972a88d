//! # Document Backend Trait

use super::errors::PostResult;

/// Flat namespace of named text documents backing a post store.
///
/// Implementations must make `write` atomic with respect to `read` of the
/// same name: a reader sees either the old or the new document, never a
/// partial one.
pub trait DocumentBackend: Send + Sync + std::fmt::Debug {
    /// Names of all documents, in no particular order
    fn names(&self) -> PostResult<Vec<String>>;

    /// Read a document; `None` if it does not exist
    fn read(&self, name: &str) -> PostResult<Option<String>>;

    /// Create or fully replace a document
    fn write(&self, name: &str, contents: &str) -> PostResult<()>;

    /// Remove a document; returns `false` if it did not exist
    fn remove(&self, name: &str) -> PostResult<bool>;

    /// Check if a document exists
    fn exists(&self, name: &str) -> PostResult<bool>;
}
