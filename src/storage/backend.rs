//! Storage backend abstraction.
//!
//! A backend holds exactly one named record as an opaque string. Encoding
//! and error policy live one level up in [`SortedJokeStore`], so a backend
//! only has to move bytes.
//!
//! [`SortedJokeStore`]: crate::storage::SortedJokeStore

use crate::domain::error::Result;
use std::fmt::Debug;

/// Durable key-value slot holding the sorter's record.
///
/// # Implementations
///
/// - [`JsonFileStorage`](crate::storage::JsonFileStorage): file in the plugin data directory
/// - [`MemoryStorage`](crate::storage::MemoryStorage): shared in-memory slot for tests
pub trait Storage: Debug {
    /// Reads the record, returning `Ok(None)` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrites the record with `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, full disk).
    fn write(&mut self, contents: &str) -> Result<()>;
}
