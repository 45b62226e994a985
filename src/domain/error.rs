//! Error types for the joke sorter plugin.
//!
//! This module defines the crate-wide error type [`JokeSorterError`], the
//! fetch-specific [`FetchError`], and a [`Result`] alias. Both are built with
//! `thiserror`. Fetch and persistence failures are logged and swallowed at the
//! boundary where they occur, so these types mostly travel between a backend
//! and the adapter that wraps it.

use thiserror::Error;

/// The main error type for joke sorter operations.
#[derive(Debug, Error)]
pub enum JokeSorterError {
    /// Reading, parsing, or writing the persisted record failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A joke batch could not be fetched.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a whole joke batch.
///
/// A batch fails as soon as any one of its requests fails; there is no partial
/// success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider answered with a non-success HTTP status.
    #[error("request {slot} returned status {status}")]
    Status {
        /// Position of the failing request within the batch.
        slot: usize,
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The request never produced an HTTP response.
    #[error("request {slot} failed: {message}")]
    Transport {
        /// Position of the failing request within the batch.
        slot: usize,
        /// Host-provided failure description.
        message: String,
    },

    /// The response body was not a joke document.
    #[error("request {slot} returned an unreadable joke: {message}")]
    Decode {
        /// Position of the failing request within the batch.
        slot: usize,
        /// Parser error description.
        message: String,
    },
}

/// A specialized `Result` type for joke sorter operations.
pub type Result<T> = std::result::Result<T, JokeSorterError>;
