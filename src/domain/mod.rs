//! Domain layer for the joke sorter.
//!
//! Core types independent of Zellij APIs and infrastructure concerns.
//!
//! - [`error`]: Error types and result alias
//! - [`joke`]: Joke model, reactions, and elapsed-time arithmetic

pub mod error;
pub mod joke;

pub use error::{FetchError, JokeSorterError, Result};
pub use joke::{seconds_between, Joke, RawJoke, Reaction};
