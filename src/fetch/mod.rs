//! Joke fetch gateway.
//!
//! The host performs the actual HTTP calls; this layer decides what to send
//! and joins the answers into all-or-nothing batches.
//!
//! - `messages`: request/response types and context tagging
//! - `gateway`: batch sequencing and join-all aggregation

pub mod gateway;
pub mod messages;

pub use gateway::{BatchOutcome, FetchGateway, BATCH_SIZE, DEFAULT_ENDPOINT};
pub use messages::{JokeRequest, JokeResponse};
