//! Storage layer for the sorted jokes list.
//!
//! # Modules
//!
//! - `backend`: single-record storage trait
//! - `json`: file backend with atomic writes
//! - `memory`: shared in-memory backend
//! - `models`: persisted document shape
//! - `sorted`: load/save adapter with the never-fail error policy

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;
pub mod sorted;

pub use backend::Storage;
pub use json::{JsonFileStorage, RECORD_FILE_NAME};
pub use memory::MemoryStorage;
pub use models::StoredData;
pub use sorted::{SortedJokeStore, STORAGE_KEY};
