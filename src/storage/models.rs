//! Persisted record model.

use crate::domain::Joke;
use serde::{Deserialize, Serialize};

/// Top-level document stored under the sorter's record.
///
/// There is no schema version; an unreadable document is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredData {
    /// Sorted jokes, most recently sorted first.
    #[serde(default)]
    pub sorted_jokes: Vec<Joke>,
}
