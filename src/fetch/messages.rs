//! Request and response types exchanged with the plugin host.
//!
//! The host performs the HTTP calls and echoes each request's `context` map
//! back with its response. The context is how a response finds its batch and
//! its slot within the batch.

use std::collections::BTreeMap;

/// Context key marking a web request as one of ours.
pub const CONTEXT_SOURCE: &str = "source";

/// Value stored under [`CONTEXT_SOURCE`].
pub const SOURCE_NAME: &str = "joke-sorter";

/// Context key holding the batch sequence number.
pub const CONTEXT_BATCH: &str = "batch";

/// Context key holding the request's position within its batch.
pub const CONTEXT_SLOT: &str = "slot";

/// One outbound GET for a single joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRequest {
    /// Provider endpoint.
    pub url: String,
    /// Request headers (`Accept: application/json`).
    pub headers: BTreeMap<String, String>,
    /// Routing context echoed back by the host.
    pub context: BTreeMap<String, String>,
}

impl JokeRequest {
    pub(crate) fn new(url: &str, batch: u64, slot: usize) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), "joke-sorter (zellij plugin)".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_SOURCE.to_string(), SOURCE_NAME.to_string());
        context.insert(CONTEXT_BATCH.to_string(), batch.to_string());
        context.insert(CONTEXT_SLOT.to_string(), slot.to_string());

        Self {
            url: url.to_string(),
            headers,
            context,
        }
    }
}

/// A completed web request as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeResponse {
    /// HTTP status; `0` when no response was received at all.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
    /// The context map of the originating [`JokeRequest`].
    pub context: BTreeMap<String, String>,
}

impl JokeResponse {
    /// Returns `true` if the context marks this as a joke sorter request.
    #[must_use]
    pub fn is_ours(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_SOURCE).is_some_and(|source| source == SOURCE_NAME)
    }

    /// Extracts `(batch, slot)` from the context, if both are present and numeric.
    #[must_use]
    pub fn batch_tag(&self) -> Option<(u64, usize)> {
        let batch = self.context.get(CONTEXT_BATCH)?.parse().ok()?;
        let slot = self.context.get(CONTEXT_SLOT)?.parse().ok()?;
        Some((batch, slot))
    }
}
