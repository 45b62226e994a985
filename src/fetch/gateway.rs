//! Joke fetch gateway.
//!
//! A batch is five independent GETs issued together. The host answers each
//! one with its own event, so fetching is split in two halves:
//! [`FetchGateway::begin`] hands out the requests and
//! [`FetchGateway::accept`] folds responses back into a batch result.
//!
//! Every batch gets a sequence number. Only the latest batch can resolve;
//! responses for anything older are dropped, so a slow batch can never
//! overwrite the jokes of a newer one.

use crate::domain::{FetchError, RawJoke};
use crate::fetch::messages::{JokeRequest, JokeResponse};

/// Number of jokes requested per batch.
pub const BATCH_SIZE: usize = 5;

/// Default joke provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/";

/// Result of a finished batch, tagged with its sequence number.
pub type BatchOutcome = (u64, Result<Vec<RawJoke>, FetchError>);

/// Responses collected so far for the in-flight batch.
#[derive(Debug, Clone)]
struct PendingBatch {
    batch: u64,
    slots: Vec<Option<RawJoke>>,
}

/// Issues joke batches and joins their responses.
#[derive(Debug, Clone)]
pub struct FetchGateway {
    endpoint: String,
    latest_batch: u64,
    pending: Option<PendingBatch>,
}

impl Default for FetchGateway {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl FetchGateway {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            latest_batch: 0,
            pending: None,
        }
    }

    /// Starts a new batch, superseding any batch still in flight.
    ///
    /// Returns the batch sequence number and the [`BATCH_SIZE`] requests the
    /// host must send.
    pub fn begin(&mut self) -> (u64, Vec<JokeRequest>) {
        self.latest_batch += 1;
        let batch = self.latest_batch;

        if let Some(superseded) = self.pending.replace(PendingBatch {
            batch,
            slots: vec![None; BATCH_SIZE],
        }) {
            tracing::debug!(superseded = superseded.batch, batch, "superseding in-flight batch");
        }

        let requests = (0..BATCH_SIZE)
            .map(|slot| JokeRequest::new(&self.endpoint, batch, slot))
            .collect();

        tracing::debug!(batch, endpoint = %self.endpoint, "joke batch started");
        (batch, requests)
    }

    /// Folds one response into the in-flight batch.
    ///
    /// Returns `Some` exactly once per batch: with the jokes in request order
    /// when every slot has succeeded, or with the first failure. Responses for
    /// stale or already finished batches return `None`.
    pub fn accept(&mut self, response: &JokeResponse) -> Option<BatchOutcome> {
        let Some((batch, slot)) = response.batch_tag() else {
            tracing::debug!(context = ?response.context, "response without batch tag, ignoring");
            return None;
        };

        if batch != self.latest_batch {
            tracing::debug!(batch, latest = self.latest_batch, "stale batch response, ignoring");
            return None;
        }

        let Some(pending) = self.pending.as_mut().filter(|p| p.batch == batch) else {
            tracing::debug!(batch, slot, "batch already finished, ignoring");
            return None;
        };

        if slot >= BATCH_SIZE {
            tracing::debug!(batch, slot, "slot out of range, ignoring");
            return None;
        }

        match decode(response, slot) {
            Ok(raw) => {
                tracing::trace!(batch, slot, joke_id = %raw.id, "joke received");
                pending.slots[slot] = Some(raw);
            }
            Err(e) => {
                tracing::debug!(batch, error = %e, "batch failed");
                self.pending = None;
                return Some((batch, Err(e)));
            }
        }

        if pending.slots.iter().all(Option::is_some) {
            let jokes = self
                .pending
                .take()
                .map(|p| p.slots.into_iter().flatten().collect())
                .unwrap_or_default();
            tracing::debug!(batch, "batch complete");
            return Some((batch, Ok(jokes)));
        }

        None
    }

    /// Sequence number of the most recently started batch (0 before the first).
    #[must_use]
    pub const fn latest_batch(&self) -> u64 {
        self.latest_batch
    }

    /// Returns `true` while the latest batch is still collecting responses.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

fn decode(response: &JokeResponse, slot: usize) -> Result<RawJoke, FetchError> {
    if response.status == 0 {
        return Err(FetchError::Transport {
            slot,
            message: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status {
            slot,
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode {
        slot,
        message: e.to_string(),
    })
}
