//! Persistence adapter for the sorted jokes list.
//!
//! Wraps a [`Storage`] backend with the sorter's error policy: nothing here
//! ever fails outward. A missing or malformed record loads as an empty list,
//! and a failed save is logged and dropped. Entries without a reaction, or
//! repeating an earlier id, are dropped on load.

use crate::domain::error::{JokeSorterError, Result};
use crate::domain::Joke;
use crate::storage::backend::Storage;
use crate::storage::models::StoredData;
use std::collections::HashSet;

/// Name of the durable record holding the sorted jokes.
pub const STORAGE_KEY: &str = "joke-sorter-data";

/// Loads and saves the `sorted` list through an injected backend.
#[derive(Debug)]
pub struct SortedJokeStore {
    backend: Box<dyn Storage>,
}

impl SortedJokeStore {
    #[must_use]
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self { backend }
    }

    /// Reads the persisted sorted list.
    ///
    /// Returns an empty list if the record is absent or cannot be parsed.
    /// Unsorted entries and repeated ids are skipped with a warning; the
    /// first occurrence of an id wins.
    #[must_use]
    pub fn load(&self) -> Vec<Joke> {
        let _span = tracing::debug_span!("store_load", key = STORAGE_KEY).entered();

        match self.try_load() {
            Ok(Some(data)) => {
                let jokes = retain_valid(data.sorted_jokes);
                tracing::debug!(count = jokes.len(), "sorted jokes loaded");
                jokes
            }
            Ok(None) => {
                tracing::debug!("no saved data, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load saved data, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted record with `sorted`. Best effort.
    pub fn save(&mut self, sorted: &[Joke]) {
        let _span = tracing::debug_span!("store_save", key = STORAGE_KEY, count = sorted.len()).entered();

        match self.try_save(sorted) {
            Ok(()) => tracing::debug!("sorted jokes saved"),
            Err(e) => tracing::warn!(error = %e, "failed to save sorted jokes"),
        }
    }

    fn try_load(&self) -> Result<Option<StoredData>> {
        let Some(contents) = self.backend.read()? else {
            return Ok(None);
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| JokeSorterError::Storage(format!("failed to parse JSON: {e}")))
    }

    fn try_save(&mut self, sorted: &[Joke]) -> Result<()> {
        let data = StoredData {
            sorted_jokes: sorted.to_vec(),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| JokeSorterError::Storage(format!("failed to serialize JSON: {e}")))?;
        self.backend.write(&json)
    }
}

/// Keeps the first entry of each id, and only entries that carry a reaction.
fn retain_valid(jokes: Vec<Joke>) -> Vec<Joke> {
    let total = jokes.len();
    let mut seen = HashSet::new();
    let mut unsorted = 0usize;
    let mut duplicates = 0usize;

    let kept: Vec<Joke> = jokes
        .into_iter()
        .filter(|joke| {
            if joke.reaction.is_none() {
                unsorted += 1;
                false
            } else if !seen.insert(joke.id.clone()) {
                duplicates += 1;
                false
            } else {
                true
            }
        })
        .collect();

    if kept.len() != total {
        tracing::warn!(unsorted, duplicates, kept = kept.len(), "dropped invalid saved jokes");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Reaction;
    use crate::storage::{JsonFileStorage, MemoryStorage};

    fn sorted_joke(id: &str, reaction: Reaction, time_shown: u64) -> Joke {
        Joke {
            id: id.to_string(),
            text: format!("joke {id}"),
            reaction: Some(reaction),
            time_shown,
            start_time: 1_718_000_000_000,
        }
    }

    fn round_trip(jokes: &[Joke]) -> Vec<Joke> {
        let memory = MemoryStorage::new();
        SortedJokeStore::new(Box::new(memory.clone())).save(jokes);
        SortedJokeStore::new(Box::new(memory)).load()
    }

    #[test]
    fn round_trips_empty_single_and_mixed_lists() {
        assert!(round_trip(&[]).is_empty());

        let one = vec![sorted_joke("a", Reaction::Loved, 3)];
        assert_eq!(round_trip(&one), one);

        let many = vec![
            sorted_joke("c", Reaction::NotFunny, 12),
            sorted_joke("b", Reaction::Loved, 0),
            sorted_joke("a", Reaction::NotFunny, 41),
        ];
        assert_eq!(round_trip(&many), many);
    }

    #[test]
    fn absent_record_loads_empty() {
        let store = SortedJokeStore::new(Box::new(MemoryStorage::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_record_loads_empty() {
        let store = SortedJokeStore::new(Box::new(MemoryStorage::with_record("{not json")));
        assert!(store.load().is_empty());
    }

    #[test]
    fn record_without_sorted_jokes_loads_empty() {
        let store = SortedJokeStore::new(Box::new(MemoryStorage::with_record("{}")));
        assert!(store.load().is_empty());
    }

    #[test]
    fn entries_without_reaction_are_dropped() {
        let record = r#"{"sortedJokes":[
            {"id":"x","joke":"never sorted","timeShown":0,"startTime":1000},
            {"id":"y","joke":"joke y","reaction":"loved","timeShown":2,"startTime":1000}
        ]}"#;
        let store = SortedJokeStore::new(Box::new(MemoryStorage::with_record(record)));

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "y");
        assert_eq!(loaded[0].reaction, Some(Reaction::Loved));
    }

    #[test]
    fn repeated_ids_keep_the_first_entry() {
        let record = r#"{"sortedJokes":[
            {"id":"y","joke":"joke y","reaction":"not-funny","timeShown":5,"startTime":1000},
            {"id":"z","joke":"joke z","reaction":"loved","timeShown":1,"startTime":1000},
            {"id":"y","joke":"joke y","reaction":"loved","timeShown":9,"startTime":1000}
        ]}"#;
        let store = SortedJokeStore::new(Box::new(MemoryStorage::with_record(record)));

        let loaded = store.load();
        let ids: Vec<&str> = loaded.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["y", "z"]);
        assert_eq!(loaded[0].reaction, Some(Reaction::NotFunny));
        assert_eq!(loaded[0].time_shown, 5);
    }

    #[test]
    fn rejected_write_is_swallowed_and_keeps_previous_record() {
        let memory = MemoryStorage::new();
        let first = vec![sorted_joke("a", Reaction::Loved, 1)];
        SortedJokeStore::new(Box::new(memory.clone())).save(&first);

        let mut failing = SortedJokeStore::new(Box::new(memory.rejecting_writes()));
        failing.save(&[]);

        assert_eq!(SortedJokeStore::new(Box::new(memory)).load(), first);
    }

    #[test]
    fn writes_the_sorted_jokes_document() {
        let memory = MemoryStorage::new();
        SortedJokeStore::new(Box::new(memory.clone())).save(&[sorted_joke("a", Reaction::Loved, 7)]);

        let value: serde_json::Value = serde_json::from_str(&memory.contents().unwrap()).unwrap();
        assert_eq!(value["sortedJokes"][0]["id"], "a");
        assert_eq!(value["sortedJokes"][0]["reaction"], "loved");
        assert_eq!(value["sortedJokes"][0]["timeShown"], 7);
    }

    #[test]
    fn file_backend_survives_a_new_session() {
        let dir = tempfile::tempdir().unwrap();
        let jokes = vec![
            sorted_joke("b", Reaction::NotFunny, 2),
            sorted_joke("a", Reaction::Loved, 5),
        ];

        SortedJokeStore::new(Box::new(JsonFileStorage::in_dir(dir.path()))).save(&jokes);
        let reloaded = SortedJokeStore::new(Box::new(JsonFileStorage::in_dir(dir.path()))).load();

        assert_eq!(reloaded, jokes);
    }
}
