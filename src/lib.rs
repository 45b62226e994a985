//! Joke Sorter: a Zellij plugin for sorting dad jokes by dragging them.
//!
//! The plugin shows a handful of jokes fetched from a public joke service.
//! Each one can be dragged with the mouse (or sent with the keyboard) into
//! one of two zones, "Loved It!" or "Not Funny". Sorted jokes are kept in a
//! filterable list, survive restarts, and the most recent sort can be undone.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  keys / mouse / web results / timers → Event        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Sorting engine
//! │  - Event handling                                   │
//! │  - Interaction state (idle / dragging / loading)    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (fetch/)      │
//! │ - Layout      │   │ - JSON record │   │ - Batches     │
//! │ - Hit testing │   │ - Backends    │   │ - Join-all    │
//! │ - Rendering   │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Joke model, errors (domain/)                     │
//! │  - Clock, sandbox paths (infrastructure/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/joke-sorter.wasm" {
//!         endpoint "https://icanhazdadjoke.com/"
//!         data_dir "~/.local/share/zellij/joke-sorter"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use joke_sorter::app::{handle_event, Action, AppState, Event};
//! use joke_sorter::fetch::{FetchGateway, JokeResponse};
//! use joke_sorter::infrastructure::ManualClock;
//! use joke_sorter::storage::{MemoryStorage, SortedJokeStore};
//! use joke_sorter::domain::Reaction;
//! use joke_sorter::Theme;
//!
//! let store = SortedJokeStore::new(Box::new(MemoryStorage::new()));
//! let clock = ManualClock::new(0);
//! let mut state = AppState::new(store, FetchGateway::default(), Box::new(clock.clone()), Theme::default());
//!
//! // The shim sends these through the host and feeds the answers back.
//! let (_, actions) = handle_event(&mut state, &Event::RequestFetch)?;
//! for (slot, action) in actions.iter().enumerate() {
//!     if let Action::SendJokeRequest(request) = action {
//!         let body = format!(r#"{{"id":"joke-{slot}","joke":"Joke {slot}"}}"#);
//!         let response = JokeResponse { status: 200, body: body.into_bytes(), context: request.context.clone() };
//!         handle_event(&mut state, &Event::JokeResponse(response))?;
//!     }
//! }
//! assert_eq!(state.active().len(), 5);
//!
//! clock.advance(3_000);
//! handle_event(&mut state, &Event::BeginDrag("joke-0".to_string()))?;
//! handle_event(&mut state, &Event::Drop(Reaction::Loved))?;
//! assert_eq!(state.loved_count(), 1);
//! assert_eq!(state.sorted()[0].time_shown, 3);
//! # Ok::<(), joke_sorter::JokeSorterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Filter, Interaction};
pub use domain::{FetchError, Joke, JokeSorterError, Reaction, Result};
pub use ui::Theme;

use crate::fetch::{FetchGateway, DEFAULT_ENDPOINT};
use crate::infrastructure::{get_data_dir, SystemClock};
use crate::storage::{JsonFileStorage, SortedJokeStore};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Joke provider URL. Default: `https://icanhazdadjoke.com/`
    pub endpoint: String,

    /// Directory for the sorted jokes record and the trace file.
    ///
    /// `~` expands to the sandbox's `/host` mount. Default:
    /// `/host/.local/share/zellij/joke-sorter`
    pub data_dir: Option<String>,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter (`trace`, `debug`, `info`, `warn`, `error`). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_dir: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use joke_sorter::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://localhost:8080/".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("data_dir".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://localhost:8080/");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.data_dir, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            endpoint: get("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            data_dir: get("data_dir"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Checks values that cannot be defaulted silently.
    ///
    /// # Errors
    ///
    /// Returns [`JokeSorterError::Config`] if the endpoint is not an
    /// `http://` or `https://` URL.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://") {
            Ok(())
        } else {
            Err(JokeSorterError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )))
        }
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> std::path::PathBuf {
        get_data_dir(self.data_dir.as_deref())
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the sorting engine for a plugin instance.
///
/// Loads the theme, opens the sorted jokes record in the data directory and
/// wires in the system clock. An invalid endpoint is logged and replaced by
/// the default. The active list starts empty; the first batch is requested
/// once web access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(?config, "initializing joke sorter");

    let endpoint = match config.validate() {
        Ok(()) => config.endpoint.as_str(),
        Err(e) => {
            tracing::warn!(error = %e, "using default endpoint");
            DEFAULT_ENDPOINT
        }
    };

    let data_dir = config.data_dir();
    let store = SortedJokeStore::new(Box::new(JsonFileStorage::in_dir(&data_dir)));

    AppState::new(
        store,
        FetchGateway::new(endpoint),
        Box::new(SystemClock),
        config.load_theme(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_map_is_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = Config {
            endpoint: "ftp://jokes.example".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(JokeSorterError::Config(_))));
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let mut custom = Theme::default();
        custom.name = "mine".to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "mine");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_loads_sorted_jokes_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(storage::RECORD_FILE_NAME),
            r#"{"sortedJokes":[{"id":"a","joke":"A joke","reaction":"loved","timeShown":4,"startTime":1000}]}"#,
        )
        .unwrap();

        let config = Config {
            data_dir: Some(dir.path().to_string_lossy().into_owned()),
            endpoint: "not a url".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.sorted().len(), 1);
        assert_eq!(state.loved_count(), 1);
        assert!(state.active().is_empty());
    }
}
