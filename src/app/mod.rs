//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain, fetch and storage
//! layers. Data flows one way:
//!
//! ```text
//! Key / Mouse / Web / Timer → Event → handle_event → AppState → Actions → Host calls
//!                                                        ↓
//!                                                   SortedJokeStore
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and transition dispatch
//! - [`modes`]: Interaction and filter state types
//! - [`state`]: The sorting engine and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, TICK_INTERVAL_SECONDS};
pub use modes::{DragSession, Filter, Interaction};
pub use state::AppState;
