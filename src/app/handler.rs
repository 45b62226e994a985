//! Event handling and state transition logic.
//!
//! Every input the sorter reacts to arrives as an [`Event`]: key presses
//! and pointer gestures already translated by the plugin shim, web request
//! results, permission grants and timer ticks. [`handle_event`] applies the
//! event to [`AppState`] and returns whether a redraw is needed together
//! with the side effects the shim must perform.
//!
//! # Example
//!
//! ```rust
//! use joke_sorter::app::{handle_event, Action, AppState, Event};
//! use joke_sorter::fetch::FetchGateway;
//! use joke_sorter::infrastructure::ManualClock;
//! use joke_sorter::storage::{MemoryStorage, SortedJokeStore};
//! use joke_sorter::ui::Theme;
//!
//! let store = SortedJokeStore::new(Box::new(MemoryStorage::new()));
//! let clock = Box::new(ManualClock::new(0));
//! let mut state = AppState::new(store, FetchGateway::default(), clock, Theme::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::RequestFetch)?;
//! assert_eq!(actions.len(), 5);
//! assert!(matches!(actions[0], Action::SendJokeRequest(_)));
//! # Ok::<(), joke_sorter::JokeSorterError>(())
//! ```

use crate::app::modes::Filter;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Reaction;
use crate::fetch::JokeResponse;

/// Seconds between viewing-time refreshes of the active cards.
pub const TICK_INTERVAL_SECONDS: f64 = 1.0;

/// Events triggered by user input, host callbacks or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; loads the first batch and starts the tick loop.
    PermissionsGranted,
    /// Replaces the active cards with a fresh batch.
    RequestFetch,
    /// One joke request finished.
    JokeResponse(JokeResponse),

    /// A card was picked up.
    BeginDrag(String),
    /// The dragged card is over a drop zone.
    HoverZone(Reaction),
    /// The dragged card left the drop zone it was over.
    LeaveZone,
    /// The dragged card was released over a drop zone.
    Drop(Reaction),
    /// The drag ended anywhere else.
    EndDrag,

    /// Reverts the most recent sort.
    Undo,
    /// Shows all sorted jokes or only loved ones.
    SetFilter(Filter),
    /// Switches between the two filters.
    ToggleFilter,

    /// Moves the keyboard cursor down (wraps to top).
    KeyDown,
    /// Moves the keyboard cursor up (wraps to bottom).
    KeyUp,
    /// Sorts the card under the keyboard cursor.
    SortSelected(Reaction),

    /// Periodic timer; refreshes the seconds shown on active cards.
    Tick,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the plugin should re-render.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the shim's error reporting
/// path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PermissionsGranted => {
            tracing::debug!("web access granted, loading first batch");
            let mut actions = fetch_actions(state);
            if state.start_ticking() {
                actions.push(Action::ScheduleTick {
                    seconds: TICK_INTERVAL_SECONDS,
                });
            }
            Ok((true, actions))
        }
        Event::RequestFetch => Ok((true, fetch_actions(state))),
        Event::JokeResponse(response) => Ok((state.complete_fetch(response), vec![])),

        Event::BeginDrag(joke_id) => Ok((state.begin_drag(joke_id), vec![])),
        Event::HoverZone(zone) => Ok((state.hover_zone(*zone), vec![])),
        Event::LeaveZone => Ok((state.leave_zone(), vec![])),
        Event::Drop(zone) => Ok((state.drop_into(*zone), vec![])),
        Event::EndDrag => Ok((state.end_drag(), vec![])),

        Event::Undo => Ok((state.undo(), vec![])),
        Event::SetFilter(filter) => Ok((state.set_filter(*filter), vec![])),
        Event::ToggleFilter => {
            let next = state.filter().toggled();
            Ok((state.set_filter(next), vec![]))
        }

        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SortSelected(zone) => {
            if let Some(session) = state.drag_session() {
                tracing::debug!(joke_id = %session.joke.id, "drag in progress, ignoring keyboard sort");
                return Ok((false, vec![]));
            }
            let Some(joke_id) = state.selected_joke().map(|j| j.id.clone()) else {
                tracing::debug!("no joke selected");
                return Ok((false, vec![]));
            };
            if !state.begin_drag(&joke_id) {
                return Ok((false, vec![]));
            }
            Ok((state.drop_into(*zone), vec![]))
        }

        Event::Tick => {
            let redraw = !state.active().is_empty() && !state.is_loading();
            Ok((
                redraw,
                vec![Action::ScheduleTick {
                    seconds: TICK_INTERVAL_SECONDS,
                }],
            ))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn fetch_actions(state: &mut AppState) -> Vec<Action> {
    state
        .request_fetch()
        .into_iter()
        .map(Action::SendJokeRequest)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchGateway, JokeRequest};
    use crate::infrastructure::ManualClock;
    use crate::storage::{MemoryStorage, SortedJokeStore};
    use crate::ui::Theme;

    fn new_state() -> (AppState, ManualClock) {
        let clock = ManualClock::new(10_000);
        let store = SortedJokeStore::new(Box::new(MemoryStorage::new()));
        let state = AppState::new(store, FetchGateway::default(), Box::new(clock.clone()), Theme::default());
        (state, clock)
    }

    fn requests_of(actions: &[Action]) -> Vec<JokeRequest> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::SendJokeRequest(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    fn answer(state: &mut AppState, requests: &[JokeRequest]) {
        for (slot, request) in requests.iter().enumerate() {
            let response = JokeResponse {
                status: 200,
                body: format!(r#"{{"id":"j{slot}","joke":"joke number {slot}"}}"#).into_bytes(),
                context: request.context.clone(),
            };
            handle_event(state, &Event::JokeResponse(response)).unwrap();
        }
    }

    #[test]
    fn permissions_granted_fetches_and_starts_ticking() {
        let (mut state, _) = new_state();
        let (redraw, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();

        assert!(redraw);
        assert_eq!(requests_of(&actions).len(), 5);
        assert_eq!(actions.last(), Some(&Action::ScheduleTick { seconds: 1.0 }));
        assert!(state.is_loading());
    }

    #[test]
    fn repeated_grant_does_not_start_a_second_tick_chain() {
        let (mut state, _) = new_state();
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert_eq!(requests_of(&actions).len(), 5);
        assert!(!actions.iter().any(|a| matches!(a, Action::ScheduleTick { .. })));
    }

    #[test]
    fn sort_selected_is_ignored_while_dragging() {
        let (mut state, _) = new_state();
        let (_, actions) = handle_event(&mut state, &Event::RequestFetch).unwrap();
        answer(&mut state, &requests_of(&actions));

        handle_event(&mut state, &Event::BeginDrag("j3".to_string())).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::SortSelected(Reaction::Loved)).unwrap();

        assert!(!redraw);
        assert!(state.sorted().is_empty());
        assert_eq!(state.drag_session().map(|s| s.joke.id.as_str()), Some("j3"));

        handle_event(&mut state, &Event::Drop(Reaction::NotFunny)).unwrap();
        assert_eq!(state.sorted()[0].id, "j3");
    }

    #[test]
    fn sort_selected_moves_cursor_joke_into_zone() {
        let (mut state, clock) = new_state();
        let (_, actions) = handle_event(&mut state, &Event::RequestFetch).unwrap();
        answer(&mut state, &requests_of(&actions));

        handle_event(&mut state, &Event::KeyDown).unwrap();
        clock.advance(4_200);
        let (redraw, _) = handle_event(&mut state, &Event::SortSelected(Reaction::NotFunny)).unwrap();

        assert!(redraw);
        assert_eq!(state.sorted()[0].id, "j1");
        assert_eq!(state.sorted()[0].time_shown, 4);
        assert_eq!(state.active().len(), 4);
    }

    #[test]
    fn sort_selected_with_no_cards_does_nothing() {
        let (mut state, _) = new_state();
        let (redraw, actions) = handle_event(&mut state, &Event::SortSelected(Reaction::Loved)).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
        assert!(state.sorted().is_empty());
    }

    #[test]
    fn toggle_filter_flips_between_views() {
        let (mut state, _) = new_state();
        handle_event(&mut state, &Event::ToggleFilter).unwrap();
        assert_eq!(state.filter(), Filter::Loved);
        handle_event(&mut state, &Event::ToggleFilter).unwrap();
        assert_eq!(state.filter(), Filter::All);
    }

    #[test]
    fn tick_always_reschedules_but_redraws_only_with_cards() {
        let (mut state, _) = new_state();
        let (redraw, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!redraw);
        assert_eq!(actions, vec![Action::ScheduleTick { seconds: 1.0 }]);

        let (_, fetch) = handle_event(&mut state, &Event::RequestFetch).unwrap();
        answer(&mut state, &requests_of(&fetch));
        let (redraw, _) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(redraw);
    }

    #[test]
    fn close_focus_emits_close_action() {
        let (mut state, _) = new_state();
        let (redraw, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!redraw);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
