//! Sorting engine state and view model computation.
//!
//! [`AppState`] is the single owner of everything the sorter knows: the
//! active cards, the sorted list, the undo point, the current
//! [`Interaction`] and filter. It is built with its collaborators injected
//! (storage, fetch gateway, clock) and exposes one method per state
//! transition. [`handle_event`](crate::app::handle_event) maps events onto
//! these methods.
//!
//! # Invariants
//!
//! - A joke id is never in both `active` and `sorted`, nor twice in either.
//! - Jokes in `active` carry no reaction; jokes in `sorted` always do.
//! - `sorted` is persisted after every change to it.

use super::modes::{DragSession, Filter, Interaction};
use crate::domain::{Joke, RawJoke, Reaction};
use crate::fetch::{FetchGateway, JokeRequest, JokeResponse};
use crate::infrastructure::Clock;
use crate::storage::SortedJokeStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, SortedItem, SortedPanel, UIViewModel, ZoneItem,
};
use std::collections::HashSet;

/// Central state of the joke sorter.
#[derive(Debug)]
pub struct AppState {
    active: Vec<Joke>,
    sorted: Vec<Joke>,
    last_sorted: Option<Joke>,
    interaction: Interaction,
    filter: Filter,
    selected_index: usize,
    ticking: bool,

    /// Color scheme used by the renderer.
    pub theme: Theme,

    store: SortedJokeStore,
    gateway: FetchGateway,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Creates the engine and loads the persisted sorted list.
    ///
    /// The active list starts empty; the first batch is requested separately
    /// once the host allows web access.
    #[must_use]
    pub fn new(store: SortedJokeStore, gateway: FetchGateway, clock: Box<dyn Clock>, theme: Theme) -> Self {
        let sorted = store.load();
        tracing::debug!(sorted_count = sorted.len(), "sorting engine initialized");

        Self {
            active: Vec::new(),
            sorted,
            last_sorted: None,
            interaction: Interaction::Idle,
            filter: Filter::All,
            selected_index: 0,
            ticking: false,
            theme,
            store,
            gateway,
            clock,
        }
    }

    // ----- transitions -------------------------------------------------

    /// Starts a new joke batch and returns the requests the host must send.
    ///
    /// Any drag in progress is abandoned because the cards are about to be
    /// replaced. A batch already in flight is superseded, not cancelled: its
    /// late responses are dropped by the gateway.
    pub fn request_fetch(&mut self) -> Vec<JokeRequest> {
        let (batch, requests) = self.gateway.begin();

        if let Interaction::Dragging(session) = &self.interaction {
            tracing::debug!(joke_id = %session.joke.id, "abandoning drag for new batch");
        }
        self.interaction = Interaction::AwaitingFetch { batch };

        requests
    }

    /// Feeds one host response to the gateway and applies a finished batch.
    ///
    /// Returns `true` if the state changed.
    pub fn complete_fetch(&mut self, response: &JokeResponse) -> bool {
        let Some((batch, outcome)) = self.gateway.accept(response) else {
            return false;
        };

        match outcome {
            Ok(raw_jokes) => self.replace_active(raw_jokes),
            Err(e) => {
                tracing::warn!(batch, error = %e, "error fetching jokes");
            }
        }

        if self.interaction == (Interaction::AwaitingFetch { batch }) {
            self.interaction = Interaction::Idle;
        }
        true
    }

    /// Picks up the active joke with `joke_id`.
    ///
    /// No-op if the joke is not active or a batch is loading.
    pub fn begin_drag(&mut self, joke_id: &str) -> bool {
        if self.interaction.is_loading() {
            tracing::debug!(joke_id, "cards are loading, ignoring drag");
            return false;
        }

        let Some(joke) = self.active.iter().find(|j| j.id == joke_id) else {
            tracing::debug!(joke_id, "drag started on unknown joke");
            return false;
        };

        tracing::debug!(joke_id, "drag started");
        self.interaction = Interaction::Dragging(DragSession {
            joke: joke.clone(),
            highlighted_zone: None,
        });
        true
    }

    /// Highlights `zone` under the dragged card.
    pub fn hover_zone(&mut self, zone: Reaction) -> bool {
        match &mut self.interaction {
            Interaction::Dragging(session) if session.highlighted_zone != Some(zone) => {
                session.highlighted_zone = Some(zone);
                true
            }
            _ => false,
        }
    }

    /// Clears the zone highlight.
    pub fn leave_zone(&mut self) -> bool {
        match &mut self.interaction {
            Interaction::Dragging(session) => session.highlighted_zone.take().is_some(),
            _ => false,
        }
    }

    /// Sorts the dragged joke into `zone`.
    ///
    /// Removes it from `active`, prepends it to `sorted`, makes it the undo
    /// point and persists `sorted`. No-op without a drag in progress.
    pub fn drop_into(&mut self, zone: Reaction) -> bool {
        let session = match std::mem::take(&mut self.interaction) {
            Interaction::Dragging(session) => session,
            other => {
                self.interaction = other;
                tracing::debug!("drop without a dragged joke, ignoring");
                return false;
            }
        };

        let Some(position) = self.active.iter().position(|j| j.id == session.joke.id) else {
            tracing::debug!(joke_id = %session.joke.id, "dragged joke no longer active");
            return true;
        };

        let original = self.active.remove(position);
        let sorted_joke = original.sorted_as(zone, self.clock.now_ms());

        tracing::debug!(
            joke_id = %sorted_joke.id,
            reaction = ?zone,
            time_shown = sorted_joke.time_shown,
            "joke sorted"
        );

        self.sorted.insert(0, sorted_joke.clone());
        self.last_sorted = Some(sorted_joke);
        self.clamp_selection();
        self.store.save(&self.sorted);
        true
    }

    /// Abandons the drag without sorting anything.
    pub fn end_drag(&mut self) -> bool {
        if self.interaction.drag_session().is_some() {
            self.interaction = Interaction::Idle;
            true
        } else {
            false
        }
    }

    /// Reverts the most recent sort, if it has not been undone already.
    ///
    /// The joke returns to the end of `active` with its viewing clock
    /// restarted, and `sorted` is persisted.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.last_sorted.take() else {
            tracing::debug!("nothing to undo");
            return false;
        };

        self.sorted.retain(|j| j.id != last.id);
        self.active.retain(|j| j.id != last.id);
        self.active.push(last.restored(self.clock.now_ms()));

        tracing::debug!(joke_id = %last.id, "sort undone");
        self.store.save(&self.sorted);
        true
    }

    /// Marks the display tick as running.
    ///
    /// Returns `false` if it was already running, so the host timer chain is
    /// only started once.
    pub fn start_ticking(&mut self) -> bool {
        !std::mem::replace(&mut self.ticking, true)
    }

    /// Changes which sorted jokes are displayed.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        let changed = self.filter != filter;
        self.filter = filter;
        changed
    }

    /// Moves the keyboard cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.active.len();
    }

    /// Moves the keyboard cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.active.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.active.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    // ----- derived values ----------------------------------------------

    #[must_use]
    pub fn active(&self) -> &[Joke] {
        &self.active
    }

    /// Sorted jokes, most recently sorted first.
    #[must_use]
    pub fn sorted(&self) -> &[Joke] {
        &self.sorted
    }

    #[must_use]
    pub const fn last_sorted(&self) -> Option<&Joke> {
        self.last_sorted.as_ref()
    }

    #[must_use]
    pub const fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> {
        self.interaction.drag_session()
    }

    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn selected_joke(&self) -> Option<&Joke> {
        self.active.get(self.selected_index)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.interaction.is_loading()
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.last_sorted.is_some()
    }

    #[must_use]
    pub fn loved_count(&self) -> usize {
        self.count_of(Reaction::Loved)
    }

    #[must_use]
    pub fn not_funny_count(&self) -> usize {
        self.count_of(Reaction::NotFunny)
    }

    /// Sorted jokes admitted by the current filter, order preserved.
    #[must_use]
    pub fn visible_sorted(&self) -> Vec<&Joke> {
        self.sorted.iter().filter(|j| self.filter.admits(j)).collect()
    }

    /// Current time according to the injected clock.
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    fn count_of(&self, reaction: Reaction) -> usize {
        self.sorted.iter().filter(|j| j.reaction == Some(reaction)).count()
    }

    // ----- helpers -----------------------------------------------------

    /// Replaces the active list with a fresh batch.
    ///
    /// Jokes already sorted and repeats within the batch are skipped, since
    /// the provider serves random jokes and may repeat itself.
    fn replace_active(&mut self, raw_jokes: Vec<RawJoke>) {
        let now = self.clock.now_ms();
        let mut seen: HashSet<String> = self.sorted.iter().map(|j| j.id.clone()).collect();
        let received = raw_jokes.len();

        self.active = raw_jokes
            .into_iter()
            .filter(|raw| seen.insert(raw.id.clone()))
            .map(|raw| Joke::activate(raw, now))
            .collect();
        self.selected_index = 0;

        tracing::debug!(
            received,
            kept = self.active.len(),
            "active jokes replaced"
        );
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.active.len().saturating_sub(1));
    }

    // ----- view model --------------------------------------------------

    /// Computes the renderable view of the current state.
    ///
    /// Geometry (what fits where) is left to [`Layout`](crate::ui::layout::Layout);
    /// this only decides *what* is shown.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let now = self.now_ms();
        let dragging_id = self.drag_session().map(|s| s.joke.id.as_str());

        let cards = self
            .active
            .iter()
            .enumerate()
            .map(|(idx, joke)| CardItem {
                id: joke.id.clone(),
                text: joke.text.clone(),
                seconds_displayed: joke.seconds_displayed(now),
                is_selected: idx == self.selected_index && dragging_id.is_none(),
                is_dragging: dragging_id == Some(joke.id.as_str()),
            })
            .collect();

        let active_empty = (self.active.is_empty() && !self.is_loading()).then(|| EmptyState {
            message: "No more jokes!".to_string(),
            subtitle: "You've sorted all the jokes. Press r to load more.".to_string(),
        });

        let highlighted = self.drag_session().and_then(|s| s.highlighted_zone);
        let zones = Reaction::ALL
            .iter()
            .map(|&reaction| ZoneItem::new(reaction, self.count_of(reaction), highlighted == Some(reaction)))
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: " Joke Sorter ".to_string(),
                is_loading: self.is_loading(),
            },
            active_title: format!("Active Jokes ({})", self.active.len()),
            cards,
            active_empty,
            zones,
            sorted_panel: self.compute_sorted_panel(),
            footer: self.compute_footer(),
            is_loading: self.is_loading(),
        }
    }

    fn compute_sorted_panel(&self) -> Option<SortedPanel> {
        if self.sorted.is_empty() {
            return None;
        }

        let visible = self.visible_sorted();
        let noun = match self.filter {
            Filter::All => "sorted",
            Filter::Loved => "loved",
        };

        let (summary, empty_state) = if visible.is_empty() {
            let empty = match self.filter {
                Filter::Loved => EmptyState {
                    message: "No loved jokes yet".to_string(),
                    subtitle: "Start dragging jokes to the \"Loved It\" zone!".to_string(),
                },
                Filter::All => EmptyState {
                    message: "No sorted jokes yet".to_string(),
                    subtitle: "Start sorting jokes by dragging them to the drop zones!".to_string(),
                },
            };
            (None, Some(empty))
        } else {
            let plural = if visible.len() == 1 { "" } else { "s" };
            (Some(format!("Showing {} {noun} joke{plural}", visible.len())), None)
        };

        let items = visible
            .into_iter()
            .filter_map(|joke| {
                let reaction = joke.reaction?;
                Some(SortedItem {
                    text: joke.text.clone(),
                    reaction,
                    detail: format!("Viewed for {}s | {}", joke.time_shown, reaction.label()),
                })
            })
            .collect();

        Some(SortedPanel {
            filter: self.filter,
            total: self.sorted.len(),
            can_undo: self.can_undo(),
            summary,
            items,
            empty_state,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.interaction {
            Interaction::Dragging(_) => "Release over a zone to sort  Esc: cancel drag".to_string(),
            Interaction::AwaitingFetch { .. } => {
                "Loading jokes...  u: undo  f: filter  q: quit".to_string()
            }
            Interaction::Idle => {
                "drag or j/k + l/x: sort  u: undo  r: new jokes  f: filter  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }
}
