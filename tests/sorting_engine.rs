//! End-to-end flows through the sorting engine, driven by events the way the
//! plugin shim drives it, with a hand-driven clock and in-memory storage.

use joke_sorter::app::{handle_event, Action, AppState, Event, Filter, Interaction};
use joke_sorter::domain::{Joke, Reaction};
use joke_sorter::fetch::{FetchGateway, JokeRequest, JokeResponse};
use joke_sorter::infrastructure::ManualClock;
use joke_sorter::storage::{JsonFileStorage, MemoryStorage, SortedJokeStore};
use joke_sorter::Theme;

const T0: i64 = 1_700_000_000_000;

struct Harness {
    state: AppState,
    clock: ManualClock,
    storage: MemoryStorage,
}

impl Harness {
    fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    fn with_storage(storage: MemoryStorage) -> Self {
        let clock = ManualClock::new(T0);
        let store = SortedJokeStore::new(Box::new(storage.clone()));
        let state = AppState::new(store, FetchGateway::default(), Box::new(clock.clone()), Theme::default());
        Self { state, clock, storage }
    }

    fn send(&mut self, event: Event) -> Vec<Action> {
        handle_event(&mut self.state, &event).unwrap().1
    }

    fn begin_fetch(&mut self) -> Vec<JokeRequest> {
        self.send(Event::RequestFetch)
            .into_iter()
            .filter_map(|action| match action {
                Action::SendJokeRequest(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn respond(&mut self, request: &JokeRequest, id: &str) {
        let body = format!(r#"{{"id":"{id}","joke":"Joke {id}","status":200}}"#);
        self.send(Event::JokeResponse(JokeResponse {
            status: 200,
            body: body.into_bytes(),
            context: request.context.clone(),
        }));
    }

    fn fail(&mut self, request: &JokeRequest, status: u16) {
        self.send(Event::JokeResponse(JokeResponse {
            status,
            body: b"Service Unavailable".to_vec(),
            context: request.context.clone(),
        }));
    }

    /// Fetches a full batch whose ids are `prefix0..prefix4`.
    fn load_batch(&mut self, prefix: &str) {
        let requests = self.begin_fetch();
        for (slot, request) in requests.iter().enumerate() {
            self.respond(request, &format!("{prefix}{slot}"));
        }
    }

    fn sort(&mut self, id: &str, reaction: Reaction) {
        self.send(Event::BeginDrag(id.to_string()));
        self.send(Event::HoverZone(reaction));
        self.send(Event::Drop(reaction));
    }

    fn active_ids(&self) -> Vec<&str> {
        self.state.active().iter().map(|j| j.id.as_str()).collect()
    }

    fn sorted_ids(&self) -> Vec<&str> {
        self.state.sorted().iter().map(|j| j.id.as_str()).collect()
    }

    fn assert_exclusive(&self) {
        for joke in self.state.sorted() {
            assert!(joke.reaction.is_some(), "sorted joke {} has no reaction", joke.id);
            assert!(!self.state.active().iter().any(|a| a.id == joke.id), "{} is in both lists", joke.id);
        }
        for joke in self.state.active() {
            assert!(joke.reaction.is_none(), "active joke {} has a reaction", joke.id);
        }
        let mut ids: Vec<&str> = self.active_ids();
        ids.extend(self.sorted_ids());
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate ids across lists");
    }
}

#[test]
fn first_batch_fills_active_in_request_order() {
    let mut h = Harness::new();
    h.load_batch("a");

    assert_eq!(h.active_ids(), ["a0", "a1", "a2", "a3", "a4"]);
    assert!(h.state.active().iter().all(|j| j.start_time == T0 && j.time_shown == 0));
    assert!(!h.state.is_loading());
    assert_eq!(*h.state.interaction(), Interaction::Idle);
}

#[test]
fn drops_keep_lists_exclusive_for_any_sequence() {
    let mut h = Harness::new();
    // Small deterministic generator so the sequence is reproducible.
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for round in 0..40 {
        if h.state.active().is_empty() {
            h.load_batch(&format!("r{round}-"));
        }
        let roll = next();
        match roll % 5 {
            0 => {
                h.send(Event::Undo);
            }
            1 => {
                let id = h.state.active()[0].id.clone();
                h.send(Event::BeginDrag(id));
                h.send(Event::EndDrag);
            }
            _ => {
                let pick = usize::try_from(roll % 97).unwrap() % h.state.active().len();
                let id = h.state.active()[pick].id.clone();
                let reaction = if roll % 2 == 0 { Reaction::Loved } else { Reaction::NotFunny };
                h.sort(&id, reaction);
            }
        }
        h.clock.advance(1_250);
        h.assert_exclusive();
    }
}

#[test]
fn undo_right_after_drop_restores_previous_sizes() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    let (active_before, sorted_before) = (h.state.active().len(), h.state.sorted().len());

    h.clock.advance(5_000);
    h.sort("a3", Reaction::NotFunny);
    h.clock.advance(2_000);
    h.send(Event::Undo);

    assert_eq!(h.state.active().len(), active_before);
    assert_eq!(h.state.sorted().len(), sorted_before);
    assert!(!h.sorted_ids().contains(&"a3"));

    let restored = h.state.active().last().unwrap();
    assert_eq!(restored.id, "a3");
    assert_eq!(restored.reaction, None);
    assert_eq!(restored.time_shown, 0);
    assert_eq!(restored.start_time, T0 + 7_000);
    assert!(!h.state.can_undo());
}

#[test]
fn undo_without_a_pending_sort_changes_nothing() {
    let mut h = Harness::new();
    h.send(Event::Undo);
    assert!(h.state.active().is_empty());
    assert!(h.state.sorted().is_empty());
    assert_eq!(h.storage.contents(), None);

    h.load_batch("a");
    h.sort("a1", Reaction::Loved);
    h.send(Event::Undo);
    let (active, sorted): (Vec<Joke>, Vec<Joke>) = (h.state.active().to_vec(), h.state.sorted().to_vec());

    let (redraw, _) = handle_event(&mut h.state, &Event::Undo).unwrap();
    assert!(!redraw);
    assert_eq!(h.state.active(), active.as_slice());
    assert_eq!(h.state.sorted(), sorted.as_slice());
}

#[test]
fn only_the_latest_drop_can_be_undone() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    h.sort("a1", Reaction::NotFunny);

    h.send(Event::Undo);
    h.send(Event::Undo);

    assert_eq!(h.sorted_ids(), ["a0"]);
    assert_eq!(h.active_ids(), ["a2", "a3", "a4", "a1"]);
}

#[test]
fn filter_selects_loved_subset_in_recency_order() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    h.sort("a1", Reaction::NotFunny);
    h.sort("a2", Reaction::Loved);
    h.sort("a3", Reaction::NotFunny);
    h.sort("a4", Reaction::Loved);

    h.send(Event::SetFilter(Filter::Loved));
    let loved: Vec<&str> = h.state.visible_sorted().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(loved, ["a4", "a2", "a0"]);
    assert_eq!(h.state.loved_count(), 3);
    assert_eq!(h.state.not_funny_count(), 2);

    h.send(Event::SetFilter(Filter::All));
    let all: Vec<&str> = h.state.visible_sorted().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(all, ["a4", "a3", "a2", "a1", "a0"]);
}

#[test]
fn time_shown_is_whole_seconds_on_screen() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.clock.advance(7_300);
    h.sort("a2", Reaction::Loved);

    assert_eq!(h.state.sorted()[0].time_shown, 7);
    assert_eq!(h.state.sorted()[0].start_time, T0);
}

#[test]
fn failed_fetch_leaves_active_untouched() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    let before: Vec<Joke> = h.state.active().to_vec();

    let requests = h.begin_fetch();
    assert!(h.state.is_loading());
    h.respond(&requests[0], "b0");
    h.fail(&requests[1], 503);

    assert!(!h.state.is_loading());
    assert_eq!(h.state.active(), before.as_slice());

    // Stragglers from the failed batch change nothing.
    for request in &requests[2..] {
        h.respond(request, "late");
    }
    assert_eq!(h.state.active(), before.as_slice());
}

#[test]
fn stale_batch_cannot_overwrite_newer_one() {
    let mut h = Harness::new();
    let old = h.begin_fetch();
    let fresh = h.begin_fetch();

    for (slot, request) in fresh.iter().enumerate() {
        h.respond(request, &format!("new{slot}"));
    }
    for (slot, request) in old.iter().enumerate() {
        h.respond(request, &format!("old{slot}"));
    }

    assert_eq!(h.active_ids(), ["new0", "new1", "new2", "new3", "new4"]);
    assert!(!h.state.is_loading());
}

#[test]
fn new_batch_skips_jokes_already_sorted() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);

    let requests = h.begin_fetch();
    for (slot, request) in requests.iter().enumerate() {
        let id = if slot < 2 { "a0".to_string() } else { format!("b{slot}") };
        h.respond(request, &id);
    }

    assert_eq!(h.active_ids(), ["b2", "b3", "b4"]);
    h.assert_exclusive();
}

#[test]
fn fetch_abandons_a_drag_and_blocks_new_ones_until_done() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.send(Event::BeginDrag("a1".to_string()));

    let requests = h.begin_fetch();
    assert!(h.state.drag_session().is_none());

    h.send(Event::BeginDrag("a2".to_string()));
    h.send(Event::Drop(Reaction::Loved));
    assert!(h.state.sorted().is_empty());
    assert!(h.state.is_loading());

    for (slot, request) in requests.iter().enumerate() {
        h.respond(request, &format!("b{slot}"));
    }
    assert_eq!(h.active_ids(), ["b0", "b1", "b2", "b3", "b4"]);
}

#[test]
fn drop_requires_a_drag_and_end_drag_sorts_nothing() {
    let mut h = Harness::new();
    h.load_batch("a");

    h.send(Event::Drop(Reaction::Loved));
    assert!(h.state.sorted().is_empty());

    h.send(Event::BeginDrag("a0".to_string()));
    h.send(Event::HoverZone(Reaction::NotFunny));
    h.send(Event::LeaveZone);
    assert_eq!(h.state.drag_session().unwrap().highlighted_zone, None);
    h.send(Event::EndDrag);

    assert!(h.state.sorted().is_empty());
    assert_eq!(h.state.active().len(), 5);
    assert_eq!(*h.state.interaction(), Interaction::Idle);
}

#[test]
fn unknown_card_cannot_be_dragged() {
    let mut h = Harness::new();
    h.load_batch("a");
    let (redraw, _) = handle_event(&mut h.state, &Event::BeginDrag("zzz".to_string())).unwrap();
    assert!(!redraw);
    assert!(h.state.drag_session().is_none());
}

#[test]
fn every_sort_and_undo_is_persisted() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    assert!(h.storage.contents().unwrap().contains("\"a0\""));

    h.send(Event::Undo);
    let saved = h.storage.contents().unwrap();
    assert!(!saved.contains("\"a0\""));
    assert!(saved.contains("sortedJokes"));
}

#[test]
fn sorted_list_survives_a_restart() {
    let storage = MemoryStorage::new();
    let mut first = Harness::with_storage(storage.clone());
    first.load_batch("a");
    first.clock.advance(2_500);
    first.sort("a0", Reaction::Loved);
    first.sort("a1", Reaction::NotFunny);
    let expected = first.state.sorted().to_vec();

    let second = Harness::with_storage(storage);
    assert_eq!(second.state.sorted(), expected.as_slice());
    assert!(second.state.active().is_empty());
    assert!(!second.state.can_undo());
}

#[test]
fn round_trip_through_the_json_file() {
    let dir = tempfile::tempdir().unwrap();

    for count in [0_usize, 1, 7] {
        let path = dir.path().join(format!("record-{count}.json"));
        let mut h = Harness::new();
        let mut store = SortedJokeStore::new(Box::new(JsonFileStorage::new(path.clone())));

        while h.state.sorted().len() < count {
            h.load_batch(&format!("c{}-", h.state.sorted().len()));
            let ids: Vec<String> = h.state.active().iter().map(|j| j.id.clone()).collect();
            for (i, id) in ids.iter().enumerate() {
                if h.state.sorted().len() == count {
                    break;
                }
                h.clock.advance(900);
                let reaction = if i % 2 == 0 { Reaction::Loved } else { Reaction::NotFunny };
                h.sort(id, reaction);
            }
        }

        store.save(h.state.sorted());
        let reopened = SortedJokeStore::new(Box::new(JsonFileStorage::new(path)));
        assert_eq!(reopened.load(), h.state.sorted().to_vec());
    }
}

#[test]
fn malformed_record_starts_empty_and_sorting_still_works() {
    let mut h = Harness::with_storage(MemoryStorage::with_record("{not json"));
    assert!(h.state.sorted().is_empty());

    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    assert_eq!(h.state.sorted().len(), 1);
}

#[test]
fn failing_storage_never_blocks_sorting() {
    let storage = MemoryStorage::new().rejecting_writes();
    let mut h = Harness::with_storage(storage);
    h.load_batch("a");
    h.sort("a0", Reaction::Loved);
    h.send(Event::Undo);

    assert!(h.state.sorted().is_empty());
    assert_eq!(h.state.active().len(), 5);
}

#[test]
fn exhausting_active_shows_empty_state() {
    let mut h = Harness::new();
    h.load_batch("a");
    for id in ["a0", "a1", "a2", "a3", "a4"] {
        h.sort(id, Reaction::Loved);
    }

    let vm = h.state.compute_viewmodel();
    assert!(vm.cards.is_empty());
    assert_eq!(vm.active_empty.map(|e| e.message), Some("No more jokes!".to_string()));

    h.send(Event::SetFilter(Filter::Loved));
    let panel = h.state.compute_viewmodel().sorted_panel.unwrap();
    assert_eq!(panel.summary.as_deref(), Some("Showing 5 loved jokes"));
    assert_eq!(panel.total, 5);
}

#[test]
fn loved_filter_with_no_loved_jokes_explains_itself() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.sort("a0", Reaction::NotFunny);
    h.send(Event::ToggleFilter);

    let panel = h.state.compute_viewmodel().sorted_panel.unwrap();
    assert!(panel.items.is_empty());
    assert_eq!(panel.empty_state.map(|e| e.message), Some("No loved jokes yet".to_string()));
}

#[test]
fn cards_show_elapsed_seconds_from_the_clock() {
    let mut h = Harness::new();
    h.load_batch("a");
    h.clock.advance(12_999);

    let vm = h.state.compute_viewmodel();
    assert!(vm.cards.iter().all(|c| c.seconds_displayed == 12));
    assert!(vm.cards[0].is_selected);
}
