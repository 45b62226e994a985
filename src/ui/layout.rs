//! Screen geometry and hit testing.
//!
//! [`Layout::compute`] decides where every element of a [`UIViewModel`]
//! lands for a given pane size. The renderer draws from the same layout the
//! pointer translator hit-tests against, so what the user sees is exactly
//! what they can click.
//!
//! Rows and columns are 1-indexed, matching the cursor positioning used by
//! the renderer. [`Layout::hit_test`] takes the host's 0-indexed mouse
//! coordinates and converts them.
//!
//! ```text
//!  1  header                                   Loading...
//!  2  ──────────────────────────────────────────────────
//!  3  Active Jokes (5)                      [ New Jokes ]
//!  4  card
//!  …  card
//!     (blank)
//!     ┌ Loved It! ─────────┐ ┌ Not Funny ─────────┐
//!     │ ♥ 3 jokes          │ │ ✗ 1 joke           │
//!     └────────────────────┘ └────────────────────┘
//!     (blank)
//!     Sorted Jokes         [ All (4) ] [ Loved Only ] [ Undo ]
//!     Showing 4 sorted jokes
//!     sorted item
//!     …
//! n-1 ──────────────────────────────────────────────────
//!  n  footer
//! ```

use crate::app::{Event, Filter};
use crate::domain::Reaction;
use crate::fetch::BATCH_SIZE;
use crate::ui::viewmodel::UIViewModel;

/// Height of a drop zone box, borders included.
pub const ZONE_HEIGHT: usize = 3;

const HEADER_ROW: usize = 1;
const ACTIVE_TITLE_ROW: usize = 3;
const CARDS_START_ROW: usize = 4;
const EMPTY_STATE_ROWS: usize = 2;

/// A rectangle in 1-indexed screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.height && col >= self.col && col < self.col + self.width
    }
}

/// Clickable buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    FetchJokes,
    FilterAll,
    FilterLoved,
    Undo,
}

impl Button {
    /// The event a click on this button produces.
    #[must_use]
    pub const fn event(self) -> Event {
        match self {
            Self::FetchJokes => Event::RequestFetch,
            Self::FilterAll => Event::SetFilter(Filter::All),
            Self::FilterLoved => Event::SetFilter(Filter::Loved),
            Self::Undo => Event::Undo,
        }
    }
}

/// What sits under a screen cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Card(String),
    Zone(Reaction),
    Button(Button),
}

/// A card row; `index` points into `UIViewModel::cards`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    pub id: String,
    pub index: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSlot {
    pub reaction: Reaction,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSlot {
    pub button: Button,
    pub label: String,
    pub rect: Rect,
    /// Lit state (current filter tab).
    pub is_active: bool,
    /// Disabled buttons are drawn dim and ignore clicks.
    pub is_enabled: bool,
}

/// Placement of the sorted jokes section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedLayout {
    pub title_row: usize,
    /// Summary line, or the first line of the empty state.
    pub summary_row: usize,
    pub first_item_row: usize,
    /// How many of the panel's items fit on screen.
    pub visible_items: usize,
}

/// Placement of every element for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub header_row: usize,
    pub active_title_row: usize,
    pub cards: Vec<CardSlot>,
    /// Placeholder rows shown while a batch is loading.
    pub placeholder_rows: Vec<usize>,
    /// First row of the "No more jokes!" message, when shown.
    pub active_empty_row: Option<usize>,
    pub zones: Vec<ZoneSlot>,
    pub sorted: Option<SortedLayout>,
    pub buttons: Vec<ButtonSlot>,
    pub footer_border_row: usize,
    pub footer_row: usize,
}

impl Layout {
    /// Lays out `vm` in a pane of `rows` x `cols` cells.
    ///
    /// Sections that do not fit are shortened from the bottom: cards first
    /// give way to the drop zones, and the sorted list gets what is left.
    #[must_use]
    pub fn compute(vm: &UIViewModel, rows: usize, cols: usize) -> Self {
        let footer_row = rows.max(1);
        let footer_border_row = footer_row.saturating_sub(1);
        let last_content_row = footer_border_row.saturating_sub(1);

        let mut buttons = Vec::new();
        let fetch_label = if vm.is_loading { "[ Loading... ]" } else { "[ New Jokes ]" };
        buttons.extend(place_right(
            ACTIVE_TITLE_ROW,
            cols,
            vec![(Button::FetchJokes, fetch_label.to_string(), false, !vm.is_loading)],
        ));

        let wanted_rows = if vm.is_loading {
            BATCH_SIZE
        } else if vm.active_empty.is_some() {
            EMPTY_STATE_ROWS
        } else {
            vm.cards.len()
        };
        // Leave a blank line and the zone box below the cards.
        let cards_limit = last_content_row.saturating_sub(ZONE_HEIGHT + 1);
        let room = (cards_limit + 1).saturating_sub(CARDS_START_ROW);
        let shown = wanted_rows.min(room);

        let mut cards = Vec::new();
        let mut placeholder_rows = Vec::new();
        let mut active_empty_row = None;
        if vm.is_loading {
            placeholder_rows = (0..shown).map(|i| CARDS_START_ROW + i).collect();
        } else if vm.active_empty.is_some() {
            active_empty_row = (shown > 0).then_some(CARDS_START_ROW);
        } else {
            cards = vm
                .cards
                .iter()
                .take(shown)
                .enumerate()
                .map(|(index, card)| CardSlot {
                    id: card.id.clone(),
                    index,
                    rect: Rect {
                        row: CARDS_START_ROW + index,
                        col: 1,
                        width: cols,
                        height: 1,
                    },
                })
                .collect();
        }

        let zones_row = CARDS_START_ROW + shown + 1;
        let zones = if zones_row + ZONE_HEIGHT - 1 <= last_content_row && cols >= 8 {
            zone_slots(vm, zones_row, cols)
        } else {
            Vec::new()
        };

        let sorted_title_row = zones_row + ZONE_HEIGHT + 1;
        let sorted = match &vm.sorted_panel {
            Some(panel) if !zones.is_empty() && sorted_title_row < last_content_row => {
                buttons.extend(place_right(
                    sorted_title_row,
                    cols,
                    vec![
                        (
                            Button::FilterAll,
                            format!("[ All ({}) ]", panel.total),
                            panel.filter == Filter::All,
                            true,
                        ),
                        (
                            Button::FilterLoved,
                            "[ Loved Only ]".to_string(),
                            panel.filter == Filter::Loved,
                            true,
                        ),
                        (Button::Undo, "[ Undo ]".to_string(), false, panel.can_undo),
                    ],
                ));

                let summary_row = sorted_title_row + 1;
                let first_item_row = summary_row + 1;
                let room = (last_content_row + 1).saturating_sub(first_item_row);
                Some(SortedLayout {
                    title_row: sorted_title_row,
                    summary_row,
                    first_item_row,
                    visible_items: panel.items.len().min(room),
                })
            }
            _ => None,
        };

        Self {
            rows,
            cols,
            header_row: HEADER_ROW,
            active_title_row: ACTIVE_TITLE_ROW,
            cards,
            placeholder_rows,
            active_empty_row,
            zones,
            sorted,
            buttons,
            footer_border_row,
            footer_row,
        }
    }

    /// Finds what is under the host's 0-indexed mouse position.
    ///
    /// Disabled buttons are not targets.
    #[must_use]
    pub fn hit_test(&self, line: isize, column: usize) -> Option<Target> {
        let row = usize::try_from(line).ok()? + 1;
        let col = column + 1;

        if let Some(slot) = self.buttons.iter().find(|b| b.rect.contains(row, col)) {
            return slot.is_enabled.then_some(Target::Button(slot.button));
        }
        if let Some(slot) = self.cards.iter().find(|c| c.rect.contains(row, col)) {
            return Some(Target::Card(slot.id.clone()));
        }
        self.zones
            .iter()
            .find(|z| z.rect.contains(row, col))
            .map(|z| Target::Zone(z.reaction))
    }

    /// The zone under the host's 0-indexed mouse position, if any.
    #[must_use]
    pub fn zone_at(&self, line: isize, column: usize) -> Option<Reaction> {
        match self.hit_test(line, column) {
            Some(Target::Zone(reaction)) => Some(reaction),
            _ => None,
        }
    }
}

/// Places labels on `row`, right-aligned with a one-cell margin and one
/// space between buttons.
fn place_right(row: usize, cols: usize, buttons: Vec<(Button, String, bool, bool)>) -> Vec<ButtonSlot> {
    let mut right_edge = cols;
    let mut slots: Vec<ButtonSlot> = buttons
        .into_iter()
        .rev()
        .map(|(button, label, is_active, is_enabled)| {
            let width = label.chars().count();
            let col = right_edge.saturating_sub(width).max(1);
            right_edge = col.saturating_sub(1);
            ButtonSlot {
                button,
                label,
                rect: Rect {
                    row,
                    col,
                    width,
                    height: 1,
                },
                is_active,
                is_enabled,
            }
        })
        .collect();
    slots.reverse();
    slots
}

fn zone_slots(vm: &UIViewModel, row: usize, cols: usize) -> Vec<ZoneSlot> {
    let width = cols.saturating_sub(3) / 2;
    vm.zones
        .iter()
        .enumerate()
        .map(|(i, zone)| ZoneSlot {
            reaction: zone.reaction,
            rect: Rect {
                row,
                col: 2 + i * (width + 1),
                width,
                height: ZONE_HEIGHT,
            },
        })
        .collect()
}
