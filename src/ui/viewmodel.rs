//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the layout and the renderer. They hold display-ready data only: which
//! cards exist, which zone is lit, what the sorted panel says. Geometry is
//! decided later by [`Layout`](crate::ui::layout::Layout).

use crate::app::Filter;
use crate::domain::Reaction;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, loading indicator).
    pub header: HeaderInfo,

    /// Title of the active section, with the card count.
    pub active_title: String,

    /// Active joke cards in display order.
    pub cards: Vec<CardItem>,

    /// Shown instead of the cards when every joke has been sorted.
    pub active_empty: Option<EmptyState>,

    /// The two drop zones, in [`Reaction::ALL`] order.
    pub zones: Vec<ZoneItem>,

    /// Sorted jokes section; `None` until something has been sorted.
    pub sorted_panel: Option<SortedPanel>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// A batch is in flight; cards are replaced by placeholders and the
    /// fetch button is disabled.
    pub is_loading: bool,
}

/// One active joke card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: String,
    pub text: String,
    /// Whole seconds the card has been on screen.
    pub seconds_displayed: u64,
    /// Under the keyboard cursor.
    pub is_selected: bool,
    /// Currently being dragged.
    pub is_dragging: bool,
}

/// One drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneItem {
    pub reaction: Reaction,
    pub title: &'static str,
    pub icon: &'static str,
    /// Number of sorted jokes with this reaction.
    pub count: usize,
    /// A dragged card is over this zone.
    pub is_highlighted: bool,
}

impl ZoneItem {
    #[must_use]
    pub const fn new(reaction: Reaction, count: usize, is_highlighted: bool) -> Self {
        let title = match reaction {
            Reaction::Loved => "Loved It!",
            Reaction::NotFunny => "Not Funny",
        };
        Self {
            reaction,
            title,
            icon: reaction_icon(reaction),
            count,
            is_highlighted,
        }
    }
}

/// Glyph drawn next to jokes and zones of a reaction.
#[must_use]
pub const fn reaction_icon(reaction: Reaction) -> &'static str {
    match reaction {
        Reaction::Loved => "♥",
        Reaction::NotFunny => "✗",
    }
}

/// The sorted jokes section.
#[derive(Debug, Clone)]
pub struct SortedPanel {
    /// Active filter, drives which tab is lit.
    pub filter: Filter,
    /// Count shown on the "All" tab, regardless of filter.
    pub total: usize,
    /// Whether the undo button is enabled.
    pub can_undo: bool,
    /// "Showing N loved jokes" line; `None` when the filtered list is empty.
    pub summary: Option<String>,
    /// Filtered sorted jokes, most recent first.
    pub items: Vec<SortedItem>,
    /// Shown instead of items when the filter admits nothing.
    pub empty_state: Option<EmptyState>,
}

/// One row of the sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedItem {
    pub text: String,
    pub reaction: Reaction,
    /// e.g. `"Viewed for 7s | Loved"`.
    pub detail: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
    pub is_loading: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No more jokes!").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
