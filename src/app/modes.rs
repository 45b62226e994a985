//! Interaction and filter state types.
//!
//! The sorter is always in exactly one [`Interaction`]: idle, carrying a joke
//! mid-drag, or waiting for a joke batch. Folding these into one enum makes
//! combinations such as "dragging while the cards are being replaced"
//! unrepresentable.

use crate::domain::{Joke, Reaction};

/// Which part of the sorted list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every sorted joke.
    #[default]
    All,
    /// Only jokes sorted as [`Reaction::Loved`].
    Loved,
}

impl Filter {
    /// Returns `true` if `joke` belongs in this view.
    #[must_use]
    pub fn admits(self, joke: &Joke) -> bool {
        match self {
            Self::All => true,
            Self::Loved => joke.reaction == Some(Reaction::Loved),
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Loved,
            Self::Loved => Self::All,
        }
    }
}

/// A joke being carried toward a drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Snapshot of the dragged joke taken when the drag began.
    pub joke: Joke,
    /// Zone currently under the pointer, if any.
    pub highlighted_zone: Option<Reaction>,
}

/// What the user is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    /// Nothing in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging(DragSession),
    /// A joke batch has been requested and has not finished yet.
    AwaitingFetch {
        /// Sequence number of the batch being waited for.
        batch: u64,
    },
}

impl Interaction {
    /// The active drag session, if a card is being dragged.
    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle | Self::AwaitingFetch { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::AwaitingFetch { .. })
    }
}
