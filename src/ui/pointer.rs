//! Mouse gesture translation.
//!
//! The host reports raw presses, holds and releases with cell coordinates.
//! [`translate`] turns them into sorter events by hit-testing the frame's
//! [`Layout`]: a press on a card starts a drag, holding over a zone lights
//! it, and releasing drops the card or cancels the drag.

use crate::app::{DragSession, Event};
use crate::ui::layout::{Layout, Target};

/// A raw mouse report, in the host's 0-indexed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Press { line: isize, column: usize },
    Hold { line: isize, column: usize },
    Release { line: isize, column: usize },
}

/// Maps a pointer report to an event, or `None` if it means nothing here.
///
/// `drag` is the drag in progress, if any. `LeaveZone` is only produced when
/// the pointer moves off the zone that is currently lit, so holding still
/// over empty space does not cause redraws.
#[must_use]
pub fn translate(layout: &Layout, drag: Option<&DragSession>, pointer: Pointer) -> Option<Event> {
    match pointer {
        Pointer::Press { line, column } => match layout.hit_test(line, column)? {
            Target::Card(id) => Some(Event::BeginDrag(id)),
            Target::Button(button) => Some(button.event()),
            Target::Zone(_) => None,
        },
        Pointer::Hold { line, column } => {
            let session = drag?;
            match layout.zone_at(line, column) {
                Some(zone) if session.highlighted_zone != Some(zone) => Some(Event::HoverZone(zone)),
                Some(_) => None,
                None => session.highlighted_zone.map(|_| Event::LeaveZone),
            }
        }
        Pointer::Release { line, column } => {
            drag?;
            Some(layout.zone_at(line, column).map_or(Event::EndDrag, Event::Drop))
        }
    }
}
