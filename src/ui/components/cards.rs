//! Active joke cards.
//!
//! Each card is one row: a grip marker, the joke text and the seconds it
//! has been on screen. The selected card is drawn inverted; the card being
//! dragged is drawn in the drag color with a different marker.

use crate::ui::helpers::{fit, position_cursor, single_line};
use crate::ui::layout::{CardSlot, Layout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, UIViewModel};

const GRIP: &str = "⠿";
const DRAG_GRIP: &str = "✥";
const PLACEHOLDER: &str = "· · ·";

/// Renders the section title on the left of the active title row.
///
/// The fetch button on the same row is drawn separately.
pub fn render_active_title(layout: &Layout, vm: &UIViewModel, theme: &Theme) {
    position_cursor(layout.active_title_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {}", vm.active_title);
    print!("{}", Theme::reset());
}

pub fn render_cards(slots: &[CardSlot], cards: &[CardItem], theme: &Theme, cols: usize) {
    for slot in slots {
        if let Some(card) = cards.get(slot.index) {
            render_card(slot.rect.row, card, theme, cols);
        }
    }
}

fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) {
    let seconds = format!("{}s ", card.seconds_displayed);
    let grip = if card.is_dragging { DRAG_GRIP } else { GRIP };
    // " ⠿ " before the text, one space before the seconds.
    let text_width = cols.saturating_sub(4 + seconds.chars().count());

    position_cursor(row, 1);
    if card.is_dragging {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.card_dragging_fg));
    } else if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" {grip} ");
    print!("{}", fit(&single_line(&card.text), text_width));
    print!(" ");
    if !card.is_selected && !card.is_dragging {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{seconds}");
    print!("{}", Theme::reset());
}

/// Renders dimmed placeholder rows while a batch is loading.
pub fn render_placeholders(rows: &[usize], theme: &Theme) {
    for &row in rows {
        position_cursor(row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("   {PLACEHOLDER}");
        print!("{}", Theme::reset());
    }
}
