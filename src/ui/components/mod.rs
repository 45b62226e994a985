//! Composable UI component renderers.
//!
//! Each component draws one part of the frame at the positions chosen by
//! [`Layout`]. Components never decide geometry themselves.
//!
//! # Components
//!
//! - `header`: Title bar with loading marker
//! - `cards`: Active joke cards and loading placeholders
//! - `zones`: The two drop zones
//! - `sorted`: Sorted jokes list with summary
//! - `empty`: Two-line empty state message
//! - `footer`: Keybinding hints

mod cards;
mod empty;
mod footer;
mod header;
mod sorted;
mod zones;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{ButtonSlot, Layout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::{render_active_title, render_cards, render_placeholders};
use footer::render_footer;
use header::render_header;
use sorted::render_sorted_panel;
use zones::render_zones;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_buttons(buttons: &[ButtonSlot], theme: &Theme) {
    for slot in buttons {
        position_cursor(slot.rect.row, slot.rect.col);
        if !slot.is_enabled {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
        } else if slot.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.button_fg));
        }
        print!("{}", slot.label);
        print!("{}", Theme::reset());
    }
}

/// Draws a complete frame.
pub fn render_frame(vm: &UIViewModel, layout: &Layout, theme: &Theme) {
    let cols = layout.cols;

    let row = render_header(layout.header_row, &vm.header, theme, cols);
    render_border(row, &theme.colors.border, cols);

    render_active_title(layout, vm, theme);
    render_cards(&layout.cards, &vm.cards, theme, cols);
    render_placeholders(&layout.placeholder_rows, theme);
    if let (Some(row), Some(empty)) = (layout.active_empty_row, &vm.active_empty) {
        render_empty_state(row, empty, theme, cols);
    }

    render_zones(&layout.zones, &vm.zones, theme);

    if let (Some(sorted), Some(panel)) = (&layout.sorted, &vm.sorted_panel) {
        render_sorted_panel(sorted, panel, theme, cols);
    }

    render_buttons(&layout.buttons, theme);

    render_border(layout.footer_border_row, &theme.colors.border, cols);
    render_footer(layout.footer_row, &vm.footer, theme, cols);
}
