//! Sorted jokes section: title, summary line and the filtered list.

use crate::ui::components::render_empty_state;
use crate::ui::helpers::{fit, position_cursor, single_line};
use crate::ui::layout::SortedLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{reaction_icon, SortedItem, SortedPanel};

pub fn render_sorted_panel(layout: &SortedLayout, panel: &SortedPanel, theme: &Theme, cols: usize) {
    position_cursor(layout.title_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" Sorted Jokes");
    print!("{}", Theme::reset());

    if let Some(empty) = &panel.empty_state {
        render_empty_state(layout.summary_row, empty, theme, cols);
        return;
    }

    if let Some(summary) = &panel.summary {
        position_cursor(layout.summary_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" {}", fit(summary, cols.saturating_sub(1)));
        print!("{}", Theme::reset());
    }

    for (offset, item) in panel.items.iter().take(layout.visible_items).enumerate() {
        render_sorted_item(layout.first_item_row + offset, item, theme, cols);
    }
}

fn render_sorted_item(row: usize, item: &SortedItem, theme: &Theme, cols: usize) {
    let icon = reaction_icon(item.reaction);
    let detail = format!(" {} ", item.detail);
    let text_width = cols.saturating_sub(4 + detail.chars().count());

    position_cursor(row, 1);
    print!("{}", Theme::fg(theme.colors.reaction(item.reaction)));
    print!(" {icon} ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit(&single_line(&item.text), text_width));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{detail}");
    print!("{}", Theme::reset());
}
