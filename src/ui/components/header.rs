//! Header component renderer.
//!
//! Centered bold title, with a loading marker on the right while a joke
//! batch is in flight.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

const LOADING_MARKER: &str = "Loading... ";

/// Renders the header title bar at `row` and returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = center_padding(title_len, cols);
    let marker = if header.is_loading { LOADING_MARKER } else { "" };
    let marker_len = marker.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len + marker_len)));

    if !marker.is_empty() && cols > padding + title_len + marker_len {
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{marker}");
    }

    print!("{}", Theme::reset());
    row + 1
}
