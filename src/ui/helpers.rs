//! Shared rendering utilities.
//!
//! Cursor positioning and width-aware text fitting used by every component.
//! Widths are counted in `char`s; the sorter only draws single-width glyphs
//! of its own, and joke text is clipped rather than measured exactly.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clips `text` to at most `width` characters, ending in `…` when clipped.
///
/// ```rust
/// use joke_sorter::ui::helpers::truncate;
///
/// assert_eq!(truncate("Why did the scarecrow win an award?", 12), "Why did the…");
/// assert_eq!(truncate("short", 12), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut clipped: String = text.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

/// Clips or pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let clipped = truncate(text, width);
    let len = clipped.chars().count();
    format!("{clipped}{}", " ".repeat(width.saturating_sub(len)))
}

/// Left padding that centers `len` characters in `width`.
#[must_use]
pub const fn center_padding(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Replaces line breaks so multi-line jokes stay on one row.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
