//! Drop zone boxes.
//!
//! Two bordered boxes side by side. A zone under a dragged card is filled
//! with its accent color.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::ZoneSlot;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ZoneItem;

pub fn render_zones(slots: &[ZoneSlot], zones: &[ZoneItem], theme: &Theme) {
    for slot in slots {
        if let Some(zone) = zones.iter().find(|z| z.reaction == slot.reaction) {
            render_zone(slot, zone, theme);
        }
    }
}

fn render_zone(slot: &ZoneSlot, zone: &ZoneItem, theme: &Theme) {
    let rect = slot.rect;
    let inner = rect.width.saturating_sub(2);
    let accent = theme.colors.reaction(zone.reaction);

    let title = format!(" {} ", zone.title);
    let top = format!(
        "┌{}{}┐",
        title,
        "─".repeat(inner.saturating_sub(title.chars().count()))
    );
    let noun = if zone.count == 1 { "joke" } else { "jokes" };
    let body = format!(" {} {} {noun}", zone.icon, zone.count);
    let bottom = format!("└{}┘", "─".repeat(inner));

    let style = || {
        if zone.is_highlighted {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.zone_highlight_fg));
            print!("{}", Theme::bg(accent));
        } else {
            print!("{}", Theme::fg(accent));
        }
    };

    position_cursor(rect.row, rect.col);
    style();
    print!("{}", fit(&top, rect.width));
    print!("{}", Theme::reset());

    position_cursor(rect.row + 1, rect.col);
    style();
    print!("│{}│", fit(&body, inner));
    print!("{}", Theme::reset());

    position_cursor(rect.row + 2, rect.col);
    style();
    print!("{bottom}");
    print!("{}", Theme::reset());
}
