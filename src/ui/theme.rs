//! Theme management and ANSI escape sequence generation.
//!
//! Colors come from built-in Catppuccin themes or a custom TOML file and are
//! turned into 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! card_dragging_fg = "#f9e2af"
//! loved_fg = "#a6e3a1"
//! not_funny_fg = "#f38ba8"
//! zone_highlight_fg = "#1e1e2e"
//! button_fg = "#89b4fa"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use joke_sorter::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{JokeSorterError, Result};
use crate::domain::Reaction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,

    /// Keyboard-selected card foreground.
    pub selection_fg: String,
    /// Keyboard-selected card background.
    pub selection_bg: String,
    /// Card being dragged.
    pub card_dragging_fg: String,

    /// "Loved It!" zone and loved badge color.
    pub loved_fg: String,
    /// "Not Funny" zone and not-funny badge color.
    pub not_funny_fg: String,
    /// Text drawn on a highlighted drop zone (background is the zone color).
    pub zone_highlight_fg: String,

    /// Clickable button labels.
    pub button_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl ThemeColors {
    /// Accent color of a reaction's drop zone.
    #[must_use]
    pub fn reaction(&self, reaction: Reaction) -> &str {
        match reaction {
            Reaction::Loved => &self.loved_fg,
            Reaction::NotFunny => &self.not_funny_fg,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    ///
    /// ```rust
    /// use joke_sorter::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JokeSorterError::Theme`] if the file cannot be read or its
    /// contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| JokeSorterError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| JokeSorterError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Mocha palette built in code, used if the bundled TOML ever fails to parse.
    fn fallback() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: None,
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                selection_fg: "#1e1e2e".to_string(),
                selection_bg: "#f5c2e7".to_string(),
                card_dragging_fg: "#f9e2af".to_string(),
                loved_fg: "#a6e3a1".to_string(),
                not_funny_fg: "#f38ba8".to_string(),
                zone_highlight_fg: "#1e1e2e".to_string(),
                button_fg: "#89b4fa".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let mocha = Theme::from_name("catppuccin-mocha").unwrap();
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(mocha.colors.loved_fg, Theme::fallback().colors.loved_fg);
        assert_ne!(mocha.colors.text_normal, latte.colors.text_normal);
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#a6e3a1"), "\u{001b}[38;2;166;227;161m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{001b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"broken\"").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(JokeSorterError::Theme(_))));
        assert!(Theme::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let loaded = Theme::from_file(&path).unwrap();
        assert_eq!(loaded.name, "custom");
        assert_eq!(loaded.colors.reaction(Reaction::NotFunny), custom.colors.not_funny_fg);
    }
}
