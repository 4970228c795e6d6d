//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme for the terminal UI. A built-in default
//! palette ships with the binary; custom palettes can be loaded from TOML files.
//! Colors are hex strings rendered as 24-bit ANSI escape sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#313244"
//! title_fg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! badge_fg = "#1e1e2e"
//! badge_bg = "#89b4fa"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! warning_fg = "#f9e2af"
//! archived_fg = "#fab387"
//! empty_state_fg = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{NotekeepError, Result};

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from the
/// built-in default or a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). The optional
/// header background defaults to `None`, letting themes opt out of a filled
/// title bar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Note title color.
    pub title_fg: String,
    /// Normal text color (note bodies).
    pub text_normal: String,
    /// Dimmed text color (timestamps, footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Stat badge foreground color.
    pub badge_fg: String,
    /// Stat badge background color.
    pub badge_bg: String,

    /// Success notification color.
    pub success_fg: String,
    /// Error notification color.
    pub error_fg: String,
    /// Confirmation prompt color.
    pub warning_fg: String,

    /// Archived marker color.
    pub archived_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Default for Theme {
    /// The built-in palette (Catppuccin Mocha tones).
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: Some("#313244".to_string()),
                title_fg: "#f5c2e7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                badge_fg: "#1e1e2e".to_string(),
                badge_bg: "#89b4fa".to_string(),
                success_fg: "#a6e3a1".to_string(),
                error_fg: "#f38ba8".to_string(),
                warning_fg: "#f9e2af".to_string(),
                archived_fg: "#fab387".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
            },
        }
    }
}

impl Theme {
    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Theme`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NotekeepError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| NotekeepError::Theme(format!("cannot parse {}: {e}", path.display())))
    }

    /// Foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) => format!("\u{1b}[38;2;{r};{g};{b}m"),
            None => String::new(),
        }
    }

    /// Background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) => format!("\u{1b}[48;2;{r};{g};{b}m"),
            None => String::new(),
        }
    }

    /// Bold style escape sequence.
    #[must_use]
    pub fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Dim style escape sequence.
    #[must_use]
    pub fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Style reset escape sequence.
    #[must_use]
    pub fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

/// Parses a `#rrggbb` hex string into its RGB components.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fg_renders_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn malformed_hex_renders_nothing() {
        assert_eq!(Theme::fg("#zzz"), "");
        assert_eq!(Theme::bg("red"), "");
    }

    #[test]
    fn from_file_parses_custom_palette() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
name = "custom"

[colors]
header_fg = "#ffffff"
title_fg = "#ff00ff"
text_normal = "#eeeeee"
text_dim = "#888888"
border = "#444444"
badge_fg = "#000000"
badge_bg = "#00ffff"
success_fg = "#00ff00"
error_fg = "#ff0000"
warning_fg = "#ffff00"
archived_fg = "#ff8800"
empty_state_fg = "#0088ff"
"##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(err.to_string().contains("Theme error"));
    }
}
