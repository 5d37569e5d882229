// TOML theme format parser
//
// Native theme format: a [meta] section plus one flat [colors] table mapping
// color ids to textual color values. Components resolve ids against the
// loaded table at runtime, so a theme may carry any ids its shell defines.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    /// Color table: id -> "#RRGGBB" or "ansi:<code>"
    pub colors: HashMap<String, String>,
    /// Optional UI options (border style)
    pub ui: Option<UiOptions>,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Metadata for theme attribution
    pub author: Option<String>,
}

/// Non-color presentation options
#[derive(Debug, Clone, Deserialize)]
pub struct UiOptions {
    /// Border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        // ANSI color codes inherit the terminal palette
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" => Color::Reset, // Use terminal default foreground
                "bg" => Color::Reset, // Use terminal default background
                _ => Color::White,
            };
        }

        // Hex format
        let hex = value.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::White; // fallback
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("#00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("0000ff"), Color::Rgb(0, 0, 255));
        assert_eq!(TomlTheme::parse_color("ansi:4"), Color::Blue);
        assert_eq!(TomlTheme::parse_color("ansi:fg"), Color::Reset);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[colors]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"

[ui]
border_type = "rounded"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert_eq!(theme.colors["background"], "#1e1e2e");
        assert_eq!(
            theme.ui.and_then(|u| u.border_type).as_deref(),
            Some("rounded")
        );
    }

    #[test]
    fn test_parse_theme_rejects_missing_meta() {
        let toml = r##"
[colors]
foreground = "#ffffff"
"##;
        assert!(TomlTheme::from_str(toml).is_err());
    }
}
