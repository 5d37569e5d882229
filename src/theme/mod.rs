// Theme system for shell components
//
// A Theme is a named set of resolved visual properties - a flat table of
// color ids with textual values plus a border style. The ThemeService owns
// the active theme and notifies subscribed components when it changes.
//
// Theme loading priority:
// 1. External TOML themes from the shell's themes directory
// 2. Built-in themes (compiled into the crate)
// 3. Error - an unknown theme name is not silently papered over

mod builtin;
mod service;
mod toml_format;

pub use builtin::list_builtin_themes;
pub use service::{ThemeEvents, ThemeService, ThemeSubscription};
pub use toml_format::TomlTheme;

use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::collections::HashMap;
use std::path::Path;

/// A named set of resolved visual properties current at a point in time.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Border style for panel chrome
    pub border_type: BorderType,
    colors: HashMap<String, String>,
}

impl Theme {
    /// Build a theme from an id -> textual color table.
    pub fn from_colors<'a>(
        name: impl Into<String>,
        colors: impl IntoIterator<Item = (&'a str, &'a str)>,
        border_type: BorderType,
    ) -> Self {
        Self {
            name: name.into(),
            border_type,
            colors: colors
                .into_iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Create theme from the native TOML format
    pub fn from_toml(toml: TomlTheme) -> Self {
        let border_type =
            Self::parse_border_type(toml.ui.and_then(|u| u.border_type).as_ref());
        Self {
            name: toml.meta.name,
            border_type,
            colors: toml.colors,
        }
    }

    /// Load a theme by name: external TOML file first, then built-ins.
    ///
    /// File lookup tries the name as given and with spaces replaced by
    /// underscores, matching how theme files are usually named on disk.
    pub fn by_name(name: &str, themes_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = themes_dir {
            for filename in [format!("{}.toml", name), format!("{}.toml", name.replace(' ', "_"))]
            {
                let path = dir.join(filename);
                if path.exists() {
                    let contents = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read theme file {:?}", path))?;
                    let toml = TomlTheme::from_str(&contents)
                        .with_context(|| format!("failed to parse theme file {:?}", path))?;
                    return Ok(Self::from_toml(toml));
                }
            }
        }

        match builtin::by_name(name) {
            Some(theme) => Ok(theme),
            None => bail!("unknown theme '{}'", name),
        }
    }

    /// Textual color value for `id`.
    ///
    /// Unknown identifiers are an error: the theme is the authority on what
    /// ids exist, and callers are expected to surface the failure rather
    /// than invent a fallback.
    pub fn resolve_color(&self, id: &str) -> Result<&str> {
        match self.colors.get(id) {
            Some(value) => Ok(value.as_str()),
            None => bail!("unknown color id '{}' in theme '{}'", id, self.name),
        }
    }

    /// Color for `id` parsed into a ratatui color, for style building.
    pub fn style_color(&self, id: &str) -> Result<Color> {
        Ok(TomlTheme::parse_color(self.resolve_color(id)?))
    }

    /// Whether the theme defines `id`.
    pub fn has_color(&self, id: &str) -> bool {
        self.colors.contains_key(id)
    }

    /// Ids defined by this theme, in no particular order.
    pub fn color_ids(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        builtin::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME_TOML: &str = r##"
[meta]
name = "Midnight"
version = 1

[colors]
foreground = "#c0caf5"
background = "#1a1b26"
border = "#414868"

[ui]
border_type = "double"
"##;

    #[test]
    fn test_resolve_color_known_and_unknown() {
        let theme = Theme::default();
        assert_eq!(theme.resolve_color("background").unwrap(), "#282c34");

        let err = theme.resolve_color("no-such-id").unwrap_err();
        assert!(err.to_string().contains("no-such-id"));
        assert!(err.to_string().contains("Pane Dark"));
    }

    #[test]
    fn test_style_color_parses_hex() {
        let theme = Theme::default();
        assert_eq!(
            theme.style_color("background").unwrap(),
            Color::Rgb(0x28, 0x2c, 0x34)
        );
    }

    #[test]
    fn test_from_toml_keeps_all_ids() {
        let theme = Theme::from_toml(TomlTheme::from_str(THEME_TOML).unwrap());
        assert_eq!(theme.name, "Midnight");
        assert_eq!(theme.border_type, BorderType::Double);
        assert_eq!(theme.color_ids().count(), 3);
        assert!(theme.has_color("border"));
        assert_eq!(theme.resolve_color("border").unwrap(), "#414868");
    }

    #[test]
    fn test_by_name_prefers_external_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Midnight.toml"), THEME_TOML).unwrap();

        let theme = Theme::by_name("Midnight", Some(dir.path())).unwrap();
        assert_eq!(theme.name, "Midnight");

        // Built-ins still load when no file matches
        let theme = Theme::by_name("Pane Dark", Some(dir.path())).unwrap();
        assert_eq!(theme.name, "Pane Dark");

        // Unknown names error instead of silently falling back
        assert!(Theme::by_name("Nothing", Some(dir.path())).is_err());
    }

    #[test]
    fn test_by_name_normalizes_underscores() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("My_Theme.toml"), {
            THEME_TOML.replace("Midnight", "My Theme")
        })
        .unwrap();

        let theme = Theme::by_name("My Theme", Some(dir.path())).unwrap();
        assert_eq!(theme.name, "My Theme");
    }
}
