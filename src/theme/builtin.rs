// Built-in themes
//
// Always available, no files on disk required. External TOML themes take
// priority during loading; these are the fallback vocabulary every shell
// can rely on.

use super::Theme;
use ratatui::widgets::BorderType;

/// Names of the built-in themes, in display order.
pub fn list_builtin_themes() -> &'static [&'static str] {
    &["Pane Dark", "Pane Light"]
}

/// Look up a built-in theme by name (case-insensitive, underscores and
/// spaces interchangeable).
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.replace('_', " ");
    if normalized.eq_ignore_ascii_case("pane dark") {
        return Some(dark());
    }
    if normalized.eq_ignore_ascii_case("pane light") {
        return Some(light());
    }
    None
}

/// Default dark theme (One Half Dark palette)
pub fn dark() -> Theme {
    Theme::from_colors(
        "Pane Dark",
        [
            ("background", "#282c34"),
            ("foreground", "#dcdfe4"),
            ("border", "#5c6370"),
            ("border_focused", "#56b6c2"),
            ("title", "#56b6c2"),
            ("status_bar", "#98c379"),
            ("selection_bg", "#474e5d"),
            ("selection_fg", "#dcdfe4"),
            ("muted", "#5c6370"),
            ("accent", "#61afef"),
            ("error", "#e06c75"),
            ("warning", "#e5c07b"),
            ("success", "#98c379"),
        ],
        BorderType::Plain,
    )
}

/// Light theme
pub fn light() -> Theme {
    Theme::from_colors(
        "Pane Light",
        [
            ("background", "#fafafa"),
            ("foreground", "#383a42"),
            ("border", "#a0a1a7"),
            ("border_focused", "#0184bc"),
            ("title", "#0184bc"),
            ("status_bar", "#50a14f"),
            ("selection_bg", "#e5e5e6"),
            ("selection_fg", "#383a42"),
            ("muted", "#a0a1a7"),
            ("accent", "#4078f2"),
            ("error", "#e45649"),
            ("warning", "#c18401"),
            ("success", "#50a14f"),
        ],
        BorderType::Plain,
    )
}
