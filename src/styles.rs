// Style collector - sink for theme-derived widget styles
//
// During a theme pass each component computes ratatui styles for its visual
// elements and deposits them here, keyed by element id (convention:
// "<component id>/<element>", e.g. "editor.foo/border"). The shell applies
// the collected styles to its widgets on the next draw.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Collects computed styles keyed by element id.
#[derive(Debug, Default)]
pub struct StyleCollector {
    styles: HashMap<String, Style>,
}

impl StyleCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the style for a visual element, replacing any earlier value
    /// recorded in the same pass.
    pub fn set(&mut self, element: impl Into<String>, style: Style) {
        self.styles.insert(element.into(), style);
    }

    /// Shorthand for a plain foreground style.
    pub fn set_fg(&mut self, element: impl Into<String>, color: Color) {
        self.set(element, Style::default().fg(color));
    }

    /// Shorthand for a bold foreground style (titles, emphasis).
    pub fn set_fg_bold(&mut self, element: impl Into<String>, color: Color) {
        self.set(element, Style::default().fg(color).add_modifier(Modifier::BOLD));
    }

    /// Style recorded for an element, if any.
    pub fn get(&self, element: &str) -> Option<Style> {
        self.styles.get(element).copied()
    }

    /// Number of elements styled so far.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Hand the collected styles over for application to widgets.
    pub fn drain(&mut self) -> impl Iterator<Item = (String, Style)> + '_ {
        self.styles.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut styles = StyleCollector::new();
        styles.set_fg("panel.logs/border", Color::Cyan);

        assert_eq!(
            styles.get("panel.logs/border"),
            Some(Style::default().fg(Color::Cyan))
        );
        assert_eq!(styles.get("panel.logs/title"), None);
    }

    #[test]
    fn test_later_set_replaces_earlier() {
        let mut styles = StyleCollector::new();
        styles.set_fg("panel.logs/border", Color::Cyan);
        styles.set_fg("panel.logs/border", Color::Red);

        assert_eq!(styles.len(), 1);
        assert_eq!(
            styles.get("panel.logs/border"),
            Some(Style::default().fg(Color::Red))
        );
    }

    #[test]
    fn test_drain_empties_the_collector() {
        let mut styles = StyleCollector::new();
        styles.set_fg("a", Color::White);
        styles.set_fg_bold("b", Color::White);

        let drained: Vec<_> = styles.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(styles.is_empty());
    }
}
