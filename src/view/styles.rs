//! Shared styling for panes, inputs and notifications.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Severity;

// ===== ColorConfig =====

/// Whether colors are emitted at all.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Force colors on or off.
    pub fn enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether styles may carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ===== Styles =====

/// Palette used by every widget in the view.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    colors: ColorConfig,
}

impl Styles {
    /// Palette honouring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Border of a pane or input, highlighted when it holds focus.
    pub fn border(self, focused: bool) -> Style {
        if focused {
            self.fg(Color::Yellow)
        } else {
            self.fg(Color::Gray)
        }
    }

    /// Border of an input whose current value fails validation.
    pub fn invalid_border(self) -> Style {
        self.fg(Color::Red)
    }

    /// Placeholder text of an empty input.
    pub fn placeholder(self) -> Style {
        self.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    /// Footer hint description.
    pub fn hint(self) -> Style {
        self.fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    /// Footer hint key.
    pub fn hint_key(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Selected collection row. Reversed when colors are off.
    pub fn selected_row(self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Directory rows in the collection pane.
    pub fn directory(self) -> Style {
        self.fg(Color::Blue).add_modifier(Modifier::BOLD)
    }

    /// HTTP method badge.
    pub fn method(self) -> Style {
        self.fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    /// Dialog button, reversed while focused.
    pub fn button(self, focused: bool) -> Style {
        if focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Selected tab title, bold while the tab strip holds focus.
    pub fn tab_highlight(self, focused: bool) -> Style {
        if focused {
            self.fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        }
    }

    /// Notification text by severity.
    pub fn notification(self, severity: Severity) -> Style {
        match severity {
            Severity::Information => self.fg(Color::Green),
            Severity::Warning => self.fg(Color::Yellow),
            Severity::Error => self.fg(Color::Red),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_colors_produce_plain_borders() {
        let styles = Styles::new(ColorConfig::enabled(false));
        assert_eq!(styles.border(true), Style::default());
        assert_eq!(styles.invalid_border(), Style::default());
    }

    #[test]
    fn focused_border_differs_from_unfocused() {
        let styles = Styles::new(ColorConfig::enabled(true));
        assert_ne!(styles.border(true), styles.border(false));
    }

    #[test]
    fn tab_highlight_has_no_color_when_disabled() {
        let styles = Styles::new(ColorConfig::enabled(false));
        assert_eq!(styles.tab_highlight(true).fg, None);
        assert!(styles
            .tab_highlight(true)
            .add_modifier
            .contains(Modifier::UNDERLINED));

        let colored = Styles::new(ColorConfig::enabled(true));
        assert_eq!(colored.tab_highlight(true).fg, Some(Color::Yellow));
    }

    #[test]
    fn error_notifications_are_red() {
        let styles = Styles::new(ColorConfig::enabled(true));
        assert_eq!(styles.notification(Severity::Error).fg, Some(Color::Red));
    }
}
