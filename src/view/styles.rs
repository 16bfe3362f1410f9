//! Color configuration and the style palette used by every widget.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== Theme =====

/// Styles for the catalog screens.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so the
/// selection and headings stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub muted: Style,
    pub selected: Style,
    pub error: Style,
    pub section_header: Style,
    pub tab_highlight: Style,
    pub key: Style,
    pub border: Style,
    pub focused_border: Style,
}

impl Theme {
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                subtitle: Style::default().fg(Color::Gray),
                muted: Style::default().fg(Color::DarkGray),
                selected: Style::default().bg(Color::Blue).fg(Color::White),
                error: Style::default().fg(Color::Red),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                tab_highlight: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Gray),
                focused_border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                subtitle: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default().add_modifier(Modifier::BOLD),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                tab_highlight: Style::default().add_modifier(Modifier::REVERSED),
                key: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

// ===== Tests =====
