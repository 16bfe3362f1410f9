//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the default shortcuts grouped by
//! category. Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_percent, empty_line};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 14;

type Shortcut = (&'static str, &'static str);

const SHORTCUTS: &[(&str, &[Shortcut])] = &[
    (
        "Lists",
        &[
            ("j/↓", "Select next"),
            ("k/↑", "Select previous"),
            ("g/Home", "Select first"),
            ("G/End", "Select last"),
            ("o/Enter", "Open picture"),
            ("f", "Open book or movie file"),
            ("r", "Reload"),
        ],
    ),
    (
        "Tabs",
        &[
            ("]/Tab", "Next tab"),
            ("[/Shift+Tab", "Previous tab"),
            ("1-3", "Books, Movies, Images"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Search the catalog"),
            ("Enter", "Run search"),
            ("Esc", "Cancel typing"),
            ("Esc/Backspace", "Leave results"),
        ],
    ),
    (
        "Application",
        &[
            ("L", "Log out"),
            ("?", "Toggle this help"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_percent(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        theme.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Shortcut lines with a header per category and a blank line between.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, theme.section_header)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), theme.key),
                Span::styled(*description, theme.subtitle),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
