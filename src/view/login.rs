//! Login screen: username and masked password fields, status line, hints.

use crate::state::{LoginField, LoginForm, TextInput};
use crate::view::constants::{APP_TITLE, LOGGING_IN_TEXT, LOGIN_FORM_HEIGHT, LOGIN_FORM_WIDTH};
use crate::view::helpers::{centered_fixed, truncate_to_width};
use crate::view::styles::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MASK: char = '•';

/// Render the login form centered in `area`.
pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm, theme: &Theme) {
    let form_area = centered_fixed(LOGIN_FORM_WIDTH, LOGIN_FORM_HEIGHT, area);
    let block = Block::default()
        .title(format!(" {APP_TITLE} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Username",
        &form.username,
        false,
        form.focus == LoginField::Username,
        theme,
    );
    render_field(
        frame,
        chunks[1],
        "Password",
        &form.password,
        true,
        form.focus == LoginField::Password,
        theme,
    );

    let width = chunks[2].width as usize;
    let status = if form.is_submitting() {
        Line::from(Span::styled(LOGGING_IN_TEXT, theme.muted))
    } else if let Some(error) = form.error() {
        Line::from(Span::styled(truncate_to_width(error, width), theme.error))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);

    let hints = Line::from(vec![
        Span::styled("Tab", theme.key),
        Span::styled(" switch field  ", theme.muted),
        Span::styled("Enter", theme.key),
        Span::styled(" log in  ", theme.muted),
        Span::styled("Ctrl+c", theme.key),
        Span::styled(" quit", theme.muted),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[4]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    masked: bool,
    focused: bool,
    theme: &Theme,
) {
    let shown = if masked {
        mask(input.value())
    } else {
        input.value().to_string()
    };

    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused_border
        } else {
            theme.border
        });
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(shown.clone()).block(block), area);

    if focused {
        let before: String = shown.chars().take(input.cursor()).collect();
        let offset = (before.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

/// One mask character per typed character.
fn mask(value: &str) -> String {
    value.chars().map(|_| MASK).collect()
}
