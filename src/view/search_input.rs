//! Search input widget for rendering the header search bar.

use crate::state::TextInput;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar shown in the header while the user types a query.
pub struct SearchInput<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let value = self.input.value();
        let cursor = self.input.cursor();

        let before: String = value.chars().take(cursor).collect();
        let mut after = value.chars().skip(cursor);
        // Block cursor: the character under it, or a space at the end.
        let under = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let rest: String = after.collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.theme.selected.add_modifier(Modifier::BOLD)),
            Span::raw(rest),
        ]);

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search (Enter: go, Esc: cancel) ")
                    .border_style(self.theme.focused_border),
            )
            .render(area, buf);
    }
}
