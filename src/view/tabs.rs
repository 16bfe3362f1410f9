//! Content tab bar widget.
//!
//! Displays the Books / Movies / Images tabs using ratatui's Tabs widget.
//! The selected tab is derived from the current route.

use crate::navigation::Tab;
use crate::view::styles::Theme;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the content tab bar.
///
/// Tabs are numbered (`1 Books`) to match the number keys. `None` renders
/// the bar without a highlight, as on the search results screen.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, selected: Option<Tab>, theme: &Theme) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        )
        .style(theme.subtitle);

    // Tabs always has a selected index, so "no selection" is an invisible highlight.
    tabs = match selected {
        Some(tab) => tabs.highlight_style(theme.tab_highlight).select(tab.index()),
        None => tabs.highlight_style(theme.subtitle),
    };

    frame.render_widget(tabs, area);
}
