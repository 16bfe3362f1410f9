//! Content screens: books, movies, images and search results.
//!
//! Every screen goes through [`render_resource`], which handles the loading,
//! error and idle states the same way, and then draws its rows.

use crate::api::ApiClient;
use crate::state::{AsyncResource, ContentRef};
use crate::view::constants::LOADING_TEXT;
use crate::view::helpers::truncate_to_width;
use crate::view::styles::Theme;
use crate::view_state::{ListRow, SectionRows};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub const NO_BOOKS_TEXT: &str = "No books found.";
pub const NO_MOVIES_TEXT: &str = "No movies found.";
pub const NO_IMAGES_TEXT: &str = "No images found.";
pub const NO_RESULTS_TEXT: &str = "No results found.";

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Shared rendering context.
pub struct ListContext<'a> {
    pub api: &'a ApiClient,
    pub theme: &'a Theme,
}

impl ListContext<'_> {
    fn url(&self, content: &ContentRef) -> String {
        self.api
            .content_url(content.content_type, &content.filename)
            .to_string()
    }
}

/// Draw `resource` inside a bordered block titled `title`.
///
/// Loading and failure states are drawn here; loaded data is handed to
/// `draw_loaded`. An idle resource draws only the block.
pub fn render_resource<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    resource: &AsyncResource<T>,
    ctx: &ListContext<'_>,
    draw_loaded: impl FnOnce(&mut Frame, Rect, &T),
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(ctx.theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match resource {
        AsyncResource::Idle => {}
        AsyncResource::Loading { .. } => {
            let loading = Paragraph::new(Span::styled(LOADING_TEXT, ctx.theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
        }
        AsyncResource::Failed(message) => {
            let error = Paragraph::new(Span::styled(message.as_str(), ctx.theme.error))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, inner);
        }
        AsyncResource::Loaded(data) => draw_loaded(frame, inner, data),
    }
}

/// Draw `rows` as a selectable list, or `empty_text` when there are none.
pub fn render_rows(
    frame: &mut Frame,
    area: Rect,
    rows: &[ListRow],
    selected: usize,
    empty_text: &str,
    ctx: &ListContext<'_>,
) {
    if rows.is_empty() {
        render_empty(frame, area, empty_text, ctx);
        return;
    }

    let width = item_width(area);
    let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, width, ctx)).collect();
    render_list(frame, area, items, selected.min(rows.len() - 1), ctx);
}

/// Draw image sections with a header per folder. `selected` indexes the
/// flattened rows, so headers are skipped when mapping it to a list item.
pub fn render_sections(
    frame: &mut Frame,
    area: Rect,
    sections: &[SectionRows],
    selected: usize,
    empty_text: &str,
    ctx: &ListContext<'_>,
) {
    let row_count: usize = sections.iter().map(|s| s.rows.len()).sum();
    if row_count == 0 {
        render_empty(frame, area, empty_text, ctx);
        return;
    }

    let width = item_width(area);
    let selected = selected.min(row_count - 1);
    let mut items = Vec::new();
    let mut selected_item = 0;
    let mut row_index = 0;

    for section in sections {
        items.push(ListItem::new(Line::from(Span::styled(
            truncate_to_width(&section.title, width),
            ctx.theme.section_header,
        ))));
        for row in &section.rows {
            if row_index == selected {
                selected_item = items.len();
            }
            items.push(row_item(row, width, ctx));
            row_index += 1;
        }
    }

    render_list(frame, area, items, selected_item, ctx);
}

/// Search screen: `Results for: "<query>"` above the hits.
pub fn render_search_results(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    rows: &[ListRow],
    selected: usize,
    ctx: &ListContext<'_>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = format!("Results for: \"{query}\"");
    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&header, chunks[0].width as usize),
            ctx.theme.section_header,
        )),
        chunks[0],
    );
    render_rows(frame, chunks[1], rows, selected, NO_RESULTS_TEXT, ctx);
}

fn render_empty(frame: &mut Frame, area: Rect, text: &str, ctx: &ListContext<'_>) {
    let empty = Paragraph::new(Span::styled(text.to_string(), ctx.theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    selected_item: usize,
    ctx: &ListContext<'_>,
) {
    let list = List::new(items)
        .highlight_style(ctx.theme.selected)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    let mut state = ListState::default().with_selected(Some(selected_item));
    frame.render_stateful_widget(list, area, &mut state);
}

fn item_width(area: Rect) -> usize {
    (area.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.len())
}

fn row_item(row: &ListRow, width: usize, ctx: &ListContext<'_>) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&row.title, width),
        ctx.theme.title,
    ))];

    let byline = match (&row.subtitle, &row.detail) {
        (Some(subtitle), Some(detail)) => Some(format!("{subtitle} · {detail}")),
        (Some(text), None) | (None, Some(text)) => Some(text.clone()),
        (None, None) => None,
    };
    if let Some(byline) = byline {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&byline, width),
            ctx.theme.subtitle,
        )));
    }

    if let Some(image) = &row.image {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&ctx.url(image), width),
            ctx.theme.muted,
        )));
    }

    ListItem::new(Text::from(lines))
}
