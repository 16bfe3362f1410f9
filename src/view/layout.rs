//! Screen layout: header, tab bar, content, status bar, overlays.
//!
//! Pure rendering of `AppState`; nothing here mutates state.

use crate::api::ApiClient;
use crate::navigation::Route;
use crate::state::AppState;
use crate::view::constants::{APP_TITLE, HEADER_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::content_list::{
    render_resource, render_rows, render_search_results, render_sections, ListContext,
    NO_BOOKS_TEXT, NO_IMAGES_TEXT, NO_MOVIES_TEXT,
};
use crate::view::help::render_help_overlay;
use crate::view::login::render_login;
use crate::view::search_input::SearchInput;
use crate::view::styles::Theme;
use crate::view::tabs::render_tab_bar;
use crate::view_state::rows::{book_row, image_sections, movie_row, search_row};
use crate::view_state::ListRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the whole screen for the current route.
pub fn render_layout(frame: &mut Frame, state: &AppState, api: &ApiClient, theme: &Theme) {
    match state.current_route() {
        // Navigation not resolved yet: leave the screen blank.
        None => {}
        Some(Route::Login) => render_login(frame, frame.area(), &state.login, theme),
        Some(route) => render_content_screen(frame, state, route, api, theme),
    }

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

fn render_content_screen(
    frame: &mut Frame,
    state: &AppState,
    route: &Route,
    api: &ApiClient,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, theme);
    render_tab_bar(frame, chunks[1], route.tab(), theme);

    let ctx = ListContext { api, theme };
    render_content(frame, chunks[2], state, route, &ctx);

    render_status_bar(frame, chunks[3], route, theme);
}

/// App title with a search hint, or the search input while typing.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(input) = &state.search_bar {
        frame.render_widget(SearchInput::new(input, theme), area);
        return;
    }

    let header = Paragraph::new(Line::from(vec![
        Span::styled(APP_TITLE, theme.title),
        Span::styled("  press / to search", theme.muted),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    frame.render_widget(header, area);
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    route: &Route,
    ctx: &ListContext<'_>,
) {
    match route {
        Route::Books => {
            render_resource(frame, area, "Books", &state.books.data, ctx, |f, inner, books| {
                let rows: Vec<ListRow> = books.iter().map(book_row).collect();
                render_rows(f, inner, &rows, state.books.selected, NO_BOOKS_TEXT, ctx);
            });
        }
        Route::Movies => {
            render_resource(frame, area, "Movies", &state.movies.data, ctx, |f, inner, movies| {
                let rows: Vec<ListRow> = movies.iter().map(movie_row).collect();
                render_rows(f, inner, &rows, state.movies.selected, NO_MOVIES_TEXT, ctx);
            });
        }
        Route::Images => {
            render_resource(frame, area, "Images", &state.images.data, ctx, |f, inner, groups| {
                let sections = image_sections(groups);
                render_sections(f, inner, &sections, state.images.selected, NO_IMAGES_TEXT, ctx);
            });
        }
        Route::Search { query } => {
            render_resource(frame, area, "Search", &state.search.data, ctx, |f, inner, results| {
                let rows: Vec<ListRow> = results.iter().map(search_row).collect();
                render_search_results(f, inner, query, &rows, state.search.selected, ctx);
            });
        }
        Route::Login => {}
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, route: &Route, theme: &Theme) {
    let mut hints: Vec<(&str, &str)> = vec![("q", "quit"), ("/", "search")];
    if matches!(route, Route::Search { .. }) {
        hints.push(("Esc", "back"));
    }
    hints.extend([("o", "open"), ("r", "reload"), ("L", "log out"), ("?", "help")]);

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key}"), theme.key),
                Span::styled(format!(" {action} "), theme.muted),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
