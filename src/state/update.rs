//! The reducer: every state transition goes through [`update`].
//!
//! `update` is pure apart from logging. It mutates [`AppState`] and returns
//! the effects the shell must run. After each event it settles navigation:
//! the guard is evaluated against the new (auth state, location) pair, the
//! redirect it issues is applied, and the screen of the resulting route is
//! activated if the route changed.

use crate::model::KeyAction;
use crate::navigation::{self, Route, Tab};
use crate::state::app_state::{AppState, InputMode};
use crate::state::event::{AppEvent, Effect, FetchOutcome, FetchRequest, TextEdit};
use crate::state::resource::Ticket;
use crate::state::text_input::TextInput;
use crate::view_state::rows::{current_rows, ListRow};
use tracing::{debug, info};

/// Apply `event` to `state` and return the effects to run.
pub fn update(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    let mut effects = Vec::new();

    match event {
        AppEvent::Started => {
            if state.navigator.current().is_none() {
                let route = state.initial_route().clone();
                state.navigator.reset(route);
            }
        }
        AppEvent::Action(action) => handle_action(state, action, &mut effects),
        AppEvent::Edit(edit) => handle_edit(state, edit),
        AppEvent::Submit => handle_submit(state, &mut effects),
        AppEvent::NextField => {
            if state.input_mode() == InputMode::LoginForm {
                state.login.toggle_focus();
            }
        }
        AppEvent::CancelInput => state.search_bar = None,
        AppEvent::LoginFinished(outcome) => {
            if let Some(token) = state.login.finish(outcome) {
                state.session.login(token);
                state.login.clear_secrets();
            }
        }
        AppEvent::Fetched { ticket, outcome } => apply_fetch(state, ticket, outcome),
    }

    settle_navigation(state, &mut effects);
    effects
}

// ===== Navigation =====

fn settle_navigation(state: &mut AppState, effects: &mut Vec<Effect>) {
    let location = state.navigator.location();
    if let Some(redirect) = navigation::evaluate(state.session.auth_state(), &location) {
        info!(?redirect, from = %location, "Guard redirect");
        state.navigator.reset(redirect.target());
        debug_assert_eq!(
            navigation::evaluate(state.session.auth_state(), &state.navigator.location()),
            None
        );
    }

    let current = state.navigator.current().cloned();
    if current == state.active {
        return;
    }

    if let Some(previous) = state.active.take() {
        deactivate(state, &previous);
    }
    if let Some(route) = &current {
        activate(state, route, effects);
    }
    state.active = current;
}

/// Start the screen of `route`: fetch its data, if it has any.
fn activate(state: &mut AppState, route: &Route, effects: &mut Vec<Effect>) {
    debug!(%route, "Activate screen");
    match route {
        Route::Search { query } if query.trim().is_empty() => {
            state.search.data.resolve(Vec::new());
        }
        _ => effects.extend(start_fetch(state, route)),
    }
}

/// Leave the screen of `route`. Its pending fetch becomes stale.
fn deactivate(state: &mut AppState, route: &Route) {
    match route {
        Route::Login => {}
        Route::Books => state.books.reset(),
        Route::Movies => state.movies.reset(),
        Route::Images => state.images.reset(),
        Route::Search { .. } => state.search.reset(),
    }
}

/// Issue a ticket for `route`'s screen and mark it loading.
fn start_fetch(state: &mut AppState, route: &Route) -> Option<Effect> {
    let request = match route {
        Route::Login => return None,
        Route::Books => FetchRequest::Books,
        Route::Movies => FetchRequest::Movies,
        Route::Images => FetchRequest::Images,
        Route::Search { query } => FetchRequest::Search {
            query: query.clone(),
        },
    };

    let ticket = state.tickets.issue();
    match route {
        Route::Books => state.books.data.begin(ticket),
        Route::Movies => state.movies.data.begin(ticket),
        Route::Images => state.images.data.begin(ticket),
        Route::Search { .. } => state.search.data.begin(ticket),
        Route::Login => {}
    }
    Some(Effect::Fetch { ticket, request })
}

fn apply_fetch(state: &mut AppState, ticket: Ticket, outcome: FetchOutcome) {
    let applied = match outcome {
        FetchOutcome::Books(result) => state.books.data.settle(ticket, result),
        FetchOutcome::Movies(result) => state.movies.data.settle(ticket, result),
        FetchOutcome::Images(result) => state.images.data.settle(ticket, result),
        FetchOutcome::Search(result) => state.search.data.settle(ticket, result),
    };

    if !applied {
        debug!(ticket = ticket.value(), "Dropped stale fetch result");
    }
}

fn switch_tab(state: &mut AppState, route: &Route, tab: Tab) {
    if route.tab().is_some() {
        state.navigator.replace(tab.route());
    } else {
        state.navigator.reset(tab.route());
    }
}

// ===== Keys =====

fn handle_action(state: &mut AppState, action: KeyAction, effects: &mut Vec<Effect>) {
    if action == KeyAction::Quit {
        state.should_quit = true;
        effects.push(Effect::Quit);
        return;
    }

    if state.help_visible {
        if matches!(action, KeyAction::Help | KeyAction::Back) {
            state.help_visible = false;
        }
        return;
    }

    let Some(route) = state.navigator.current().cloned() else {
        return;
    };
    if route == Route::Login {
        return;
    }

    match action {
        KeyAction::SelectPrev => move_selection(state, |selected, _| selected.saturating_sub(1)),
        KeyAction::SelectNext => move_selection(state, |selected, len| {
            (selected + 1).min(len.saturating_sub(1))
        }),
        KeyAction::SelectFirst => move_selection(state, |_, _| 0),
        KeyAction::SelectLast => move_selection(state, |_, len| len.saturating_sub(1)),
        KeyAction::NextTab => {
            if let Some(tab) = route.tab() {
                switch_tab(state, &route, tab.next());
            }
        }
        KeyAction::PrevTab => {
            if let Some(tab) = route.tab() {
                switch_tab(state, &route, tab.prev());
            }
        }
        KeyAction::SelectTab(number) => {
            if let Some(tab) = Tab::from_number(number) {
                switch_tab(state, &route, tab);
            }
        }
        KeyAction::OpenImage => {
            if let Some(target) = selected_row(state).and_then(|row| row.image) {
                effects.push(Effect::OpenContent(target));
            }
        }
        KeyAction::OpenFile => {
            if let Some(target) = selected_row(state).and_then(|row| row.file) {
                effects.push(Effect::OpenContent(target));
            }
        }
        KeyAction::Refresh => effects.extend(start_fetch(state, &route)),
        KeyAction::StartSearch => {
            let input = match &route {
                Route::Search { query } => TextInput::with_value(query.clone()),
                _ => TextInput::new(),
            };
            state.search_bar = Some(input);
        }
        KeyAction::Back => {
            if matches!(route, Route::Search { .. }) {
                state.navigator.back();
            }
        }
        KeyAction::Logout => {
            state.session.logout();
            state.login.clear_secrets();
            state.search_bar = None;
        }
        KeyAction::Help => state.help_visible = true,
        KeyAction::Quit => {}
    }
}

fn selection_mut(state: &mut AppState) -> Option<&mut usize> {
    match state.navigator.current()? {
        Route::Books => Some(&mut state.books.selected),
        Route::Movies => Some(&mut state.movies.selected),
        Route::Images => Some(&mut state.images.selected),
        Route::Search { .. } => Some(&mut state.search.selected),
        Route::Login => None,
    }
}

fn move_selection(state: &mut AppState, step: impl Fn(usize, usize) -> usize) {
    let len = current_rows(state).len();
    if let Some(selected) = selection_mut(state) {
        *selected = if len == 0 {
            0
        } else {
            step((*selected).min(len - 1), len)
        };
    }
}

/// Row under the selection, clamped to the rows that exist.
pub fn selected_row(state: &AppState) -> Option<ListRow> {
    let selected = match state.current_route()? {
        Route::Books => state.books.selected,
        Route::Movies => state.movies.selected,
        Route::Images => state.images.selected,
        Route::Search { .. } => state.search.selected,
        Route::Login => return None,
    };
    let mut rows = current_rows(state);
    if rows.is_empty() {
        return None;
    }
    let index = selected.min(rows.len() - 1);
    Some(rows.swap_remove(index))
}

// ===== Text entry =====

fn handle_edit(state: &mut AppState, edit: TextEdit) {
    let input = match state.input_mode() {
        InputMode::LoginForm => state.login.focused_input_mut(),
        InputMode::SearchBar => match state.search_bar.as_mut() {
            Some(input) => input,
            None => return,
        },
        InputMode::Navigation => return,
    };

    match edit {
        TextEdit::Insert(ch) => input.insert(ch),
        TextEdit::Backspace => input.backspace(),
        TextEdit::Left => input.move_left(),
        TextEdit::Right => input.move_right(),
        TextEdit::Home => input.move_home(),
        TextEdit::End => input.move_end(),
    }
}

fn handle_submit(state: &mut AppState, effects: &mut Vec<Effect>) {
    match state.input_mode() {
        InputMode::LoginForm => {
            if let Some(credentials) = state.login.submit() {
                info!(username = %credentials.username, "Submitting login");
                effects.push(Effect::Login(credentials));
            }
        }
        InputMode::SearchBar => {
            let query = match &state.search_bar {
                Some(input) if !input.is_blank() => input.value().trim().to_string(),
                _ => return,
            };
            state.search_bar = None;

            let route = Route::Search { query };
            if matches!(state.navigator.current(), Some(Route::Search { .. })) {
                state.navigator.replace(route);
            } else {
                state.navigator.push(route);
            }
        }
        InputMode::Navigation => {}
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
