//! TUI rendering and event loop (impure shell).
//!
//! All state changes go through [`crate::state::update`]. This module turns
//! terminal input into `AppEvent`s, runs the returned effects on the tokio
//! runtime and feeds their results back through an inbox channel.

pub mod constants;
mod content_list;
mod help;
mod helpers;
mod layout;
mod login;
mod search_input;
mod styles;
pub mod tabs;
mod terminal;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Theme};
pub use terminal::{install_panic_hook, restore_terminal, setup_terminal};

use crate::api::ApiClient;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{
    update, AppEvent, AppState, Effect, FetchOutcome, FetchRequest, InputMode, TextEdit,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How long to wait for terminal input before draining the inbox.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Launches an external viewer for a content URL.
type Opener = Box<dyn Fn(&str) -> io::Result<()> + Send>;

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    api: ApiClient,
    key_bindings: KeyBindings,
    theme: Theme,
    opener: Opener,
    /// Effect tasks send their result events here.
    inbox_tx: mpsc::UnboundedSender<AppEvent>,
    /// Drained on every loop tick.
    inbox_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    pub fn new(terminal: Terminal<B>, app_state: AppState, api: ApiClient, theme: Theme) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            terminal,
            app_state,
            api,
            key_bindings: KeyBindings::default(),
            theme,
            opener: Box::new(|url: &str| open::that_detached(url)),
            inbox_tx,
            inbox_rx,
        }
    }

    /// Run the main event loop until the user quits.
    ///
    /// Must be called inside a tokio runtime context: effects are spawned
    /// onto it.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.dispatch(AppEvent::Started);
        self.draw()?;

        while !self.app_state.should_quit() {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => dirty |= self.handle_key(key),
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            dirty |= self.drain_inbox();

            if dirty && !self.app_state.should_quit() {
                self.draw()?;
            }
        }

        info!("Quitting");
        Ok(())
    }

    /// Translate and dispatch one key press. Returns true if it produced an event.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match translate_key(self.app_state.input_mode(), key, &self.key_bindings) {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Dispatch every event waiting in the inbox. Returns true if any arrived.
    fn drain_inbox(&mut self) -> bool {
        let mut received = false;
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
            received = true;
        }
        received
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let api = &self.api;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| render_layout(frame, state, api, theme))?;
        Ok(())
    }

    fn dispatch(&mut self, event: AppEvent) {
        let effects = update(&mut self.app_state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Login(credentials) => {
                debug!(username = %credentials.username, "Sending login request");
                let api = self.api.clone();
                self.spawn_effect(move || async move {
                    let result = api
                        .login(&credentials.username, &credentials.password)
                        .await;
                    AppEvent::LoginFinished(result)
                });
            }
            Effect::Fetch { ticket, request } => {
                debug!(ticket = ticket.value(), ?request, "Starting fetch");
                let token = self.app_state.session().current_token().cloned();
                let api = self.api.with_token(token);
                self.spawn_effect(move || async move {
                    let outcome = match request {
                        FetchRequest::Books => FetchOutcome::Books(api.books().await),
                        FetchRequest::Movies => FetchOutcome::Movies(api.movies().await),
                        FetchRequest::Images => FetchOutcome::Images(api.images().await),
                        FetchRequest::Search { query } => {
                            FetchOutcome::Search(api.search(&query).await)
                        }
                    };
                    AppEvent::Fetched { ticket, outcome }
                });
            }
            Effect::OpenContent(content) => {
                let url = self.api.content_url(content.content_type, &content.filename);
                debug!(%url, "Opening content");
                if let Err(error) = (self.opener)(url.as_str()) {
                    warn!(%url, %error, "Failed to open content");
                }
            }
            Effect::Quit => debug!("Quit requested"),
        }
    }

    /// Spawn an async effect whose result event lands in the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    // ===== Test Helpers =====

    #[cfg(test)]
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    #[cfg(test)]
    pub(crate) fn set_opener(&mut self, opener: Opener) {
        self.opener = opener;
    }

    #[cfg(test)]
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    #[cfg(test)]
    pub(crate) fn dispatch_test(&mut self, event: AppEvent) {
        self.dispatch(event);
    }

    #[cfg(test)]
    pub(crate) fn drain_inbox_test(&mut self) -> bool {
        self.drain_inbox()
    }

    #[cfg(test)]
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Map a raw key event to an `AppEvent` for the current input mode.
///
/// Text-entry modes take printable characters literally, so bindings such as
/// `q` only apply in navigation mode. Ctrl+C quits from every mode.
pub(crate) fn translate_key(
    mode: InputMode,
    key: KeyEvent,
    bindings: &KeyBindings,
) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppEvent::Action(KeyAction::Quit));
    }

    match mode {
        InputMode::Navigation => bindings.get(key).map(AppEvent::Action),
        InputMode::LoginForm => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(AppEvent::NextField)
            }
            KeyCode::Enter => Some(AppEvent::Submit),
            _ => text_edit(key).map(AppEvent::Edit),
        },
        InputMode::SearchBar => match key.code {
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Esc => Some(AppEvent::CancelInput),
            _ => text_edit(key).map(AppEvent::Edit),
        },
    }
}

fn text_edit(key: KeyEvent) -> Option<TextEdit> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(TextEdit::Insert(ch))
        }
        KeyCode::Backspace => Some(TextEdit::Backspace),
        KeyCode::Left => Some(TextEdit::Left),
        KeyCode::Right => Some(TextEdit::Right),
        KeyCode::Home => Some(TextEdit::Home),
        KeyCode::End => Some(TextEdit::End),
        _ => None,
    }
}

/// Startup options resolved by the binary.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Prefilled login username.
    pub username: Option<String>,
    pub color: ColorConfig,
}

/// Set up the terminal, run the application and restore the terminal.
///
/// Must be called inside a tokio runtime context. Logging must be
/// initialized by the caller.
pub fn run(api: ApiClient, options: RunOptions) -> Result<(), TuiError> {
    install_panic_hook();
    let terminal = setup_terminal()?;

    let mut app_state = AppState::new();
    if let Some(username) = options.username {
        app_state = app_state.with_username(username);
    }

    info!(base_url = %api.base_url(), "Starting TUI");
    let mut app = TuiApp::new(terminal, app_state, api, Theme::new(options.color));

    // Always restore, even when the loop failed.
    let result = app.run();
    restore_terminal()?;

    result
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
