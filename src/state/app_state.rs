//! Application state.
//!
//! AppState is the composition root: it owns the session, the navigator, and
//! every screen's state. Transitions happen only through
//! [`crate::state::update`], which keeps this type a plain data holder.

use crate::model::{Book, ImageGroups, Movie, SearchResult};
use crate::navigation::{Navigator, Route};
use crate::session::Session;
use crate::state::login_form::LoginForm;
use crate::state::resource::{AsyncResource, TicketCounter};
use crate::state::text_input::TextInput;

// ===== ScreenState =====

/// Data and list selection of one content screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState<T> {
    pub data: AsyncResource<T>,
    /// Index of the highlighted row. Clamped to the row count when used.
    pub selected: usize,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            data: AsyncResource::Idle,
            selected: 0,
        }
    }
}

impl<T> ScreenState<T> {
    /// Forget data and selection.
    pub fn reset(&mut self) {
        self.data.reset();
        self.selected = 0;
    }
}

// ===== InputMode =====

/// How the shell should interpret key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are typed into the login form.
    LoginForm,
    /// Keys are typed into the header search bar.
    SearchBar,
    /// Keys are looked up in the key bindings.
    Navigation,
}

// ===== AppState =====

/// Root UI state. Pure data, no side effects.
///
/// # Ownership
///
/// - `session` and `navigator` are written only by the reducer, so the guard
///   always sees a consistent (auth state, location) pair.
/// - Each content screen owns its `ScreenState`. Leaving the screen resets it,
///   which turns any in-flight fetch for it stale.
/// - `active` remembers which route's screen is currently activated so the
///   reducer can tell a route change from a repeat of the same route.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) session: Session,
    pub(crate) navigator: Navigator,
    pub(crate) tickets: TicketCounter,
    pub(crate) active: Option<Route>,
    initial_route: Route,

    pub login: LoginForm,
    pub books: ScreenState<Vec<Book>>,
    pub movies: ScreenState<Vec<Movie>>,
    pub images: ScreenState<ImageGroups>,
    pub search: ScreenState<Vec<SearchResult>>,

    /// Header search bar. `Some` while the user is typing a query.
    pub search_bar: Option<TextInput>,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    pub(crate) should_quit: bool,
}

impl AppState {
    /// Fresh state: unauthenticated, no route resolved yet.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            navigator: Navigator::new(),
            tickets: TicketCounter::new(),
            active: None,
            initial_route: Route::DEFAULT_CONTENT,
            login: LoginForm::new(),
            books: ScreenState::default(),
            movies: ScreenState::default(),
            images: ScreenState::default(),
            search: ScreenState::default(),
            search_bar: None,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Pre-fill the login form's username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.login = LoginForm::with_username(username);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.navigator.current()
    }

    /// Route the `Started` event navigates to.
    pub fn initial_route(&self) -> &Route {
        &self.initial_route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_mode(&self) -> InputMode {
        if self.current_route() == Some(&Route::Login) {
            InputMode::LoginForm
        } else if self.search_bar.is_some() {
            InputMode::SearchBar
        } else {
            InputMode::Navigation
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
