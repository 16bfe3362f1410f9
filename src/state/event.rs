//! Inputs to and outputs of the state reducer.
//!
//! `AppEvent`s come from the terminal (already translated from raw keys) or
//! from completed effects. `Effect`s are requests for the impure shell to do
//! I/O; their results come back as events.

use crate::model::{
    ApiError, Book, ContentType, ImageGroups, KeyAction, LoginResponse, Movie, SearchResult,
};
use crate::state::login_form::Credentials;
use crate::state::resource::Ticket;

/// Editing command for the focused text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Left,
    Right,
    Home,
    End,
}

/// Outcome of a screen fetch, tagged by screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Books(Result<Vec<Book>, ApiError>),
    Movies(Result<Vec<Movie>, ApiError>),
    Images(Result<ImageGroups, ApiError>),
    Search(Result<Vec<SearchResult>, ApiError>),
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            FetchOutcome::Books(r) => r.is_ok(),
            FetchOutcome::Movies(r) => r.is_ok(),
            FetchOutcome::Images(r) => r.is_ok(),
            FetchOutcome::Search(r) => r.is_ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The shell is ready; navigate to the initial route.
    Started,
    /// Bound key on a navigation screen.
    Action(KeyAction),
    /// Key typed into the login form or search bar.
    Edit(TextEdit),
    /// Enter in the login form or search bar.
    Submit,
    /// Move focus to the other login field.
    NextField,
    /// Esc while typing in the search bar.
    CancelInput,
    /// Login request completed.
    LoginFinished(Result<LoginResponse, ApiError>),
    /// Screen fetch identified by `ticket` completed.
    Fetched { ticket: Ticket, outcome: FetchOutcome },
}

/// Which backend collection to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Books,
    Movies,
    Images,
    Search { query: String },
}

/// Reference to a content file on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef {
    pub content_type: ContentType,
    pub filename: String,
}

impl ContentRef {
    pub fn new(content_type: ContentType, filename: impl Into<String>) -> Self {
        Self {
            content_type,
            filename: filename.into(),
        }
    }
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Login(Credentials),
    Fetch { ticket: Ticket, request: FetchRequest },
    OpenContent(ContentRef),
    Quit,
}
