//! UI state machine (pure).
//!
//! All state transitions go through [`update`] and are testable without a
//! terminal. I/O is requested through [`Effect`] values.

pub mod app_state;
pub mod event;
pub mod login_form;
pub mod resource;
pub mod text_input;
pub mod update;

// Re-export for convenience
pub use app_state::{AppState, InputMode, ScreenState};
pub use event::{AppEvent, ContentRef, Effect, FetchOutcome, FetchRequest, TextEdit};
pub use login_form::{Credentials, LoginField, LoginForm};
pub use resource::{AsyncResource, Ticket, TicketCounter};
pub use text_input::TextInput;
pub use update::{selected_row, update};
