//! Layout dimension constants for TUI rendering.

/// Height of the header bar (app title or search input) in lines.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the content tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the centered login form in columns.
pub const LOGIN_FORM_WIDTH: u16 = 50;

/// Height of the centered login form in lines.
pub const LOGIN_FORM_HEIGHT: u16 = 13;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Application title shown in the header and on the login screen.
pub const APP_TITLE: &str = "CinemaOCinema";

/// Placeholder for a list that is still loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Shown on the login screen while the request is in flight.
pub const LOGGING_IN_TEXT: &str = "Logging in...";
