//! Login screen state.
//!
//! The form validates locally, hands credentials to the shell for the login
//! request, and turns the outcome into either a token or an error message.

use crate::model::{ApiError, LoginResponse, Token};
use crate::state::text_input::TextInput;

/// Shown when either field is blank on submit.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Username and password are required.";
/// Shown when the backend accepts the login but returns no usable token.
pub const NO_TOKEN_MESSAGE: &str =
    "Login failed: No token received or unexpected response structure.";
/// Shown when an error carries no message at all.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred during login.";

/// Which field receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Validated credentials ready to send.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the username pre-filled and focus on the password.
    pub fn with_username(username: impl Into<String>) -> Self {
        let username = TextInput::with_value(username);
        let focus = if username.is_blank() {
            LoginField::Username
        } else {
            LoginField::Password
        };
        Self {
            username,
            focus,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Validate and start submitting.
    ///
    /// Returns the credentials to send, or `None` if the form is invalid or a
    /// submission is already in flight.
    pub fn submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }

        if self.username.is_blank() || self.password.is_blank() {
            self.error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.submitting = true;
        self.error = None;
        Some(Credentials {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    /// Apply the login outcome. Returns the token on success.
    ///
    /// Ignored (returns `None`) when no submission is in flight.
    pub fn finish(&mut self, outcome: Result<LoginResponse, ApiError>) -> Option<Token> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;

        match outcome {
            Ok(response) => match response.token.map(Token::new) {
                Some(Ok(token)) => {
                    self.error = None;
                    Some(token)
                }
                _ => {
                    self.error = Some(NO_TOKEN_MESSAGE.to_string());
                    None
                }
            },
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
                None
            }
        }
    }

    /// Forget the password and any error, e.g. after logout.
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.error = None;
        self.submitting = false;
        if !self.username.is_blank() {
            self.focus = LoginField::Password;
        }
    }
}
