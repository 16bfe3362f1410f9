//! Session store: the client's record of authentication state.
//!
//! Holds the current token in process memory only. A fresh process always
//! starts unauthenticated; there is no persistence, refresh, or expiry.
//!
//! The session is owned by the composition root (`AppState`) and lent out by
//! reference. There is a single writer path (`login`/`logout`).

use crate::model::Token;
use tracing::info;

/// Authentication state derived from token presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// Current authentication token, if any.
///
/// Invariant: the token is either absent or a non-empty `Token`; there is no
/// partial or expired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<Token>,
}

impl Session {
    /// Empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token` as the current token. Replaces any previous token.
    pub fn login(&mut self, token: Token) {
        let replaced = self.token.replace(token).is_some();
        info!(replaced, "Session authenticated");
    }

    /// Clear the current token.
    pub fn logout(&mut self) {
        let had_token = self.token.take().is_some();
        info!(had_token, "Session cleared");
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn auth_state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}
