//! Authentication token newtype with a smart constructor.
//!
//! The token is opaque: its contents are never inspected, only its presence.
//! The raw constructor is never exported - use `Token::new`.

use std::fmt;

/// Opaque bearer token handed out by the backend on login.
///
/// Invariant: never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Smart constructor: validates non-empty token.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidToken> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidToken::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keeps tokens out of `?config` style log fields.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(<{} bytes>)", self.0.len())
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidToken {
    #[error("Token cannot be empty")]
    Empty,
}

// ===== Tests =====
