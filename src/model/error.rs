//! Error types for talking to the catalog backend.
//!
//! Every failure of the API client is normalized into a single [`ApiError`]
//! value whose `Display` output is the human-readable message shown to the
//! user.
//!
//! # Error Taxonomy
//!
//! - **Transport** - the request never produced an HTTP response (connection
//!   refused, DNS failure, broken pipe)
//! - **Status** - the backend answered with a non-2xx status; the message
//!   prefers the backend-supplied `error` or `message` field of the body
//! - **Decode** - a 2xx response whose body does not match the expected shape
//! - **InvalidBaseUrl** - the configured base URL cannot address endpoints
//!
//! # Recovery Strategy
//!
//! The client never retries. Screens catch the error at their boundary, store
//! the message, and render it in place of their content. The user recovers by
//! re-entering the screen, refreshing, or submitting a new query.

use serde::Deserialize;
use thiserror::Error;

/// Normalized API client failure.
///
/// `Clone` so results can be handed across the UI event channel and kept in
/// screen state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request did not complete at the transport level.
    ///
    /// **When this occurs**: backend unreachable, connection reset, invalid
    /// response framing.
    #[error("Network error: {message}")]
    Transport {
        /// Transport error description from the HTTP stack.
        message: String,
    },

    /// The backend answered with a non-success status.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinemaocinema::model::ApiError;
    ///
    /// let err = ApiError::from_status(401, r#"{"error":"Invalid credentials"}"#);
    /// assert_eq!(err.to_string(), "Invalid credentials");
    ///
    /// let err = ApiError::from_status(500, "");
    /// assert_eq!(err.to_string(), "Request failed with status code 500");
    /// ```
    #[error("{}", status_message(.status, .message))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, if any.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("Unexpected response from server: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },

    /// The configured base URL is not usable.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Structured error body. Spring-style backends use either field.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a `Status` error from a response status and raw body.
    ///
    /// The `error` field wins over `message`; blank values are ignored. A body
    /// that is not JSON yields no message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = [parsed.error, parsed.message]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_string())
            .find(|m| !m.is_empty());

        ApiError::Status { status, message }
    }

    /// HTTP status code, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode {
                message: err.to_string(),
            }
        } else {
            ApiError::Transport {
                message: err.to_string(),
            }
        }
    }
}

fn status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed with status code {status}"),
    }
}

// ===== Tests =====
