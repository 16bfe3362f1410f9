//! Generic fetch lifecycle shared by every screen.
//!
//! `AsyncResource` is a sum type over the four states a screen's data can be
//! in. Transitions are driven by activation (`begin`), completion (`settle`)
//! and deactivation (`reset`).
//!
//! Every fetch is identified by a [`Ticket`]. A completion is applied only if
//! the resource is still waiting for that exact ticket; results of fetches the
//! screen has since abandoned are dropped silently.

use crate::model::ApiError;

// ===== Ticket =====

/// Identity of one fetch. Allocated from a [`TicketCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket source. Never hands out the same ticket twice.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

// ===== AsyncResource =====

/// Data owned by one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AsyncResource<T> {
    /// Not activated, or deactivated.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading { ticket: Ticket },
    /// Fetch succeeded.
    Loaded(T),
    /// Fetch failed; holds the user-facing message.
    Failed(String),
}

impl<T> AsyncResource<T> {
    /// Start waiting for `ticket`. Any previous data or error is discarded.
    pub fn begin(&mut self, ticket: Ticket) {
        *self = AsyncResource::Loading { ticket };
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `true` if applied, `false` if the outcome was stale.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ApiError>) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }

        *self = match outcome {
            Ok(data) => AsyncResource::Loaded(data),
            Err(err) => AsyncResource::Failed(err.to_string()),
        };
        true
    }

    /// Store data without a fetch (e.g. a blank search query).
    pub fn resolve(&mut self, data: T) {
        *self = AsyncResource::Loaded(data);
    }

    /// Forget everything; a pending fetch becomes stale.
    pub fn reset(&mut self) {
        *self = AsyncResource::Idle;
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        match self {
            AsyncResource::Loading { ticket } => Some(*ticket),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncResource::Loading { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncResource::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncResource::Failed(message) => Some(message),
            _ => None,
        }
    }
}
