//! Navigation guard: route access policy driven by authentication state.
//!
//! A pure decision function over the session's [`AuthState`] and the current
//! [`RouteLocation`]. It never fails and holds no state; the caller performs
//! the redirect it returns. Re-evaluating after the redirect has been applied
//! yields `None`, because the target location no longer triggers it.

use crate::navigation::route::{Route, RouteLocation};
use crate::session::AuthState;

/// Redirect command issued by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redirect {
    /// Unauthenticated user outside the auth area.
    ToLogin,
    /// Authenticated user inside the auth area.
    ToDefaultContent,
}

impl Redirect {
    pub fn target(self) -> Route {
        match self {
            Redirect::ToLogin => Route::Login,
            Redirect::ToDefaultContent => Route::DEFAULT_CONTENT,
        }
    }
}

/// Decide whether the current location must be left.
///
/// - empty location: no action (navigation not settled yet)
/// - unauthenticated outside the auth area: [`Redirect::ToLogin`]
/// - authenticated inside the auth area: [`Redirect::ToDefaultContent`]
/// - otherwise: no action
pub fn evaluate(auth: AuthState, location: &RouteLocation) -> Option<Redirect> {
    if location.is_empty() {
        return None;
    }

    match (auth, location.in_auth_area()) {
        (AuthState::Unauthenticated, false) => Some(Redirect::ToLogin),
        (AuthState::Authenticated, true) => Some(Redirect::ToDefaultContent),
        _ => None,
    }
}
