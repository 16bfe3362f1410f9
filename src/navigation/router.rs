//! Navigation history.
//!
//! The navigator owns the route stack; the guard only reads the location it
//! exposes. It starts empty, which is the "not yet resolved" location.

use crate::navigation::route::{Route, RouteLocation};
use tracing::debug;

/// Stack of visited routes. The top entry is the current screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Route> {
        self.stack.last()
    }

    /// Location of the current route, empty before the first navigation.
    pub fn location(&self) -> RouteLocation {
        self.current().map(Route::location).unwrap_or_default()
    }

    /// Open `route` on top of the current one.
    pub fn push(&mut self, route: Route) {
        debug!(%route, depth = self.stack.len() + 1, "Navigate push");
        self.stack.push(route);
    }

    /// Swap the current route for `route`, keeping history below it.
    pub fn replace(&mut self, route: Route) {
        debug!(%route, "Navigate replace");
        self.stack.pop();
        self.stack.push(route);
    }

    /// Drop all history and show `route`.
    pub fn reset(&mut self, route: Route) {
        debug!(%route, "Navigate reset");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Return to the previous route.
    ///
    /// Returns `false` (and does nothing) when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            debug!(route = ?self.current(), "Navigate back");
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}
