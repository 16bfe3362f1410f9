//! Routing: typed routes, navigation history, and the auth guard (pure).

pub mod guard;
pub mod route;
pub mod router;

// Re-export for convenience
pub use guard::{evaluate, Redirect};
pub use route::{Route, RouteLocation, Tab, AUTH_GROUP, TABS_GROUP};
pub use router::Navigator;
