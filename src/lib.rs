//! cinemaOcinema terminal client
//!
//! Browse the books, movies and images served by a cinemaOcinema backend.
//!
//! The core (`model`, `session`, `navigation`, `state`, `view_state`) is pure;
//! `api` and `view` form the impure shell that talks to the network and the
//! terminal.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod session;
pub mod state;
pub mod view;
pub mod view_state;
