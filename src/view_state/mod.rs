//! View-state layer: pure projections of `AppState` that the renderer draws.
//!
//! # Module Structure
//!
//! - `rows`: ListRow - the row shape shared by every content list

pub mod rows;

pub use rows::{current_rows, ListRow, SectionRows};
