//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod error;
pub mod key_action;
pub mod token;

// Re-export for convenience
pub use content::{
    Book, ContentKind, ContentType, ImageGroups, ImageItem, ImageSection, LoginRequest,
    LoginResponse, Movie, SearchResult, ALL_IMAGES_FOLDER,
};
pub use error::ApiError;
pub use key_action::KeyAction;
pub use token::{InvalidToken, Token};
