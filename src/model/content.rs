//! Catalog content records as served by the backend.
//!
//! All types here are read-only value objects. They are deserialized at the
//! API boundary and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Folder name the backend uses for images without a folder.
pub const ALL_IMAGES_FOLDER: &str = "ALL";

// ===== Records =====

/// A book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Cover image filename, served from the `images` content type.
    #[serde(default)]
    pub image_url: Option<String>,
    /// The book file itself, served from the `books` content type.
    #[serde(default)]
    pub file_path: Option<String>,
}

/// A movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub director: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// An image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: u64,
    pub name: String,
    pub file_path: String,
    /// `None` means the image lives in the [`ALL_IMAGES_FOLDER`] group.
    #[serde(default)]
    pub folder: Option<String>,
}

// ===== ImageGroups =====

/// Images grouped by folder name, as returned by `GET /images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageGroups(BTreeMap<String, Vec<ImageItem>>);

/// One titled group of images in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSection<'a> {
    pub title: &'a str,
    pub images: &'a [ImageItem],
}

impl ImageGroups {
    pub fn new(groups: BTreeMap<String, Vec<ImageItem>>) -> Self {
        Self(groups)
    }

    /// Sections in display order: `ALL` first, then folders alphabetically.
    pub fn sections(&self) -> Vec<ImageSection<'_>> {
        let mut sections: Vec<ImageSection<'_>> = self
            .0
            .iter()
            .map(|(title, images)| ImageSection {
                title: title.as_str(),
                images: images.as_slice(),
            })
            .collect();
        sections.sort_by(|a, b| compare_folders(a.title, b.title));
        sections
    }

    /// True when there are no groups or every group is empty.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Total number of images across all groups.
    pub fn image_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

fn compare_folders(a: &str, b: &str) -> Ordering {
    match (a == ALL_IMAGES_FOLDER, b == ALL_IMAGES_FOLDER) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

// ===== SearchResult =====

/// Discriminant of a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Book,
    Movie,
    Image,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Book => "book",
            ContentKind::Movie => "movie",
            ContentKind::Image => "image",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search hit: `{ "type": "book" | "movie" | "image", "data": { ... } }`.
///
/// The payload shape depends on the tag, so each variant carries its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchResult {
    Book(Book),
    Movie(Movie),
    Image(ImageItem),
}

impl SearchResult {
    pub fn kind(&self) -> ContentKind {
        match self {
            SearchResult::Book(_) => ContentKind::Book,
            SearchResult::Movie(_) => ContentKind::Movie,
            SearchResult::Image(_) => ContentKind::Image,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            SearchResult::Book(book) => book.id,
            SearchResult::Movie(movie) => movie.id,
            SearchResult::Image(image) => image.id,
        }
    }

    /// Title for books and movies, name for images.
    pub fn display_name(&self) -> &str {
        match self {
            SearchResult::Book(book) => &book.title,
            SearchResult::Movie(movie) => &movie.title,
            SearchResult::Image(image) => &image.name,
        }
    }

    /// Author for books, director for movies, nothing for images.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            SearchResult::Book(book) => Some(book.author.as_str()),
            SearchResult::Movie(movie) => Some(movie.director.as_str()),
            SearchResult::Image(_) => None,
        }
        .filter(|s| !s.is_empty())
    }

    /// Filename of the picture to show for this hit (served as `images`).
    pub fn image_path(&self) -> Option<&str> {
        match self {
            SearchResult::Book(book) => book.image_url.as_deref(),
            SearchResult::Movie(movie) => movie.image_url.as_deref(),
            SearchResult::Image(image) => Some(image.file_path.as_str()),
        }
        .filter(|s| !s.is_empty())
    }
}

// ===== ContentType =====

/// Storage area a content file is served from: `/content/<type>/<file>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Images,
    Books,
    Movies,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Images => "images",
            ContentType::Books => "books",
            ContentType::Movies => "movies",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Login =====

/// Body sent to `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body returned by a successful login. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image(id: u64, name: &str) -> ImageItem {
        ImageItem {
            id,
            name: name.to_string(),
            file_path: format!("{name}.jpg"),
            folder: None,
        }
    }

    #[test]
    fn book_deserializes_camel_case_fields() {
        let book: Book = serde_json::from_value(json!({
            "id": 7,
            "title": "Dune",
            "author": "Herbert",
            "imageUrl": "dune.jpg",
            "filePath": "dune.pdf"
        }))
        .unwrap();

        assert_eq!(book.id, 7);
        assert_eq!(book.image_url.as_deref(), Some("dune.jpg"));
        assert_eq!(book.file_path.as_deref(), Some("dune.pdf"));
    }

    #[test]
    fn book_accepts_null_image_url() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "Emma",
            "author": "Austen",
            "imageUrl": null,
            "filePath": "emma.pdf"
        }))
        .unwrap();

        assert_eq!(book.image_url, None);
    }

    #[test]
    fn movie_deserializes_genre() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 3,
            "title": "Alien",
            "director": "Scott",
            "filePath": "alien.mp4",
            "genre": "Horror"
        }))
        .unwrap();

        assert_eq!(movie.genre.as_deref(), Some("Horror"));
        assert_eq!(movie.image_url, None);
    }

    #[test]
    fn search_result_decodes_tagged_book() {
        let hits: Vec<SearchResult> = serde_json::from_value(json!([
            {"type": "book", "data": {"id": 1, "title": "Dune", "author": "Herbert"}}
        ]))
        .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind(), ContentKind::Book);
        assert_eq!(hits[0].display_name(), "Dune");
        assert_eq!(hits[0].subtitle(), Some("Herbert"));
        assert_eq!(hits[0].image_path(), None);
    }

    #[test]
    fn search_result_decodes_image_with_file_path() {
        let hit: SearchResult = serde_json::from_value(json!({
            "type": "image",
            "data": {"id": 4, "name": "Sunset", "filePath": "sunset.png", "folder": "nature"}
        }))
        .unwrap();

        assert_eq!(hit.kind(), ContentKind::Image);
        assert_eq!(hit.id(), 4);
        assert_eq!(hit.subtitle(), None);
        assert_eq!(hit.image_path(), Some("sunset.png"));
    }

    #[test]
    fn search_result_rejects_unknown_tag() {
        let result: Result<SearchResult, _> = serde_json::from_value(json!({
            "type": "podcast",
            "data": {"id": 1}
        }));
        assert!(result.is_err(), "Unknown tag must not decode");
    }

    #[test]
    fn image_groups_put_all_first_then_alphabetical() {
        let mut groups = BTreeMap::new();
        groups.insert("travel".to_string(), vec![image(1, "a")]);
        groups.insert("ALL".to_string(), vec![image(2, "b")]);
        groups.insert("Family".to_string(), vec![image(3, "c")]);
        groups.insert("art".to_string(), vec![image(4, "d")]);

        let groups = ImageGroups::new(groups);
        let titles: Vec<&str> = groups.sections().iter().map(|s| s.title).collect();

        assert_eq!(titles, vec!["ALL", "art", "Family", "travel"]);
    }

    #[test]
    fn image_groups_empty_when_every_group_is_empty() {
        let mut groups = BTreeMap::new();
        groups.insert("ALL".to_string(), vec![]);
        groups.insert("misc".to_string(), vec![]);

        let groups = ImageGroups::new(groups);
        assert!(groups.is_empty());
        assert_eq!(groups.sections().len(), 2);
    }

    #[test]
    fn image_groups_deserialize_from_folder_mapping() {
        let groups: ImageGroups = serde_json::from_value(json!({
            "ALL": [{"id": 1, "name": "x", "filePath": "x.png"}],
            "pets": [{"id": 2, "name": "y", "filePath": "y.png", "folder": "pets"}]
        }))
        .unwrap();

        assert_eq!(groups.image_count(), 2);
        assert!(!groups.is_empty());
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let response: LoginResponse =
            serde_json::from_value(json!({"token": "dummy-jwt-token", "user": "x"})).unwrap();
        assert_eq!(response.token.as_deref(), Some("dummy-jwt-token"));
    }

    #[test]
    fn login_response_without_token_decodes_to_none() {
        let response: LoginResponse = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert_eq!(response.token, None);
    }

    #[test]
    fn content_type_path_segments() {
        assert_eq!(ContentType::Images.as_str(), "images");
        assert_eq!(ContentType::Books.to_string(), "books");
        assert_eq!(ContentType::Movies.to_string(), "movies");
    }
}
