//! Row projection for the content lists.
//!
//! Every list screen renders the same row shape. Builders here are pure and
//! shared by the renderer and by the reducer, which needs the selected row to
//! resolve "open" actions.

use crate::model::{Book, ContentType, ImageGroups, ImageItem, Movie, SearchResult};
use crate::navigation::Route;
use crate::state::{AppState, ContentRef};

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub title: String,
    pub subtitle: Option<String>,
    pub detail: Option<String>,
    /// Picture shown next to the row.
    pub image: Option<ContentRef>,
    /// Downloadable file behind the row.
    pub file: Option<ContentRef>,
}

/// Titled run of image rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRows {
    pub title: String,
    pub rows: Vec<ListRow>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn content(content_type: ContentType, filename: Option<&str>) -> Option<ContentRef> {
    non_empty(filename).map(|f| ContentRef::new(content_type, f))
}

pub fn book_row(book: &Book) -> ListRow {
    ListRow {
        title: book.title.clone(),
        subtitle: non_empty(Some(&book.author)).map(str::to_string),
        detail: None,
        image: content(ContentType::Images, book.image_url.as_deref()),
        file: content(ContentType::Books, book.file_path.as_deref()),
    }
}

pub fn movie_row(movie: &Movie) -> ListRow {
    ListRow {
        title: movie.title.clone(),
        subtitle: non_empty(Some(&movie.director)).map(str::to_string),
        detail: non_empty(movie.genre.as_deref()).map(str::to_string),
        image: content(ContentType::Images, movie.image_url.as_deref()),
        file: content(ContentType::Movies, movie.file_path.as_deref()),
    }
}

pub fn image_row(image: &ImageItem) -> ListRow {
    let picture = content(ContentType::Images, Some(&image.file_path));
    ListRow {
        title: image.name.clone(),
        subtitle: None,
        detail: None,
        image: picture.clone(),
        file: picture,
    }
}

/// `"{name} ({type})"` with author or director as subtitle.
pub fn search_row(result: &SearchResult) -> ListRow {
    let file = match result {
        SearchResult::Book(book) => content(ContentType::Books, book.file_path.as_deref()),
        SearchResult::Movie(movie) => content(ContentType::Movies, movie.file_path.as_deref()),
        SearchResult::Image(image) => content(ContentType::Images, Some(&image.file_path)),
    };
    ListRow {
        title: format!("{} ({})", result.display_name(), result.kind()),
        subtitle: result.subtitle().map(str::to_string),
        detail: None,
        image: content(ContentType::Images, result.image_path()),
        file,
    }
}

/// Image sections in display order. Empty sections are kept so their header
/// still renders.
pub fn image_sections(groups: &ImageGroups) -> Vec<SectionRows> {
    groups
        .sections()
        .into_iter()
        .map(|section| SectionRows {
            title: section.title.to_string(),
            rows: section.images.iter().map(image_row).collect(),
        })
        .collect()
}

/// Rows of the current screen in display order, empty when nothing is loaded.
pub fn current_rows(state: &AppState) -> Vec<ListRow> {
    match state.current_route() {
        Some(Route::Books) => state
            .books
            .data
            .data()
            .map(|books| books.iter().map(book_row).collect())
            .unwrap_or_default(),
        Some(Route::Movies) => state
            .movies
            .data
            .data()
            .map(|movies| movies.iter().map(movie_row).collect())
            .unwrap_or_default(),
        Some(Route::Images) => state
            .images
            .data
            .data()
            .map(|groups| {
                image_sections(groups)
                    .into_iter()
                    .flat_map(|section| section.rows)
                    .collect()
            })
            .unwrap_or_default(),
        Some(Route::Search { .. }) => state
            .search
            .data
            .data()
            .map(|results| results.iter().map(search_row).collect())
            .unwrap_or_default(),
        Some(Route::Login) | None => Vec::new(),
    }
}
