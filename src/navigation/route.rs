//! Routes and route locations.
//!
//! A [`RouteLocation`] is the raw, ordered list of path segments the guard
//! observes. A [`Route`] is the typed screen it names.

use std::fmt;

/// First segment of every route in the unauthenticated area.
pub const AUTH_GROUP: &str = "auth_group";
/// First segment of every tabbed content route.
pub const TABS_GROUP: &str = "tabs_group";
/// Segment of the search results screen.
pub const SEARCH_SEGMENT: &str = "search";

// ===== RouteLocation =====

/// Current navigation position as ordered path segments.
///
/// Empty until the navigator has resolved its first route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteLocation(Vec<String>);

impl RouteLocation {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the first segment is the auth group.
    pub fn in_auth_area(&self) -> bool {
        self.first() == Some(AUTH_GROUP)
    }
}

impl fmt::Display for RouteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

// ===== Tab =====

/// Content tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Books,
    Movies,
    Images,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Books, Tab::Movies, Tab::Images];

    pub fn index(self) -> usize {
        match self {
            Tab::Books => 0,
            Tab::Movies => 1,
            Tab::Images => 2,
        }
    }

    /// Tab for a 1-based number as shown in the tab bar.
    pub fn from_number(number: usize) -> Option<Tab> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Books => "Books",
            Tab::Movies => "Movies",
            Tab::Images => "Images",
        }
    }

    pub fn segment(self) -> &'static str {
        match self {
            Tab::Books => "books",
            Tab::Movies => "movies",
            Tab::Images => "images",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Books => Route::Books,
            Tab::Movies => Route::Movies,
            Tab::Images => Route::Images,
        }
    }
}

// ===== Route =====

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Books,
    Movies,
    Images,
    /// Search results for `query`. The query is a route parameter, not a
    /// path segment.
    Search { query: String },
}

impl Route {
    /// Route that authenticated users land on.
    pub const DEFAULT_CONTENT: Route = Route::Books;

    pub fn location(&self) -> RouteLocation {
        match self {
            Route::Login => RouteLocation::new([AUTH_GROUP, "login"]),
            Route::Books | Route::Movies | Route::Images => {
                let tab = self.tab().map(Tab::segment).unwrap_or_default();
                RouteLocation::new([TABS_GROUP, tab])
            }
            Route::Search { .. } => RouteLocation::new([SEARCH_SEGMENT]),
        }
    }

    /// Parse a location back into a route.
    ///
    /// Search locations carry no query, so they parse to an empty query.
    pub fn from_location(location: &RouteLocation) -> Option<Route> {
        match location.segments() {
            [group, screen] if group == AUTH_GROUP && screen == "login" => Some(Route::Login),
            [group, screen] if group == TABS_GROUP => Tab::ALL
                .iter()
                .find(|tab| tab.segment() == screen)
                .map(|tab| tab.route()),
            [screen] if screen == SEARCH_SEGMENT => Some(Route::Search {
                query: String::new(),
            }),
            _ => None,
        }
    }

    pub fn tab(&self) -> Option<Tab> {
        match self {
            Route::Books => Some(Tab::Books),
            Route::Movies => Some(Tab::Movies),
            Route::Images => Some(Tab::Images),
            Route::Login | Route::Search { .. } => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Search { query } => write!(f, "{}?q={}", self.location(), query),
            _ => write!(f, "{}", self.location()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_location_is_in_auth_area() {
        let location = Route::Login.location();
        assert_eq!(location.segments(), ["auth_group", "login"]);
        assert!(location.in_auth_area());
    }

    #[test]
    fn tab_locations_are_in_tabs_group() {
        assert_eq!(Route::Books.location().segments(), ["tabs_group", "books"]);
        assert_eq!(Route::Movies.location().segments(), ["tabs_group", "movies"]);
        assert_eq!(Route::Images.location().segments(), ["tabs_group", "images"]);
        assert!(!Route::Books.location().in_auth_area());
    }

    #[test]
    fn search_location_is_single_segment() {
        let route = Route::Search {
            query: "dune".to_string(),
        };
        assert_eq!(route.location().segments(), ["search"]);
    }

    #[test]
    fn empty_location_is_not_in_auth_area() {
        assert!(!RouteLocation::empty().in_auth_area());
        assert_eq!(RouteLocation::empty().first(), None);
    }

    #[test]
    fn from_location_round_trips_named_routes() {
        for route in [Route::Login, Route::Books, Route::Movies, Route::Images] {
            assert_eq!(Route::from_location(&route.location()), Some(route));
        }
    }

    #[test]
    fn from_location_rejects_unknown_segments() {
        let location = RouteLocation::new(["tabs_group", "podcasts"]);
        assert_eq!(Route::from_location(&location), None);
        assert_eq!(Route::from_location(&RouteLocation::empty()), None);
    }

    #[test]
    fn tab_next_and_prev_wrap() {
        assert_eq!(Tab::Images.next(), Tab::Books);
        assert_eq!(Tab::Books.prev(), Tab::Images);
        assert_eq!(Tab::Books.next(), Tab::Movies);
    }

    #[test]
    fn tab_from_number_is_one_based() {
        assert_eq!(Tab::from_number(1), Some(Tab::Books));
        assert_eq!(Tab::from_number(3), Some(Tab::Images));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(4), None);
    }

    #[test]
    fn location_display_joins_segments() {
        assert_eq!(Route::Books.location().to_string(), "/tabs_group/books");
        let search = Route::Search {
            query: "dune".to_string(),
        };
        assert_eq!(search.to_string(), "/search?q=dune");
    }
}
