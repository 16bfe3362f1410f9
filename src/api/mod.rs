//! HTTP client for the catalog backend.
//!
//! Thin async wrappers over the backend endpoints. Failures are normalized
//! into [`ApiError`] and propagated unchanged; nothing here retries.

use crate::model::{
    ApiError, Book, ContentType, ImageGroups, LoginRequest, LoginResponse, Movie, SearchResult,
    Token,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Catalog API client.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    token: Option<Token>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://host/api`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the URL does not parse or cannot
    /// have path segments appended (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            http: reqwest::Client::new(),
            token: None,
        })
    }

    /// Copy of this client that authenticates requests with `token`.
    ///
    /// `None` yields an anonymous client.
    pub fn with_token(&self, token: Option<Token>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            token,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /auth/login`
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "login"]))
            .json(&LoginRequest { username, password });
        self.send(request, "login").await
    }

    /// `GET /books`
    pub async fn books(&self) -> Result<Vec<Book>, ApiError> {
        let request = self.http.get(self.endpoint(&["books"]));
        self.send(request, "books").await
    }

    /// `GET /movies`
    pub async fn movies(&self) -> Result<Vec<Movie>, ApiError> {
        let request = self.http.get(self.endpoint(&["movies"]));
        self.send(request, "movies").await
    }

    /// `GET /images` - images grouped by folder.
    pub async fn images(&self) -> Result<ImageGroups, ApiError> {
        let request = self.http.get(self.endpoint(&["images"]));
        self.send(request, "images").await
    }

    /// `GET /search?query=<q>`
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&["search"]))
            .query(&[("query", query)]);
        self.send(request, "search").await
    }

    /// URL of a content file: `<base>/content/<type>/<filename>`.
    ///
    /// Pure URL construction, no network call. The filename is encoded as a
    /// single path segment, so `/` and `%` inside it are escaped.
    pub fn content_url(&self, content_type: ContentType, filename: &str) -> Url {
        self.endpoint(&["content", content_type.as_str(), filename])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            warn!(operation, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status.as_u16(), &body);
            warn!(operation, status = status.as_u16(), error = %err, "Backend returned an error");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| {
            let err = ApiError::from(e);
            warn!(operation, error = %err, "Failed to read response body");
            err
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            let err = ApiError::Decode {
                message: e.to_string(),
            };
            warn!(operation, error = %err, "Failed to decode response body");
            err
        })?;

        debug!(operation, bytes = bytes.len(), "Request succeeded");
        Ok(value)
    }
}
