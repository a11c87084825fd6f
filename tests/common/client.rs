//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per catalog route. Redirects are not
//! followed so tests can assert on them.
//!
//! When routes or form fields change, update only this file.

use super::constants::*;
use reqwest::redirect::Policy;
use reqwest::Response;
use std::time::Duration;

/// Form fields accepted by the add and edit routes
pub struct AnimeForm<'a> {
    pub title: &'a str,
    pub genre: &'a str,
    pub release_year: &'a str,
    pub creator: &'a str,
}

impl AnimeForm<'_> {
    fn as_pairs(&self) -> [(&str, &str); 4] {
        [
            ("title", self.title),
            ("genre", self.genre),
            ("releaseYear", self.release_year),
            ("creator", self.creator),
        ]
    }
}

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub async fn home(&self) -> Response {
        self.get("/").await
    }

    /// GET /{id}: one character is an id, anything longer a title
    pub async fn get_anime(&self, id_or_title: &str) -> Response {
        self.get(&format!("/{}", id_or_title)).await
    }

    pub async fn add_form(&self) -> Response {
        self.get("/add").await
    }

    pub async fn edit_form(&self, id: &str) -> Response {
        self.get(&format!("/edit/{}", id)).await
    }

    pub async fn get_static(&self, file_name: &str) -> Response {
        self.get(&format!("/static/{}", file_name)).await
    }

    pub async fn get_raw(&self, path: &str) -> Response {
        self.get(path).await
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn add_anime(&self, form: &AnimeForm<'_>) -> Response {
        self.post_form("/add", &form.as_pairs()).await
    }

    pub async fn edit_anime(&self, id: &str, form: &AnimeForm<'_>) -> Response {
        let mut pairs = vec![("id", id)];
        pairs.extend(form.as_pairs());
        self.post_form(&format!("/edit/{}", id), &pairs).await
    }

    pub async fn delete_anime(&self, id: &str) -> Response {
        self.get(&format!("/delete/{}", id)).await
    }

    pub async fn search(&self, title: &str) -> Response {
        self.post_form("/search", &[("title", title)]).await
    }
}
