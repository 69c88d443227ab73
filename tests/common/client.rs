//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per catalog endpoint.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
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
            .expect("Request failed")
    }

    pub async fn get_root(&self) -> Response {
        self.get("/").await
    }

    pub async fn get_projects(&self) -> Response {
        self.get("/api/projects").await
    }

    pub async fn get_project(&self, id: &str) -> Response {
        self.get(&format!("/api/projects/{}", id)).await
    }

    pub async fn get_health(&self) -> Response {
        self.get("/api/health").await
    }

    pub async fn get_stats(&self) -> Response {
        self.get("/api/stats").await
    }

    pub async fn get_path(&self, path: &str) -> Response {
        self.get(path).await
    }

    pub async fn post_path(&self, path: &str) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }
}
