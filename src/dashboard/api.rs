//! HTTP access to the catalog service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{CatalogStats, Project};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Any reason a fetch did not produce a usable value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    async fn fetch_stats(&self) -> Result<CatalogStats, FetchError>;
}

pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_json("/api/projects").await
    }

    async fn fetch_stats(&self) -> Result<CatalogStats, FetchError> {
        self.get_json("/api/stats").await
    }
}
