//! Catalog website client.

use crate::core::parser::detail_url;
use crate::models::config::HttpConfig;
use crate::{Error, Result};
use std::time::Duration;

/// HTTP client for the catalog website.
///
/// Requests are plain GETs of HTML pages, issued one at a time.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET and fail on non-success status.
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.get(url).await?.text().await?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Fetch a search results page.
    pub async fn fetch_search_page(&self, url: &str) -> Result<String> {
        self.fetch_text(url).await
    }

    /// Fetch the detail page of a catalog ID.
    pub async fn fetch_detail_page(&self, id: &str) -> Result<String> {
        self.fetch_text(&detail_url(&self.base_url, id)).await
    }

    /// Download an image.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self.get(url).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Check that the catalog answers.
    pub async fn health_check(&self) -> Result<bool> {
        match self.client.get(&self.base_url).send().await {
            Ok(resp) => Ok(resp.status().is_success() || resp.status().is_redirection()),
            Err(_) => Ok(false),
        }
    }
}
