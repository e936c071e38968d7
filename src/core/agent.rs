//! The metadata agent.
//!
//! `search` answers "which catalog entries could this media be?" and
//! `update` answers "what do we know about this catalog entry?". The host
//! decides which search result to confirm; [`Agent::identify`] does both
//! steps automatically using the good-score threshold.

use super::detail_page::{parse_detail_page, DetailOptions};
use super::matcher::{best_match, score_candidates};
use super::parser::{extract_special_id, prepare_query, search_url, QueryPlan, SearchQuery, SkipReason};
use super::search_page::parse_search_page;
use crate::models::config::Config;
use crate::models::media::{MovieMetadata, SearchResult};
use crate::services::catalog::CatalogClient;
use crate::{Error, Result};

/// Metadata agent backed by the catalog website.
#[derive(Debug, Clone)]
pub struct Agent {
    config: Config,
    client: CatalogClient,
}

impl Agent {
    /// Create an agent from configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = CatalogClient::new(&config.http)?;
        tracing::debug!(
            "Agent ready: search type {}, good score {}",
            config.search_type,
            config.good_score()
        );
        Ok(Self { config, client })
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Search the catalog for a media title.
    ///
    /// Titles tagged for another agent yield no results. Results are sorted
    /// best first and are not filtered by the good-score threshold.
    pub async fn search(&self, media_title: &str, year: Option<u16>) -> Result<Vec<SearchResult>> {
        let query = match prepare_query(media_title, year) {
            QueryPlan::Search(query) => query,
            QueryPlan::Skip(reason) => {
                tracing::debug!("Not searching {:?}: {}", media_title, reason);
                return Ok(Vec::new());
            }
        };

        let url = search_url(self.client.base_url(), self.config.search_type, &query.title);
        tracing::debug!("Constructed search URL: {}", url);

        let html = self.client.fetch_search_page(&url).await?;
        Ok(rank(&query, &html))
    }

    /// Fetch and scrape the detail page of a catalog ID.
    pub async fn update(&self, id: &str, media_title: &str) -> Result<MovieMetadata> {
        let id = validate_id(id)?;
        tracing::debug!("Starting metadata update for ID: {}", id);

        let html = self.client.fetch_detail_page(id).await?;
        let options = DetailOptions::from(&self.config);
        let mut metadata = parse_detail_page(&html, media_title, &options);
        metadata.catalog_id = id.to_string();

        Ok(metadata)
    }

    /// Download the first poster of a metadata record.
    ///
    /// Returns the poster URL together with the image bytes.
    pub async fn fetch_poster(&self, metadata: &MovieMetadata) -> Result<Option<(String, Vec<u8>)>> {
        let Some(url) = metadata.posters.first() else {
            return Ok(None);
        };
        let bytes = self.client.download_image(url).await?;
        tracing::debug!("Downloaded poster {} ({} bytes)", url, bytes.len());
        Ok(Some((url.clone(), bytes)))
    }

    /// Search, confirm the best good-enough match, and update it.
    ///
    /// A title that is nothing but a `{ade-NNNNNNN}` tag is updated directly.
    pub async fn identify(&self, media_title: &str, year: Option<u16>) -> Result<Option<MovieMetadata>> {
        if let Some(id) = tag_only_id(media_title, year) {
            tracing::info!("Using catalog ID {} from {:?}", id, media_title);
            return self.update(&id, "").await.map(Some);
        }

        let results = self.search(media_title, year).await?;
        let Some(best) = best_match(&results, self.config.good_score()) else {
            tracing::info!(
                "No match for {:?} scored {} or more ({} candidates)",
                media_title,
                self.config.good_score(),
                results.len()
            );
            return Ok(None);
        };

        tracing::info!("Matched {:?} to {} ({}, score {})", media_title, best.name, best.id, best.score);
        self.update(&best.id, media_title).await.map(Some)
    }
}

/// Parse and score a search results page for a prepared query.
pub fn rank(query: &SearchQuery, html: &str) -> Vec<SearchResult> {
    let candidates = parse_search_page(html);
    let results = score_candidates(query, &candidates);
    tracing::debug!("Ranked {} candidates for {:?}", results.len(), query.title);
    results
}

/// Catalog ID of a title that carries an `{ade-…}` tag and nothing to search for.
pub fn tag_only_id(media_title: &str, year: Option<u16>) -> Option<String> {
    match prepare_query(media_title, year) {
        QueryPlan::Skip(SkipReason::EmptyTitle) => extract_special_id(media_title),
        _ => None,
    }
}

/// Catalog IDs are non-empty runs of ASCII digits.
pub fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidCatalogId(id.to_string()));
    }
    Ok(id)
}
