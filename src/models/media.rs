//! Media-related data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Distribution format of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    /// Physical disc.
    Dvd,
    /// Video on demand.
    Vod,
}

impl std::fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaFormat::Dvd => write!(f, "DVD"),
            MediaFormat::Vod => write!(f, "VOD"),
        }
    }
}

/// A row scraped from the catalog search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Catalog ID.
    pub id: String,
    /// Display title, article already moved to the front.
    pub title: String,
    /// Distribution format.
    pub format: MediaFormat,
    /// Release year, if listed.
    pub year: Option<u16>,
}

/// A scored search result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Catalog ID.
    pub id: String,
    /// Title with the year appended when known.
    pub name: String,
    /// Match score; higher is better.
    pub score: i32,
    /// Distribution format.
    pub format: MediaFormat,
    /// Release year, if listed.
    pub year: Option<u16>,
}

/// A cast member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Performer name.
    pub name: String,
    /// Headshot URL.
    pub photo: Option<String>,
}

/// Movie metadata scraped from a catalog detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    /// Catalog ID.
    pub catalog_id: String,
    /// Title.
    pub title: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// Synopsis.
    pub summary: Option<String>,
    /// User rating (0-10).
    pub rating: Option<f32>,
    /// Content rating as listed by the catalog.
    pub content_rating: Option<String>,
    /// Studio.
    pub studio: Option<String>,
    /// Date the title first became available.
    pub originally_available_at: Option<NaiveDate>,
    /// Year.
    pub year: Option<i32>,
    /// Poster URLs.
    pub posters: Vec<String>,
    /// Cast.
    pub roles: Vec<Role>,
    /// Directors.
    pub directors: Vec<String>,
    /// Genres.
    pub genres: Vec<String>,
    /// Collections.
    pub collections: Vec<String>,
}

/// Video file information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name without path.
    pub filename: String,
    /// File size in bytes.
    pub size: u64,
    /// Parent directory.
    pub parent_dir: PathBuf,
}
