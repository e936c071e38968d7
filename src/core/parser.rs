//! Title preparation.
//!
//! Turns a loosely identified media title into a catalog search query:
//! - Skips titles tagged for another agent (`{tmdb-…}`, `{imdb-tt…}`)
//! - Pulls out an explicit `{ade-NNNNNNN}` catalog ID
//! - Moves a leading "The" to the end, the way the catalog lists titles
//!
//! Also extracts a normalized title and year from messy filenames.

use crate::models::config::SearchType;
use crate::utils::fs::is_video_file;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Resolution, source and codec tokens that end the title part of a release filename.
const TECHNICAL_TOKENS: &[&str] = &[
    "2160p", "1080p", "1080i", "720p", "576p", "480p", "bluray", "blu-ray", "bdrip", "brrip",
    "dvdrip", "dvd9", "dvd5", "web-dl", "webdl", "webrip", "hdrip", "hdtv", "x264", "x265", "h264",
    "h265", "hevc", "avc", "xvid", "divx", "aac", "ac3", "dts", "remux",
];

/// Release tokens that are also ordinary title words. They only end the title
/// when another technical token follows them.
const AMBIGUOUS_TOKENS: &[&str] = &["4k", "uhd", "hd", "sd", "dvd", "web", "repack"];

/// A query ready to be sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Title in catalog order ("Title, The").
    pub title: String,
    /// Year hint used to penalize mismatching candidates.
    pub year: Option<u16>,
    /// Explicit catalog ID that overrides fuzzy matching.
    pub special_id: Option<String>,
}

impl SearchQuery {
    /// Title in display order ("The Title"), as candidates are listed.
    pub fn display_title(&self) -> String {
        super::search_page::restore_article(&self.title)
    }
}

/// Why a title is not searched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Title carries a `{tmdb-…}` tag.
    TmdbTag,
    /// Title carries an `{imdb-tt…}` tag.
    ImdbTag,
    /// Nothing left to search for.
    EmptyTitle,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TmdbTag => write!(f, "title carries a TMDB tag"),
            SkipReason::ImdbTag => write!(f, "title carries an IMDB tag"),
            SkipReason::EmptyTitle => write!(f, "title is empty"),
        }
    }
}

/// Outcome of preparing a media title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Search the catalog with this query.
    Search(SearchQuery),
    /// Leave the title to another agent.
    Skip(SkipReason),
}

/// Title and year extracted from a filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    /// Normalized title, ID tags preserved.
    pub title: String,
    /// Year of release.
    pub year: Option<u16>,
}

/// Prepare a media title for searching.
///
/// `year_hint` wins over a year found at the end of the title.
pub fn prepare_query(media_title: &str, year_hint: Option<u16>) -> QueryPlan {
    let mut title = media_title.trim().to_string();

    if has_tag(&title, r"\{tmdb-\d+\}") {
        tracing::debug!("Title contains TMDB tag, skipping search: {}", title);
        return QueryPlan::Skip(SkipReason::TmdbTag);
    }
    if has_tag(&title, r"\{imdb-tt\d+\}") {
        tracing::debug!("Title contains IMDB tag, skipping search: {}", title);
        return QueryPlan::Skip(SkipReason::ImdbTag);
    }

    let special_id = extract_special_id(&title);
    if special_id.is_some() {
        if let Ok(re) = Regex::new(r"\s*\{ade-\d{7}\}\s*") {
            title = re.replace_all(&title, " ").trim().to_string();
        }
    }

    let (stripped, trailing_year) = split_trailing_year(&title);
    title = stripped;
    let year = year_hint.or(trailing_year);

    if title.is_empty() {
        return QueryPlan::Skip(SkipReason::EmptyTitle);
    }

    if title.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("the ")) {
        title = format!("{}, The", &title[4..]);
    }

    tracing::debug!(
        "Prepared query: title={:?} year={:?} special_id={:?}",
        title,
        year,
        special_id
    );

    QueryPlan::Search(SearchQuery {
        title,
        year,
        special_id,
    })
}

fn has_tag(title: &str, pattern: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(title))
        .unwrap_or(false)
}

/// Extract the seven-digit catalog ID from a `{ade-NNNNNNN}` tag.
pub fn extract_special_id(title: &str) -> Option<String> {
    let re = Regex::new(r"\{ade-(\d{7})\}").ok()?;
    re.captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Split a trailing "(YYYY)" off a title.
fn split_trailing_year(title: &str) -> (String, Option<u16>) {
    if let Ok(re) = Regex::new(r"^(.*?)\s*\((\d{4})\)\s*$") {
        if let Some(caps) = re.captures(title) {
            let year = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok());
            let rest = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            return (rest.to_string(), year);
        }
    }
    (title.to_string(), None)
}

/// Remove a trailing "(YYYY)" from a title.
pub fn strip_trailing_year(title: &str) -> String {
    split_trailing_year(title).0
}

/// Remove diacritics: NFKD decomposition with combining marks dropped.
pub fn strip_diacritics(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F)
}

/// Encode a prepared title for the search URL.
///
/// Hyphens are dropped before encoding; the catalog search treats them as
/// exclusion operators.
pub fn encode_query(title: &str) -> String {
    let cleaned = strip_diacritics(&title.replace('-', ""));
    urlencoding::encode(&cleaned).into_owned()
}

/// Build the catalog search URL for a prepared title.
pub fn search_url(base_url: &str, search_type: SearchType, title: &str) -> String {
    format!(
        "{}/{}/search?view=list&q={}",
        base_url.trim_end_matches('/'),
        search_type.path_segment(),
        encode_query(title)
    )
}

/// Build the catalog detail page URL for an ID.
pub fn detail_url(base_url: &str, id: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), id)
}

/// Extract a normalized title and year from a release filename.
///
/// `{ade-…}`, `{tmdb-…}` and `{imdb-…}` tags are kept so that
/// [`prepare_query`] can act on them.
pub fn parse_filename(filename: &str) -> ParsedFilename {
    let mut name = if is_video_file(Path::new(filename)) {
        Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    } else {
        filename.to_string()
    };

    // Pull ID tags out before separators are rewritten
    let mut tags = Vec::new();
    if let Ok(re) = Regex::new(r"\{(?:ade|tmdb|imdb)-[^}]+\}") {
        tags = re.find_iter(&name).map(|m| m.as_str().to_string()).collect();
        name = re.replace_all(&name, " ").to_string();
    }

    let mut year = None;
    let mut title_part = name.clone();
    if let Ok(re) = Regex::new(r"[\(\[\.\s_\-]((?:19|20)\d{2})(?:[\)\]\.\s_\-]|$)") {
        if let Some(caps) = re.captures(&name) {
            if let (Some(whole), Some(y)) = (caps.get(0), caps.get(1)) {
                if let Ok(parsed) = y.as_str().parse::<u16>() {
                    if (1900..=2100).contains(&parsed) && whole.start() > 0 {
                        year = Some(parsed);
                        title_part = name[..whole.start()].to_string();
                    }
                }
            }
        }
    }

    let spaced = title_part.replace(['.', '_'], " ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    let lowered: Vec<String> = words
        .iter()
        .map(|w| {
            w.trim_matches(|c: char| c == '[' || c == ']' || c == '(' || c == ')')
                .to_lowercase()
        })
        .collect();
    let cut = (1..words.len())
        .find(|&i| is_technical_at(&lowered, i))
        .unwrap_or(words.len());

    let mut title = words[..cut]
        .join(" ")
        .trim_matches(|c: char| c == '-' || c == '(' || c == '[' || c.is_whitespace())
        .to_string();
    for tag in tags {
        if title.is_empty() {
            title = tag;
        } else {
            title = format!("{} {}", title, tag);
        }
    }

    ParsedFilename { title, year }
}

/// Whether the word at `idx` starts the technical tail of a filename.
fn is_technical_at(words: &[String], idx: usize) -> bool {
    let Some(word) = words.get(idx) else {
        return false;
    };
    if TECHNICAL_TOKENS.contains(&word.as_str()) {
        return true;
    }
    AMBIGUOUS_TOKENS.contains(&word.as_str()) && is_technical_at(words, idx + 1)
}

/// Media title the way a library would present it: "Title (Year) {tag}".
pub fn media_title_from_filename(filename: &str) -> String {
    let parsed = parse_filename(filename);
    let Some(year) = parsed.year else {
        return parsed.title;
    };

    // Keep the tag after the year so the trailing-year rule still applies once
    // the tag has been stripped.
    match parsed.title.find(" {") {
        Some(idx) => format!("{} ({}){}", &parsed.title[..idx], year, &parsed.title[idx..]),
        None => format!("{} ({})", parsed.title, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(plan: QueryPlan) -> SearchQuery {
        match plan {
            QueryPlan::Search(q) => q,
            QueryPlan::Skip(reason) => panic!("unexpected skip: {}", reason),
        }
    }

    #[test]
    fn test_skip_foreign_tags() {
        assert_eq!(
            prepare_query("Some Movie {tmdb-12345}", None),
            QueryPlan::Skip(SkipReason::TmdbTag)
        );
        assert_eq!(
            prepare_query("Some Movie {imdb-tt0133093}", None),
            QueryPlan::Skip(SkipReason::ImdbTag)
        );
    }

    #[test]
    fn test_special_id_is_extracted_and_stripped() {
        let q = search(prepare_query("Some Movie {ade-1234567}", None));
        assert_eq!(q.title, "Some Movie");
        assert_eq!(q.special_id.as_deref(), Some("1234567"));

        // Six digits is not a catalog ID
        let q = search(prepare_query("Some Movie {ade-123456}", None));
        assert!(q.special_id.is_none());
    }

    #[test]
    fn test_leading_article_moved() {
        let q = search(prepare_query("The Big Picture", None));
        assert_eq!(q.title, "Big Picture, The");

        let q = search(prepare_query("Theory", None));
        assert_eq!(q.title, "Theory");
    }

    #[test]
    fn test_trailing_year() {
        let q = search(prepare_query("Big Picture (2019)", None));
        assert_eq!(q.title, "Big Picture");
        assert_eq!(q.year, Some(2019));

        let q = search(prepare_query("Big Picture (2019)", Some(2020)));
        assert_eq!(q.year, Some(2020));
    }

    #[test]
    fn test_empty_title_skipped() {
        assert_eq!(
            prepare_query("{ade-1234567}", None),
            QueryPlan::Skip(SkipReason::EmptyTitle)
        );
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("Café-Racer"), "CafeRacer");
        assert_eq!(encode_query("Big Picture, The"), "Big%20Picture%2C%20The");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            search_url("http://example.com/", SearchType::All, "Big Picture"),
            "http://example.com/allsearch/search?view=list&q=Big%20Picture"
        );
        assert_eq!(detail_url("http://example.com", "1234567"), "http://example.com/1234567/");
    }

    #[test]
    fn test_strip_trailing_year() {
        assert_eq!(strip_trailing_year("Big Picture (2019)"), "Big Picture");
        assert_eq!(strip_trailing_year("Big Picture (2019) Part 2"), "Big Picture (2019) Part 2");
    }
}
