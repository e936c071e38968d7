//! Detail page scraping.
//!
//! Every field is extracted on its own. A field missing from the page (or
//! shaped in a way we don't recognize) is logged and left unset; it never
//! stops the rest of the page from being read.

use super::dates::{parse_release_date, resolve_release};
use super::parser::strip_trailing_year;
use crate::models::config::Config;
use crate::models::media::{MovieMetadata, Role};
use crate::utils::html::{labeled_link_text, labeled_text, own_text, selector, text_content};
use scraper::Html;

/// Options that change how a detail page is mapped onto metadata.
#[derive(Debug, Clone, Default)]
pub struct DetailOptions {
    /// Prefer an earlier production year over the release date.
    pub use_production_date: bool,
    /// Add the studio to the collections.
    pub studio_as_collection: bool,
    /// Lowercased genres to drop.
    pub ignored_genres: Vec<String>,
}

impl From<&Config> for DetailOptions {
    fn from(config: &Config) -> Self {
        Self {
            use_production_date: config.use_production_date,
            studio_as_collection: config.studio_as_collection,
            ignored_genres: config.ignored_genres(),
        }
    }
}

/// Map a detail page onto movie metadata.
///
/// The title comes from the library's own media title, minus a trailing year.
/// Without one, the page heading is used.
pub fn parse_detail_page(html: &str, media_title: &str, options: &DetailOptions) -> MovieMetadata {
    let document = Html::parse_document(html);

    let mut metadata = MovieMetadata {
        title: strip_trailing_year(media_title),
        ..Default::default()
    };
    if metadata.title.is_empty() {
        metadata.title = extract_page_title(&document).unwrap_or_default();
    }
    tracing::debug!("Title: {}", metadata.title);

    metadata.tagline = extract_tagline(&document);
    metadata.summary = extract_summary(&document);
    metadata.rating = extract_rating(&document);
    metadata.content_rating = extract_content_rating(&document);
    metadata.studio = extract_studio(&document);

    let release = extract_release_date(&document);
    let production_year = extract_production_year(&document);
    let info = resolve_release(release, production_year, options.use_production_date);
    metadata.originally_available_at = info.originally_available_at;
    metadata.year = info.year;

    metadata.posters = extract_poster(&document).into_iter().collect();
    metadata.roles = extract_cast(&document);
    metadata.directors = extract_directors(&document);
    metadata.genres = extract_genres(&document, &options.ignored_genres);

    if options.studio_as_collection {
        if let Some(ref studio) = metadata.studio {
            metadata.collections.push(studio.clone());
        }
    }

    metadata
}

fn log_field<T: std::fmt::Debug>(name: &str, value: Option<T>) -> Option<T> {
    match value {
        Some(ref v) => tracing::debug!("{} found: {:?}", name, v),
        None => tracing::debug!("No {} found", name),
    }
    value
}

/// Page heading, used when the library supplies no title.
pub fn extract_page_title(document: &Html) -> Option<String> {
    let sel = selector("h1")?;
    let value = document
        .select(&sel)
        .find_map(own_text)
        .map(|title| super::search_page::restore_article(&title));
    log_field("page title", value)
}

/// Tagline: direct text of the `h2.test` heading.
pub fn extract_tagline(document: &Html) -> Option<String> {
    let sel = selector(r#"h2[class*="test"]"#)?;
    let value = document.select(&sel).next().and_then(own_text);
    log_field("tagline", value)
}

/// Synopsis: first paragraph of the synopsis block.
pub fn extract_summary(document: &Html) -> Option<String> {
    let sel = selector(r#"div[class="synopsis-content"] > p"#)?;
    let value = document
        .select(&sel)
        .next()
        .map(text_content)
        .filter(|s| !s.is_empty());
    log_field("summary", value)
}

/// Average star rating, doubled onto a ten-point scale.
pub fn extract_rating(document: &Html) -> Option<f32> {
    let sel = selector(r#"span[class="rating-stars-avg"]"#)?;
    let value = document
        .select(&sel)
        .next()
        .and_then(own_text)
        .and_then(|text| match text.parse::<f32>() {
            Ok(stars) => Some(stars * 2.0),
            Err(e) => {
                tracing::debug!("Unparsable rating {:?}: {}", text, e);
                None
            }
        });
    log_field("rating", value)
}

/// Content rating from the "Rating:" fact.
pub fn extract_content_rating(document: &Html) -> Option<String> {
    log_field("content rating", labeled_text(document, "Rating: "))
}

/// Studio from the "Studio:" fact link.
pub fn extract_studio(document: &Html) -> Option<String> {
    log_field("studio", labeled_link_text(document, "Studio: "))
}

/// Release date from the "Released:" fact.
pub fn extract_release_date(document: &Html) -> Option<chrono::NaiveDate> {
    let text = labeled_text(document, "Released:")?;
    let value = parse_release_date(&text);
    if value.is_none() {
        tracing::debug!("Failed to parse release date: {}", text);
    }
    log_field("release date", value)
}

/// Production year from the "Production Year:" fact.
pub fn extract_production_year(document: &Html) -> Option<i32> {
    let value = labeled_text(document, "Production Year:").and_then(|text| {
        text.parse::<i32>()
            .map_err(|_| tracing::debug!("Production year is not a valid integer: {}", text))
            .ok()
    });
    log_field("production year", value)
}

/// Cover art from the page's `image_src` link.
pub fn extract_poster(document: &Html) -> Option<String> {
    let sel = selector(r#"link[rel="image_src"]"#)?;
    let value = document
        .select(&sel)
        .find_map(|link| link.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty());
    log_field("poster", value)
}

/// Cast from the performer popovers. Headshots point at the full-size image.
pub fn extract_cast(document: &Html) -> Vec<Role> {
    let Some(sel) = selector(r#"div[class="hover-popover-detail"] > img"#) else {
        return Vec::new();
    };

    document
        .select(&sel)
        .filter_map(|img| {
            let name = img.value().attr("title")?.trim();
            if name.is_empty() {
                return None;
            }
            let photo = img
                .value()
                .attr("src")
                .map(|src| src.replace("h.jpg", ".jpg"));
            tracing::debug!("Added cast member: {}", name);
            Some(Role {
                name: name.to_string(),
                photo,
            })
        })
        .collect()
}

/// Directors from the director detail links.
pub fn extract_directors(document: &Html) -> Vec<String> {
    let Some(sel) = selector(r#"a[label*="Director - details"]"#) else {
        return Vec::new();
    };

    document
        .select(&sel)
        .filter_map(own_text)
        .inspect(|name| tracing::debug!("Added director: {}", name))
        .collect()
}

/// Genres from the category list, minus ignored ones and duplicates.
pub fn extract_genres(document: &Html, ignored: &[String]) -> Vec<String> {
    let Some(sel) = selector(r#"ul[class="list-unstyled m-b-2"] a[label="Category"]"#) else {
        return Vec::new();
    };

    let mut genres: Vec<String> = Vec::new();
    for genre in document.select(&sel).filter_map(own_text) {
        let lower = genre.to_lowercase();
        if ignored.contains(&lower) {
            tracing::debug!("Ignoring genre: {}", genre);
            continue;
        }
        if genres.iter().any(|g| g.to_lowercase() == lower) {
            continue;
        }
        tracing::debug!("Added genre: {}", genre);
        genres.push(genre);
    }
    genres
}
