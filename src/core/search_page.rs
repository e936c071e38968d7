//! Search results page scraping.

use crate::models::media::{Candidate, MediaFormat};
use crate::utils::html::{following_text, selector, text_content};
use regex::Regex;
use scraper::{ElementRef, Html};

/// Extract every candidate row from a catalog search results page.
///
/// Rows the page lays out without a title link are skipped.
pub fn parse_search_page(html: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let Some(row_sel) = selector(r#"div[class*="row list-view-item"]"#) else {
        return Vec::new();
    };

    let rows: Vec<_> = document.select(&row_sel).collect();
    tracing::debug!("Found {} rows on the search page", rows.len());

    rows.into_iter().filter_map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<Candidate> {
    let title_sel = selector(r#"a[label*="Title"]"#)?;
    let Some(anchor) = row.select(&title_sel).next() else {
        tracing::debug!("Skipping search row without a title link");
        return None;
    };

    let title = restore_article(&text_content(anchor));
    let Some(id) = anchor.value().attr("href").and_then(id_from_href) else {
        tracing::debug!("Skipping {:?}: no catalog ID in link", title);
        return None;
    };

    let format = match selector(r#"a[title="DVD"], a[title="dvd"]"#) {
        Some(dvd_sel) if row.select(&dvd_sel).next().is_some() => MediaFormat::Dvd,
        _ => MediaFormat::Vod,
    };

    let year = release_year(row);

    tracing::debug!("Candidate {} {:?} {} {:?}", id, title, format, year);

    Some(Candidate {
        id,
        title,
        format,
        year,
    })
}

/// "Big Picture, The" -> "The Big Picture".
pub fn restore_article(title: &str) -> String {
    match title.strip_suffix(", The") {
        Some(rest) => format!("The {}", rest),
        None => title.to_string(),
    }
}

/// Catalog ID from a detail link: "/1234567/some-title.html" -> "1234567".
pub fn id_from_href(href: &str) -> Option<String> {
    href.splitn(3, '/')
        .nth(1)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Year from the "released" line of a search row ("mm/dd/yyyy").
fn release_year(row: ElementRef<'_>) -> Option<u16> {
    let small_sel = selector("small")?;
    let label = row
        .select(&small_sel)
        .find(|small| text_content(*small).contains("released"))?;
    let text = following_text(label)?;

    let re = Regex::new(r"\d{2}/\d{2}/(\d{4})").ok()?;
    re.captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
