//! HTML navigation helpers on top of `scraper`.

use scraper::{ElementRef, Html, Selector};

/// Parse a CSS selector, logging instead of panicking on a bad one.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::warn!("Invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}

/// All text below an element, trimmed.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First non-blank text node that is a direct child of the element.
pub fn own_text(el: ElementRef<'_>) -> Option<String> {
    el.children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
}

/// First non-blank text node among the element's following siblings.
pub fn following_text(el: ElementRef<'_>) -> Option<String> {
    el.next_siblings()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
}

/// Text of the first `<a>` among the element's following siblings.
pub fn following_link_text(el: ElementRef<'_>) -> Option<String> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "a")
        .map(text_content)
        .filter(|text| !text.is_empty())
}

/// `<small>` labels inside list items whose text equals `label`.
///
/// Catalog detail pages lay out facts as `<li><small>Studio: </small>…</li>`.
pub fn list_labels<'a>(document: &'a Html, label: &str) -> Vec<ElementRef<'a>> {
    let Some(sel) = selector("li > small") else {
        return Vec::new();
    };
    let wanted = label.trim();
    document
        .select(&sel)
        .filter(|small| text_content(*small) == wanted)
        .collect()
}

/// Text following the first `<small>` label matching `label`.
pub fn labeled_text(document: &Html, label: &str) -> Option<String> {
    list_labels(document, label)
        .into_iter()
        .find_map(following_text)
}

/// Link text following the first `<small>` label matching `label`.
pub fn labeled_link_text(document: &Html, label: &str) -> Option<String> {
    list_labels(document, label)
        .into_iter()
        .find_map(following_link_text)
}
