//! NFO file generator (Kodi compatible).

use crate::models::media::MovieMetadata;

/// Generate movie NFO content (Kodi/Emby/Jellyfin compatible).
pub fn generate_movie_nfo(movie: &MovieMetadata) -> String {
    let mut nfo = String::new();

    nfo.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    nfo.push_str("<movie>\n");

    // Title
    nfo.push_str(&format!("  <title>{}</title>\n", escape_xml(&movie.title)));

    // Tagline
    if let Some(ref tagline) = movie.tagline {
        if !tagline.is_empty() {
            nfo.push_str(&format!("  <tagline>{}</tagline>\n", escape_xml(tagline)));
        }
    }

    // Year and release date
    if let Some(year) = movie.year {
        nfo.push_str(&format!("  <year>{}</year>\n", year));
    }
    if let Some(date) = movie.originally_available_at {
        let date = date.format("%Y-%m-%d");
        nfo.push_str(&format!("  <releasedate>{}</releasedate>\n", date));
        nfo.push_str(&format!("  <premiered>{}</premiered>\n", date));
    }

    // Rating
    if let Some(rating) = movie.rating {
        nfo.push_str("  <ratings>\n");
        nfo.push_str("    <rating name=\"adultdvdempire\" max=\"10\" default=\"true\">\n");
        nfo.push_str(&format!("      <value>{:.1}</value>\n", rating));
        nfo.push_str("    </rating>\n");
        nfo.push_str("  </ratings>\n");
    }

    // IDs
    if !movie.catalog_id.is_empty() {
        nfo.push_str(&format!(
            "  <uniqueid type=\"ade\" default=\"true\">{}</uniqueid>\n",
            escape_xml(&movie.catalog_id)
        ));
    }

    // Plot
    if let Some(ref summary) = movie.summary {
        nfo.push_str(&format!("  <plot>{}</plot>\n", escape_xml(summary)));
        nfo.push_str(&format!("  <outline>{}</outline>\n", escape_xml(summary)));
    }

    // Content rating
    if let Some(ref cert) = movie.content_rating {
        nfo.push_str(&format!("  <mpaa>{}</mpaa>\n", escape_xml(cert)));
    }

    // Genres
    for genre in &movie.genres {
        nfo.push_str(&format!("  <genre>{}</genre>\n", escape_xml(genre)));
    }

    // Studio
    if let Some(ref studio) = movie.studio {
        nfo.push_str(&format!("  <studio>{}</studio>\n", escape_xml(studio)));
    }

    // Collections
    for collection in &movie.collections {
        nfo.push_str("  <set>\n");
        nfo.push_str(&format!("    <name>{}</name>\n", escape_xml(collection)));
        nfo.push_str("  </set>\n");
    }

    // Directors
    for director in &movie.directors {
        nfo.push_str(&format!(
            "  <director>{}</director>\n",
            escape_xml(director)
        ));
    }

    // Cast
    for (i, role) in movie.roles.iter().enumerate() {
        nfo.push_str("  <actor>\n");
        nfo.push_str(&format!("    <name>{}</name>\n", escape_xml(&role.name)));
        if let Some(ref photo) = role.photo {
            nfo.push_str(&format!("    <thumb>{}</thumb>\n", escape_xml(photo)));
        }
        nfo.push_str(&format!("    <order>{}</order>\n", i));
        nfo.push_str("  </actor>\n");
    }

    // Poster
    for poster_url in &movie.posters {
        nfo.push_str(&format!("  <thumb aspect=\"poster\">{}</thumb>\n", escape_xml(poster_url)));
    }

    nfo.push_str("</movie>\n");
    nfo
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
