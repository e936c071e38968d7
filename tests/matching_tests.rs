//! Integration tests for title matching.
//!
//! Tests cover:
//! - Filename to media title extraction
//! - Query preparation feeding candidate ranking
//! - Special ID overrides and the good-score threshold

use ade_agent::core::agent::rank;
use ade_agent::core::matcher::{best_match, good_matches};
use ade_agent::core::parser::{
    media_title_from_filename, parse_filename, prepare_query, QueryPlan, SearchQuery, SkipReason,
};

const SEARCH_PAGE: &str = r#"
<div class="row list-view-item">
  <a href="/1234567/big-picture.html" label="Title">Big Picture, The</a>
  <small>released</small> 03/05/2019
  <a href="/1234567/" title="DVD">DVD</a>
</div>
<div class="row list-view-item">
  <a href="/1234568/big-picture.html" label="Title">Big Picture, The</a>
  <small>released</small> 03/05/2019
</div>
<div class="row list-view-item">
  <a href="/2222222/big-pictures.html" label="Title">Big Pictures</a>
  <small>released</small> 11/20/2018
</div>
<div class="row list-view-item">
  <a href="/3333333/unrelated.html" label="Title">Completely Unrelated Feature</a>
</div>
"#;

fn query(media_title: &str) -> SearchQuery {
    match prepare_query(media_title, None) {
        QueryPlan::Search(q) => q,
        QueryPlan::Skip(reason) => panic!("unexpected skip: {}", reason),
    }
}

// ========== FILENAME TESTS ==========

#[test]
fn test_parse_filename_release_style() {
    let parsed = parse_filename("The.Big.Picture.2019.1080p.WEB-DL.x264.mkv");
    assert_eq!(parsed.title, "The Big Picture");
    assert_eq!(parsed.year, Some(2019));
}

#[test]
fn test_parse_filename_library_style() {
    let parsed = parse_filename("Big Picture (2019).mp4");
    assert_eq!(parsed.title, "Big Picture");
    assert_eq!(parsed.year, Some(2019));
}

#[test]
fn test_parse_filename_without_year() {
    let parsed = parse_filename("Big_Picture_720p.avi");
    assert_eq!(parsed.title, "Big Picture");
    assert_eq!(parsed.year, None);
}

#[test]
fn test_parse_filename_keeps_title_words() {
    let parsed = parse_filename("Hot Web Girls (2015).mp4");
    assert_eq!(parsed.title, "Hot Web Girls");

    let parsed = parse_filename("Star Wars XXX A Porn Parody (2012).mp4");
    assert_eq!(parsed.title, "Star Wars XXX A Porn Parody");

    let parsed = parse_filename("Deleted Scenes (2011).mp4");
    assert_eq!(parsed.title, "Deleted Scenes");

    let parsed = parse_filename("Split Decision HD Edition.mkv");
    assert_eq!(parsed.title, "Split Decision HD Edition");
}

#[test]
fn test_parse_filename_ambiguous_release_tokens() {
    let parsed = parse_filename("Hot.Web.Girls.WEB.1080p.x264.mkv");
    assert_eq!(parsed.title, "Hot Web Girls");
    assert_eq!(parsed.year, None);

    let parsed = parse_filename("Big.Picture.HD.DVD.720p.mkv");
    assert_eq!(parsed.title, "Big Picture");
}

#[test]
fn test_parse_filename_keeps_tags() {
    let parsed = parse_filename("Big Picture (2019) {ade-1234567}.mkv");
    assert_eq!(parsed.title, "Big Picture {ade-1234567}");
    assert_eq!(parsed.year, Some(2019));

    assert_eq!(
        media_title_from_filename("Big Picture (2019) {ade-1234567}.mkv"),
        "Big Picture (2019) {ade-1234567}"
    );
}

#[test]
fn test_media_title_round_trips_through_query() {
    let media_title = media_title_from_filename("The.Big.Picture.2019.DVDRip.mkv");
    assert_eq!(media_title, "The Big Picture (2019)");

    let q = query(&media_title);
    assert_eq!(q.title, "Big Picture, The");
    assert_eq!(q.year, Some(2019));
}

#[test]
fn test_tagged_filename_skipped() {
    let media_title = media_title_from_filename("Big Picture {tmdb-603}.mkv");
    assert_eq!(
        prepare_query(&media_title, None),
        QueryPlan::Skip(SkipReason::TmdbTag)
    );
}

// ========== RANKING TESTS ==========

#[test]
fn test_rank_prefers_dvd_and_matching_year() {
    let results = rank(&query("The Big Picture (2019)"), SEARCH_PAGE);
    assert_eq!(results.len(), 4);

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1234567", "2222222", "3333333", "1234568"]);

    assert_eq!(results[0].score, 100);
    assert_eq!(results[0].name, "The Big Picture (2019)");
    // Five edits and a year mismatch
    assert_eq!(results[1].score, 85);
    // VOD listing of a title that also ships on DVD
    assert_eq!(results[3].score, 50);
}

#[test]
fn test_rank_special_id_override() {
    let results = rank(&query("Anything At All {ade-1234568}"), SEARCH_PAGE);
    assert_eq!(results[0].id, "1234568");
    assert_eq!(results[0].score, 100);
}

#[test]
fn test_good_score_threshold() {
    let results = rank(&query("The Big Picture (2019)"), SEARCH_PAGE);

    let good = good_matches(&results, 80);
    assert_eq!(good.len(), 2);
    assert!(good.iter().all(|r| r.score >= 80));

    assert_eq!(best_match(&results, 80).map(|r| r.id.as_str()), Some("1234567"));

    let miss = rank(&query("Nothing Like It"), SEARCH_PAGE);
    assert!(best_match(&miss, 95).is_none());
}
