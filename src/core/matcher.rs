//! Candidate scoring.
//!
//! Each candidate starts at [`INITIAL_SCORE`] and loses one point per edit
//! between the query title and the candidate title. On top of that:
//! - An explicit catalog ID in the query pins that candidate at [`SPECIAL_ID_SCORE`],
//!   exempt from every other adjustment
//! - A known year that disagrees with the query year costs [`YEAR_MISMATCH_PENALTY`]
//! - When the same title/year is listed as both DVD and VOD, the VOD entries
//!   are halved so the disc release wins

use super::parser::SearchQuery;
use crate::models::media::{Candidate, MediaFormat, SearchResult};
use std::collections::HashMap;

/// Score of a perfect title match.
pub const INITIAL_SCORE: i32 = 100;

/// Score given to the candidate named by an explicit catalog ID.
pub const SPECIAL_ID_SCORE: i32 = 100;

/// Deducted when both years are known and differ.
pub const YEAR_MISMATCH_PENALTY: i32 = 10;

/// Title similarity score, before any adjustment.
pub fn title_score(query_title: &str, candidate_title: &str) -> i32 {
    let distance = strsim::levenshtein(&query_title.to_lowercase(), &candidate_title.to_lowercase());
    INITIAL_SCORE - i32::try_from(distance).unwrap_or(i32::MAX - INITIAL_SCORE)
}

/// Score a single candidate against the query, ignoring format grouping.
pub fn score_candidate(query: &SearchQuery, candidate: &Candidate) -> i32 {
    if query.special_id.as_deref() == Some(candidate.id.as_str()) {
        return SPECIAL_ID_SCORE;
    }

    let mut score = title_score(&query.display_title(), &candidate.title);
    if let (Some(wanted), Some(listed)) = (query.year, candidate.year) {
        if wanted != listed {
            score -= YEAR_MISMATCH_PENALTY;
        }
    }
    score
}

/// Display name of a result: "Title (Year)" or "Title".
pub fn result_name(title: &str, year: Option<u16>) -> String {
    match year {
        Some(year) => format!("{} ({})", title, year),
        None => title.to_string(),
    }
}

/// Score, adjust and rank all candidates from a search page.
///
/// Sorting is stable, so equal scores keep page order.
pub fn score_candidates(query: &SearchQuery, candidates: &[Candidate]) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = candidates
        .iter()
        .map(|candidate| SearchResult {
            id: candidate.id.clone(),
            name: result_name(&candidate.title, candidate.year),
            score: score_candidate(query, candidate),
            format: candidate.format,
            year: candidate.year,
        })
        .collect();

    // Titles/years that have a disc release
    let mut has_dvd: HashMap<(&str, Option<u16>), bool> = HashMap::new();
    for candidate in candidates {
        let entry = has_dvd
            .entry((candidate.title.as_str(), candidate.year))
            .or_insert(false);
        *entry |= candidate.format == MediaFormat::Dvd;
    }

    for (result, candidate) in results.iter_mut().zip(candidates) {
        let key = (candidate.title.as_str(), candidate.year);
        let pinned = query.special_id.as_deref() == Some(candidate.id.as_str());
        if !pinned && candidate.format == MediaFormat::Vod && has_dvd.get(&key).copied().unwrap_or(false) {
            result.score = result.score.div_euclid(2);
            tracing::debug!("Adjusted VOD score for {}: {}", candidate.title, result.score);
        }
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Results that meet the good-score threshold, best first.
pub fn good_matches(results: &[SearchResult], good_score: i32) -> Vec<SearchResult> {
    results
        .iter()
        .filter(|r| r.score >= good_score)
        .cloned()
        .collect()
}

/// The best result, if it meets the good-score threshold.
pub fn best_match(results: &[SearchResult], good_score: i32) -> Option<&SearchResult> {
    results
        .iter()
        .reduce(|best, r| if r.score > best.score { r } else { best })
        .filter(|r| r.score >= good_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, title: &str, format: MediaFormat, year: Option<u16>) -> Candidate {
        Candidate {
            id: id.to_string(),
            title: title.to_string(),
            format,
            year,
        }
    }

    fn query(title: &str) -> SearchQuery {
        SearchQuery {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_score() {
        assert_eq!(title_score("Big Picture", "big picture"), 100);
        assert_eq!(title_score("Big Picture", "Big Pictures"), 99);
        assert_eq!(title_score("", "abc"), 97);
    }

    #[test]
    fn test_special_id_overrides_distance() {
        let q = SearchQuery {
            title: "Something Else".to_string(),
            year: Some(1990),
            special_id: Some("1234567".to_string()),
        };
        let c = candidate("1234567", "Big Picture", MediaFormat::Vod, Some(2019));
        assert_eq!(score_candidate(&q, &c), SPECIAL_ID_SCORE);
    }

    #[test]
    fn test_year_penalty() {
        let q = SearchQuery {
            title: "Big Picture".to_string(),
            year: Some(2019),
            special_id: None,
        };
        assert_eq!(score_candidate(&q, &candidate("1", "Big Picture", MediaFormat::Dvd, Some(2019))), 100);
        assert_eq!(score_candidate(&q, &candidate("2", "Big Picture", MediaFormat::Dvd, Some(2018))), 90);
        assert_eq!(score_candidate(&q, &candidate("3", "Big Picture", MediaFormat::Dvd, None)), 100);
    }

    #[test]
    fn test_vod_halved_only_when_dvd_in_group() {
        let candidates = vec![
            candidate("1", "Big Picture", MediaFormat::Vod, Some(2019)),
            candidate("2", "Big Picture", MediaFormat::Dvd, Some(2019)),
            candidate("3", "Big Picture", MediaFormat::Vod, Some(2018)),
        ];
        let results = score_candidates(&query("Big Picture"), &candidates);

        let by_id: HashMap<_, _> = results.iter().map(|r| (r.id.as_str(), r.score)).collect();
        assert_eq!(by_id["1"], 50);
        assert_eq!(by_id["2"], 100);
        assert_eq!(by_id["3"], 100);
    }

    #[test]
    fn test_halving_floors_negative_scores() {
        let candidates = vec![
            candidate("1", &"x".repeat(103), MediaFormat::Vod, None),
            candidate("2", &"x".repeat(103), MediaFormat::Dvd, None),
        ];
        let results = score_candidates(&query(""), &candidates);
        let vod = results.iter().find(|r| r.id == "1").unwrap();
        assert_eq!(vod.score, -2);
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let candidates = vec![
            candidate("1", "Big Pictures", MediaFormat::Dvd, None),
            candidate("2", "Big Picture", MediaFormat::Dvd, None),
            candidate("3", "Big Picturez", MediaFormat::Dvd, None),
        ];
        let results = score_candidates(&query("Big Picture"), &candidates);
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_leading_article_compared_in_display_order() {
        let q = SearchQuery {
            title: "Big Picture, The".to_string(),
            ..Default::default()
        };
        let c = candidate("1", "The Big Picture", MediaFormat::Dvd, None);
        assert_eq!(score_candidate(&q, &c), 100);
    }

    #[test]
    fn test_result_name() {
        assert_eq!(result_name("Big Picture", Some(2019)), "Big Picture (2019)");
        assert_eq!(result_name("Big Picture", None), "Big Picture");
    }

    #[test]
    fn test_best_match_threshold() {
        let candidates = vec![
            candidate("1", "Big Picture", MediaFormat::Dvd, None),
            candidate("2", "Small Frame", MediaFormat::Dvd, None),
        ];
        let results = score_candidates(&query("Big Picture"), &candidates);

        assert_eq!(best_match(&results, 80).map(|r| r.id.as_str()), Some("1"));
        assert!(best_match(&results, 101).is_none());
        assert_eq!(good_matches(&results, 80).len(), 1);
        assert!(best_match(&[], 1).is_none());
    }
}
