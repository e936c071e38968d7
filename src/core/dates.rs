//! Release date handling.

use chrono::{Datelike, NaiveDate};

/// Formats the catalog uses for release dates, tried in order.
const RELEASE_DATE_FORMATS: &[&str] = &["%b %d %Y", "%B %d, %Y", "%m/%d/%Y"];

/// Parse a catalog release date ("Mar 05 2019", "March 05, 2019", "03/05/2019").
pub fn parse_release_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    RELEASE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Availability date and year derived from the release date and production year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseInfo {
    /// Date the title first became available.
    pub originally_available_at: Option<NaiveDate>,
    /// Year to show for the title.
    pub year: Option<i32>,
}

/// Decide the availability date and year.
///
/// With `use_production_date`, a production year earlier than the release
/// year moves the availability date to January 1st of that year. A known
/// production year always wins as the displayed year.
pub fn resolve_release(
    release: Option<NaiveDate>,
    production_year: Option<i32>,
    use_production_date: bool,
) -> ReleaseInfo {
    let mut info = ReleaseInfo::default();

    if let Some(release) = release {
        let earlier_production = production_year
            .filter(|year| use_production_date && *year < release.year())
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));

        match earlier_production {
            Some(date) => {
                tracing::debug!("Using production year for availability: {}", date);
                info.originally_available_at = Some(date);
            }
            None => {
                info.originally_available_at = Some(release);
                info.year = Some(release.year());
            }
        }
    } else {
        tracing::debug!("No valid release date available");
    }

    if production_year.is_some() {
        info.year = production_year;
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_release_date_formats() {
        assert_eq!(parse_release_date("Mar 05 2019"), Some(date(2019, 3, 5)));
        assert_eq!(parse_release_date("March 05, 2019"), Some(date(2019, 3, 5)));
        assert_eq!(parse_release_date(" 03/05/2019 "), Some(date(2019, 3, 5)));
        assert_eq!(parse_release_date("2019-03-05"), None);
        assert_eq!(parse_release_date(""), None);
    }

    #[test]
    fn test_release_only() {
        let info = resolve_release(Some(date(2019, 3, 5)), None, true);
        assert_eq!(info.originally_available_at, Some(date(2019, 3, 5)));
        assert_eq!(info.year, Some(2019));
    }

    #[test]
    fn test_earlier_production_year_used_when_enabled() {
        let info = resolve_release(Some(date(2019, 3, 5)), Some(2017), true);
        assert_eq!(info.originally_available_at, Some(date(2017, 1, 1)));
        assert_eq!(info.year, Some(2017));
    }

    #[test]
    fn test_production_year_only_sets_year_when_disabled() {
        let info = resolve_release(Some(date(2019, 3, 5)), Some(2017), false);
        assert_eq!(info.originally_available_at, Some(date(2019, 3, 5)));
        assert_eq!(info.year, Some(2017));
    }

    #[test]
    fn test_no_release_date() {
        let info = resolve_release(None, Some(2017), true);
        assert_eq!(info.originally_available_at, None);
        assert_eq!(info.year, Some(2017));

        assert_eq!(resolve_release(None, None, false), ReleaseInfo::default());
    }
}
