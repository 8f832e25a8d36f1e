use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{AnnotatedDataset, AnnotatedReading, AqiLevel};

/// Accepted search input format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a date lookup produced no reading. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The user typed something that is not a `YYYY-MM-DD` date.
    #[error("'{input}' is not a valid date in YYYY-MM-DD format")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Well-formed date, but nothing was recorded for it.
    #[error("No data found for {0}")]
    NotFound(NaiveDate),

    /// A date offered by the selector is missing from the dataset.
    #[error("No reading exists for {0} although it was offered for selection")]
    Inconsistent(NaiveDate),
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Parse trimmed user input as a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, LookupError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| LookupError::Parse {
        input: trimmed.to_string(),
        source,
    })
}

/// Exact-date match.
pub fn find_by_date(dataset: &AnnotatedDataset, date: NaiveDate) -> Option<&AnnotatedReading> {
    dataset.rows.iter().find(|r| r.reading.date == date)
}

/// Free-text search: parse, then match.
pub fn search(dataset: &AnnotatedDataset, input: &str) -> Result<AnnotatedReading, LookupError> {
    let date = parse_date(input)?;
    log::debug!("searching for {date}");
    find_by_date(dataset, date)
        .cloned()
        .ok_or(LookupError::NotFound(date))
}

/// Match for a date picked from the dataset's own date list.
pub fn select(dataset: &AnnotatedDataset, date: NaiveDate) -> Result<&AnnotatedReading, LookupError> {
    find_by_date(dataset, date).ok_or(LookupError::Inconsistent(date))
}

/// Readings per category present, most frequent first, ties by AQI level.
pub fn category_summary(dataset: &AnnotatedDataset) -> Vec<(AqiLevel, usize)> {
    let mut counts: BTreeMap<AqiLevel, usize> = BTreeMap::new();
    for row in &dataset.rows {
        *counts.entry(row.aqi).or_default() += 1;
    }
    let mut summary: Vec<(AqiLevel, usize)> = counts.into_iter().collect();
    // stable sort keeps level order among equal counts
    summary.sort_by(|a, b| b.1.cmp(&a.1));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::{annotate, THRESHOLDS};
    use crate::data::sample::sample_readings;

    fn dataset() -> AnnotatedDataset {
        annotate(&sample_readings().unwrap(), &THRESHOLDS)
    }

    #[test]
    fn search_finds_double_exceedance() {
        let row = search(&dataset(), "2025-07-03").unwrap();
        assert_eq!(row.alert, "PM2.5 High, PM10 High");
        assert_eq!(row.category, "Unhealthy for Sensitive Groups");
    }

    #[test]
    fn search_trims_input() {
        assert!(search(&dataset(), "  2025-07-08 \n").is_ok());
    }

    #[test]
    fn search_outside_range_is_not_found() {
        let err = search(&dataset(), "2025-08-01").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        );
    }

    #[test]
    fn malformed_input_is_parse_error() {
        let ds = dataset();
        let before = ds.clone();
        for input in ["not-a-date", "", "2025-13-01", "2025/07/03"] {
            assert!(
                matches!(search(&ds, input), Err(LookupError::Parse { .. })),
                "{input:?} should fail to parse"
            );
        }
        assert_eq!(ds, before);
    }

    #[test]
    fn sample_levels_match_reference_days() {
        let ds = dataset();
        let level = |d: &str| select(&ds, parse_date(d).unwrap()).unwrap().aqi;
        assert_eq!(level("2025-07-06"), AqiLevel::VeryUnhealthy);
        assert_eq!(level("2025-07-08"), AqiLevel::Good);
    }

    #[test]
    fn select_reports_inconsistency_for_unknown_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(select(&dataset(), date), Err(LookupError::Inconsistent(date)));
    }

    #[test]
    fn summary_counts_present_categories_only() {
        let summary = category_summary(&dataset());
        assert_eq!(
            summary,
            vec![
                (AqiLevel::Moderate, 3),
                (AqiLevel::Unhealthy, 3),
                (AqiLevel::Good, 2),
                (AqiLevel::UnhealthyForSensitive, 1),
                (AqiLevel::VeryUnhealthy, 1),
            ]
        );
        assert!(summary.iter().all(|(level, _)| *level != AqiLevel::Hazardous));
    }
}
