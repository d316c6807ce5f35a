//! Search filter drafting and validation.
//!
//! The filter bar edits a [`FilterDraft`] of raw strings. On submission the
//! draft is normalized into [`SearchFilters`]: values that fail to parse or
//! fall outside their bounds are dropped (treated as unset), never clamped.

use serde::Serialize;

use crate::error::FilterError;

/// Years must be strictly greater than this to be accepted.
pub const MIN_YEAR_EXCLUSIVE: i32 = 1900;

/// Short month names used by the month selector.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Raw, unvalidated filter values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub city: String,
    pub year: String,
    pub month: String,
}

impl FilterDraft {
    pub fn new(city: impl Into<String>, year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            year: year.into(),
            month: month.into(),
        }
    }

    /// Currently selected month, if the draft holds a valid one.
    pub fn selected_month(&self) -> Option<u8> {
        parse_month(&self.month).ok()
    }

    /// Advance the month selector: All -> Jan -> ... -> Dec -> All.
    pub fn next_month(&mut self) {
        self.month = match self.selected_month() {
            None => "1".to_string(),
            Some(12) => String::new(),
            Some(m) => (m + 1).to_string(),
        };
    }

    /// Step the month selector backwards: All -> Dec -> ... -> Jan -> All.
    pub fn prev_month(&mut self) {
        self.month = match self.selected_month() {
            None => "12".to_string(),
            Some(1) => String::new(),
            Some(m) => (m - 1).to_string(),
        };
    }

    /// Label for the month selector.
    pub fn month_label(&self) -> &'static str {
        match self.selected_month() {
            Some(m) => MONTH_NAMES[usize::from(m) - 1],
            None => "All Months",
        }
    }
}

/// Filters for a committed search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    /// Non-empty, trimmed query text
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
}

impl SearchFilters {
    /// Build filters for a query with no structured filters.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            city: None,
            year: None,
            month: None,
        }
    }

    /// Normalize a raw query and filter draft.
    ///
    /// Returns `None` when the trimmed query is empty. Invalid year or month
    /// values are dropped rather than rejecting the whole submission.
    pub fn normalize(raw_query: &str, draft: &FilterDraft) -> Option<Self> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        let city = Some(draft.city.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Some(Self {
            query: query.to_string(),
            city,
            year: accept_optional("year", &draft.year, parse_year),
            month: accept_optional("month", &draft.month, parse_month),
        })
    }

    /// Query-string pairs for the search endpoint, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(month) = self.month {
            pairs.push(("month", month.to_string()));
        }
        if let Some(ref city) = self.city {
            pairs.push(("city", city.clone()));
        }
        pairs
    }
}

fn accept_optional<T>(
    field: &str,
    raw: &str,
    parse: fn(&str) -> Result<T, FilterError>,
) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(field, error = %err, "ignoring invalid filter value");
            None
        }
    }
}

/// Parse a year filter. Accepts integers strictly greater than 1900.
pub fn parse_year(raw: &str) -> Result<i32, FilterError> {
    let trimmed = raw.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| FilterError::NotANumber(trimmed.to_string()))?;
    if year <= MIN_YEAR_EXCLUSIVE {
        return Err(FilterError::YearOutOfRange(year));
    }
    Ok(year)
}

/// Parse a month filter. Accepts integers in `1..=12`.
pub fn parse_month(raw: &str) -> Result<u8, FilterError> {
    let trimmed = raw.trim();
    let month: i64 = trimmed
        .parse()
        .map_err(|_| FilterError::NotANumber(trimmed.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(FilterError::MonthOutOfRange(month));
    }
    Ok(month as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_query_is_none() {
        assert!(SearchFilters::normalize("", &FilterDraft::default()).is_none());
        assert!(SearchFilters::normalize("   \t ", &FilterDraft::default()).is_none());
    }

    #[test]
    fn test_normalize_trims_query_and_city() {
        let draft = FilterDraft::new("  Lisbon ", "", "");
        let filters = SearchFilters::normalize("  tram  ", &draft).unwrap();
        assert_eq!(filters.query, "tram");
        assert_eq!(filters.city.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn test_normalize_blank_city_is_unset() {
        let filters = SearchFilters::normalize("tram", &FilterDraft::new("   ", "", "")).unwrap();
        assert_eq!(filters.city, None);
    }

    #[test]
    fn test_year_scenarios() {
        let abc = SearchFilters::normalize("q", &FilterDraft::new("", "abc", "")).unwrap();
        assert_eq!(abc.year, None);

        let old = SearchFilters::normalize("q", &FilterDraft::new("", "1850", "")).unwrap();
        assert_eq!(old.year, None);

        let edge = SearchFilters::normalize("q", &FilterDraft::new("", "1900", "")).unwrap();
        assert_eq!(edge.year, None);

        let ok = SearchFilters::normalize("q", &FilterDraft::new("", "2024", "")).unwrap();
        assert_eq!(ok.year, Some(2024));
    }

    #[test]
    fn test_parse_year_errors() {
        assert_eq!(parse_year("abc"), Err(FilterError::NotANumber("abc".to_string())));
        assert_eq!(parse_year("1850"), Err(FilterError::YearOutOfRange(1850)));
        assert_eq!(parse_year("1901"), Ok(1901));
    }

    #[test]
    fn test_parse_month_bounds() {
        assert_eq!(parse_month("0"), Err(FilterError::MonthOutOfRange(0)));
        assert_eq!(parse_month("13"), Err(FilterError::MonthOutOfRange(13)));
        assert_eq!(parse_month("1"), Ok(1));
        assert_eq!(parse_month(" 12 "), Ok(12));
        assert!(parse_month("june").is_err());
    }

    #[test]
    fn test_out_of_range_month_is_dropped_not_clamped() {
        let filters = SearchFilters::normalize("q", &FilterDraft::new("", "", "14")).unwrap();
        assert_eq!(filters.month, None);
    }

    #[test]
    fn test_query_pairs_order() {
        let filters = SearchFilters::normalize("cats", &FilterDraft::new("Oslo", "2024", "3")).unwrap();
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("query", "cats".to_string()),
                ("year", "2024".to_string()),
                ("month", "3".to_string()),
                ("city", "Oslo".to_string()),
            ]
        );
    }

    #[test]
    fn test_month_cycle_forward_wraps_to_all() {
        let mut draft = FilterDraft::default();
        assert_eq!(draft.month_label(), "All Months");
        draft.next_month();
        assert_eq!(draft.month_label(), "Jan");
        for _ in 0..11 {
            draft.next_month();
        }
        assert_eq!(draft.month_label(), "Dec");
        draft.next_month();
        assert_eq!(draft.month, "");
    }

    #[test]
    fn test_month_cycle_backward() {
        let mut draft = FilterDraft::default();
        draft.prev_month();
        assert_eq!(draft.selected_month(), Some(12));
        draft.month = "1".to_string();
        draft.prev_month();
        assert_eq!(draft.selected_month(), None);
    }
}
