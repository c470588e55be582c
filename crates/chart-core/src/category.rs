// File: crates/chart-core/src/category.rs
// Summary: Helpers turning date buckets into category labels.

use chrono::NaiveDate;

/// Format each date with a `strftime` pattern, e.g. `"%b"` → `"Jan"`.
pub fn date_labels(dates: &[NaiveDate], fmt: &str) -> Vec<String> {
    dates.iter().map(|d| d.format(fmt).to_string()).collect()
}

/// Parse every label as an ISO date (`YYYY-MM-DD`). `None` unless all of them parse.
pub fn parse_iso_dates<S: AsRef<str>>(labels: &[S]) -> Option<Vec<NaiveDate>> {
    if labels.is_empty() {
        return None;
    }
    labels
        .iter()
        .map(|s| NaiveDate::parse_from_str(s.as_ref().trim(), "%Y-%m-%d").ok())
        .collect()
}

/// Relabel ISO-date categories with `fmt`; other labels come back unchanged.
pub fn relabel_dates(labels: Vec<String>, fmt: &str) -> Vec<String> {
    match parse_iso_dates(&labels) {
        Some(dates) => date_labels(&dates, fmt),
        None => labels,
    }
}
