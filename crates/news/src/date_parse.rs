// ABOUTME: Date normalization for news headline and archive dates.
// ABOUTME: Accepts both page generations' date spellings and emits canonical YYYY-MM-DD.

use chrono::NaiveDate;

use crate::text::normalize_spaces;

/// Date formats tried in order after cleanup.
const DATE_FORMATS: &[&str] = &[
    // Newer pages: "Oct 17 2023"
    "%b %d %Y",
    // Single digit day: "Oct 7 2023"
    "%b %e %Y",
    // Full month name: "October 17 2023"
    "%B %d %Y",
    // Older pages: "17.10.2023"
    "%d.%m.%Y",
    // Already canonical: "2023-10-17"
    "%Y-%m-%d",
];

/// Strips headline decoration (NBSPs, the trailing " - " separator, commas).
fn clean_date_text(s: &str) -> String {
    let folded = normalize_spaces(s).replace(',', " ");
    let trimmed = folded.trim().trim_end_matches('-').trim();
    normalize_spaces(trimmed)
}

/// Parses free-form date text into a `YYYY-MM-DD` string.
/// Returns None if no known format matches.
pub fn normalize_date(s: &str) -> Option<String> {
    let cleaned = clean_date_text(s);
    if cleaned.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Like [`normalize_date`], but falls back to the cleaned input and logs a warning.
pub fn normalize_date_or_raw(s: &str) -> String {
    match normalize_date(s) {
        Some(date) => date,
        None => {
            let cleaned = clean_date_text(s);
            if !cleaned.is_empty() {
                tracing::warn!(date = %cleaned, "unrecognized news date format");
            }
            cleaned
        }
    }
}
