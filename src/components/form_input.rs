//! Form Input Parsing
//!
//! Raw form field values to the optional fields of create payloads.

use chrono::{DateTime, NaiveDate, Utc};

/// `<input type="date">` value to midnight UTC
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Comma-separated categories, trimmed, blanks dropped
pub fn split_categories(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline() {
        let parsed = parse_deadline("2024-03-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("03/01/2024"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" p1 ".into()), Some("p1".into()));
    }

    #[test]
    fn test_split_categories() {
        assert_eq!(
            split_categories(" design, ,web ,, mobile "),
            vec!["design", "web", "mobile"]
        );
        assert!(split_categories("").is_empty());
        assert!(split_categories(" , ").is_empty());
    }
}
