//! Completion annotation extraction

use chrono::NaiveDate;

use super::patterns::DONE_DATE_RE;

/// Completion information extracted from a `@done(...)` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionInfo {
    /// Date the line was completed.
    pub date: NaiveDate,
    /// Time of day, when the host recorded one (`HH:MM`). Stripped from
    /// the stored text once the line has been processed.
    pub time: Option<String>,
}

/// Scan a line for a completion timestamp `@done(YYYY-MM-DD[ HH:MM])`.
pub fn extract_completion(line_text: &str) -> Option<CompletionInfo> {
    let caps = DONE_DATE_RE.captures(line_text)?;
    let date = NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()?;
    let time = caps.get(2).map(|m| m.as_str().trim_start().to_string());
    Some(CompletionInfo { date, time })
}

/// Remove the time-of-day portion of a completion marker, keeping the
/// date: `@done(2024-06-16 14:32)` becomes `@done(2024-06-16)`. Lines
/// without a time come back unchanged.
pub fn strip_completion_time(line_text: &str) -> String {
    DONE_DATE_RE
        .replace(line_text, "@done(${1})")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_date_and_optional_time() {
        let with_time = extract_completion("x @done(2024-06-16 14:32)").unwrap();
        assert_eq!(
            with_time.date,
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
        );
        assert_eq!(with_time.time.as_deref(), Some("14:32"));

        let without = extract_completion("x @done(2024-06-16)").unwrap();
        assert_eq!(without.time, None);

        assert!(extract_completion("x @done()").is_none());
        assert!(extract_completion("nothing here").is_none());
    }

    #[test]
    fn strips_only_the_time() {
        assert_eq!(
            strip_completion_time("x @done(2024-06-16 14:32) tail"),
            "x @done(2024-06-16) tail"
        );
        assert_eq!(
            strip_completion_time("x @done(2024-06-16)"),
            "x @done(2024-06-16)"
        );
    }
}
