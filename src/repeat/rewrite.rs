//! Content transform for a new occurrence line

use super::patterns::{BLOCK_ID_RE, DONE_MARKER_RE, SCHEDULED_ANY_RE};

/// The trailing block marker of a synced line (`^6c3a9f`), when present.
pub fn block_id(line_text: &str) -> Option<String> {
    BLOCK_ID_RE
        .captures(line_text)
        .map(|caps| caps[1].to_string())
}

/// Build the content of the next occurrence from a completed line.
///
/// Removes every scheduled-date link, the whole `@done(...)` marker and
/// any trailing block marker, trims, then appends a fresh due-date
/// annotation for the computed date. The repeat annotation itself stays so
/// the new line regenerates in turn.
pub fn next_occurrence_content(line_text: &str, date_str: &str) -> String {
    let without_links = SCHEDULED_ANY_RE.replace_all(line_text, "");
    let without_done = DONE_MARKER_RE.replace_all(&without_links, "");
    let without_block = BLOCK_ID_RE.replace(&without_done, "");

    let mut content = without_block.trim().to_string();
    content.push_str(" >");
    content.push_str(date_str);
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_content_with_fresh_due_date() {
        assert_eq!(
            next_occurrence_content("text @repeat(1d) >2024-06-16 @done(2024-06-16)", "2024-06-17"),
            "text @repeat(1d) >2024-06-17"
        );
        assert_eq!(
            next_occurrence_content("weekly @repeat(1w) >2024-W45 @done(2024-11-02)", "2024-W46"),
            "weekly @repeat(1w) >2024-W46"
        );
    }

    #[test]
    fn strips_block_markers() {
        assert_eq!(block_id("shared task ^6c3a9f"), Some("^6c3a9f".to_string()));
        assert_eq!(block_id("not a marker ^toolong7"), None);
        assert_eq!(
            next_occurrence_content("shared @repeat(1m) @done(2024-06-01) ^6c3a9f", "2024-07-01"),
            "shared @repeat(1m) >2024-07-01"
        );
    }
}
