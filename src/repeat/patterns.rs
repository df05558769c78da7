//! Compiled regexes shared across the repeat module
//!
//! Detection patterns capture the pieces they parse; removal patterns
//! swallow the leading whitespace so stripping an annotation does not
//! leave doubled spaces behind.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@repeat(2w)` / `@repeat(+1m)`. A malformed interval token inside the
/// parens does not match and is treated as no annotation at all.
pub(crate) static REPEAT_INTERVAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@repeat\((\+?)(\d+)([bdwmqy])\)").expect("valid repeat regex"));

/// `@done(2024-06-16)` or `@done(2024-06-16 14:32)`, capturing date and
/// optional time.
pub(crate) static DONE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@done\((\d{4}-\d{2}-\d{2})( \d{2}:\d{2})?\)").expect("valid done regex")
});

/// Whole `@done(...)` marker, for removal from a new occurrence line.
pub(crate) static DONE_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*@done\([^)]*\)").expect("valid done marker regex"));

/// Day-granularity scheduled link: `>2024-06-15`.
pub(crate) static SCHEDULED_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{4})-(\d{2})-(\d{2})").expect("valid day link regex"));

/// Week-granularity scheduled link: `>2024-W45`.
pub(crate) static SCHEDULED_WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{4})-W(\d{2})").expect("valid week link regex"));

/// Month-granularity scheduled link: `>2024-06`. Also matches the front of
/// a day link, so day detection must run first.
pub(crate) static SCHEDULED_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{4})-(\d{2})").expect("valid month link regex"));

/// Quarter-granularity scheduled link: `>2024-Q4`.
pub(crate) static SCHEDULED_QUARTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{4})-Q([1-4])").expect("valid quarter link regex"));

/// Year-granularity scheduled link: `>2024`. Also matches the front of
/// every other link form, so it must be consulted last.
pub(crate) static SCHEDULED_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(\d{4})").expect("valid year link regex"));

/// Any scheduled link, most specific alternative first, for removal.
pub(crate) static SCHEDULED_ANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*>(\d{4}-\d{2}-\d{2}|\d{4}-W\d{2}|\d{4}-Q[1-4]|\d{4}-\d{2}|\d{4})")
        .expect("valid scheduled link regex")
});

/// Trailing synced-line block marker: ` ^6c3a9f`.
pub(crate) static BLOCK_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(\^[a-z0-9]{6})\s*$").expect("valid block id regex"));
