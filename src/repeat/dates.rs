//! Granularity detection and calendar-correct interval arithmetic

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RepeatError;
use crate::note::NoteKind;

use super::patterns::{
    SCHEDULED_DAY_RE, SCHEDULED_MONTH_RE, SCHEDULED_QUARTER_RE, SCHEDULED_WEEK_RE,
    SCHEDULED_YEAR_RE,
};
use super::spec::{RepeatOrigin, RepeatSpec, Unit};

static WEEK_STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-W(\d{2})$").expect("valid week string regex"));

/// Calendar unit used to format the computed next-occurrence date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
    /// Neither the line nor the note yields a classification; output
    /// defaults to a day-granularity date.
    None,
}

impl From<NoteKind> for Granularity {
    fn from(kind: NoteKind) -> Self {
        match kind {
            NoteKind::Daily => Granularity::Day,
            NoteKind::Weekly => Granularity::Week,
            NoteKind::Monthly => Granularity::Month,
            NoteKind::Quarterly => Granularity::Quarter,
            NoteKind::Yearly => Granularity::Year,
            NoteKind::Project => Granularity::None,
        }
    }
}

/// Decide which granularity the output date string should use.
///
/// An explicit scheduled-date link in the line always outranks the
/// containing note's own calendar classification. Links are probed most
/// specific first because the month and year patterns also match the front
/// of longer forms.
pub fn determine_output_granularity(line_text: &str, note_kind: NoteKind) -> Granularity {
    if SCHEDULED_DAY_RE.is_match(line_text) {
        Granularity::Day
    } else if SCHEDULED_WEEK_RE.is_match(line_text) {
        Granularity::Week
    } else if SCHEDULED_MONTH_RE.is_match(line_text) {
        Granularity::Month
    } else if SCHEDULED_QUARTER_RE.is_match(line_text) {
        Granularity::Quarter
    } else if SCHEDULED_YEAR_RE.is_match(line_text) {
        Granularity::Year
    } else {
        Granularity::from(note_kind)
    }
}

/// The due date referenced by the first scheduled link in the line,
/// scanned day → week → month → quarter → year, first match wins. Coarser
/// periods resolve to their first day (the ISO Monday for weeks).
pub(crate) fn scheduled_reference_date(line_text: &str) -> Option<NaiveDate> {
    if let Some(caps) = SCHEDULED_DAY_RE.captures(line_text) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }
    if let Some(caps) = SCHEDULED_WEEK_RE.captures(line_text) {
        return NaiveDate::from_isoywd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            Weekday::Mon,
        );
    }
    if let Some(caps) = SCHEDULED_MONTH_RE.captures(line_text) {
        return NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, 1);
    }
    if let Some(caps) = SCHEDULED_QUARTER_RE.captures(line_text) {
        let quarter: u32 = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(caps[1].parse().ok()?, (quarter - 1) * 3 + 1, 1);
    }
    if let Some(caps) = SCHEDULED_YEAR_RE.captures(line_text) {
        return NaiveDate::from_ymd_opt(caps[1].parse().ok()?, 1, 1);
    }
    None
}

/// Add `count` units of `unit` to `date` with calendar-correct semantics.
///
/// The single home of the clamping policy: month, quarter and year
/// additions land on the same day-of-month where valid and clamp to the
/// end of the month otherwise (Feb-29 plus a year clamps to Feb-28).
/// Business days step over Saturdays and Sundays.
pub fn add_calendar_interval(
    date: NaiveDate,
    count: u32,
    unit: Unit,
) -> Result<NaiveDate, RepeatError> {
    if count == 0 {
        return Err(RepeatError::InvalidInterval(
            "interval count must be a positive integer".to_string(),
        ));
    }

    let out_of_range = || {
        RepeatError::InvalidInterval(format!(
            "interval of {count} units from {date} lands outside the supported calendar range"
        ))
    };

    match unit {
        Unit::BusinessDay => {
            let mut current = date;
            let mut remaining = count;
            while remaining > 0 {
                current = current.succ_opt().ok_or_else(out_of_range)?;
                if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
                    remaining -= 1;
                }
            }
            Ok(current)
        }
        Unit::Day => date
            .checked_add_signed(Duration::days(i64::from(count)))
            .ok_or_else(out_of_range),
        Unit::Week => date
            .checked_add_signed(Duration::days(7 * i64::from(count)))
            .ok_or_else(out_of_range),
        Unit::Month => date
            .checked_add_months(Months::new(count))
            .ok_or_else(out_of_range),
        Unit::Quarter => {
            let months = count.checked_mul(3).ok_or_else(out_of_range)?;
            date.checked_add_months(Months::new(months))
                .ok_or_else(out_of_range)
        }
        Unit::Year => {
            let months = count.checked_mul(12).ok_or_else(out_of_range)?;
            date.checked_add_months(Months::new(months))
                .ok_or_else(out_of_range)
        }
    }
}

/// Compute the next occurrence date string for a parsed repeat spec.
///
/// Rolling intervals measure from the completion date regardless of any
/// due date on the line. Fixed intervals measure from the line's due date,
/// falling back to the containing note's own date, then the completion
/// date as a last resort.
pub fn compute_next_occurrence(
    spec: &RepeatSpec,
    completion_date: NaiveDate,
    line_text: &str,
    note_kind: NoteKind,
    note_date: Option<NaiveDate>,
) -> Result<String, RepeatError> {
    let reference = match spec.origin {
        RepeatOrigin::FromCompletion => completion_date,
        RepeatOrigin::FromDue => scheduled_reference_date(line_text)
            .or(note_date)
            .unwrap_or(completion_date),
    };

    let next = add_calendar_interval(reference, spec.interval.count, spec.interval.unit)?;
    Ok(format_for_granularity(
        next,
        determine_output_granularity(line_text, note_kind),
    ))
}

/// Format a date for the detected output granularity: the ISO week form
/// `YYYY-Wnn` for week granularity, `YYYY-MM-DD` for everything else.
pub fn format_for_granularity(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Week => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Strict `YYYY-MM-DD` parse for occurrence/target strings.
pub(crate) fn parse_day_string(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Strict `YYYY-Wnn` parse, resolving to the week's ISO Monday.
pub(crate) fn parse_week_string(s: &str) -> Option<NaiveDate> {
    let caps = WEEK_STRING_RE.captures(s)?;
    NaiveDate::from_isoywd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, Weekday::Mon)
}
