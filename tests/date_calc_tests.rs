//! Date calculator tests: interval arithmetic, reference-date resolution
//! and output granularity

mod common;

use common::date;
use note_repeats::repeat::extract_repeat_spec;
use note_repeats::{
    NoteKind, RepeatError, Unit, add_calendar_interval, compute_next_occurrence,
};

fn next(
    line: &str,
    completed: chrono::NaiveDate,
    note_kind: NoteKind,
    note_date: Option<chrono::NaiveDate>,
) -> String {
    let spec = extract_repeat_spec(line).expect("line should carry a repeat spec");
    compute_next_occurrence(&spec, completed, line, note_kind, note_date).unwrap()
}

// Scenario seeds from the source behavior: a daily note dated 2024-06-14.
#[test]
fn fixed_daily_interval_counts_from_note_date() {
    let result = next(
        "text @repeat(1d)",
        date(2024, 6, 16),
        NoteKind::Daily,
        Some(date(2024, 6, 14)),
    );
    assert_eq!(result, "2024-06-15");
}

#[test]
fn rolling_daily_interval_counts_from_completion_date() {
    let result = next(
        "text @repeat(+1d)",
        date(2024, 6, 16),
        NoteKind::Daily,
        Some(date(2024, 6, 14)),
    );
    assert_eq!(result, "2024-06-17");
}

#[test]
fn rolling_interval_ignores_due_date_on_the_line() {
    let result = next(
        "text @repeat(+1d) >2024-06-16",
        date(2024, 6, 16),
        NoteKind::Daily,
        Some(date(2024, 6, 14)),
    );
    assert_eq!(result, "2024-06-17");
}

#[test]
fn fixed_weekly_interval_counts_from_due_week() {
    let result = next(
        "test text @repeat(1w) >2024-W45",
        date(2024, 11, 2),
        NoteKind::Weekly,
        Some(date(2024, 11, 4)),
    );
    assert_eq!(result, "2024-W46");
}

#[test]
fn rolling_weekly_interval_counts_from_completion_week() {
    let result = next(
        "test text @repeat(+1w) >2024-W45",
        date(2024, 11, 14),
        NoteKind::Weekly,
        Some(date(2024, 11, 4)),
    );
    assert_eq!(result, "2024-W47");
}

#[test]
fn fixed_interval_falls_back_to_completion_date() {
    // No due date on the line, no note date: the completion date is the
    // last-resort reference.
    let result = next(
        "text @repeat(3d)",
        date(2024, 6, 16),
        NoteKind::Project,
        None,
    );
    assert_eq!(result, "2024-06-19");
}

#[test]
fn fixed_interval_prefers_line_due_date_over_note_date() {
    let result = next(
        "text @repeat(2d) >2024-06-20",
        date(2024, 6, 16),
        NoteKind::Daily,
        Some(date(2024, 6, 14)),
    );
    assert_eq!(result, "2024-06-22");
}

#[test]
fn week_output_only_for_week_granularity() {
    // Weekly note, no link on the line: note classification wins.
    let weekly = next(
        "x @repeat(1w)",
        date(2024, 11, 2),
        NoteKind::Weekly,
        Some(date(2024, 10, 28)),
    );
    assert!(weekly.starts_with("2024-W"));

    // An explicit day link outranks the weekly note classification.
    let day_link = next(
        "x @repeat(1w) >2024-11-04",
        date(2024, 11, 2),
        NoteKind::Weekly,
        Some(date(2024, 10, 28)),
    );
    assert_eq!(day_link, "2024-11-11");

    // Monthly/quarterly/yearly notes still get day-granularity output.
    let monthly = next(
        "x @repeat(1m)",
        date(2024, 6, 16),
        NoteKind::Monthly,
        Some(date(2024, 6, 1)),
    );
    assert_eq!(monthly, "2024-07-01");
}

#[test]
fn month_addition_clamps_to_month_end() {
    assert_eq!(
        add_calendar_interval(date(2024, 1, 31), 1, Unit::Month).unwrap(),
        date(2024, 2, 29)
    );
    assert_eq!(
        add_calendar_interval(date(2023, 1, 31), 1, Unit::Month).unwrap(),
        date(2023, 2, 28)
    );
    assert_eq!(
        add_calendar_interval(date(2024, 3, 15), 2, Unit::Month).unwrap(),
        date(2024, 5, 15)
    );
}

#[test]
fn year_addition_clamps_leap_day() {
    assert_eq!(
        add_calendar_interval(date(2024, 2, 29), 1, Unit::Year).unwrap(),
        date(2025, 2, 28)
    );
    assert_eq!(
        add_calendar_interval(date(2024, 2, 29), 4, Unit::Year).unwrap(),
        date(2028, 2, 29)
    );
}

#[test]
fn quarter_addition_is_three_months() {
    assert_eq!(
        add_calendar_interval(date(2024, 10, 1), 1, Unit::Quarter).unwrap(),
        date(2025, 1, 1)
    );
    assert_eq!(
        add_calendar_interval(date(2024, 11, 30), 1, Unit::Quarter).unwrap(),
        date(2025, 2, 28)
    );
}

#[test]
fn business_days_skip_weekends() {
    // 2024-06-14 is a Friday.
    assert_eq!(
        add_calendar_interval(date(2024, 6, 14), 1, Unit::BusinessDay).unwrap(),
        date(2024, 6, 17)
    );
    assert_eq!(
        add_calendar_interval(date(2024, 6, 12), 3, Unit::BusinessDay).unwrap(),
        date(2024, 6, 17)
    );
}

#[test]
fn zero_count_is_an_invalid_interval() {
    let err = add_calendar_interval(date(2024, 6, 14), 0, Unit::Day).unwrap_err();
    assert!(matches!(err, RepeatError::InvalidInterval(_)));
    assert_eq!(err.kind(), "invalid_interval");
}

#[test]
fn spec_extraction_is_idempotent_after_removal() {
    let line = "text @repeat(2w) >2024-06-16";
    assert!(extract_repeat_spec(line).is_some());

    let without = line.replace("@repeat(2w) ", "");
    assert!(extract_repeat_spec(&without).is_none());
}
