//! Repeat specification extraction

use super::patterns::REPEAT_INTERVAL_RE;

/// Calendar unit of a repeat interval (`b d w m q y` in the token).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Weekdays only; Saturday and Sunday are skipped.
    BusinessDay,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Unit {
    fn from_token(token: &str) -> Option<Unit> {
        match token {
            "b" => Some(Unit::BusinessDay),
            "d" => Some(Unit::Day),
            "w" => Some(Unit::Week),
            "m" => Some(Unit::Month),
            "q" => Some(Unit::Quarter),
            "y" => Some(Unit::Year),
            _ => None,
        }
    }
}

/// A count of calendar units, e.g. the `2w` in `@repeat(2w)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub count: u32,
    pub unit: Unit,
}

/// Which date the next occurrence is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatOrigin {
    /// Fixed interval: measured from the line's due date (falling back to
    /// the note's own date, then the completion date).
    FromDue,
    /// Rolling interval (leading `+`): measured from the completion date.
    FromCompletion,
}

/// Parsed form of an inline `@repeat(...)` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatSpec {
    pub interval: Interval,
    pub origin: RepeatOrigin,
}

/// Scan a line for a repeat annotation.
///
/// Returns `None` when no well-formed annotation is present; a malformed
/// interval token is indistinguishable from no annotation. A zero count
/// still parses here — validation happens in the date calculator, where it
/// is reported as an invalid interval rather than silently propagating a
/// bad date.
pub fn extract_repeat_spec(line_text: &str) -> Option<RepeatSpec> {
    let caps = REPEAT_INTERVAL_RE.captures(line_text)?;
    let origin = if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
        RepeatOrigin::FromCompletion
    } else {
        RepeatOrigin::FromDue
    };
    let count: u32 = caps.get(2)?.as_str().parse().ok()?;
    let unit = Unit::from_token(caps.get(3)?.as_str())?;
    Some(RepeatSpec {
        interval: Interval { count, unit },
        origin,
    })
}
