//! Notes and their calendar classification

use chrono::{Datelike, NaiveDate};

use super::line::{Line, LineKind};

/// Calendar classification of a note.
///
/// Calendar notes are intrinsically associated with a period; project
/// notes carry an arbitrary title instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    Project,
}

impl NoteKind {
    pub fn is_calendar(&self) -> bool {
        !matches!(self, NoteKind::Project)
    }
}

/// A note: an ordered collection of lines plus its classification.
///
/// For calendar notes `date` is the first day of the period (the ISO
/// Monday for weekly notes). Project notes have no date.
#[derive(Debug, Clone)]
pub struct Note {
    pub title: String,
    pub kind: NoteKind,
    pub date: Option<NaiveDate>,
    pub(crate) lines: Vec<StoredLine>,
    /// File name within the notes folder, when the note came from (or will
    /// be written to) disk.
    pub(crate) filename: Option<String>,
}

/// Owned line data inside a note. Snapshots add the index on the way out.
#[derive(Debug, Clone)]
pub(crate) struct StoredLine {
    pub(crate) content: String,
    pub(crate) kind: LineKind,
    pub(crate) indents: usize,
}

impl Note {
    /// Create an empty project note.
    pub fn project(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoteKind::Project,
            date: None,
            lines: Vec::new(),
            filename: None,
        }
    }

    /// Create an empty calendar note for the period containing `date`.
    ///
    /// The date is normalized to the start of the period and the title is
    /// the period string (`2024-06-14`, `2024-W45`, `2024-06`, `2024-Q4`,
    /// `2024`).
    pub fn calendar(kind: NoteKind, date: NaiveDate) -> Self {
        debug_assert!(kind.is_calendar());
        let start = period_start(kind, date);
        Self {
            title: period_string(kind, start),
            kind,
            date: Some(start),
            lines: Vec::new(),
            filename: None,
        }
    }

    /// Append a line. Builder used by storage and tests.
    pub fn push_line(&mut self, content: impl Into<String>, kind: LineKind, indents: usize) {
        self.lines.push(StoredLine {
            content: content.into(),
            kind,
            indents,
        });
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub(crate) fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }

    /// Snapshot of all lines, in order.
    pub(crate) fn snapshot(&self) -> Vec<Line> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| Line {
                index,
                content: line.content.clone(),
                kind: line.kind,
                indents: line.indents,
            })
            .collect()
    }
}

/// First day of the period of `kind` containing `date`.
pub fn period_start(kind: NoteKind, date: NaiveDate) -> NaiveDate {
    match kind {
        NoteKind::Daily | NoteKind::Project => date,
        NoteKind::Weekly => {
            let week = date.iso_week();
            NaiveDate::from_isoywd_opt(week.year(), week.week(), chrono::Weekday::Mon)
                .unwrap_or(date)
        }
        NoteKind::Monthly => date.with_day(1).unwrap_or(date),
        NoteKind::Quarterly => {
            let month = (date.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
        }
        NoteKind::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    }
}

/// Canonical period string for a calendar note (`2024-06-14`, `2024-W45`,
/// `2024-06`, `2024-Q4`, `2024`). Project notes yield their date formatted
/// as a day, which callers should not rely on.
pub fn period_string(kind: NoteKind, date: NaiveDate) -> String {
    match kind {
        NoteKind::Daily | NoteKind::Project => date.format("%Y-%m-%d").to_string(),
        NoteKind::Weekly => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        NoteKind::Monthly => date.format("%Y-%m").to_string(),
        NoteKind::Quarterly => format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
        NoteKind::Yearly => date.year().to_string(),
    }
}
