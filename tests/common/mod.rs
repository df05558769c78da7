//! Common test utilities for integration tests

use chrono::NaiveDate;
use note_repeats::{Line, LineKind, MemoryStore, Note, NoteId, NoteKind, NoteStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a calendar note with pre-parsed lines `(content, kind, indents)`.
#[allow(dead_code)]
pub fn calendar_note(kind: NoteKind, date: NaiveDate, lines: &[(&str, LineKind, usize)]) -> Note {
    let mut note = Note::calendar(kind, date);
    for (content, kind, indents) in lines {
        note.push_line(*content, *kind, *indents);
    }
    note
}

/// Build a project note with pre-parsed lines `(content, kind, indents)`.
#[allow(dead_code)]
pub fn project_note(title: &str, lines: &[(&str, LineKind, usize)]) -> Note {
    let mut note = Note::project(title);
    for (content, kind, indents) in lines {
        note.push_line(*content, *kind, *indents);
    }
    note
}

/// Line contents of a note, top to bottom.
#[allow(dead_code)]
pub async fn contents(store: &MemoryStore, note: NoteId) -> Vec<String> {
    store
        .lines(note)
        .await
        .unwrap()
        .into_iter()
        .map(|line| line.content)
        .collect()
}

/// Snapshot of a single line.
#[allow(dead_code)]
pub async fn line_at(store: &MemoryStore, note: NoteId, index: usize) -> Line {
    store.lines(note).await.unwrap().remove(index)
}
