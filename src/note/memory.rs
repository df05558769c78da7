//! In-memory note store
//!
//! Working set for the folder storage adapter and the store used by the
//! test suite. Mutations mark the owning note dirty so the adapter can
//! write back only what changed.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::RepeatError;
use crate::repeat::dates::{parse_day_string, parse_week_string};

use super::line::{Line, LineKind};
use super::note::{Note, NoteKind, StoredLine};
use super::store::{NoteId, NoteStore, SyncedCopy};

#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Vec<Note>,
    dirty: HashSet<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note and return its handle.
    pub fn add_note(&mut self, note: Note) -> NoteId {
        self.notes.push(note);
        NoteId(self.notes.len() - 1)
    }

    /// Direct read access, mainly for assertions in tests and for the
    /// storage adapter's write-back pass.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(id.0)
    }

    /// Direct mutable access for the storage adapter. Does not mark the
    /// note dirty.
    pub(crate) fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.get_mut(id.0)
    }

    /// Find a note by the file name it was loaded from.
    pub fn find_by_filename(&self, filename: &str) -> Option<NoteId> {
        self.notes
            .iter()
            .position(|n| n.filename() == Some(filename))
            .map(NoteId)
    }

    /// Find a note by title.
    pub fn find_by_title(&self, title: &str) -> Option<NoteId> {
        self.notes.iter().position(|n| n.title == title).map(NoteId)
    }

    /// Handles of notes modified since the last call, clearing the set.
    pub fn take_dirty(&mut self) -> Vec<NoteId> {
        let mut ids: Vec<usize> = self.dirty.drain().collect();
        ids.sort_unstable();
        ids.into_iter().map(NoteId).collect()
    }

    fn get(&self, id: NoteId) -> Result<&Note, RepeatError> {
        self.notes
            .get(id.0)
            .ok_or_else(|| RepeatError::Store(format!("unknown note handle {}", id.0)))
    }

    fn get_mut(&mut self, id: NoteId) -> Result<&mut Note, RepeatError> {
        self.dirty.insert(id.0);
        self.notes
            .get_mut(id.0)
            .ok_or_else(|| RepeatError::Store(format!("unknown note handle {}", id.0)))
    }

    fn find_calendar(&self, kind: NoteKind, date: NaiveDate) -> Option<NoteId> {
        self.notes
            .iter()
            .position(|n| n.kind == kind && n.date == Some(date))
            .map(NoteId)
    }

    fn create_calendar(&mut self, kind: NoteKind, date: NaiveDate) -> NoteId {
        let id = self.add_note(Note::calendar(kind, date));
        self.dirty.insert(id.0);
        id
    }
}

impl NoteStore for MemoryStore {
    async fn note_ids(&self) -> Vec<NoteId> {
        (0..self.notes.len()).map(NoteId).collect()
    }

    async fn note_kind(&self, note: NoteId) -> Result<NoteKind, RepeatError> {
        Ok(self.get(note)?.kind)
    }

    async fn note_date(&self, note: NoteId) -> Result<Option<NaiveDate>, RepeatError> {
        Ok(self.get(note)?.date)
    }

    async fn note_title(&self, note: NoteId) -> Result<String, RepeatError> {
        Ok(self.get(note)?.title.clone())
    }

    async fn lines(&self, note: NoteId) -> Result<Vec<Line>, RepeatError> {
        Ok(self.get(note)?.snapshot())
    }

    async fn set_line_content(
        &mut self,
        note: NoteId,
        index: usize,
        content: &str,
    ) -> Result<(), RepeatError> {
        let data = self.get_mut(note)?;
        let line = data.lines.get_mut(index).ok_or_else(|| {
            RepeatError::Store(format!("line index {index} out of bounds"))
        })?;
        line.content = content.to_string();
        Ok(())
    }

    async fn insert_line_before(
        &mut self,
        note: NoteId,
        index: usize,
        content: &str,
        kind: LineKind,
        indents: usize,
    ) -> Result<(), RepeatError> {
        let data = self.get_mut(note)?;
        if index > data.lines.len() {
            return Err(RepeatError::Store(format!(
                "insert index {index} out of bounds"
            )));
        }
        data.lines.insert(
            index,
            StoredLine {
                content: content.to_string(),
                kind,
                indents,
            },
        );
        Ok(())
    }

    async fn append_line(
        &mut self,
        note: NoteId,
        content: &str,
        kind: LineKind,
        indents: usize,
    ) -> Result<(), RepeatError> {
        let data = self.get_mut(note)?;
        data.lines.push(StoredLine {
            content: content.to_string(),
            kind,
            indents,
        });
        Ok(())
    }

    async fn remove_line(&mut self, note: NoteId, index: usize) -> Result<(), RepeatError> {
        let data = self.get_mut(note)?;
        if index >= data.lines.len() {
            return Err(RepeatError::Store(format!(
                "remove index {index} out of bounds"
            )));
        }
        data.lines.remove(index);
        Ok(())
    }

    async fn find_synced_copies(
        &self,
        origin: NoteId,
        marker: &str,
    ) -> Result<Vec<SyncedCopy>, RepeatError> {
        let mut copies = Vec::new();
        for (note_idx, note) in self.notes.iter().enumerate() {
            if note_idx == origin.0 {
                continue;
            }
            for (index, line) in note.lines.iter().enumerate() {
                if line.kind.is_task() && line.content.contains(marker) {
                    copies.push(SyncedCopy {
                        note: NoteId(note_idx),
                        index,
                    });
                }
            }
        }
        Ok(copies)
    }

    async fn calendar_note_for(&mut self, date_str: &str) -> Result<Option<NoteId>, RepeatError> {
        if let Some(date) = parse_day_string(date_str) {
            let id = self
                .find_calendar(NoteKind::Daily, date)
                .unwrap_or_else(|| self.create_calendar(NoteKind::Daily, date));
            return Ok(Some(id));
        }
        if let Some(monday) = parse_week_string(date_str) {
            let id = self
                .find_calendar(NoteKind::Weekly, monday)
                .unwrap_or_else(|| self.create_calendar(NoteKind::Weekly, monday));
            return Ok(Some(id));
        }
        Ok(None)
    }
}
