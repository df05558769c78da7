//! The `NoteStore` trait: the narrow host boundary
//!
//! Every read is potentially stale after any write; the engine re-fetches
//! snapshots instead of holding line references across mutations. All
//! methods are async because the host APIs being modeled are promise
//! based; implementations are awaited strictly sequentially, so no two
//! mutations are ever in flight at once.

use chrono::NaiveDate;

use crate::error::RepeatError;

use super::line::{Line, LineKind};
use super::note::NoteKind;

/// Opaque handle to a note inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub(crate) usize);

/// Location of a synced copy of a line in another note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncedCopy {
    pub note: NoteId,
    pub index: usize,
}

/// Query and command surface over the host-owned note/line graph.
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// All notes, in a stable order.
    async fn note_ids(&self) -> Vec<NoteId>;

    async fn note_kind(&self, note: NoteId) -> Result<NoteKind, RepeatError>;

    /// The note's own date: the start of its period for calendar notes,
    /// `None` for project notes.
    async fn note_date(&self, note: NoteId) -> Result<Option<NaiveDate>, RepeatError>;

    async fn note_title(&self, note: NoteId) -> Result<String, RepeatError>;

    /// Snapshot of the note's lines, top to bottom.
    async fn lines(&self, note: NoteId) -> Result<Vec<Line>, RepeatError>;

    /// Replace the content of the line at `index`, keeping kind and
    /// indentation.
    async fn set_line_content(
        &mut self,
        note: NoteId,
        index: usize,
        content: &str,
    ) -> Result<(), RepeatError>;

    /// Insert a new line immediately before `index`.
    async fn insert_line_before(
        &mut self,
        note: NoteId,
        index: usize,
        content: &str,
        kind: LineKind,
        indents: usize,
    ) -> Result<(), RepeatError>;

    /// Append a new line at the end of the note.
    async fn append_line(
        &mut self,
        note: NoteId,
        content: &str,
        kind: LineKind,
        indents: usize,
    ) -> Result<(), RepeatError>;

    /// Remove the line at `index`.
    async fn remove_line(&mut self, note: NoteId, index: usize) -> Result<(), RepeatError>;

    /// All lines outside `origin` carrying the given block marker.
    async fn find_synced_copies(
        &self,
        origin: NoteId,
        marker: &str,
    ) -> Result<Vec<SyncedCopy>, RepeatError>;

    /// Resolve the calendar note for a computed occurrence date string
    /// (`YYYY-MM-DD` or `YYYY-Wnn`), creating it on demand. Returns `None`
    /// when the string does not name a resolvable calendar period.
    async fn calendar_note_for(&mut self, date_str: &str) -> Result<Option<NoteId>, RepeatError>;
}
