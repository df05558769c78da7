//! Repeat generation engine
//!
//! `RepeatEngine` orchestrates turning one completed line into an edited
//! original (completion time stripped) plus a newly inserted next
//! occurrence in the correct target note. Split into:
//! - `generate`: the per-line generator and placement policy
//! - `batch`: the whole-note driver

mod batch;
mod generate;

pub use batch::BatchSummary;
pub use generate::NewOccurrence;

use crate::config::RepeatConfig;
use crate::note::NoteStore;

/// Engine over a note store plus the validated configuration.
///
/// Host-facing calls are awaited strictly sequentially; the engine never
/// holds a line snapshot across a mutation of its note.
pub struct RepeatEngine<S: NoteStore> {
    pub(crate) store: S,
    pub(crate) config: RepeatConfig,
    skip_signal: bool,
}

impl<S: NoteStore> RepeatEngine<S> {
    pub fn new(store: S, config: RepeatConfig) -> Self {
        Self {
            store,
            config,
            skip_signal: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether a line was just processed, and the host's own
    /// change-detection should skip its next repeat check instead of
    /// re-triggering on the edit this engine made. Reading the signal
    /// clears it.
    pub fn take_skip_signal(&mut self) -> bool {
        std::mem::take(&mut self.skip_signal)
    }

    pub(crate) fn raise_skip_signal(&mut self) {
        self.skip_signal = true;
    }
}
