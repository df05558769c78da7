//! Per-line repeat generation and placement policy

use log::{debug, warn};

use crate::error::RepeatError;
use crate::note::{Line, NoteId, NoteKind, NoteStore};
use crate::repeat::{
    block_id, compute_next_occurrence, extract_completion, extract_repeat_spec,
    next_occurrence_content, strip_completion_time,
};

use super::RepeatEngine;

/// The computed result of one successful generation: where the next
/// occurrence went and with what content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOccurrence {
    /// Due-date string appended to the new line (`YYYY-MM-DD` or
    /// `YYYY-Wnn`).
    pub date_str: String,
    /// Full content of the inserted line.
    pub content: String,
    /// Note the new line was written to.
    pub target: NoteId,
}

/// Where the new occurrence line goes.
enum Placement {
    InsertBefore { target: NoteId, index: usize },
    Append { target: NoteId },
}

impl<S: NoteStore> RepeatEngine<S> {
    /// Generate the next occurrence for one completed line.
    ///
    /// Returns `None` when the line carries no completion timestamp or no
    /// repeat annotation (a normal no-op), and also when any step fails:
    /// failures are caught here, logged under their error kind, and never
    /// raised to the caller — the batch driver processes many lines and a
    /// single bad line must not abort the batch.
    pub async fn generate_repeat_for_line(
        &mut self,
        note: NoteId,
        line: &Line,
    ) -> Option<NewOccurrence> {
        match self.try_generate(note, line).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    "repeat generation failed (kind={}) at line {}: {}",
                    err.kind(),
                    line.index,
                    err
                );
                None
            }
        }
    }

    async fn try_generate(
        &mut self,
        note: NoteId,
        line: &Line,
    ) -> Result<Option<NewOccurrence>, RepeatError> {
        let Some(completion) = extract_completion(&line.content) else {
            return Ok(None);
        };
        let Some(spec) = extract_repeat_spec(&line.content) else {
            return Ok(None);
        };

        // Strip the completion time from the stored text; the date part of
        // the marker is retained.
        let stripped = strip_completion_time(&line.content);
        if stripped != line.content {
            self.store
                .set_line_content(note, line.index, &stripped)
                .await?;
        }

        let note_kind = self.store.note_kind(note).await?;
        let note_date = self.store.note_date(note).await?;
        let date_str =
            compute_next_occurrence(&spec, completion.date, &stripped, note_kind, note_date)?;
        let content = next_occurrence_content(&stripped, &date_str);

        let placement = self.resolve_placement(note, line, &date_str).await?;
        let new_kind = line.kind.reopened();
        let (target, original_index) = match placement {
            Placement::InsertBefore { target, index } => {
                self.store
                    .insert_line_before(target, index, &content, new_kind, line.indents)
                    .await
                    .map_err(|err| RepeatError::Placement(err.to_string()))?;
                // An insertion above the original in the same note shifts
                // it down by one.
                let shifted = if target == note && index <= line.index {
                    line.index + 1
                } else {
                    line.index
                };
                (target, shifted)
            }
            Placement::Append { target } => {
                self.store
                    .append_line(target, &content, new_kind, line.indents)
                    .await
                    .map_err(|err| RepeatError::Placement(err.to_string()))?;
                (target, line.index)
            }
        };

        if self.config.delete_completed_repeat {
            self.store.remove_line(note, original_index).await?;
        }

        self.raise_skip_signal();
        debug!("generated next occurrence {date_str} for line {}", line.index);

        Ok(Some(NewOccurrence {
            date_str,
            content,
            target,
        }))
    }

    /// Resolve where the new occurrence belongs.
    ///
    /// A synced copy living in a project note wins: the recurring series
    /// stays anchored to a durable note instead of scattering copies
    /// across calendar notes. Otherwise a project note inserts in place,
    /// and a calendar note targets the calendar note for the computed
    /// date, falling back to in-place insertion when that note is
    /// unavailable.
    async fn resolve_placement(
        &mut self,
        note: NoteId,
        line: &Line,
        date_str: &str,
    ) -> Result<Placement, RepeatError> {
        if let Some(marker) = block_id(&line.content) {
            let copies = self.store.find_synced_copies(note, &marker).await?;
            for copy in copies {
                if self.store.note_kind(copy.note).await? == NoteKind::Project {
                    return Ok(Placement::InsertBefore {
                        target: copy.note,
                        index: copy.index,
                    });
                }
            }
        }

        if self.store.note_kind(note).await? == NoteKind::Project {
            return Ok(Placement::InsertBefore {
                target: note,
                index: line.index,
            });
        }

        match self.store.calendar_note_for(date_str).await? {
            Some(target) => Ok(Placement::Append { target }),
            None => {
                debug!("calendar note for {date_str} unavailable, inserting in place");
                Ok(Placement::InsertBefore {
                    target: note,
                    index: line.index,
                })
            }
        }
    }
}
