//! Whole-note batch driver

use log::info;

use crate::error::RepeatError;
use crate::note::{Line, LineKind, NoteId, NoteStore};
use crate::repeat::patterns::REPEAT_INTERVAL_RE;

use super::RepeatEngine;

/// Outcome of one batch run over a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Completed lines matching the repeat pattern that were considered.
    pub scanned: usize,
    /// Next occurrences actually written.
    pub generated: usize,
}

impl BatchSummary {
    /// Candidates that produced no new occurrence (per-line failures and
    /// lines whose completion annotation turned out to be absent).
    pub fn failed(&self) -> usize {
        self.scanned - self.generated
    }
}

impl<S: NoteStore> RepeatEngine<S> {
    /// Generate repeats for every eligible completed line in a note.
    ///
    /// Lines are processed top to bottom from a snapshot captured before
    /// the first mutation; each candidate is re-located in the store's
    /// current state before processing, since insertions and deletions
    /// shift indices. One line failing never aborts the batch. Unless
    /// running silently, zero-result and per-line failure conditions are
    /// reported through the log.
    pub async fn generate_repeats(
        &mut self,
        note: NoteId,
        run_silently: bool,
    ) -> Result<BatchSummary, RepeatError> {
        let snapshot = self.store.lines(note).await?;
        let cutoff = if self.config.dont_look_for_repeats_in_done_or_archive {
            done_heading_cutoff(&snapshot)
        } else {
            snapshot.len()
        };

        let mut summary = BatchSummary::default();
        for captured in snapshot.into_iter().take(cutoff) {
            if !captured.kind.is_done() || !REPEAT_INTERVAL_RE.is_match(&captured.content) {
                continue;
            }
            summary.scanned += 1;

            let Some(current) = self.locate(note, &captured).await? else {
                continue;
            };
            if self.generate_repeat_for_line(note, &current).await.is_some() {
                summary.generated += 1;
            }
        }

        if !run_silently {
            let title = self.store.note_title(note).await?;
            if summary.scanned == 0 {
                info!("no suitable completed repeats were found in {title}");
            } else {
                info!(
                    "{}: generated {} repeat(s) from {} candidate(s), {} failed",
                    title,
                    summary.generated,
                    summary.scanned,
                    summary.failed()
                );
            }
        }

        Ok(summary)
    }

    /// Re-locate a captured line in the store's current state.
    ///
    /// Prior insertions only ever shift a line down, so the first
    /// content-and-kind match at or after the captured index is the line
    /// itself; a match below the captured index is accepted only when
    /// nothing sits at or after it (deletions shift lines up).
    async fn locate(
        &self,
        note: NoteId,
        captured: &Line,
    ) -> Result<Option<Line>, RepeatError> {
        let current = self.store.lines(note).await?;
        let mut fallback = None;
        for line in current {
            if line.content == captured.content && line.kind == captured.kind {
                if line.index >= captured.index {
                    return Ok(Some(line));
                }
                if fallback.is_none() {
                    fallback = Some(line);
                }
            }
        }
        Ok(fallback)
    }
}

/// Index of the first "Done" or "Cancelled" heading, bounding the active
/// portion of a note. Returns the line count when no such heading exists.
fn done_heading_cutoff(lines: &[Line]) -> usize {
    lines
        .iter()
        .position(|line| {
            matches!(line.kind, LineKind::Heading | LineKind::Title) && {
                let text = line.content.trim_start_matches('#').trim_start();
                text.starts_with("Done") || text.starts_with("Cancelled")
            }
        })
        .unwrap_or(lines.len())
}
