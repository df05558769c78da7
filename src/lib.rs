//! Repeat generation for Markdown note folders
//!
//! This library regenerates completed recurring tasks: a task line carrying
//! an inline `@repeat(...)` annotation is, on completion, rewritten into a
//! fresh open occurrence with a newly computed due date, placed in the
//! right note.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Engine Layer**: `RepeatEngine` - per-line generation, placement
//!   policy and the whole-note batch driver
//! - **Domain Layer**: `note` and `repeat` modules - the note/line model,
//!   annotation parsing and calendar-correct date arithmetic
//! - **Persistence Layer**: `storage` module - Markdown folder storage
//!   behind the `NoteStore` boundary
//!
//! # Example
//!
//! ```no_run
//! use note_repeats::{FolderStorage, NoteStore, RepeatConfig, RepeatEngine};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let storage = FolderStorage::new("notes");
//!     let store = storage.load()?;
//!     let mut engine = RepeatEngine::new(store, RepeatConfig::default());
//!     for id in engine.store().note_ids().await {
//!         engine.generate_repeats(id, true).await?;
//!     }
//!     storage.save(engine.store_mut())?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod note;
pub mod repeat;
pub mod storage;

// Re-export commonly used types
pub use config::RepeatConfig;
pub use engine::{BatchSummary, NewOccurrence, RepeatEngine};
pub use error::RepeatError;
pub use note::{Line, LineKind, MemoryStore, Note, NoteId, NoteKind, NoteStore, SyncedCopy};
pub use repeat::{
    CompletionInfo, Granularity, Interval, RepeatOrigin, RepeatSpec, Unit, add_calendar_interval,
    compute_next_occurrence, determine_output_granularity, extract_completion,
    extract_repeat_spec, strip_completion_time,
};
pub use storage::FolderStorage;
