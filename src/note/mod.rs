//! Note domain model and the store boundary
//!
//! The note/line graph is owned by whatever hosts the engine; this module
//! models that boundary. It is split into submodules:
//! - `line`: line snapshots and their structural kinds
//! - `note`: notes, calendar classification, period strings
//! - `store`: the `NoteStore` trait every host adapter implements
//! - `memory`: the in-memory store used by tests and as the working set of
//!   the folder storage

mod line;
mod memory;
mod note;
mod store;

pub use line::{Line, LineKind};
pub use memory::MemoryStore;
pub use note::{Note, NoteKind, period_start, period_string};
pub use store::{NoteId, NoteStore, SyncedCopy};
