//! Repeat annotation parsing and date mathematics
//!
//! The only place where the bit-exact textual conventions live:
//! - repeat annotation: `@repeat(` + optional `+` + digits + one of
//!   `bdwmqy` + `)`
//! - completion annotation: `@done(YYYY-MM-DD[ HH:MM])`
//! - scheduled-date links: `>YYYY-MM-DD`, `>YYYY-Wnn`, `>YYYY-MM`,
//!   `>YYYY-Qn`, `>YYYY`
//!
//! Submodules:
//! - `patterns`: shared compiled regexes
//! - `spec`: `RepeatSpec` extraction
//! - `completion`: `@done(...)` extraction and time stripping
//! - `dates`: granularity detection and calendar-correct interval math
//! - `rewrite`: the new-line content transform

pub(crate) mod patterns;

mod completion;
pub(crate) mod dates;
mod rewrite;
mod spec;

pub use completion::{CompletionInfo, extract_completion, strip_completion_time};
pub use dates::{
    Granularity, add_calendar_interval, compute_next_occurrence, determine_output_granularity,
    format_for_granularity,
};
pub use rewrite::{block_id, next_occurrence_content};
pub use spec::{Interval, RepeatOrigin, RepeatSpec, Unit, extract_repeat_spec};
