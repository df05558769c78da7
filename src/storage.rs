//! Markdown folder storage
//!
//! Loads a directory of `.md` notes into a `MemoryStore`, classifying
//! calendar notes by file name (`20240614.md`, `2024-W45.md`, `2024-06.md`,
//! `2024-Q4.md`, `2024.md`; anything else is a project note), and writes
//! modified notes back. Line contents are stored verbatim; only the
//! structural marker prefix is split off, the same shape the engine sees.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::note::{Line, LineKind, MemoryStore, Note, NoteId, NoteKind};

static DAILY_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid daily stem regex"));
static WEEKLY_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-W(\d{2})$").expect("valid weekly stem regex"));
static MONTHLY_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid monthly stem regex"));
static QUARTERLY_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-Q([1-4])$").expect("valid quarterly stem regex"));
static YEARLY_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})$").expect("valid yearly stem regex"));

/// Folder-of-markdown storage adapter.
pub struct FolderStorage {
    root: PathBuf,
}

impl FolderStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Load every `.md` file in the folder, in file-name order.
    pub fn load(&self) -> Result<MemoryStore> {
        let mut store = MemoryStore::new();

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)
            .with_context(|| format!("failed to read notes folder {}", self.root.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        for path in paths {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read note {}", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default();

            let mut note = match classify_stem(stem) {
                Some((kind, date)) => Note::calendar(kind, date),
                None => Note::project(project_title(&text).unwrap_or(stem).to_string()),
            };
            note.set_filename(filename);

            for (index, raw) in text.lines().enumerate() {
                let (indents, rest) = split_indent(raw);
                let (kind, content) = parse_line(rest, index == 0);
                note.push_line(content, kind, indents);
            }

            store.add_note(note);
        }

        Ok(store)
    }

    /// Write every modified note back, returning how many files changed.
    /// Calendar notes created on demand get a file name derived from their
    /// period.
    pub fn save(&self, store: &mut MemoryStore) -> Result<usize> {
        let dirty = store.take_dirty();
        let mut written = 0;

        for id in dirty {
            let filename = self.ensure_filename(store, id)?;
            let note = store
                .note(id)
                .context("dirty note handle disappeared from the store")?;
            let path = self.root.join(&filename);
            fs::write(&path, render_note(note))
                .with_context(|| format!("failed to write note {}", path.display()))?;
            written += 1;
        }

        Ok(written)
    }

    fn ensure_filename(&self, store: &mut MemoryStore, id: NoteId) -> Result<String> {
        let note = store
            .note(id)
            .context("dirty note handle disappeared from the store")?;
        if let Some(name) = note.filename() {
            return Ok(name.to_string());
        }

        let derived = derive_filename(note);
        let note = store
            .note_mut(id)
            .context("dirty note handle disappeared from the store")?;
        note.set_filename(derived.clone());
        Ok(derived)
    }
}

/// Classification and period start for a calendar-note file stem.
fn classify_stem(stem: &str) -> Option<(NoteKind, NaiveDate)> {
    if let Some(caps) = DAILY_STEM_RE.captures(stem) {
        let date = NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )?;
        return Some((NoteKind::Daily, date));
    }
    if let Some(caps) = WEEKLY_STEM_RE.captures(stem) {
        let monday =
            NaiveDate::from_isoywd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, Weekday::Mon)?;
        return Some((NoteKind::Weekly, monday));
    }
    if let Some(caps) = MONTHLY_STEM_RE.captures(stem) {
        let first = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, 1)?;
        return Some((NoteKind::Monthly, first));
    }
    if let Some(caps) = QUARTERLY_STEM_RE.captures(stem) {
        let quarter: u32 = caps[2].parse().ok()?;
        let first = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, (quarter - 1) * 3 + 1, 1)?;
        return Some((NoteKind::Quarterly, first));
    }
    if let Some(caps) = YEARLY_STEM_RE.captures(stem) {
        let first = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, 1, 1)?;
        return Some((NoteKind::Yearly, first));
    }
    None
}

/// Title of a project note: the text of a leading `# ` heading.
fn project_title(text: &str) -> Option<&str> {
    text.lines().next()?.strip_prefix("# ").map(str::trim)
}

/// Split leading indentation (tabs, or groups of four spaces) off a raw
/// line.
fn split_indent(raw: &str) -> (usize, &str) {
    let mut indents = 0;
    let mut rest = raw;
    loop {
        if let Some(r) = rest.strip_prefix('\t') {
            indents += 1;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("    ") {
            indents += 1;
            rest = r;
        } else {
            break;
        }
    }
    (indents, rest)
}

/// Split the structural marker off a line, returning its kind and content.
/// Heading and title lines keep their `#` prefix in the content so the
/// level survives a round trip.
fn parse_line(rest: &str, first_line: bool) -> (LineKind, String) {
    if rest.trim().is_empty() {
        return (LineKind::Empty, String::new());
    }
    if rest.starts_with('#') {
        let kind = if first_line && rest.starts_with("# ") {
            LineKind::Title
        } else {
            LineKind::Heading
        };
        return (kind, rest.to_string());
    }

    // Longest markers first so `* [x]` does not parse as a bare `* `.
    const MARKERS: [(&str, LineKind); 9] = [
        ("* [x] ", LineKind::Done),
        ("- [x] ", LineKind::Done),
        ("* [-] ", LineKind::Cancelled),
        ("- [-] ", LineKind::Cancelled),
        ("* [ ] ", LineKind::Open),
        ("- [ ] ", LineKind::Open),
        ("+ [x] ", LineKind::ChecklistDone),
        ("+ [ ] ", LineKind::ChecklistOpen),
        ("+ ", LineKind::ChecklistOpen),
    ];
    for (marker, kind) in MARKERS {
        if let Some(content) = rest.strip_prefix(marker) {
            return (kind, content.to_string());
        }
    }
    for marker in ["* ", "- "] {
        if let Some(content) = rest.strip_prefix(marker) {
            return (LineKind::Open, content.to_string());
        }
    }

    (LineKind::Text, rest.to_string())
}

fn marker_for(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Open => "* ",
        LineKind::Done => "* [x] ",
        LineKind::Cancelled => "* [-] ",
        LineKind::ChecklistOpen => "+ ",
        LineKind::ChecklistDone => "+ [x] ",
        LineKind::Text | LineKind::Heading | LineKind::Empty | LineKind::Title => "",
    }
}

fn render_line(line: &Line) -> String {
    let mut out = "\t".repeat(line.indents);
    out.push_str(marker_for(line.kind));
    out.push_str(&line.content);
    out
}

fn render_note(note: &Note) -> String {
    let mut out = String::new();
    for line in note.snapshot() {
        out.push_str(&render_line(&line));
        out.push('\n');
    }
    out
}

fn derive_filename(note: &Note) -> String {
    match (note.kind, note.date) {
        (NoteKind::Daily, Some(date)) => format!("{}.md", date.format("%Y%m%d")),
        (kind, Some(date)) if kind.is_calendar() => {
            format!("{}.md", crate::note::period_string(kind, date))
        }
        _ => format!("{}.md", note.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_calendar_stems() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(classify_stem("20240614"), Some((NoteKind::Daily, d(2024, 6, 14))));
        assert_eq!(classify_stem("2024-W45"), Some((NoteKind::Weekly, d(2024, 11, 4))));
        assert_eq!(classify_stem("2024-06"), Some((NoteKind::Monthly, d(2024, 6, 1))));
        assert_eq!(classify_stem("2024-Q4"), Some((NoteKind::Quarterly, d(2024, 10, 1))));
        assert_eq!(classify_stem("2024"), Some((NoteKind::Yearly, d(2024, 1, 1))));
        assert_eq!(classify_stem("Gardening"), None);
        assert_eq!(classify_stem("2024-13"), None);
    }

    #[test]
    fn splits_markers_and_indentation() {
        assert_eq!(split_indent("\t\t* [x] x"), (2, "* [x] x"));
        assert_eq!(split_indent("        * x"), (2, "* x"));

        assert_eq!(parse_line("* [x] done @done(2024-06-16)", false).0, LineKind::Done);
        assert_eq!(parse_line("- [ ] open", false).0, LineKind::Open);
        assert_eq!(parse_line("* [-] nope", false).0, LineKind::Cancelled);
        assert_eq!(parse_line("+ [x] checked", false).0, LineKind::ChecklistDone);
        assert_eq!(parse_line("+ item", false).0, LineKind::ChecklistOpen);
        assert_eq!(parse_line("## Done", false).0, LineKind::Heading);
        assert_eq!(parse_line("# My Project", true).0, LineKind::Title);
        assert_eq!(parse_line("", false).0, LineKind::Empty);
        assert_eq!(parse_line("prose", false).0, LineKind::Text);
    }
}
