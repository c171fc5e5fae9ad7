// importlint/src/merge.rs
//! Concatenate imported scripts ahead of the primary script and remember where each one landed.
//!
//! Dependencies go first so their declarations are visible to the primary file; each unit that
//! declares strict mode is wrapped in its own function scope so the pragma neither leaks into
//! nor gets diluted by its neighbours.

use log::debug;
use std::path::{
    Path,
    PathBuf
};
use crate::{
    helpers::{
        ensure_trailing_newline,
        split_lines_keep_ends,
        wrap_if_strict
    },
    locate::FileReader
};

/// One script as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceUnit {
    /// The unit's path with its lines as they go into the merged document.
    pub fn into_prepared(self) -> (PathBuf, Vec<String>) {
        (self.path, wrap_if_strict(ensure_trailing_newline(self.lines)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetEntry {
    /// 1-based line in the merged document where the unit starts.
    pub merged_start: usize,
    pub file: PathBuf,
    pub original_start: usize,
}

/// Entries ascending by `merged_start`, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTable {
    entries: Vec<OffsetEntry>,
}

impl OffsetTable {
    pub fn entries(&self) -> &[OffsetEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: OffsetEntry) {
        debug_assert!(self
            .entries
            .last()
            .is_none_or(|prev| prev.merged_start < entry.merged_start));
        self.entries.push(entry);
    }

    /// Greatest entry whose start is <= `merged_line`.
    pub fn lookup(&self, merged_line: usize) -> Option<&OffsetEntry> {
        let idx = self.entries.partition_point(|e| e.merged_start <= merged_line);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// Merged line -> (file, original line).
    pub fn translate(&self, merged_line: usize) -> Option<(&Path, usize)> {
        let entry = self.lookup(merged_line)?;
        Some((
            entry.file.as_path(),
            merged_line - entry.merged_start + entry.original_start,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedDocument {
    pub lines: Vec<String>,
}

impl MergedDocument {
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Merge `imports` (in order) followed by `primary`.
/// Imports that cannot be located or read are skipped; they get no offset entry.
/// The primary is read from `primary` as given and recorded under that exact path.
pub fn merge<R: FileReader + ?Sized>(
    reader: &R,
    primary: &Path,
    imports: &[String],
) -> (MergedDocument, OffsetTable) {
    let dir = primary.parent().unwrap_or_else(|| Path::new(""));

    let mut doc = MergedDocument::default();
    let mut table = OffsetTable::default();
    let mut next_line = 1usize;

    let units = imports
        .iter()
        .filter_map(|name| match reader.read_lines(dir, name) {
            Ok((path, _)) if path == primary => {
                debug!("skipping import {name}: it is the file being linted");
                None
            }
            Ok((path, lines)) => Some(SourceUnit { path, lines }),
            Err(e) => {
                debug!("skipping import {name}: {e}");
                None
            }
        })
        .chain(read_primary(reader, primary));

    for unit in units {
        let (path, lines) = unit.into_prepared();
        if lines.is_empty() {
            continue;
        }
        debug!("merged {} at line {next_line} ({} lines)", path.display(), lines.len());
        table.push(OffsetEntry {
            merged_start: next_line,
            file: path,
            original_start: 1,
        });
        next_line += lines.len();
        doc.lines.extend(lines);
    }

    (doc, table)
}

fn read_primary<R: FileReader + ?Sized>(reader: &R, primary: &Path) -> Option<SourceUnit> {
    match reader.read(primary) {
        Ok(text) => Some(SourceUnit {
            path: primary.to_path_buf(),
            lines: split_lines_keep_ends(&text),
        }),
        Err(e) => {
            debug!("skipping {}: {e}", primary.display());
            None
        }
    }
}
