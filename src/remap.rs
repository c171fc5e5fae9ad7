// importlint/src/remap.rs
//! Engine diagnostics: parsing `"<file>: line <N>,<message>"` and mapping merged lines back to
//! the file they came from.

use regex::Regex;
use serde::Serialize;
use std::{
    fmt,
    path::Path,
    sync::LazyLock
};
use crate::merge::OffsetTable;

static DIAGNOSTIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?): line (\d+),(.*)$").unwrap());

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    /// Everything after `line N,`, verbatim.
    pub message: String,
}

impl Diagnostic {
    /// `None` for anything that isn't a diagnostic line (banners, summaries, blank lines).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim_end_matches(['\r', '\n']);
        let caps = DIAGNOSTIC_RE.captures(raw)?;
        Some(Self {
            file: caps[1].to_string(),
            line: caps[2].parse().ok()?,
            message: caps[3].to_string(),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: line {},{}", self.file, self.line, self.message)
    }
}

/// Parse raw engine lines without touching coordinates.
pub fn parse_all<S: AsRef<str>>(raw_lines: &[S]) -> Vec<Diagnostic> {
    raw_lines.iter().filter_map(|l| Diagnostic::parse(l.as_ref())).collect()
}

/// Rewrite each diagnostic's file and line from merged coordinates to original ones.
/// Lines that don't parse, or fall before the first unit, are dropped.
pub fn remap<S: AsRef<str>>(raw_lines: &[S], table: &OffsetTable) -> Vec<Diagnostic> {
    parse_all(raw_lines)
        .into_iter()
        .filter_map(|d| {
            let (file, line) = table.translate(d.line)?;
            Some(Diagnostic {
                file: file.display().to_string(),
                line,
                message: d.message,
            })
        })
        .collect()
}

/// Remap, then keep only what belongs to `requested`. Files are compared as paths,
/// so `w/./b.js` and `w//b.js` both match `w/b.js`.
pub fn remap_for<S: AsRef<str>>(
    raw_lines: &[S],
    table: &OffsetTable,
    requested: &Path,
) -> Vec<Diagnostic> {
    parse_all(raw_lines)
        .into_iter()
        .filter_map(|d| {
            let (file, line) = table.translate(d.line)?;
            (file == requested).then(|| Diagnostic {
                file: file.display().to_string(),
                line,
                message: d.message,
            })
        })
        .collect()
}
