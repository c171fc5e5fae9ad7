// importlint/src/helpers.rs
//! Light text operations used by the merger and the driver.
//! - Directive detection (`importScripts`)
//! - Directive argument parsing
//! - Per-unit transforms: trailing newline, strict-mode scope wrap
//! - Small utilities (dedup)

use memchr::memmem;
use regex::Regex;
use std::sync::LazyLock;
use crate::error::{
    LintError,
    Result
};

pub const IMPORT_TOKEN: &str = "importScripts";
pub const SCOPE_OPENER: &str = "(function () {";
pub const SCOPE_CLOSER: &str = "}());\n";

const STRICT_LITERALS: [&str; 2] = ["'use strict'", "\"use strict\""];

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"importScripts\s*\(([^)]*)\)").unwrap());

/* ============================== Directive detection ============================== */

/// True iff any line mentions the inclusion directive.
pub fn has_import<S: AsRef<str>>(lines: &[S]) -> bool {
    let finder = memmem::Finder::new(IMPORT_TOKEN);
    lines.iter().any(|l| finder.find(l.as_ref().as_bytes()).is_some())
}

/// `importScripts('a.js', "b.js")` -> ["a.js", "b.js"], in call order.
/// Quotes and surrounding whitespace are stripped; empty arguments are dropped.
pub fn extract_imports(line: &str) -> Result<Vec<String>> {
    let caps = DIRECTIVE_RE.captures(line).ok_or_else(|| LintError::Parse {
        line: line.trim_end().to_string(),
    })?;
    let args = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    Ok(args
        .split(',')
        .map(|a| a.trim().trim_matches(['\'', '"']).trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect())
}

/// Every import named by every directive line, first occurrence wins.
pub fn collect_imports<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in lines.iter().map(AsRef::as_ref) {
        if line.contains(IMPORT_TOKEN) {
            names.extend(extract_imports(line)?);
        }
    }
    Ok(dedup_preserve_order(names))
}

/* ================================ Unit transforms ================================ */

pub fn ensure_trailing_newline(mut lines: Vec<String>) -> Vec<String> {
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
    lines
}

/// Wrap the unit in an immediately-invoked function when it opts into strict mode,
/// so the pragma stays scoped to this unit after concatenation.
/// The opener shares line 1 with the original first line: line numbers inside the unit don't move.
pub fn wrap_if_strict(mut lines: Vec<String>) -> Vec<String> {
    if !declares_strict(&lines) {
        return lines;
    }
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, SCOPE_OPENER);
    }
    lines.push(SCOPE_CLOSER.to_string());
    lines
}

pub fn declares_strict<S: AsRef<str>>(lines: &[S]) -> bool {
    lines
        .iter()
        .any(|l| STRICT_LITERALS.iter().any(|lit| l.as_ref().contains(lit)))
}

/* ================================== Utilities ================================== */

/// Split text into lines, keeping each line's terminator.
pub fn split_lines_keep_ends(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Deduplicate while preserving first occurrence order.
pub fn dedup_preserve_order(v: Vec<String>) -> Vec<String> {
    use std::collections::HashSet;
    let mut seen: HashSet<String> = HashSet::with_capacity(v.len());
    let mut out = Vec::with_capacity(v.len());
    for s in v {
        if seen.insert(s.clone()) {
            out.push(s);
        }
    }
    out
}

/* ===================================== Tests ===================================== */
