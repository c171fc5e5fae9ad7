// importlint/src/linter.rs
//! Per-file driver: lint directly, or merge with imports, lint once, and map results back.

use log::debug;
use std::path::Path;
use crate::{
    engine::LintEngine,
    error::Result,
    helpers,
    locate::FileReader,
    merge,
    remap::{
        self,
        Diagnostic
    }
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No `importScripts`: the engine sees the file itself.
    Direct,
    /// Imports are concatenated ahead of the file and linted as one document.
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub mode: Mode,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Linter<'a, E: ?Sized, R: ?Sized> {
    engine: &'a E,
    reader: &'a R,
}

impl<'a, E, R> Linter<'a, E, R>
where
    E: LintEngine + ?Sized,
    R: FileReader + ?Sized,
{
    pub fn new(engine: &'a E, reader: &'a R) -> Self {
        Self { engine, reader }
    }

    pub fn lint_file(&self, path: &Path) -> Result<FileReport> {
        let text = self.reader.read(path)?;
        let lines = helpers::split_lines_keep_ends(&text);

        if !helpers::has_import(&lines) {
            debug!("{}: no imports, linting directly", path.display());
            let out = self.engine.run(&text, Some(path))?;
            return Ok(FileReport {
                mode: Mode::Direct,
                passed: out.passed,
                diagnostics: remap::parse_all(&out.lines),
            });
        }

        let imports = helpers::collect_imports(&lines)?;
        debug!("{}: merging {:?}", path.display(), imports);
        self.lint_merged(path, &imports)
    }

    /// Merge `imports` ahead of `path`, lint the result, keep what belongs to `path`.
    pub fn lint_merged(&self, path: &Path, imports: &[String]) -> Result<FileReport> {
        let (doc, table) = merge::merge(self.reader, path, imports);
        let out = self.engine.run(&doc.text(), None)?;
        let diagnostics = remap::remap_for(&out.lines, &table, path);
        Ok(FileReport {
            mode: Mode::Merged,
            passed: diagnostics.is_empty(),
            diagnostics,
        })
    }
}
