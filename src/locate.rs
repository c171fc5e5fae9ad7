// importlint/src/locate.rs
//! Resolve a logical script name (as written in `importScripts`) to a file on disk.

use std::{
    fs,
    path::{
        Component,
        Path,
        PathBuf
    }
};
use walkdir::WalkDir;
use crate::{
    error::{
        LintError,
        Result
    },
    helpers
};

pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Source of script text, keyed by logical name relative to a reference directory.
pub trait FileReader {
    fn locate(&self, dir: &Path, name: &str) -> Result<PathBuf>;

    fn read(&self, path: &Path) -> Result<String>;

    /// Locate, then read, returning the resolved path with the lines (terminators kept).
    fn read_lines(&self, dir: &Path, name: &str) -> Result<(PathBuf, Vec<String>)> {
        let path = self.locate(dir, name)?;
        let text = self.read(&path)?;
        Ok((path, helpers::split_lines_keep_ends(&text)))
    }
}

/// Filesystem reader: `dir/name` first, then a bounded walk under `dir`.
#[derive(Debug, Clone)]
pub struct FsLocator {
    pub max_depth: usize,
}

impl Default for FsLocator {
    fn default() -> Self {
        Self { max_depth: DEFAULT_SEARCH_DEPTH }
    }
}

impl FileReader for FsLocator {
    fn locate(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let direct = dir.join(name);
        if direct.is_file() {
            return Ok(direct);
        }

        let wanted = normal_components(Path::new(name));
        if wanted.is_empty() {
            return Err(not_found(dir, name));
        }
        let root = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };

        // Sorted walk so the same tree always resolves to the same file.
        WalkDir::new(root)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .find(|p| ends_with_components(p, &wanted))
            .ok_or_else(|| not_found(dir, name))
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/* ----------------------------- helpers ----------------------------- */

fn not_found(dir: &Path, name: &str) -> LintError {
    LintError::NotFound {
        name: name.to_string(),
        root: dir.to_path_buf(),
    }
}

fn normal_components(p: &Path) -> Vec<String> {
    p.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn ends_with_components(path: &Path, wanted: &[String]) -> bool {
    let have = normal_components(path);
    have.len() >= wanted.len() && have[have.len() - wanted.len()..] == *wanted
}
