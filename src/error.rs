// importlint/src/error.rs
//! Typed errors for the library half of the crate. The CLI wraps these in `anyhow`.

use std::{
    io,
    path::PathBuf
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// `importScripts` is present on the line but no argument list could be read.
    #[error("malformed importScripts directive: {line}")]
    Parse { line: String },

    /// No file matched the logical name within the search depth.
    #[error("could not locate {name} under {}", .root.display())]
    NotFound { name: String, root: PathBuf },

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The lint command could not be started, or its scratch input could not be staged.
    #[error("running lint engine `{command}`")]
    Engine {
        command: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LintError>;
