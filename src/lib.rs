// importlint/src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod helpers;
pub mod locate;

pub mod merge;
pub mod remap;

pub mod engine;
pub mod linter;

pub mod commands;

pub use engine::{
    EngineOutput,
    LintEngine,
    ProcessEngine
};
pub use error::{
    LintError,
    Result
};
pub use linter::{
    FileReport,
    Linter,
    Mode
};
pub use remap::Diagnostic;
