// importlint/src/engine.rs
//! The external linter. Anything that can turn JavaScript into `"<file>: line <N>,<msg>"` lines.

use log::debug;
use std::{
    io::{
        self,
        Write
    },
    path::{
        Path,
        PathBuf
    },
    process::Command
};
use crate::error::{
    LintError,
    Result
};

pub const DEFAULT_ENGINE: &str = "jshint";

/// What one engine run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub passed: bool,
    /// Raw output lines; not all of them are diagnostics.
    pub lines: Vec<String>,
}

pub trait LintEngine {
    /// Lint `text`. With `filename`, the engine reads and reports against that file;
    /// without, it picks its own scratch identity.
    fn run(&self, text: &str, filename: Option<&Path>) -> Result<EngineOutput>;
}

/// Runs `<program> [args..] [--config <file>] <path>` and collects stdout then stderr.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    pub command: String,
    program: String,
    args: Vec<String>,
    pub config: Option<PathBuf>,
}

impl ProcessEngine {
    /// `command` is split shell-style, so `"node tools/jslint.js --es6"` works.
    pub fn new(command: &str, config: Option<PathBuf>) -> Result<Self> {
        let mut words = shlex::split(command).unwrap_or_default().into_iter();
        let program = words.next().ok_or_else(|| LintError::Engine {
            command: command.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty or unbalanced command line"),
        })?;
        Ok(Self {
            command: command.to_string(),
            program,
            args: words.collect(),
            config,
        })
    }

    fn engine_err(&self, source: io::Error) -> LintError {
        LintError::Engine { command: self.command.clone(), source }
    }

    fn run_on(&self, path: &Path) -> Result<EngineOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cfg) = &self.config {
            cmd.arg("--config").arg(cfg);
        }
        cmd.arg(path);
        debug!("running {:?}", cmd);

        let out = cmd.output().map_err(|e| self.engine_err(e))?;
        // A failing exit is how linters report findings; the output is parsed either way.
        let lines = String::from_utf8_lossy(&out.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&out.stderr).lines())
            .map(str::to_string)
            .collect();
        Ok(EngineOutput { passed: out.status.success(), lines })
    }
}

impl LintEngine for ProcessEngine {
    fn run(&self, text: &str, filename: Option<&Path>) -> Result<EngineOutput> {
        if let Some(path) = filename {
            return self.run_on(path);
        }

        // Unique per run; removed when `scratch` drops, on every path out of here.
        let mut scratch = tempfile::Builder::new()
            .prefix("importlint-")
            .suffix(".js")
            .tempfile()
            .map_err(|e| self.engine_err(e))?;
        scratch
            .write_all(text.as_bytes())
            .and_then(|()| scratch.flush())
            .map_err(|e| self.engine_err(e))?;
        self.run_on(scratch.path())
    }
}
