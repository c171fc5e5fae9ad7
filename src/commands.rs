// importlint/src/commands.rs

use anyhow::{
    Context,
    Result
};
use clap::{
    Parser,
    ValueEnum
};
use log::debug;
use std::{
    path::PathBuf,
    process::ExitCode
};
use crate::{
    engine::{
        ProcessEngine,
        DEFAULT_ENGINE
    },
    linter::Linter,
    locate::{
        FsLocator,
        DEFAULT_SEARCH_DEPTH
    },
    remap::Diagnostic
};

/// Lint worker scripts together with the files they pull in through importScripts().
#[derive(Parser, Debug)]
#[command(name = "importlint", version, about, long_about = None)]
pub struct Cli {
    /// Scripts to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Linter configuration file, passed through to the engine
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log merge decisions and engine invocations
    #[arg(short, long)]
    pub verbose: bool,

    /// Lint command; split shell-style, the file to lint is appended
    #[arg(long, env = "IMPORTLINT_ENGINE", default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// How many directory levels to search for an imported script
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub search_depth: usize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let mut missing = false;
    for p in cli.files.iter().chain(cli.config.iter()) {
        if !p.exists() {
            eprintln!("importlint: {}: no such file", p.display());
            missing = true;
        }
    }
    if missing {
        return Ok(ExitCode::from(1));
    }

    let engine = ProcessEngine::new(&cli.engine, cli.config.clone())
        .context("invalid --engine command")?;
    let locator = FsLocator { max_depth: cli.search_depth };
    let linter = Linter::new(&engine, &locator);

    let mut all: Vec<Diagnostic> = Vec::new();
    let mut failed = false;
    for file in &cli.files {
        // A file that can't be linted is reported on stderr; the rest still run.
        let report = match linter
            .lint_file(file)
            .with_context(|| format!("linting {}", file.display()))
        {
            Ok(report) => report,
            Err(e) => {
                eprintln!("importlint: {e:#}");
                failed = true;
                continue;
            }
        };
        debug!(
            "{}: {:?}, {} diagnostics",
            file.display(),
            report.mode,
            report.diagnostics.len()
        );
        all.extend(report.diagnostics);
    }

    match cli.format {
        Format::Text => print!("{}", render_text(&all)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&all).context("serializing diagnostics")?
        ),
    }
    Ok(if failed { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

/// Diagnostic lines followed by `N errors`; empty when there is nothing to report.
pub fn render_text(diags: &[Diagnostic]) -> String {
    if diags.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for d in diags {
        out.push_str(&d.to_string());
        out.push('\n');
    }
    out.push_str(&format!("{} errors\n", diags.len()));
    out
}

/// `warn` by default, `debug` with --verbose; RUST_LOG wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
