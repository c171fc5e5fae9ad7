// importlint/src/main.rs

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    importlint::commands::run_cli()
}
