//! buildlog - Entry Point

use buildlog::model::AppError;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

/// Render an agent's stream-json build session as a readable log.
///
/// Reads JSONL events from stdin and writes one readable line per event to
/// stdout, e.g. `claude -p "..." --output-format stream-json | buildlog`.
#[derive(Parser, Debug)]
#[command(name = "buildlog")]
#[command(version)]
#[command(about = "Render an agent's stream-json build session as a readable log")]
pub struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Build log translation failed");
            eprintln!("buildlog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_app() -> Result<(), AppError> {
    buildlog::logging::init()?;
    buildlog::run_stdio()?;
    Ok(())
}
