//! Command-line entry points.
//!
//! `main` parses the arguments first; everything except [`CliCommand::RunTui`]
//! is handled here without touching the terminal.

pub mod args;

pub use args::{parse_args, CliCommand};

use color_eyre::eyre::{eyre, Result};
use std::io::Write;
use tracing::{error, info};

use crate::config::SignboardConfig;
use crate::query::QueryClient;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: signboard [OPTIONS]

Click the signs to read about them; the \"Ask About Features\" sign takes
a free-text question.

Options:
  --ask <QUESTION>  Ask the assistant one question and print the answer
  -V, --version     Print version
  -h, --help        Print this help

Environment:
  SIGNBOARD_API_KEY        API key (falls back to GEMINI_API_KEY)
  SIGNBOARD_API_URL        API base URL
  SIGNBOARD_MODEL          Model name
  SIGNBOARD_MAX_ATTEMPTS   Attempts per question (default 3)
  SIGNBOARD_BASE_DELAY_MS  First retry delay (default 1000)
  SIGNBOARD_MAX_DELAY_MS   Retry delay cap, 0 for none (default 30000)
  SIGNBOARD_TIMEOUT_SECS   Per-request timeout (default 30)
  SIGNBOARD_LOG_FILE       Log file path
  RUST_LOG                 Log filter (default info)
";

/// Ask one question and write the answer to `out`.
///
/// Failures are returned as errors so the process exits non-zero.
pub async fn run_ask<W: Write>(client: &QueryClient, question: &str, out: &mut W) -> Result<()> {
    info!("Headless question");
    match client.query(question).await {
        Ok(answer) => {
            writeln!(out, "{}", answer)?;
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Headless question failed");
            Err(eyre!("{}", err.user_message()))
        }
    }
}

fn handle_ask_command(
    question: &str,
    config: &SignboardConfig,
    runtime: &tokio::runtime::Runtime,
) -> Result<()> {
    let client = QueryClient::from_config(config.query.clone())?;
    runtime.block_on(run_ask(&client, question, &mut std::io::stdout()))
}

/// Handle the commands that need neither configuration nor a runtime.
///
/// `main` calls this before reading the environment so `--help` and
/// `--version` work even when a `SIGNBOARD_*` variable is malformed.
pub fn run_static_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("signboard {}", VERSION);
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::MissingValue(flag) => Some(Err(eyre!("{} requires a value\n\n{}", flag, USAGE))),
        CliCommand::Ask(_) | CliCommand::RunTui => None,
    }
}

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the command's result.
pub fn run_cli_command(
    command: &CliCommand,
    config: &SignboardConfig,
    runtime: &tokio::runtime::Runtime,
) -> Option<Result<()>> {
    match command {
        CliCommand::Ask(question) => Some(handle_ask_command(question, config, runtime)),
        CliCommand::RunTui => None,
        _ => run_static_command(command),
    }
}
