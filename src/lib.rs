// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod prompt;
pub mod sort;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::exec::{OutputMode, ProcessLauncher, ShellLauncher};
use crate::prompt::{Prompter, TerminalPrompter, DEFAULT_MESSAGE};
use crate::sort::SortOptions;

pub use crate::exec::run_script;
pub use crate::prompt::prompt;
pub use crate::sort::sort_values;

/// How a subcommand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user answered "no" to a confirmation question.
    Declined,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Declined => ExitCode::from(1),
        }
    }
}

/// High-level entry point used by `main.rs`.
///
/// Runs the selected subcommand against the real shell and terminal.
pub async fn run(args: CliArgs) -> Result<Outcome> {
    let mut stdout = std::io::stdout();
    run_with(args, &ShellLauncher::new(), &TerminalPrompter::new(), &mut stdout).await
}

/// Same as [`run`], with the process launcher, prompter and output sink
/// supplied by the caller.
///
/// `out` receives sorted JSON and prompt answers. Output of a `run` command
/// goes wherever the launcher sends it.
pub async fn run_with<L, P, W>(
    args: CliArgs,
    launcher: &L,
    prompter: &P,
    out: &mut W,
) -> Result<Outcome>
where
    L: ProcessLauncher + ?Sized,
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    match args.command {
        Command::Sort {
            field,
            ascending,
            input,
        } => {
            let options = SortOptions {
                descending: !ascending,
                field,
            };
            let text = read_input(input.as_deref())?;
            writeln!(out, "{}", sort_json(&text, &options)?).context("writing sorted records")?;
            Ok(Outcome::Completed)
        }

        Command::Run {
            cwd,
            piped,
            confirm,
            command,
        } => {
            let command = command.join(" ");

            if confirm {
                let message = format!("Run `{command}`?");
                if !prompt::prompt_with(prompter, &message).await? {
                    info!(cmd = %command, "cancelled by user");
                    return Ok(Outcome::Declined);
                }
            }

            let output = if piped {
                OutputMode::Piped
            } else {
                OutputMode::Inherit
            };
            exec::run_script_with_output(launcher, Some(command.as_str()), cwd.as_deref(), output)
                .await?;
            Ok(Outcome::Completed)
        }

        Command::Confirm { message } => {
            let message = message.as_deref().unwrap_or(DEFAULT_MESSAGE);
            let confirmed = prompt::prompt_with(prompter, message).await?;
            writeln!(out, "{confirmed}").context("writing answer")?;
            Ok(if confirmed {
                Outcome::Completed
            } else {
                Outcome::Declined
            })
        }
    }
}

/// Parse a JSON array, sort its elements and render it back as pretty JSON.
pub fn sort_json(text: &str, options: &SortOptions) -> errors::Result<String> {
    let mut records: Vec<Value> = serde_json::from_str(text)?;
    sort_values(&mut records, options);
    debug!(count = records.len(), field = %options.field, "sorted JSON records");
    Ok(serde_json::to_string_pretty(&records)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading records from {:?}", path)),
        None => std::io::read_to_string(std::io::stdin()).context("reading records from stdin"),
    }
}
