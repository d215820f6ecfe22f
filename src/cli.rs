// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `clihelper`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "clihelper",
    version,
    about = "Sort JSON records, run shell scripts and ask for confirmation.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CLIHELPER_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sort a JSON array of objects by one field and print it.
    Sort {
        /// Field to sort by.
        #[arg(long, default_value = "date")]
        field: String,

        /// Sort ascending instead of descending.
        #[arg(long)]
        ascending: bool,

        /// JSON file to read. Reads stdin when omitted.
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Run a shell command and wait for it to finish.
    ///
    /// Pass the command as one quoted argument, e.g.
    /// `clihelper run -- 'echo "a  b" > out.txt'`. Several words are joined
    /// with single spaces, which drops their original quoting.
    Run {
        /// Working directory. Defaults to the current directory.
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Pipe the command's output through clihelper instead of
        /// inheriting the terminal.
        #[arg(long)]
        piped: bool,

        /// Ask for confirmation before running.
        #[arg(long)]
        confirm: bool,

        /// The command line, best given as a single quoted argument. Multiple
        /// words are joined with spaces before reaching the shell.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// Ask a yes/no question. Prints the answer, exits 1 on "no".
    Confirm {
        /// Question text.
        #[arg(long)]
        message: Option<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
