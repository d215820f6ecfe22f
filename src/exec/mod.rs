// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs shell commands on behalf of the caller and waits for them
//! to finish.
//!
//! - [`launcher`] provides the `ProcessLauncher` / `RunningProcess` traits.
//!   The script wrapper only ever talks to these, so tests can swap in a fake
//!   launcher that never spawns anything.
//! - [`shell`] holds `ShellLauncher`, the production implementation built on
//!   `tokio::process::Command`.
//! - [`script`] is the `run_script` wrapper itself.

pub mod launcher;
pub mod script;
pub mod shell;

pub use launcher::{LaunchOptions, OutputMode, ProcessExit, ProcessLauncher, RunningProcess};
pub use script::{run_script, run_script_with_output};
pub use shell::ShellLauncher;
