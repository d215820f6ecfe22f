// src/exec/launcher.rs

//! Pluggable process launcher abstraction.
//!
//! `run_script` talks to a `ProcessLauncher` instead of spawning processes
//! itself. This makes it easy to swap in a fake launcher in tests while
//! keeping the production implementation in [`super::shell`].
//!
//! - `ShellLauncher` is the default implementation. It spawns the command in
//!   the platform shell and hands back a handle wrapping the child process.
//! - Tests can provide their own `ProcessLauncher` that, for example, records
//!   the command and working directory and reports a canned exit status.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;

/// Where the child's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to our terminal.
    #[default]
    Inherit,
    /// Child output is read line by line, forwarded and logged.
    Piped,
}

/// Options passed to the launcher alongside the command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Working directory for the spawned process.
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl LaunchOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            output: OutputMode::default(),
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

/// How a process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub success: bool,
}

impl ProcessExit {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            success: true,
        }
    }

    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            success: code == 0,
        }
    }

    pub fn signalled() -> Self {
        Self {
            code: None,
            success: false,
        }
    }
}

impl From<std::process::ExitStatus> for ProcessExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

/// Handle to a spawned process.
pub trait RunningProcess: Send {
    /// Resolve once the process has terminated.
    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<ProcessExit>> + Send + '_>>;
}

/// Trait abstracting how a command string becomes a running process.
///
/// Production code uses [`super::ShellLauncher`]; tests can provide their
/// own implementation that doesn't spawn real processes.
pub trait ProcessLauncher: Send + Sync {
    /// Start `command` with the given options.
    ///
    /// Errors here mean the process never started (e.g. the shell could not
    /// be spawned); exit failures are reported through [`RunningProcess::wait`].
    fn launch(&self, command: &str, options: &LaunchOptions) -> Result<Box<dyn RunningProcess>>;
}
