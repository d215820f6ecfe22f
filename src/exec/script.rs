// src/exec/script.rs

//! Run a single shell command and wait for it.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{HelperError, Result};

use super::launcher::{LaunchOptions, OutputMode, ProcessLauncher};

/// Run `command` in `directory` and wait for it to exit.
///
/// - A missing or blank command is a no-op: the launcher is never called.
/// - A missing directory means the current working directory.
/// - Failing to start the process, or a non-zero exit, is returned as an
///   error.
///
/// Child output goes straight to the terminal; see
/// [`run_script_with_output`] to pipe it instead.
pub async fn run_script<L>(
    launcher: &L,
    command: Option<&str>,
    directory: Option<&Path>,
) -> Result<()>
where
    L: ProcessLauncher + ?Sized,
{
    run_script_with_output(launcher, command, directory, OutputMode::Inherit).await
}

/// Like [`run_script`], with explicit control over the child's output.
pub async fn run_script_with_output<L>(
    launcher: &L,
    command: Option<&str>,
    directory: Option<&Path>,
    output: OutputMode,
) -> Result<()>
where
    L: ProcessLauncher + ?Sized,
{
    let Some(command) = command.filter(|c| !c.trim().is_empty()) else {
        debug!("no command given; nothing to run");
        return Ok(());
    };

    let cwd = resolve_cwd(directory)?;
    info!(cmd = %command, cwd = %cwd.display(), "starting script");

    let options = LaunchOptions::new(cwd).with_output(output);
    let mut process = launcher.launch(command, &options)?;
    let exit = process.wait().await?;

    if exit.success {
        info!(cmd = %command, exit_code = ?exit.code, "script finished");
        Ok(())
    } else {
        warn!(cmd = %command, exit_code = ?exit.code, "script failed");
        Err(HelperError::ScriptFailed {
            command: command.to_string(),
            code: exit.code,
        })
    }
}

fn resolve_cwd(directory: Option<&Path>) -> Result<PathBuf> {
    match directory {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
