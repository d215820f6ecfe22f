// src/exec/shell.rs

//! Shell-backed process launcher.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Duration, Instant};
use tracing::{debug, warn};

use crate::errors::{HelperError, Result};

use super::launcher::{LaunchOptions, OutputMode, ProcessExit, ProcessLauncher, RunningProcess};

/// How long piped output may keep draining once the shell has exited.
const FORWARD_GRACE: Duration = Duration::from_millis(200);

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

impl ProcessLauncher for ShellLauncher {
    fn launch(&self, command: &str, options: &LaunchOptions) -> Result<Box<dyn RunningProcess>> {
        let mut cmd = shell_command(command);
        cmd.current_dir(&options.cwd).kill_on_drop(true);

        match options.output {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::Piped => {
                cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            }
        }

        let mut child = cmd.spawn().map_err(|source| HelperError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let mut forwarders = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            forwarders.push(forward_lines(stdout, Stream::Stdout));
        }
        if let Some(stderr) = child.stderr.take() {
            forwarders.push(forward_lines(stderr, Stream::Stderr));
        }

        Ok(Box::new(ShellProcess {
            command: command.to_string(),
            child,
            forwarders,
        }))
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Echo a piped child stream to our own stdout/stderr, one line at a time.
///
/// Always consumed to the end so the child never blocks on a full pipe.
fn forward_lines<R>(reader: R, stream: Stream) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    match stream {
                        Stream::Stdout => {
                            debug!("stdout: {}", line);
                            println!("{line}");
                        }
                        Stream::Stderr => {
                            debug!("stderr: {}", line);
                            eprintln!("{line}");
                        }
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(?stream, error = %e, "failed to read child output");
                    break;
                }
            }
        }
    })
}

struct ShellProcess {
    command: String,
    child: Child,
    forwarders: Vec<JoinHandle<()>>,
}

impl RunningProcess for ShellProcess {
    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<ProcessExit>> + Send + '_>> {
        Box::pin(async move {
            let status = self
                .child
                .wait()
                .await
                .with_context(|| format!("waiting for process of '{}'", self.command))?;

            // Background children of the shell may still hold the pipes open;
            // flush what is already buffered, then stop forwarding.
            let deadline = Instant::now() + FORWARD_GRACE;
            for mut handle in self.forwarders.drain(..) {
                match timeout_at(deadline, &mut handle).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!(error = %e, "output forwarder task failed"),
                    Err(_) => {
                        debug!(cmd = %self.command, "pipes still open after exit; detaching output");
                        handle.abort();
                    }
                }
            }

            Ok(ProcessExit::from(status))
        })
    }
}
