use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use clihelper::errors::{HelperError, Result};
use clihelper::exec::{LaunchOptions, ProcessExit, ProcessLauncher, RunningProcess};
use clihelper::prompt::{Answers, Prompter, Question};

/// One recorded `launch` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    pub command: String,
    pub options: LaunchOptions,
}

/// What the fake launcher does when asked to launch something.
#[derive(Debug, Clone, Copy)]
enum Behaviour {
    Exit(ProcessExit),
    FailToSpawn,
}

/// A fake launcher that:
/// - records every command and its options
/// - never spawns anything, and reports a canned exit status.
#[derive(Debug, Clone)]
pub struct FakeLauncher {
    calls: Arc<Mutex<Vec<LaunchCall>>>,
    behaviour: Behaviour,
}

impl FakeLauncher {
    /// Every launch succeeds with exit code 0.
    pub fn new() -> Self {
        Self::exiting_with(ProcessExit::success())
    }

    pub fn exiting_with(exit: ProcessExit) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            behaviour: Behaviour::Exit(exit),
        }
    }

    /// Every launch fails as if the shell could not be found.
    pub fn failing_to_spawn() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            behaviour: Behaviour::FailToSpawn,
        }
    }

    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for FakeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch(&self, command: &str, options: &LaunchOptions) -> Result<Box<dyn RunningProcess>> {
        {
            let mut guard = self.calls.lock().unwrap();
            guard.push(LaunchCall {
                command: command.to_string(),
                options: options.clone(),
            });
        }

        match self.behaviour {
            Behaviour::Exit(exit) => Ok(Box::new(FinishedProcess(exit))),
            Behaviour::FailToSpawn => Err(HelperError::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "fake shell not found"),
            }),
        }
    }
}

struct FinishedProcess(ProcessExit);

impl RunningProcess for FinishedProcess {
    fn wait(&mut self) -> Pin<Box<dyn Future<Output = Result<ProcessExit>> + Send + '_>> {
        let exit = self.0;
        Box::pin(async move { Ok(exit) })
    }
}

/// A fake prompter that records the questions and replies with fixed answers.
#[derive(Debug, Clone)]
pub struct FakePrompter {
    answers: Answers,
    asked: Arc<Mutex<Vec<Question>>>,
}

impl FakePrompter {
    pub fn new(answers: Answers) -> Self {
        Self {
            answers,
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers `confirm` with `answer`.
    pub fn confirming(answer: bool) -> Self {
        let mut answers = Answers::new();
        answers.insert(clihelper::prompt::CONFIRM_KEY.to_string(), answer);
        Self::new(answers)
    }

    pub fn asked(&self) -> Vec<Question> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for FakePrompter {
    fn ask<'a>(
        &'a self,
        questions: &'a [Question],
    ) -> Pin<Box<dyn Future<Output = Result<Answers>> + Send + 'a>> {
        Box::pin(async move {
            self.asked.lock().unwrap().extend_from_slice(questions);
            Ok(self.answers.clone())
        })
    }
}
