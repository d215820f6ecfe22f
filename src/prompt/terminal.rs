// src/prompt/terminal.rs

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use dialoguer::Confirm;

use crate::errors::Result;

use super::{Answers, Prompter, Question};

/// Asks questions on the controlling terminal using `dialoguer`.
///
/// `dialoguer` blocks on stdin, so each question runs on tokio's blocking
/// pool and the calling task is only suspended.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask<'a>(
        &'a self,
        questions: &'a [Question],
    ) -> Pin<Box<dyn Future<Output = Result<Answers>> + Send + 'a>> {
        Box::pin(async move {
            let mut answers = Answers::new();
            for question in questions {
                let message = question.message.clone();
                let default = question.default;

                let answer = tokio::task::spawn_blocking(move || {
                    Confirm::new()
                        .with_prompt(message)
                        .default(default)
                        .interact()
                })
                .await
                .context("prompt task panicked or was cancelled")??;

                answers.insert(question.key.clone(), answer);
            }
            Ok(answers)
        })
    }
}
