// src/prompt/mod.rs

//! Yes/no confirmation prompt.
//!
//! [`prompt`] asks a single question keyed [`CONFIRM_KEY`] through a
//! [`Prompter`] and returns the answer. The production prompter is
//! [`TerminalPrompter`]; tests plug in their own.

pub mod terminal;

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::errors::{HelperError, Result};

pub use terminal::TerminalPrompter;

/// Key of the question asked by [`prompt`].
pub const CONFIRM_KEY: &str = "confirm";

/// Message used when the caller doesn't supply one.
pub const DEFAULT_MESSAGE: &str = "Please confirm the action";

/// A single yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Key under which the answer is reported.
    pub key: String,
    pub message: String,
    /// Answer preselected for the user.
    pub default: bool,
}

impl Question {
    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            key: CONFIRM_KEY.to_string(),
            message: message.into(),
            default: false,
        }
    }
}

/// Answers keyed by [`Question::key`].
pub type Answers = BTreeMap<String, bool>;

/// Trait abstracting how questions reach the user.
pub trait Prompter: Send + Sync {
    /// Ask every question in order and collect the answers.
    fn ask<'a>(
        &'a self,
        questions: &'a [Question],
    ) -> Pin<Box<dyn Future<Output = Result<Answers>> + Send + 'a>>;
}

/// Ask the default confirmation question.
pub async fn prompt<P>(prompter: &P) -> Result<bool>
where
    P: Prompter + ?Sized,
{
    prompt_with(prompter, DEFAULT_MESSAGE).await
}

/// Ask a confirmation question with a custom message.
pub async fn prompt_with<P>(prompter: &P, message: &str) -> Result<bool>
where
    P: Prompter + ?Sized,
{
    let questions = [Question::confirm(message)];
    let answers = prompter.ask(&questions).await?;

    let confirmed = answers
        .get(CONFIRM_KEY)
        .copied()
        .ok_or_else(|| HelperError::MissingAnswer(CONFIRM_KEY.to_string()))?;

    debug!(confirmed, "confirmation answered");
    Ok(confirmed)
}
