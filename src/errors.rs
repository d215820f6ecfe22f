// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("script '{command}' failed with {}", describe_code(.code))]
    ScriptFailed { command: String, code: Option<i32> },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("no answer for question '{0}'")]
    MissingAnswer(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
