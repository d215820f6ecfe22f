// tests/prompt.rs
mod common;
use crate::common::fakes::FakePrompter;
use crate::common::init_tracing;

use std::error::Error;

use clihelper::errors::HelperError;
use clihelper::prompt::{prompt, prompt_with, Answers, CONFIRM_KEY, DEFAULT_MESSAGE};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn prompt_returns_confirmed_answer() -> TestResult {
    init_tracing();
    let prompter = FakePrompter::confirming(true);

    assert!(prompt(&prompter).await?);
    Ok(())
}

#[tokio::test]
async fn prompt_returns_declined_answer() -> TestResult {
    init_tracing();
    let prompter = FakePrompter::confirming(false);

    assert!(!prompt(&prompter).await?);
    Ok(())
}

#[tokio::test]
async fn prompt_asks_a_single_confirm_question() -> TestResult {
    init_tracing();
    let prompter = FakePrompter::confirming(true);

    prompt(&prompter).await?;

    let asked = prompter.asked();
    assert_eq!(asked.len(), 1);
    assert_eq!(asked[0].key, CONFIRM_KEY);
    assert_eq!(asked[0].message, DEFAULT_MESSAGE);
    assert!(!asked[0].default);
    Ok(())
}

#[tokio::test]
async fn prompt_with_uses_custom_message() -> TestResult {
    init_tracing();
    let prompter = FakePrompter::confirming(true);

    prompt_with(&prompter, "Deploy now?").await?;

    assert_eq!(prompter.asked()[0].message, "Deploy now?");
    Ok(())
}

#[tokio::test]
async fn missing_confirm_answer_is_an_error() {
    init_tracing();
    let mut answers = Answers::new();
    answers.insert("something-else".to_string(), true);
    let prompter = FakePrompter::new(answers);

    let result = prompt(&prompter).await;

    match result {
        Err(HelperError::MissingAnswer(key)) => assert_eq!(key, CONFIRM_KEY),
        other => panic!("Expected MissingAnswer, got: {:?}", other),
    }
}
