// tests/logging.rs

use clihelper::cli::LogLevel;
use clihelper::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), Level::TRACE);
}

#[test]
fn env_value_is_parsed_leniently() {
    assert_eq!(resolve_level(None, Some(" DEBUG ")), Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), Level::WARN);
}

#[test]
fn unknown_or_missing_env_falls_back_to_info() {
    assert_eq!(resolve_level(None, Some("chatty")), Level::INFO);
    assert_eq!(resolve_level(None, None), Level::INFO);
}

#[test]
fn numeric_env_levels_are_accepted() {
    assert_eq!(resolve_level(None, Some("5")), Level::TRACE);
    assert_eq!(resolve_level(None, Some("1")), Level::ERROR);
}

#[test]
fn cli_levels_map_one_to_one() {
    assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
    assert_eq!(Level::from(LogLevel::Info), Level::INFO);
    assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
}
