//! Error types for the hotkeys command line

use thiserror::Error;

/// Errors from parsing the command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid key combo '{input}': {reason}")]
    InvalidCombo { input: String, reason: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
