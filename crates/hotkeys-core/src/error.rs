//! Error types for the hotkey subsystem.

use thiserror::Error;

/// Errors that can occur while editing or persisting hotkeys
#[derive(Error, Debug)]
pub enum HotkeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("cannot define more than {max} hotkeys")]
    CapacityExceeded { max: usize },

    #[error("Malformed entry '{key}': {reason}")]
    MalformedEntry { key: String, reason: String },

    #[error("Unknown key name: {0}")]
    UnknownKeyName(String),

    #[error("'None' cannot be used as a hotkey trigger")]
    InvalidTrigger,
}

pub type Result<T> = std::result::Result<T, HotkeyError>;
