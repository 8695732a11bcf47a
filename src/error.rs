//! Error types for the gridref command line

use thiserror::Error;

/// Errors in how the command line was put together
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("No command given")]
    MissingCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("Not a number: {0}")]
    InvalidNumber(String),
}
