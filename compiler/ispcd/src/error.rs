//! Command-line errors.

use std::io;

use thiserror::Error;

/// A malformed command line or a failed write to standard output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("unknown diagnostic kind `{0}` (expected error, warning, debug or perf)")]
    UnknownKind(String),
    #[error("invalid {what} `{value}`")]
    InvalidNumber { what: &'static str, value: String },
    #[error("invalid source position `{0}` (expected file:line:column[-line:column] or -)")]
    InvalidPosition(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
