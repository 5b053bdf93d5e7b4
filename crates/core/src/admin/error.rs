use thiserror::Error;

/// Errors produced while parsing the arguments of an admin command.
///
/// These never reach the storage layer; handlers answer them with the
/// command's usage string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected exactly one argument, got {0}")]
    ArgumentCount(usize),

    #[error("invalid user id: {0}")]
    InvalidUserId(String),
}
