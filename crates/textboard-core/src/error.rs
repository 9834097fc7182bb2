//! Error types for board operations.

use thiserror::Error;

/// Board errors.
///
/// Not-found conditions (moving or removing an unknown id) are never errors;
/// those commands are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown font style: {0}")]
    UnknownFontStyle(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
