//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
///
/// Rejected moves are not represented here: an illegal cell click or
/// history click is a silent no-op by contract, not a failure. Errors
/// cover the fallible edges only (parsing, rendering I/O, transcript
/// serialization).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
