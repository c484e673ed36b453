//! Common error types for the playlist service

use thiserror::Error;

/// Common result type for playlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the normalizer, the song store and the API layer
///
/// Searches without a match and rating updates against an unknown id are not
/// errors; they come back as `None` / `false`.
#[derive(Error, Debug)]
pub enum Error {
    /// Source document missing, unparseable, empty or ragged
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Query issued before the song table was loaded
    #[error("Song table is not loaded yet")]
    NotReady,

    /// Rating outside 1..=5 or not an integer
    #[error("Invalid rating {0}: rating must be an integer between 1 and 5")]
    InvalidRating(String),

    /// Non-empty statistics requested on a table with zero rows
    #[error("Song table is empty")]
    EmptyTable,

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
