//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use serde_json::Error as JsonError;
use std::io::Error as IoError;

/// A catalogue-source error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// The split mirrors what a consuming view can tell the user: the source
/// could not be reached at all, or it answered with something that is not a
/// catalogue.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The backing document could not be fetched (missing file, transport
    /// failure, non-success status)
    #[display("catalogue source unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
    /// The document was fetched but could not be parsed as a catalogue
    #[display("malformed catalogue: {_0}")]
    Malformed(JsonError),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Io(_))
    }
}
