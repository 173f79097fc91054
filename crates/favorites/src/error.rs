//! Favourites Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! These errors never reach a user: the store degrades an unreadable slot to
//! an empty set and logs failed writes, because browsing must never block on
//! favourites persistence. They exist so slot implementations can still say
//! *what* went wrong in the logs.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A favourites persistence error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for slot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The slot could not be read or written
    #[display("favourites slot unavailable: {}", _0.display())]
    Unavailable(#[error(not(source))] PathBuf),
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
        matches!(self, Self::Io(_))
    }
}
