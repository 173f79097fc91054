//! Catalogue Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use crate::models::{RecordId, SectionId};
use derive_more::{Display, Error};

/// A catalogue error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalogue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Resolution failures are part of the normal vocabulary of this crate: an
/// absent record or section is reported as a typed value, never a panic, so
/// callers can render distinct messages for the two cases.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// No record in the catalogue carries the requested id
    #[display("no record with id \"{_0}\"")]
    RecordNotFound(#[error(not(source))] RecordId),
    /// The record exists, but none of its sections carry the requested id
    #[display("record \"{record}\" has no section with id \"{section}\"")]
    SectionNotFound { record: RecordId, section: SectionId },
    /// A navigation path that matches neither supported shape
    #[display("unrecognised locator: {_0:?}")]
    InvalidLocator(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
