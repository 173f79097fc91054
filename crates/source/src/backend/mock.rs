//! In-memory source backend for testing.

use super::SourceBackend;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;

/// In-memory source backend for testing.
///
/// Serves a fixed document, or fails every fetch, depending on how it was
/// constructed.
///
/// Note:
/// - Do NOT apply `#[cfg(test)]` so that other crates can also use this in
///   their tests.
#[derive(Debug, Clone)]
pub struct MockSource {
    response: Response,
}

#[derive(Debug, Clone)]
enum Response {
    Document(Vec<u8>),
    Unavailable(String),
}

impl MockSource {
    /// A backend that serves `document` on every fetch.
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self { response: Response::Document(document.into()) }
    }

    /// A backend whose fetches always fail with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { response: Response::Unavailable(reason.into()) }
    }
}

#[async_trait]
impl SourceBackend for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        match &self.response {
            Response::Document(bytes) => Ok(bytes.clone()),
            Response::Unavailable(reason) => {
                Err(exn::Exn::from(ErrorKind::Unavailable(reason.clone())))
            },
        }
    }
}
