use super::SourceBackend;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalogue document on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SourceBackend for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|err| {
            exn::Exn::from(ErrorKind::Unavailable(format!("{}: {err}", self.path.display())))
        })
    }
}
