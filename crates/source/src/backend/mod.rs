//! Source backend trait and implementations.
//!
//! The catalogue is a single document at a fixed location; how it gets here
//! (local file, bundled asset, remote store) is the backend's business. The
//! trait is consumed read-only — this system never writes to its source.

mod local;
mod mock;

pub use self::local::LocalSource;
pub use self::mock::MockSource;

use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the catalogue document.
///
/// Fetching is the only suspending operation in the whole system, so the
/// trait is async; everything downstream of the loaded catalogue is pure.
///
/// # Examples
///
/// ```
/// use tuto_source::backend::{MockSource, SourceBackend};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MockSource::with_document(r#"[]"#);
/// let bytes = backend.fetch().await?;
/// assert_eq!(bytes, b"[]");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SourceBackend: Send + Sync {
    /// Name of the configured backend (used for logging only).
    fn name(&self) -> &str;

    /// Fetch the raw bytes of the catalogue document.
    ///
    /// Returns [`Unavailable`](crate::error::ErrorKind::Unavailable) when
    /// the document cannot be reached. No retry, no backoff, no timeout —
    /// a failed fetch is retried only by an explicit new load request.
    async fn fetch(&self) -> Result<Vec<u8>>;
}
