use crate::BackendHandle;
use crate::error::{ErrorKind, Result};
use tracing::instrument;
use tuto_catalog::Catalog;

/// Loads the catalogue from its backing document.
///
/// `load` is the single effectful entry point of the whole system: fetch the
/// document, parse it as a JSON array of records, hand back a [`Catalog`].
/// The records come through exactly as retrieved — no filtering, no
/// transformation, presence checks only. Retrying is the caller's decision;
/// the loader never retries on its own.
#[derive(Clone)]
pub struct Loader {
    backend: BackendHandle,
}

impl Loader {
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend }
    }

    /// Fetch and parse the catalogue document.
    ///
    /// Returns [`ErrorKind::Unavailable`] when the fetch fails and
    /// [`ErrorKind::Malformed`] when the response is not a JSON array of
    /// records.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub async fn load(&self) -> Result<Catalog> {
        let bytes = self.backend.fetch().await?;
        let catalog: Catalog = serde_json::from_slice(&bytes)
            .map_err(|err| exn::Exn::from(ErrorKind::Malformed(err)))?;
        for id in catalog.duplicate_ids() {
            tracing::warn!(%id, "catalogue contains a duplicate record id; first match wins");
        }
        tracing::debug!(records = catalog.len(), "catalogue loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSource;
    use std::sync::Arc;
    use tuto_catalog::models::RecordId;

    fn loader(backend: MockSource) -> Loader {
        Loader::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_load_parses_records_in_order() {
        let loader = loader(MockSource::with_document(
            r#"[
                {"id": 1, "title": "Intro", "type": "tutorial", "tags": ["js"]},
                {"id": 2, "title": "Advanced", "type": "article"}
            ]"#,
        ));
        let catalog = loader.load().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].id, RecordId::from("1"));
        assert_eq!(catalog.records()[1].title, "Advanced");
    }

    #[tokio::test]
    async fn test_load_empty_document() {
        let catalog = loader(MockSource::with_document("[]")).load().await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_source_is_unavailable() {
        let err = loader(MockSource::unavailable("no route")).load().await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_unparseable_document_is_malformed() {
        let err = loader(MockSource::with_document("{not a catalogue")).load().await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Malformed(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        // Valid JSON, but an object instead of an array of records.
        let err = loader(MockSource::with_document(r#"{"records": []}"#)).load().await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Malformed(_)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_kept() {
        // Accepted as retrieved; the duplicate is only warned about.
        let loader = loader(MockSource::with_document(
            r#"[
                {"id": 1, "title": "A", "type": "article"},
                {"id": "1", "title": "B", "type": "article"}
            ]"#,
        ));
        let catalog = loader.load().await.unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
