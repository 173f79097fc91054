//! The in-memory catalogue and its resolver.

use crate::error::{ErrorKind, Result};
use crate::models::{Record, RecordId, Section, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// The full ordered collection of records for one browsing session.
///
/// Immutable once constructed; a reload replaces the catalogue wholesale
/// rather than mutating it in place. All lookups are read-only, deterministic
/// and total — an absent id is reported as a typed error, never a panic.
///
/// # Examples
///
/// ```
/// use tuto_catalog::Catalog;
/// use tuto_catalog::models::RecordId;
///
/// let catalog: Catalog = serde_json::from_str(
///     r#"[{"id": 1, "title": "Intro", "type": "tutorial"}]"#,
/// ).unwrap();
/// let record = catalog.find_record(&RecordId::from("1")).unwrap();
/// assert_eq!(record.title, "Intro");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records in document order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Locate a record by id.
    ///
    /// Returns [`ErrorKind::RecordNotFound`] when no record matches. When the
    /// catalogue (illegally) contains duplicate ids, the first match wins.
    pub fn find_record(&self, id: &RecordId) -> Result<&Record> {
        self.records
            .iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| exn::Exn::from(ErrorKind::RecordNotFound(id.clone())))
    }

    /// Locate a section within a record.
    ///
    /// Composed from [`find_record`](Self::find_record) followed by a linear
    /// search over that record's sections. The two failure cases are distinct
    /// so callers can render different messages:
    /// [`ErrorKind::RecordNotFound`] when the record itself is absent, and
    /// [`ErrorKind::SectionNotFound`] when the record exists but the section
    /// does not.
    pub fn find_section(&self, record_id: &RecordId, section_id: &SectionId) -> Result<&Section> {
        let record = self.find_record(record_id)?;
        record.find_section(section_id).ok_or_else(|| {
            exn::Exn::from(ErrorKind::SectionNotFound {
                record: record_id.clone(),
                section: section_id.clone(),
            })
        })
    }

    /// Cross-reference a favourites set against the catalogue.
    ///
    /// Yields the records whose ids are in the set, catalogue order
    /// preserved. Ids that no longer resolve (the favourites slot outlives
    /// any one catalogue) are silently skipped.
    pub fn favorites<'a>(&'a self, ids: &BTreeSet<RecordId>) -> Vec<&'a Record> {
        self.records.iter().filter(|record| ids.contains(&record.id)).collect()
    }

    /// Ids that appear on more than one record.
    ///
    /// The catalogue is accepted as retrieved, so duplicates are not
    /// rejected; the loader reports them as a warning instead.
    pub fn duplicate_ids(&self) -> Vec<&RecordId> {
        let mut seen = HashSet::new();
        let mut duplicated = Vec::new();
        for record in &self.records {
            if !seen.insert(&record.id) && !duplicated.contains(&&record.id) {
                duplicated.push(&record.id);
            }
        }
        duplicated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"[
                {
                    "id": 1,
                    "title": "Intro",
                    "type": "tutorial",
                    "tags": ["js"],
                    "sections": [{"id": 5, "title": "Setup", "content": "install things"}]
                },
                {"id": 2, "title": "Advanced", "type": "article", "tags": ["js", "perf"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_record_present() {
        let catalog = catalog();
        let record = catalog.find_record(&RecordId::from("1")).unwrap();
        assert_eq!(record.title, "Intro");
    }

    #[test]
    fn test_find_record_absent() {
        let catalog = catalog();
        let err = catalog.find_record(&RecordId::from("99")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::RecordNotFound(_)));
    }

    #[test]
    fn test_find_section_present() {
        let catalog = catalog();
        let section = catalog.find_section(&RecordId::from("1"), &SectionId::from("5")).unwrap();
        assert_eq!(section.title, "Setup");
    }

    #[test]
    fn test_find_section_reports_missing_section_distinctly() {
        let catalog = catalog();
        let err = catalog.find_section(&RecordId::from("1"), &SectionId::from("99")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::SectionNotFound { .. }));
    }

    #[test]
    fn test_find_section_reports_missing_record_distinctly() {
        let catalog = catalog();
        let err = catalog.find_section(&RecordId::from("42"), &SectionId::from("5")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::RecordNotFound(_)));
    }

    #[test]
    fn test_favorites_cross_reference_keeps_catalogue_order() {
        let catalog = catalog();
        let ids: BTreeSet<_> =
            [RecordId::from("2"), RecordId::from("1"), RecordId::from("gone")].into();
        let favorites = catalog.favorites(&ids);
        let titles: Vec<_> = favorites.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Advanced"]);
    }

    #[test]
    fn test_duplicate_ids() {
        let catalog: Catalog = serde_json::from_str(
            r#"[
                {"id": 1, "title": "A", "type": "article"},
                {"id": 2, "title": "B", "type": "article"},
                {"id": 1, "title": "C", "type": "article"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.duplicate_ids(), [&RecordId::from("1")]);
        // First match wins on lookup.
        assert_eq!(catalog.find_record(&RecordId::from("1")).unwrap().title, "A");
    }
}
