//! Navigation locators.
//!
//! The browsing surface exposes exactly two path shapes,
//! `/records/{recordId}` and `/records/{recordId}/{sectionId}`. Both are
//! consumed purely as identifiers and routed to the resolver; there is no
//! other wire protocol. Path segments are already strings, which is the
//! canonical id representation, so no further normalisation happens here.

use crate::Catalog;
use crate::error::{ErrorKind, Result};
use crate::models::{Record, RecordId, Section, SectionId};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

const PREFIX: &str = "records";

/// A parsed navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// `/records/{recordId}` — a record detail view
    Record(RecordId),
    /// `/records/{recordId}/{sectionId}` — a section view
    Section(RecordId, SectionId),
}

/// What a locator pointed at, borrowed from the catalogue.
#[derive(Debug, PartialEq)]
pub enum Resolution<'a> {
    Record(&'a Record),
    Section(&'a Record, &'a Section),
}

impl Locator {
    /// Route this locator to the resolver.
    ///
    /// Failure cases are the resolver's: [`ErrorKind::RecordNotFound`] or
    /// [`ErrorKind::SectionNotFound`].
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<Resolution<'a>> {
        match self {
            Locator::Record(record_id) => {
                Ok(Resolution::Record(catalog.find_record(record_id)?))
            },
            Locator::Section(record_id, section_id) => {
                let section = catalog.find_section(record_id, section_id)?;
                // find_section already proved the record exists.
                let record = catalog.find_record(record_id)?;
                Ok(Resolution::Section(record, section))
            },
        }
    }
}

impl FromStr for Locator {
    type Err = crate::error::Error;

    fn from_str(path: &str) -> Result<Self> {
        let invalid = || exn::Exn::from(ErrorKind::InvalidLocator(path.to_string()));
        let mut segments = path.trim_matches('/').split('/');
        if segments.next() != Some(PREFIX) {
            return Err(invalid());
        }
        match (segments.next(), segments.next(), segments.next()) {
            (Some(record), None, _) if !record.is_empty() => {
                Ok(Locator::Record(RecordId::from(record)))
            },
            (Some(record), Some(section), None) if !record.is_empty() && !section.is_empty() => {
                Ok(Locator::Section(RecordId::from(record), SectionId::from(section)))
            },
            _ => Err(invalid()),
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Locator::Record(record) => write!(f, "/{PREFIX}/{record}"),
            Locator::Section(record, section) => write!(f, "/{PREFIX}/{record}/{section}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/records/1", Locator::Record(RecordId::from("1")))]
    #[case("records/1", Locator::Record(RecordId::from("1")))]
    #[case("/records/1/", Locator::Record(RecordId::from("1")))]
    #[case("/records/abc-def", Locator::Record(RecordId::from("abc-def")))]
    #[case("/records/1/5", Locator::Section(RecordId::from("1"), SectionId::from("5")))]
    #[case("records/1/5/", Locator::Section(RecordId::from("1"), SectionId::from("5")))]
    fn test_parse_valid(#[case] path: &str, #[case] expected: Locator) {
        assert_eq!(path.parse::<Locator>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("/")]
    #[case("/records")]
    #[case("/records/")]
    #[case("/records//5")]
    #[case("/records/1/5/extra")]
    #[case("/tutorials/1")]
    fn test_parse_invalid(#[case] path: &str) {
        let err = path.parse::<Locator>().unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidLocator(_)));
    }

    #[test]
    fn test_resolve_section() {
        let catalog: Catalog = serde_json::from_str(
            r#"[{
                "id": 1,
                "title": "Intro",
                "type": "tutorial",
                "sections": [{"id": 5, "title": "Setup", "content": "..."}]
            }]"#,
        )
        .unwrap();
        // The document carries numeric ids; the path carries strings.
        let resolution = "/records/1/5".parse::<Locator>().unwrap().resolve(&catalog).unwrap();
        match resolution {
            Resolution::Section(record, section) => {
                assert_eq!(record.title, "Intro");
                assert_eq!(section.title, "Setup");
            },
            other => panic!("expected a section resolution, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trip() {
        let locator = Locator::Section(RecordId::from("1"), SectionId::from("5"));
        assert_eq!(locator.to_string().parse::<Locator>().unwrap(), locator);
    }
}
