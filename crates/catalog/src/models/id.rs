//! Canonical identifiers for records and sections.
//!
//! Catalogue documents in the wild carry ids as JSON strings *or* JSON
//! numbers, while navigation paths only ever produce strings. Comparing the
//! two representations directly is a recipe for phantom "not found" results,
//! so both id types canonicalise to a string at the deserialization boundary:
//! a numeric id becomes its decimal rendering and every comparison afterwards
//! is string-on-string.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// An id as it appears in a catalogue document, before canonicalisation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}
impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Stable identifier of a catalogue record, unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(RawId::deserialize(deserializer)?.into()))
    }
}
impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a section, unique within its owning record only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(RawId::deserialize(deserializer)?.into()))
    }
}
impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""1""#, "1")]
    #[case("1", "1")]
    #[case("42", "42")]
    #[case("-7", "-7")]
    #[case(r#""intro-to-js""#, "intro-to-js")]
    fn test_record_id_canonicalises_to_string(#[case] json: &str, #[case] expected: &str) {
        let id: RecordId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), expected);
    }

    #[test]
    fn test_numeric_and_text_forms_compare_equal() {
        // The same id served as a number in the document and extracted as a
        // string from a path segment must resolve to the same record.
        let from_document: RecordId = serde_json::from_str("3").unwrap();
        let from_path = RecordId::from("3");
        assert_eq!(from_document, from_path);
    }

    #[test]
    fn test_serialises_as_plain_string() {
        let id: SectionId = serde_json::from_str("12").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""12""#);
    }
}
