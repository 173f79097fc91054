use super::{RecordId, Section, SectionId};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single catalogue entry.
///
/// Only the id, title and kind are required; everything else defaults to
/// empty when the document omits it. The catalogue is accepted exactly as
/// retrieved — presence checks only, no sanitisation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// Stable identifier, unique across the catalogue
    pub id: RecordId,
    /// Display title
    pub title: String,
    /// Distinguishes tutorials from display-only resource kinds
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// String labels for the browse-view tag filter (absent → empty)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered sections; only ever populated on tutorial-kind records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Record {
    /// Tutorials have sections, can be favourited, and link to a detail view.
    /// Every other kind is display-only.
    pub fn is_tutorial(&self) -> bool {
        self.kind == RecordKind::Tutorial
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Linear search over this record's sections.
    pub fn find_section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| &section.id == id)
    }
}

/// Record kind tag.
///
/// Anything that isn't a tutorial is an opaque resource kind; the original
/// label is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Tutorial,
    Other(String),
}

impl RecordKind {
    pub const TUTORIAL: &'static str = "tutorial";

    pub fn as_str(&self) -> &str {
        match self {
            RecordKind::Tutorial => Self::TUTORIAL,
            RecordKind::Other(label) => label,
        }
    }
}
impl From<String> for RecordKind {
    fn from(label: String) -> Self {
        if label == Self::TUTORIAL { Self::Tutorial } else { Self::Other(label) }
    }
}
impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.into())
    }
}
impl Serialize for RecordKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
