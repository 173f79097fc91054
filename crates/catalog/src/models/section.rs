use super::SectionId;
use serde::{Deserialize, Serialize};

/// A nested sub-unit of content belonging to a tutorial-kind record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    /// Unique within the owning record, not across the catalogue
    pub id: SectionId,
    /// Display title
    pub title: String,
    /// Body text
    #[serde(default)]
    pub content: String,
}
