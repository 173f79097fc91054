mod id;
mod record;
mod section;

pub use self::id::{RecordId, SectionId};
pub use self::record::{Record, RecordKind};
pub use self::section::Section;
