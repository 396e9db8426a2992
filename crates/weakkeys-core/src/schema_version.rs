use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::EntryError;

/// Schema revision of a stored denylist entry.
///
/// Stored records carry this tag so the shape can evolve without breaking
/// rows written by earlier releases. The tag only ever moves forward; loading
/// code upgrades stale records through the migration chain before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u32)]
pub enum SchemaVersion {
    /// Rows written before the schema tag existed.
    V0 = 0,
    /// First tagged revision.
    V1 = 1,
}

impl SchemaVersion {
    /// The revision this release writes.
    pub const LATEST: SchemaVersion = SchemaVersion::V1;

    /// The numeric tag as stored.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Records with no tag at all predate versioning.
impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::V0
    }
}

impl TryFrom<u32> for SchemaVersion {
    type Error = EntryError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SchemaVersion::V0),
            1 => Ok(SchemaVersion::V1),
            other => Err(EntryError::UnsupportedSchemaVersion(other)),
        }
    }
}
