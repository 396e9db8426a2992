use crate::{migrations::registry::Migration, EntryError, SchemaVersion};

/// Stamps the schema tag onto rows written before entries were versioned.
/// The payload fields are already in the v1 shape and are left untouched.
pub(crate) struct V0ToV1Migration;

impl Migration for V0ToV1Migration {
    fn source_version(&self) -> SchemaVersion {
        SchemaVersion::V0
    }

    fn target_version(&self) -> SchemaVersion {
        SchemaVersion::V1
    }

    fn migrate(&self, entry_data: &mut serde_json::Value) -> Result<(), EntryError> {
        if let Some(obj) = entry_data.as_object_mut() {
            obj.insert(
                "schemaVersion".to_string(),
                SchemaVersion::V1.as_u32().into(),
            );
        }

        Ok(())
    }
}
