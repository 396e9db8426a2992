use crate::{migrations::versions::V0ToV1Migration, EntryError, SchemaVersion};

/// A single step of the entry schema migration chain. Implementations must
/// be pure transforms of the raw stored record.
pub(crate) trait Migration {
    fn source_version(&self) -> SchemaVersion;
    fn target_version(&self) -> SchemaVersion;
    fn migrate(&self, entry_data: &mut serde_json::Value) -> Result<(), EntryError>;
}

pub(crate) struct MigrationRegistry {
    migrations: Vec<Box<dyn Migration>>,
}

impl MigrationRegistry {
    pub(crate) fn new() -> Self {
        let mut registry = Self {
            migrations: Vec::new(),
        };

        // Order matters; each step's target must be the next step's source.
        registry.register(Box::new(V0ToV1Migration));

        registry
    }

    pub(crate) fn register(&mut self, migration: Box<dyn Migration>) {
        self.migrations.push(migration);
    }

    /// Walks the chain from `source_version` until the record is at
    /// [`SchemaVersion::LATEST`].
    pub(crate) fn migrate(
        &self,
        entry_data: &mut serde_json::Value,
        source_version: SchemaVersion,
    ) -> Result<(), EntryError> {
        let mut current_version = source_version;

        while current_version < SchemaVersion::LATEST {
            let migration = self
                .migrations
                .iter()
                .find(|m| m.source_version() == current_version)
                .ok_or(EntryError::UnsupportedSchemaVersion(
                    current_version.as_u32(),
                ))?;

            migration.migrate(entry_data)?;
            current_version = migration.target_version();
        }

        Ok(())
    }
}
