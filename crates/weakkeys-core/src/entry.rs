use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weakkeys_crypto::{derive_fingerprint, Fingerprint, PublicKey};

use crate::{migrations::MigrationRegistry, EntryError, SchemaVersion};

/// One record of the weak public key denylist.
///
/// Maps a canonical key fingerprint to "keys from this generation are
/// forbidden". The persistence layer owns storage, lookup by fingerprint and
/// id uniqueness; the administrative layer owns creation and deletion. This
/// type owns the field invariants and the schema versioning of the stored
/// shape.
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DenylistEntry {
    id: i32,
    /// Key algorithm/size family the fingerprint came from, e.g. `RSA2048`.
    /// Informational only.
    key_spec: Option<String>,
    #[schemars(with = "Option<String>")]
    fingerprint: Option<Fingerprint>,
    #[serde(default)]
    #[schemars(with = "u32")]
    schema_version: SchemaVersion,
}

impl DenylistEntry {
    /// Creates a fresh entry at the latest schema version. The fingerprint
    /// and key spec are filled in by the owning collaborator.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            key_spec: None,
            fingerprint: None,
            schema_version: SchemaVersion::LATEST,
        }
    }

    /// Caller-assigned identifier, unique within the denylist store.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Reassigns the identifier.
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// The key algorithm/size family label, e.g. `RSA2048`.
    pub fn key_spec(&self) -> Option<&str> {
        self.key_spec.as_deref()
    }

    /// Sets the key algorithm/size family label.
    pub fn set_key_spec(&mut self, key_spec: impl Into<String>) {
        self.key_spec = Some(key_spec.into());
    }

    /// The canonical fingerprint this entry denies, unset while the entry is
    /// under construction.
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        self.fingerprint.as_ref()
    }

    /// Stores an already-canonical fingerprint, e.g. one read from a feed.
    pub fn set_fingerprint(&mut self, fingerprint: Fingerprint) {
        self.fingerprint = Some(fingerprint);
    }

    /// Derives the fingerprint from a presented key and stores it.
    ///
    /// On a key family without a fingerprint scheme the entry is left
    /// unchanged and the condition is surfaced to the caller.
    pub fn set_fingerprint_from_key(&mut self, public_key: &PublicKey) -> Result<(), EntryError> {
        match derive_fingerprint(public_key) {
            Some(fingerprint) => {
                self.fingerprint = Some(fingerprint);
                Ok(())
            }
            None => Err(EntryError::UnsupportedKeyAlgorithm {
                algorithm: public_key.algorithm(),
            }),
        }
    }

    /// Schema revision of this record.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Loads an entry from its raw stored form, migrating stale schema
    /// revisions forward first.
    pub fn from_stored(mut value: serde_json::Value) -> Result<Self, EntryError> {
        let stored_version = stored_schema_version(&value)?;
        if stored_version != SchemaVersion::LATEST {
            log::info!(
                "upgrading denylist entry from schema version {} to {}",
                stored_version.as_u32(),
                SchemaVersion::LATEST.as_u32()
            );
            MigrationRegistry::new().migrate(&mut value, stored_version)?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Brings an already-deserialized entry to the latest schema version.
    ///
    /// Invoked by the persistence layer right after loading, before the entry
    /// is used for comparisons. A no-op at the latest version. Staleness is
    /// recoverable and never an error; `Err` means the record was written by
    /// a newer release than this one.
    pub fn upgrade(&mut self) -> Result<(), EntryError> {
        if self.schema_version == SchemaVersion::LATEST {
            return Ok(());
        }

        log::info!(
            "upgrading denylist entry {} from schema version {} to {}",
            self.id,
            self.schema_version.as_u32(),
            SchemaVersion::LATEST.as_u32()
        );
        let mut value = serde_json::to_value(&*self)?;
        MigrationRegistry::new().migrate(&mut value, self.schema_version)?;
        *self = serde_json::from_value(value)?;

        Ok(())
    }
}

/// Reads the schema tag of a raw stored record. Records without a tag
/// predate versioning and map to [`SchemaVersion::V0`].
fn stored_schema_version(value: &serde_json::Value) -> Result<SchemaVersion, EntryError> {
    match value.get("schemaVersion") {
        None | Some(serde_json::Value::Null) => Ok(SchemaVersion::V0),
        Some(tag) => {
            let raw: u32 = serde_json::from_value(tag.clone())?;
            SchemaVersion::try_from(raw)
        }
    }
}
