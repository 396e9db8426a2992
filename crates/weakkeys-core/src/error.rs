use thiserror::Error;
use weakkeys_crypto::KeyAlgorithm;

/// Errors from building or upgrading denylist entries.
#[derive(Debug, Error)]
pub enum EntryError {
    /// No fingerprint scheme exists for the presented key family, so the
    /// entry was left unchanged. The caller decides whether that means
    /// reject, skip the check, or log.
    #[error("Cannot derive a fingerprint for {algorithm} keys")]
    UnsupportedKeyAlgorithm {
        /// Family of the key that was presented.
        algorithm: KeyAlgorithm,
    },

    /// The stored record carries a schema version this release has no
    /// migration for, i.e. it was written by a newer release.
    #[error("Unsupported entry schema version {0}")]
    UnsupportedSchemaVersion(u32),

    /// The stored record could not be (de)serialized.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
