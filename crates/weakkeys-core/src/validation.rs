use weakkeys_crypto::{derive_fingerprint, Fingerprint, PublicKey};

use crate::DenylistEntry;

/// Pairs a stored denylist entry with the live key presented for validation.
///
/// The stored record never carries key material; the presented key lives
/// only in this context, for the duration of one validation call.
pub struct KeyValidation<'a> {
    entry: &'a DenylistEntry,
    public_key: &'a PublicKey,
}

impl<'a> KeyValidation<'a> {
    /// Pairs an entry with the key presented for validation.
    pub fn new(entry: &'a DenylistEntry, public_key: &'a PublicKey) -> Self {
        Self { entry, public_key }
    }

    /// The stored entry being checked against.
    pub fn entry(&self) -> &DenylistEntry {
        self.entry
    }

    /// The presented key.
    pub fn public_key(&self) -> &PublicKey {
        self.public_key
    }

    /// The canonical fingerprint of the presented key, if its family has a
    /// fingerprint scheme.
    pub fn derived_fingerprint(&self) -> Option<Fingerprint> {
        derive_fingerprint(self.public_key)
    }

    /// Whether the presented key is the one this entry denies.
    ///
    /// `false` when the entry has no fingerprint yet or the key family
    /// cannot be fingerprinted. A key this core cannot check is not thereby
    /// cleared; that policy call belongs to the caller.
    pub fn is_match(&self) -> bool {
        match (self.entry.fingerprint(), self.derived_fingerprint()) {
            (Some(stored), Some(derived)) => *stored == derived,
            _ => false,
        }
    }
}
