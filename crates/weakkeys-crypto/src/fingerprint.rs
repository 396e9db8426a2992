//! Canonical fingerprints for denylisted public keys.
//!
//! The fingerprint is not a hash over the DER encoding of the key. For RSA
//! keys it is the SHA-256 digest of the bytes of the public key modulus.
//! Weak keys come from a flawed random number generator, and the flaw shows
//! up in the modulus, so hashing only the modulus captures every key from the
//! same generation while the fixed public exponent is left out. The published
//! Debian-style weak key feeds hash the same bytes, so fingerprints match
//! them directly.

use std::{fmt::Display, str::FromStr};

use rsa::{traits::PublicKeyParts, BigUint};
use sha2::Digest;
use thiserror::Error;

use crate::{
    public_key::{PublicKey, RawPublicKey},
    serde::FromStrVisitor,
};

/// Digest width of the fingerprint algorithm, in bytes.
const FINGERPRINT_LENGTH: usize = 32;

/// The string passed to [`Fingerprint::from_str`] was not 64 hexadecimal
/// characters.
#[derive(Debug, Error)]
#[error("Not a valid public key fingerprint")]
pub struct InvalidFingerprint;

/// Canonical fingerprint of a denylisted public key.
///
/// Always exactly 64 lowercase hexadecimal characters. Parsing normalizes
/// case, so equality between two fingerprints is the case-insensitive
/// comparison the denylist needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(digest: [u8; FINGERPRINT_LENGTH]) -> Self {
        Fingerprint(hex::encode(digest))
    }

    /// The hexadecimal string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = InvalidFingerprint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != FINGERPRINT_LENGTH * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidFingerprint);
        }
        Ok(Fingerprint(s.to_lowercase()))
    }
}

impl<'de> serde::Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(FromStrVisitor::new())
    }
}

impl serde::Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Derives the canonical denylist fingerprint for a public key.
///
/// For RSA keys this is the SHA-256 digest over the bytes of the modulus,
/// encoded as lowercase hex. Key families without a fingerprint scheme return
/// `None`; callers must treat that as "this key cannot be checked", not as
/// "this key is safe".
pub fn derive_fingerprint(public_key: &PublicKey) -> Option<Fingerprint> {
    match public_key.inner() {
        RawPublicKey::Rsa(key) => {
            let digest = sha2::Sha256::digest(modulus_bytes(key.n()));
            Some(Fingerprint::from_digest(digest.into()))
        }
        RawPublicKey::Ed25519(_) => {
            log::debug!("no fingerprint scheme for {} keys", public_key.algorithm());
            None
        }
    }
}

/// Serializes the modulus to the byte form the weak key feeds are computed
/// over: big-endian with a leading zero byte when the top bit is set, the
/// same representation a signed big integer conversion produces for a
/// positive number.
fn modulus_bytes(n: &BigUint) -> Vec<u8> {
    let mut bytes = n.to_bytes_be();
    if bytes.first().is_some_and(|b| b & 0x80 != 0) {
        bytes.insert(0, 0x00);
    }
    bytes
}
