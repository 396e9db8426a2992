use std::fmt::Display;

use rsa::{pkcs8::DecodePublicKey, traits::PublicKeyParts, RsaPublicKey};

use crate::{
    error::{CryptoError, Result},
    fingerprint::derive_fingerprint,
    Fingerprint,
};

/// Key algorithm families understood by the denylist.
///
/// Only RSA keys can be fingerprinted today. The other families exist so a
/// presented key always carries its family tag and callers can report what
/// they were given instead of guessing from parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    /// RSA of any modulus size.
    Rsa,
    /// Ed25519 signing keys.
    Ed25519,
}

impl Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyAlgorithm::Rsa => write!(f, "RSA"),
            KeyAlgorithm::Ed25519 => write!(f, "Ed25519"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub(crate) enum RawPublicKey {
    Rsa(RsaPublicKey),
    Ed25519(ed25519_dalek::VerifyingKey),
}

/// A public key presented for a denylist check, tagged with its algorithm
/// family.
#[derive(Clone, PartialEq)]
pub struct PublicKey {
    inner: RawPublicKey,
}

impl PublicKey {
    pub(crate) fn inner(&self) -> &RawPublicKey {
        &self.inner
    }

    /// Build a public key from the SubjectPublicKeyInfo DER of an RSA key.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        Ok(PublicKey {
            inner: RawPublicKey::Rsa(
                RsaPublicKey::from_public_key_der(der).map_err(|_| CryptoError::InvalidKey)?,
            ),
        })
    }

    /// Build a public key from the raw 32 bytes of an Ed25519 verifying key.
    pub fn from_ed25519_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Ok(PublicKey {
            inner: RawPublicKey::Ed25519(
                ed25519_dalek::VerifyingKey::from_bytes(bytes)
                    .map_err(|_| CryptoError::InvalidKey)?,
            ),
        })
    }

    /// The algorithm family of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match &self.inner {
            RawPublicKey::Rsa(_) => KeyAlgorithm::Rsa,
            RawPublicKey::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// Descriptor of the algorithm and size family, e.g. `RSA2048`.
    ///
    /// Used to label denylist entries for filtering and reporting. It plays
    /// no part in fingerprint derivation.
    pub fn key_spec(&self) -> String {
        match &self.inner {
            RawPublicKey::Rsa(key) => format!("RSA{}", key.n().bits()),
            RawPublicKey::Ed25519(_) => "Ed25519".to_string(),
        }
    }

    /// The canonical denylist fingerprint of this key, if its family supports
    /// one. See [`derive_fingerprint`].
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        derive_fingerprint(self)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        PublicKey {
            inner: RawPublicKey::Rsa(key),
        }
    }
}

impl From<ed25519_dalek::VerifyingKey> for PublicKey {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        PublicKey {
            inner: RawPublicKey::Ed25519(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};

    use super::*;

    const RSA_2048_SPKI_B64: &str = concat!(
        "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEArvcXfr5pCD6KhzXo7BWc",
        "5Hdcbgp9U6hk0+wDYQBJ2yP8mlbd3GiN9JMFAtliE6BaTYLuxI9Mdk7XmDoKy63X",
        "AuI8tUon5imL/792Wca3f3qrbZh9pOfPKWp7HkcByty1ZO8QPlEYUP24y4DzOfVd",
        "LkdZfs9X5qKHiTxc+VklzTm3PSap4eORTQ/lP1GB10y0qJk5+44GRcSQSr3ku6ui",
        "2re8AJ2GQhdnZz5oWaCb/kij5bQPBwBrIEBlgRdaeasVdR6wFJPJAQZxtqWo9MPK",
        "eVDOkaQ3Qrryh+49S4rln3592/WeHYM5hO47DJr86ELcqcyCmksYas7xTqHfVfHS",
        "XQIDAQAB",
    );

    // Test 1 public key from RFC 8032 section 7.1.
    const ED25519_PUBLIC_BYTES: [u8; 32] = [
        0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64, 0x07,
        0x3a, 0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68, 0xf7, 0x07,
        0x51, 0x1a,
    ];

    fn rsa_test_key() -> PublicKey {
        let der = STANDARD.decode(RSA_2048_SPKI_B64).unwrap();
        PublicKey::from_der(&der).unwrap()
    }

    #[test]
    fn test_from_der_rsa() {
        let key = rsa_test_key();
        assert_eq!(key.algorithm(), KeyAlgorithm::Rsa);
        assert_eq!(key.key_spec(), "RSA2048");
    }

    #[test]
    fn test_from_der_invalid() {
        assert!(matches!(
            PublicKey::from_der(b"not a der document"),
            Err(CryptoError::InvalidKey)
        ));
    }

    #[test]
    fn test_ed25519_key_spec() {
        let key = PublicKey::from_ed25519_bytes(&ED25519_PUBLIC_BYTES).unwrap();
        assert_eq!(key.algorithm(), KeyAlgorithm::Ed25519);
        assert_eq!(key.key_spec(), "Ed25519");
    }

    #[test]
    fn test_ed25519_invalid_point() {
        // y = 2 does not decompress to a curve point.
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert!(PublicKey::from_ed25519_bytes(&bytes).is_err());
    }

    #[test]
    fn test_key_algorithm_display() {
        assert_eq!(KeyAlgorithm::Rsa.to_string(), "RSA");
        assert_eq!(KeyAlgorithm::Ed25519.to_string(), "Ed25519");
    }
}
