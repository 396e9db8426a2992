#![doc = include_str!("../README.md")]

mod error;
pub use error::CryptoError;
mod fingerprint;
pub use fingerprint::{derive_fingerprint, Fingerprint, InvalidFingerprint};
mod public_key;
pub use public_key::{KeyAlgorithm, PublicKey};
mod serde;
