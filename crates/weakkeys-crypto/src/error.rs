use thiserror::Error;

/// Errors from parsing or handling public key material.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The provided key material could not be parsed as a supported public
    /// key.
    #[error("Invalid key")]
    InvalidKey,
}

pub(crate) type Result<T, E = CryptoError> = std::result::Result<T, E>;
