//! Error types for identifier generation.

use actorid_hash::HashError;
use actorid_machine::MachineError;

/// Errors produced by [`crate::Generator`]. Generation never yields a
/// partial identifier.
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
    #[error("cryptography unavailable: no SHA-256 digest facility")]
    CryptoUnavailable,

    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    #[error("machine identity lookup failed: {0}")]
    PlatformQuery(MachineError),

    #[error("hash reduction failed: {0}")]
    Hash(HashError),
}

impl From<MachineError> for IdentifierError {
    fn from(err: MachineError) -> Self {
        match err {
            MachineError::UnsupportedEnvironment(msg) => IdentifierError::UnsupportedEnvironment(msg),
            other => IdentifierError::PlatformQuery(other),
        }
    }
}

impl From<HashError> for IdentifierError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::CryptoUnavailable => IdentifierError::CryptoUnavailable,
            other => IdentifierError::Hash(other),
        }
    }
}
