//! Hashing of raw bytes for selective disclosure.
//!
//! Disclosure digests are computed through the [`Hasher`] trait and looked up by
//! the `_sd_alg` name through a [`CryptoProvider`]. The primitives live in their
//! own crate so that they can be replaced or certified without touching the
//! token parser.

use std::sync::Arc;

use thiserror::Error;

pub mod imp;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CryptoProviderError {
    #[error("Missing hasher: `{0}`")]
    MissingHasher(String),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum HasherError {
    #[error("Could not hash")]
    CouldNotHash,
    #[error("Crypto provider error: `{0}`")]
    CryptoError(#[from] CryptoProviderError),
}

/// Provides hashing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    /// Digest of `input`, base64url encoded without padding.
    fn hash_base64(&self, input: &[u8]) -> Result<String, HasherError>;

    /// Raw digest of `input`.
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError>;
}

/// Returns hasher instances by their registered algorithm name (e.g. `sha-256`).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CryptoProvider: Send + Sync {
    fn get_hasher(&self, hasher: &str) -> Result<Arc<dyn Hasher>, CryptoProviderError>;
}
