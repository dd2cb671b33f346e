//! Enumerates errors raised while parsing an SD-JWT or resolving its disclosures.

use thiserror::Error;

use sdjwt_crypto::HasherError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SdJwtError {
    #[error("Invalid JWS format SD-JWT: `{0}`")]
    InvalidFormat(String),
    #[error("Token has no specified disclosures")]
    MissingDisclosures,
    #[error("Token is not a valid JWT: expected 3 parts, found {0}")]
    InvalidJwtStructure(usize),
    #[error("Invalid disclosure encoding: `{0}`")]
    InvalidDisclosureEncoding(String),
    #[error("Invalid disclosure structure: `{0}`")]
    InvalidDisclosureStructure(String),
    #[error("Duplicate disclosure found: `{0}`")]
    DuplicateDisclosure(String),
    #[error("Duplicate digest found: `{0}`")]
    DuplicateDigest(String),
    #[error("Unsupported algorithm: `{0}`")]
    UnsupportedAlgorithm(String),
    #[error("No matching digest found: {raw_value} encoded: {digest}")]
    DigestNotFound { raw_value: String, digest: String },
    #[error("Invalid disclosure format for _sd claim: `{0}`")]
    InvalidDisclosureForObject(String),
    #[error("Invalid disclosure format for array element: `{0}`")]
    InvalidDisclosureForArray(String),
    #[error("Decode error: `{0}`")]
    DecodeError(String),
    #[error("Hasher error: `{0}`")]
    HasherError(#[from] HasherError),
}
