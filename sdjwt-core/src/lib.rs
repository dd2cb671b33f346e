//! Parsing, validation and selective disclosure of SD-JWTs.
//!
//! An SD-JWT carries a signed body in which some claims are replaced by digests.
//! A holder reveals such a claim by attaching the matching disclosure, a
//! base64url encoded `[salt, name, value]` (or `[salt, value]` for array
//! elements) array. This crate:
//!
//! * accepts tokens in compact (`header.payload.signature~disclosure~...~`) and
//!   general JWS JSON serialization,
//! * decodes and structurally validates header, body and disclosures, rejecting
//!   duplicate disclosures and duplicate digests,
//! * resolves every disclosure against the digests in the body, at any depth, and
//!   returns the disclosed claim set.
//!
//! Signature verification and key binding are left to the caller: the signature
//! and the key binding JWT are kept as opaque strings.
//!
//! ## Getting started
//!
//! ```ignore rust
//! let sd_jwt = SdJwt::new(token)?;
//! let claims = sd_jwt.get_disclosed_claims()?;
//! ```
//!
//! or through the core services:
//!
//! ```ignore rust
//! /// `None` initializes the core with the default configuration
//! let core = SdJwtCore::new(None);
//! let claims = core.disclosure_service.disclosed_claims(token)?;
//! ```

use std::{collections::HashMap, sync::Arc};

use sdjwt_crypto::imp::{hasher::sha256::SHA256, CryptoProviderImpl};
use sdjwt_crypto::Hasher;

use config::SdJwtCoreConfig;
use model::HashAlgorithmType;
use service::disclosure_service::DisclosureService;

pub mod config;
pub mod model;
pub mod sdjwt;
pub mod service;

pub use sdjwt::{Disclosure, JsonObject, SdJwt, SdJwtError};

pub struct SdJwtCore {
    pub disclosure_service: DisclosureService,
}

impl Default for SdJwtCore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SdJwtCore {
    pub fn new(config: Option<SdJwtCoreConfig>) -> Self {
        let config = config.unwrap_or_default();

        // initialize crypto provider
        let crypto_provider = Arc::new(crypto_provider(&config));

        Self {
            disclosure_service: DisclosureService::new(crypto_provider),
        }
    }
}

pub(crate) fn crypto_provider(config: &SdJwtCoreConfig) -> CryptoProviderImpl {
    let hashers: HashMap<String, Arc<dyn Hasher>> = config
        .hash_algorithms
        .iter()
        .map(|algorithm| {
            let hasher: Arc<dyn Hasher> = match algorithm {
                HashAlgorithmType::Sha256 => Arc::new(SHA256 {}),
            };
            (algorithm.to_string(), hasher)
        })
        .collect();

    CryptoProviderImpl::new(hashers)
}
