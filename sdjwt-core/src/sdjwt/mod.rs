//! SD-JWT parsing and disclosure resolution.
//
// https://www.ietf.org/archive/id/draft-ietf-oauth-selective-disclosure-jwt-05.html

use sdjwt_crypto::CryptoProvider;

use crate::config::SdJwtCoreConfig;

use self::digests::{gather_digests, verify_unique_digests};
use self::disclosures::validate_disclosures;
use self::parser::decompose_token;
use self::resolver::resolve_disclosures;

pub use self::error::SdJwtError;
pub use self::model::{Disclosure, JsonObject, SdJwt};


pub mod error;
pub mod model;

mod digests;
mod disclosures;
mod mapper;
mod parser;
mod resolver;

impl SdJwt {
    /// Parses and validates a token in general JWS JSON or compact serialization.
    ///
    /// # Errors
    ///
    /// Fails on malformed serialization, header, body or disclosures, on duplicate
    /// disclosures and on duplicate digests in the body.
    pub fn new(token: &str) -> Result<Self, SdJwtError> {
        let decomposed = decompose_token(token)?;

        let digests = gather_digests(&decomposed.body)?;
        verify_unique_digests(&digests)?;

        let disclosures = validate_disclosures(&decomposed.disclosures)?;

        tracing::debug!(
            disclosures = disclosures.len(),
            digests = digests.len(),
            key_binding = decomposed.key_binding_jwt.is_some(),
            "parsed SD-JWT"
        );

        Ok(Self {
            token: decomposed.token,
            header: decomposed.header,
            body: decomposed.body,
            signature: decomposed.signature,
            disclosures,
            digests,
            key_binding_jwt: decomposed.key_binding_jwt,
        })
    }

    /// Returns the plaintext claims together with every disclosed claim, using the
    /// hashers of the default configuration.
    ///
    /// # Errors
    ///
    /// See [`SdJwt::get_disclosed_claims_with`].
    pub fn get_disclosed_claims(&self) -> Result<JsonObject, SdJwtError> {
        let crypto = crate::crypto_provider(&SdJwtCoreConfig::default());
        self.get_disclosed_claims_with(&crypto)
    }

    /// Returns the plaintext claims together with every disclosed claim.
    ///
    /// The stored body is left untouched; resolution works on a copy.
    ///
    /// # Errors
    ///
    /// Fails when `_sd_alg` is missing, `none` or has no hasher in `crypto`, when
    /// a disclosure matches no digest, or when a disclosure is of the wrong form
    /// for the place its digest is referenced from.
    pub fn get_disclosed_claims_with(
        &self,
        crypto: &dyn CryptoProvider,
    ) -> Result<JsonObject, SdJwtError> {
        resolve_disclosures(&self.body, &self.disclosures, crypto)
    }

    /// The token as it was received (compact), or re-serialized (JWS JSON).
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn header(&self) -> &JsonObject {
        &self.header
    }

    /// Body as issued, digests included.
    pub fn body(&self) -> &JsonObject {
        &self.body
    }

    /// The encoded signature. It is not verified here.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn disclosures(&self) -> &[Disclosure] {
        &self.disclosures
    }

    /// Every digest referenced from the body, in traversal order.
    pub fn digests(&self) -> &[String] {
        &self.digests
    }

    pub fn key_binding_jwt(&self) -> Option<&str> {
        self.key_binding_jwt.as_deref()
    }
}
