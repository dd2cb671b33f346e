//! A service for parsing SD-JWTs and resolving their disclosures as a verifier.
//!
//! The signature of the token is not verified; do that with the issuer key
//! before trusting the returned claims.

use std::sync::Arc;

use sdjwt_crypto::CryptoProvider;

use crate::sdjwt::{JsonObject, SdJwt};
use crate::service::error::DisclosureServiceError;


pub struct DisclosureService {
    crypto_provider: Arc<dyn CryptoProvider>,
}

impl DisclosureService {
    pub fn new(crypto_provider: Arc<dyn CryptoProvider>) -> Self {
        Self { crypto_provider }
    }

    pub fn parse(&self, token: &str) -> Result<SdJwt, DisclosureServiceError> {
        Ok(SdJwt::new(token)?)
    }

    pub fn resolve(&self, sd_jwt: &SdJwt) -> Result<JsonObject, DisclosureServiceError> {
        Ok(sd_jwt.get_disclosed_claims_with(&*self.crypto_provider)?)
    }

    /// Parses `token` and returns its disclosed claims in one step.
    pub fn disclosed_claims(&self, token: &str) -> Result<JsonObject, DisclosureServiceError> {
        let sd_jwt = self.parse(token)?;
        self.resolve(&sd_jwt)
    }
}
