use serde::{Deserialize, Serialize};

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub(super) const SELECTIVE_DISCLOSURE_MARKER: &str = "_sd";
pub(super) const SELECTIVE_DISCLOSURE_ALGORITHM: &str = "_sd_alg";
pub(super) const ARRAY_ELEMENT_MARKER: &str = "...";

pub(super) const DISCLOSURE_SEPARATOR: char = '~';
pub(super) const JWT_SEPARATOR: char = '.';

/// A validated SD-JWT. Created with [`SdJwt::new`](super::SdJwt::new), read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SdJwt {
    pub(super) token: String,
    pub(super) header: JsonObject,
    pub(super) body: JsonObject,
    pub(super) signature: String,
    pub(super) disclosures: Vec<Disclosure>,
    pub(super) digests: Vec<String>,
    pub(super) key_binding_jwt: Option<String>,
}

/// A single decoded disclosure.
///
/// `claim_value` is kept as text, exactly as it appeared inside the decoded array
/// minus surrounding whitespace and quotes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disclosure {
    pub(super) salt: String,
    pub(super) claim_name: Option<String>,
    pub(super) claim_value: String,
    pub(super) raw_value: String,
    pub(super) encoded_value: String,
}

/// General JWS JSON serialization of an SD-JWT.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct JwsSdJwt {
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub protected: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub disclosures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_jwt: Option<String>,
}

/// Parts of a token before any body or disclosure validation.
#[derive(Debug)]
pub(super) struct DecomposedToken {
    pub token: String,
    pub header: JsonObject,
    pub body: JsonObject,
    pub signature: String,
    pub disclosures: Vec<String>,
    pub key_binding_jwt: Option<String>,
}
