use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use serde_json::Value;

use super::error::SdJwtError;
use super::model::JsonObject;

pub(super) fn b64url_to_string(encoded: &str) -> Result<String, SdJwtError> {
    let decoded = Base64UrlSafeNoPadding::decode_to_vec(encoded, None)
        .map_err(|e| SdJwtError::DecodeError(e.to_string()))?;

    String::from_utf8(decoded).map_err(|e| SdJwtError::DecodeError(e.to_string()))
}

/// Decodes a base64url JOSE segment holding a JSON object (header or payload).
pub(super) fn json_object_from_b64url(encoded: &str) -> Result<JsonObject, SdJwtError> {
    let decoded = Base64UrlSafeNoPadding::decode_to_vec(encoded, None)
        .map_err(|e| SdJwtError::DecodeError(e.to_string()))?;

    serde_json::from_slice(&decoded).map_err(|e| SdJwtError::DecodeError(e.to_string()))
}

/// Reinterprets the literal text of a disclosed object claim as its native JSON type.
///
/// Attempts, in order: object, array, boolean, integer. Anything else stays a string.
pub(super) fn parse_claim_value(claim_value: &str) -> Value {
    if let Ok(object) = serde_json::from_str::<JsonObject>(claim_value) {
        return Value::Object(object);
    }

    if let Ok(array) = serde_json::from_str::<Vec<Value>>(claim_value) {
        return Value::Array(array);
    }

    if let Ok(boolean) = serde_json::from_str::<bool>(claim_value) {
        return Value::Bool(boolean);
    }

    if let Ok(integer) = serde_json::from_str::<i64>(claim_value) {
        return Value::from(integer);
    }

    Value::String(claim_value.to_owned())
}
