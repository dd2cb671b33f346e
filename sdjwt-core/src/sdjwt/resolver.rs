use std::sync::Arc;

use sdjwt_crypto::{CryptoProvider, Hasher};
use serde_json::Value;

use super::digests::{array_element_digest, sd_digests};
use super::error::SdJwtError;
use super::mapper::parse_claim_value;
use super::model::{
    Disclosure, JsonObject, SELECTIVE_DISCLOSURE_ALGORITHM, SELECTIVE_DISCLOSURE_MARKER,
};

const NONE_ALGORITHM: &str = "none";

/// Splices every disclosure into a copy of `body` and returns the resulting claims
/// without the top level `_sd` and `_sd_alg` entries.
pub(super) fn resolve_disclosures(
    body: &JsonObject,
    disclosures: &[Disclosure],
    crypto: &dyn CryptoProvider,
) -> Result<JsonObject, SdJwtError> {
    let hasher = hasher_for_body(body, crypto)?;

    let mut claims = body.clone();

    for disclosure in disclosures {
        let digest = disclosure.digest(&*hasher)?;

        if !resolve_in_object(&mut claims, disclosure, &digest)? {
            return Err(SdJwtError::DigestNotFound {
                raw_value: disclosure.raw_value().to_owned(),
                digest,
            });
        }

        tracing::debug!(
            claim_name = disclosure.claim_name().unwrap_or("array element"),
            digest = %digest,
            "resolved disclosure"
        );
    }

    Ok(claims
        .into_iter()
        .filter(|(key, _)| {
            key != SELECTIVE_DISCLOSURE_MARKER && key != SELECTIVE_DISCLOSURE_ALGORITHM
        })
        .collect())
}

fn hasher_for_body(
    body: &JsonObject,
    crypto: &dyn CryptoProvider,
) -> Result<Arc<dyn Hasher>, SdJwtError> {
    let algorithm = match body.get(SELECTIVE_DISCLOSURE_ALGORITHM) {
        Some(Value::String(algorithm)) => algorithm,
        Some(other) => return Err(SdJwtError::UnsupportedAlgorithm(other.to_string())),
        None => {
            return Err(SdJwtError::UnsupportedAlgorithm(format!(
                "missing {SELECTIVE_DISCLOSURE_ALGORITHM} claim"
            )))
        }
    };

    if algorithm == NONE_ALGORITHM {
        return Err(SdJwtError::UnsupportedAlgorithm(algorithm.to_owned()));
    }

    tracing::debug!(algorithm = %algorithm, "selected disclosure hash algorithm");

    crypto
        .get_hasher(algorithm)
        .map_err(|_| SdJwtError::UnsupportedAlgorithm(algorithm.to_owned()))
}

fn resolve_in_object(
    object: &mut JsonObject,
    disclosure: &Disclosure,
    digest: &str,
) -> Result<bool, SdJwtError> {
    let referenced = match object.get(SELECTIVE_DISCLOSURE_MARKER) {
        Some(sd) => sd_digests(sd)?.any(|candidate| candidate == digest),
        None => false,
    };

    if referenced {
        let Some(claim_name) = disclosure.claim_name() else {
            return Err(SdJwtError::InvalidDisclosureForObject(
                disclosure.raw_value().to_owned(),
            ));
        };

        object.insert(
            claim_name.to_owned(),
            parse_claim_value(disclosure.claim_value()),
        );
        return Ok(true);
    }

    for (key, value) in object.iter_mut() {
        if key == SELECTIVE_DISCLOSURE_MARKER || key == SELECTIVE_DISCLOSURE_ALGORITHM {
            continue;
        }

        if resolve_in_value(value, disclosure, digest)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn resolve_in_array(
    array: &mut [Value],
    disclosure: &Disclosure,
    digest: &str,
) -> Result<bool, SdJwtError> {
    for element in array.iter_mut() {
        if array_element_digest(element) == Some(digest) {
            if disclosure.claim_name().is_some() {
                return Err(SdJwtError::InvalidDisclosureForArray(
                    disclosure.raw_value().to_owned(),
                ));
            }

            // array elements are spliced as the literal text, without reparsing
            *element = Value::String(disclosure.claim_value().to_owned());
            return Ok(true);
        }

        if resolve_in_value(element, disclosure, digest)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn resolve_in_value(
    value: &mut Value,
    disclosure: &Disclosure,
    digest: &str,
) -> Result<bool, SdJwtError> {
    match value {
        Value::Object(object) => resolve_in_object(object, disclosure, digest),
        Value::Array(array) => resolve_in_array(array, disclosure, digest),
        _ => Ok(false),
    }
}
