use std::collections::HashSet;

use serde_json::Value;

use super::error::SdJwtError;
use super::model::{JsonObject, ARRAY_ELEMENT_MARKER, SELECTIVE_DISCLOSURE_MARKER};

/// Collects every digest referenced from `body`, in `_sd` arrays or as
/// `{"...": <digest>}` array elements, at any depth.
pub(super) fn gather_digests(body: &JsonObject) -> Result<Vec<String>, SdJwtError> {
    let mut digests = vec![];
    gather_from_object(body, &mut digests)?;
    Ok(digests)
}

pub(super) fn verify_unique_digests(digests: &[String]) -> Result<(), SdJwtError> {
    let mut seen = HashSet::new();

    match digests.iter().find(|digest| !seen.insert(*digest)) {
        Some(duplicate) => Err(SdJwtError::DuplicateDigest(duplicate.to_owned())),
        None => Ok(()),
    }
}

/// Digest held by an array element of the form `{"...": <digest>}`.
pub(super) fn array_element_digest(value: &Value) -> Option<&str> {
    match value {
        Value::Object(object) if object.len() == 1 => {
            object.get(ARRAY_ELEMENT_MARKER).and_then(Value::as_str)
        }
        _ => None,
    }
}

fn gather_from_object(object: &JsonObject, digests: &mut Vec<String>) -> Result<(), SdJwtError> {
    for (key, value) in object {
        if key == SELECTIVE_DISCLOSURE_MARKER {
            digests.extend(sd_digests(value)?.map(str::to_owned));
            continue;
        }

        gather_from_value(value, digests)?;
    }

    Ok(())
}

fn gather_from_array(array: &[Value], digests: &mut Vec<String>) -> Result<(), SdJwtError> {
    for element in array {
        match array_element_digest(element) {
            Some(digest) => digests.push(digest.to_owned()),
            None => gather_from_value(element, digests)?,
        }
    }

    Ok(())
}

fn gather_from_value(value: &Value, digests: &mut Vec<String>) -> Result<(), SdJwtError> {
    match value {
        Value::Object(object) => gather_from_object(object, digests),
        Value::Array(array) => gather_from_array(array, digests),
        _ => Ok(()),
    }
}

/// Iterates the digests listed in an `_sd` value, failing unless it is an array of strings.
pub(super) fn sd_digests(value: &Value) -> Result<impl Iterator<Item = &str>, SdJwtError> {
    let array = value.as_array().ok_or_else(|| {
        SdJwtError::DecodeError(format!("malformed {SELECTIVE_DISCLOSURE_MARKER} claim: {value}"))
    })?;

    if let Some(invalid) = array.iter().find(|digest| !digest.is_string()) {
        return Err(SdJwtError::DecodeError(format!(
            "malformed {SELECTIVE_DISCLOSURE_MARKER} digest: {invalid}"
        )));
    }

    Ok(array.iter().filter_map(Value::as_str))
}
