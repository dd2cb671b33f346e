use std::collections::HashSet;

use sdjwt_crypto::Hasher;

use super::error::SdJwtError;
use super::mapper::b64url_to_string;
use super::model::Disclosure;

impl Disclosure {
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Claim name; `None` for array element disclosures.
    pub fn claim_name(&self) -> Option<&str> {
        self.claim_name.as_deref()
    }

    pub fn claim_value(&self) -> &str {
        &self.claim_value
    }

    /// Decoded JSON array text, e.g. `["salt","name","value"]`.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The disclosure exactly as it was listed in the token.
    pub fn encoded_value(&self) -> &str {
        &self.encoded_value
    }

    /// Digest of the encoded form. Always computed over the original encoded
    /// string, never over a re-encoding of the decoded array.
    pub fn digest(&self, hasher: &dyn Hasher) -> Result<String, SdJwtError> {
        Ok(hasher.hash_base64(self.encoded_value.as_bytes())?)
    }
}

/// Checks the disclosure segments for duplicates and decodes each of them.
/// Empty segments (left by separators) are skipped.
pub(super) fn validate_disclosures(disclosures: &[String]) -> Result<Vec<Disclosure>, SdJwtError> {
    let mut seen = HashSet::new();
    let mut result = vec![];

    for disclosure in disclosures.iter().filter(|d| !d.is_empty()) {
        if !seen.insert(disclosure.as_str()) {
            return Err(SdJwtError::DuplicateDisclosure(disclosure.to_owned()));
        }

        result.push(parse_disclosure(disclosure)?);
    }

    if result.is_empty() {
        return Err(SdJwtError::MissingDisclosures);
    }

    Ok(result)
}

pub(super) fn parse_disclosure(encoded: &str) -> Result<Disclosure, SdJwtError> {
    let decoded = b64url_to_string(encoded)
        .map_err(|e| SdJwtError::InvalidDisclosureEncoding(e.to_string()))?;

    let inner = decoded
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            SdJwtError::InvalidDisclosureStructure(format!(
                "decoded disclosure is not a valid array: {decoded}"
            ))
        })?;

    // the claim value may itself contain commas (objects, arrays, text), so
    // only the first two commas separate parts
    let parts: Vec<&str> = inner.splitn(3, ',').collect();

    let (salt, claim_name, claim_value) = match parts.as_slice() {
        [salt, claim_value] => (clean_part(salt), None, clean_part(claim_value)),
        [salt, claim_name, claim_value] => (
            clean_part(salt),
            Some(clean_part(claim_name).to_owned()),
            clean_part(claim_value),
        ),
        _ => {
            return Err(SdJwtError::InvalidDisclosureStructure(format!(
                "decoded disclosure does not have all required parts: {decoded}"
            )))
        }
    };

    if salt.is_empty() {
        return Err(SdJwtError::InvalidDisclosureStructure(format!(
            "decoded disclosure has an empty salt: {decoded}"
        )));
    }

    Ok(Disclosure {
        salt: salt.to_owned(),
        claim_name,
        claim_value: claim_value.to_owned(),
        raw_value: decoded.clone(),
        encoded_value: encoded.to_owned(),
    })
}

/// Trims whitespace and one layer of double quotes.
fn clean_part(part: &str) -> &str {
    let part = part.trim();
    let part = part.strip_prefix('"').unwrap_or(part);
    let part = part.strip_suffix('"').unwrap_or(part);
    part.trim()
}
