use super::error::SdJwtError;
use super::mapper::json_object_from_b64url;
use super::model::{DecomposedToken, JwsSdJwt, DISCLOSURE_SEPARATOR, JWT_SEPARATOR};

/// Splits a token in either serialization into decoded header and body plus the
/// still-encoded signature, disclosures and key binding JWT.
pub(super) fn decompose_token(token: &str) -> Result<DecomposedToken, SdJwtError> {
    match serde_json::from_str::<JwsSdJwt>(token) {
        Ok(jws) => {
            tracing::debug!("decoding SD-JWT in general JWS JSON serialization");
            decompose_jws(jws)
        }
        Err(_) => {
            tracing::debug!("decoding SD-JWT in compact serialization");
            decompose_compact(token)
        }
    }
}

fn decompose_jws(jws: JwsSdJwt) -> Result<DecomposedToken, SdJwtError> {
    let token =
        serde_json::to_string(&jws).map_err(|e| SdJwtError::InvalidFormat(e.to_string()))?;

    let JwsSdJwt {
        payload,
        protected,
        signature,
        disclosures,
        kb_jwt,
    } = jws;

    let (Some(payload), Some(protected), Some(signature)) = (payload, protected, signature) else {
        return Err(SdJwtError::InvalidFormat(
            "`payload`, `protected` and `signature` are required".to_owned(),
        ));
    };

    Ok(DecomposedToken {
        token,
        header: json_object_from_b64url(&protected)?,
        body: json_object_from_b64url(&payload)?,
        signature,
        disclosures: disclosures.unwrap_or_default(),
        key_binding_jwt: kb_jwt.filter(|kb_jwt| !kb_jwt.is_empty()),
    })
}

fn decompose_compact(token: &str) -> Result<DecomposedToken, SdJwtError> {
    let mut sections: Vec<&str> = token.split(DISCLOSURE_SEPARATOR).collect();
    if sections.len() < 2 {
        return Err(SdJwtError::MissingDisclosures);
    }

    let jwt = sections.remove(0);

    // disclosures are base64url and never contain a dot, a key binding JWT always does
    let has_key_binding_jwt = sections
        .last()
        .is_some_and(|last| last.contains(JWT_SEPARATOR));
    let key_binding_jwt = if has_key_binding_jwt {
        sections.pop().map(str::to_owned)
    } else {
        None
    };

    let jwt_parts: Vec<&str> = jwt.split(JWT_SEPARATOR).collect();
    let [header, payload, signature] = jwt_parts.as_slice() else {
        return Err(SdJwtError::InvalidJwtStructure(jwt_parts.len()));
    };

    Ok(DecomposedToken {
        token: token.to_owned(),
        header: json_object_from_b64url(header)?,
        body: json_object_from_b64url(payload)?,
        signature: (*signature).to_owned(),
        disclosures: sections.into_iter().map(str::to_owned).collect(),
        key_binding_jwt,
    })
}
