use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use sdjwt_core::service::error::DisclosureServiceError;
use sdjwt_core::SdJwtCore;
use sdjwt_crypto::imp::hasher::sha256::SHA256;
use sdjwt_crypto::Hasher;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn b64(value: &str) -> String {
    Base64UrlSafeNoPadding::encode_to_string(value).expect("base64 encoding")
}

fn digest(disclosure: &str) -> String {
    SHA256 {}
        .hash_base64(disclosure.as_bytes())
        .expect("hashing disclosure")
}

fn main() -> Result<(), DisclosureServiceError> {
    // RUST_LOG=sdjwt_core=debug shows the resolution steps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // As a holder we received these disclosures together with the issuer-signed JWT
    let given_name = b64(r#"["2GLC42sKQveCfGfryNRN9w","given_name","John"]"#);
    let family_name = b64(r#"["eluV5Og3gSNII8EYnsxA_A","family_name","Doe"]"#);
    let street = b64(r#"["6Ij7tM-a5iVPGboS5tmvVA","street_address","123 Main St"]"#);
    let nationality = b64(r#"["nPuoQnkRFq3BIeAm7AnXFA","US"]"#);

    let body = json!({
        "iss": "https://issuer.example.com",
        "iat": 1683000000,
        "_sd": [digest(&given_name), digest(&family_name)],
        "address": {
            "_sd": [digest(&street)],
            "country": "US"
        },
        "nationalities": [{ "...": digest(&nationality) }, "DE"],
        "_sd_alg": "sha-256"
    });

    let issuer_jwt = format!(
        "{}.{}.{}",
        b64(r#"{"alg":"ES256","typ":"vc+sd-jwt"}"#),
        b64(&body.to_string()),
        b64("signature-not-verified-in-this-example")
    );

    // The holder decides not to reveal the family name
    let presentation = format!("{issuer_jwt}~{given_name}~{street}~{nationality}~");

    let core = SdJwtCore::new(None);
    let service = core.disclosure_service;

    let sd_jwt = service.parse(&presentation)?;
    println!("Header: {}", json!(sd_jwt.header()));
    for disclosure in sd_jwt.disclosures() {
        println!(
            "Disclosure {}: {}",
            disclosure.claim_name().unwrap_or("<array element>"),
            disclosure.claim_value()
        );
    }

    let claims = service.resolve(&sd_jwt)?;
    println!(
        "Disclosed claims: {}",
        serde_json::to_string_pretty(&claims).expect("serializing claims")
    );

    Ok(())
}
