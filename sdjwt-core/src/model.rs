use strum_macros::{Display, EnumString};

/// Hash algorithms usable as `_sd_alg`, named as in the IANA "Named Information
/// Hash Algorithm" registry.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum HashAlgorithmType {
    #[strum(serialize = "sha-256")]
    Sha256,
}
