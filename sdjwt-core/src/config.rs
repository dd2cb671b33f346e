use crate::model::HashAlgorithmType;

pub struct SdJwtCoreConfig {
    /// Algorithms accepted in the `_sd_alg` claim. Each gets a hasher registered
    /// in the crypto provider.
    pub hash_algorithms: Vec<HashAlgorithmType>,
}

impl Default for SdJwtCoreConfig {
    fn default() -> Self {
        Self {
            hash_algorithms: vec![HashAlgorithmType::Sha256],
        }
    }
}
