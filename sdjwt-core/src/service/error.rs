use thiserror::Error;

use crate::sdjwt::SdJwtError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DisclosureServiceError {
    #[error("SD-JWT error: `{0}`")]
    SdJwtError(#[from] SdJwtError),
}
