use thiserror::Error;

/// Failures raised while loading or storing form configuration.
///
/// Validation of a draft is never reported through this type; a rejected
/// submission is an ordinary [`crate::forms::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid field limit: {0}")]
    InvalidLimit(String),
}
