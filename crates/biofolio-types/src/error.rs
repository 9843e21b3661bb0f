use thiserror::Error;

/// Errors related to biography operations.
#[derive(Debug, Error)]
pub enum BiographyError {
    #[error("invalid birthdate '{input}': {reason}")]
    InvalidBirthdate { input: String, reason: String },

    #[error("custom field name '{0}' is reserved by the fixed record schema")]
    ReservedFieldName(String),
}

/// Errors related to photo uploads.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("unsupported photo type '{0}' (allowed: {1})")]
    UnsupportedExtension(String, String),

    #[error("photo is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
}
