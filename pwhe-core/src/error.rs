use thiserror::Error;

/// A required input was blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide the old configuration")]
    MissingConfig,
    #[error("Please provide the PW-Ether ID")]
    MissingTargetId,
}

/// Errors that can escape a conversion request.
///
/// Lines that fail to match a known pattern are never errors; they pass
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Rejected input; retrying with the same input fails the same way.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Unexpected internal fault. Nothing is partially applied.
    #[error("Conversion failed: {0}")]
    Failure(String),
}

pub(crate) fn validate(old_config: &str, target_id: &str) -> Result<(), ValidationError> {
    if old_config.trim().is_empty() {
        return Err(ValidationError::MissingConfig);
    }
    if target_id.trim().is_empty() {
        return Err(ValidationError::MissingTargetId);
    }
    Ok(())
}
