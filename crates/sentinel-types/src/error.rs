//! Error types for the shared data model.

use thiserror::Error;

/// Errors produced while constructing or parsing model types.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A value failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ModelError::Validation("invalid project ID: bad uuid".to_string());
        assert!(err.to_string().contains("invalid project ID"));
    }
}
