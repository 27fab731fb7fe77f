//! Error types for event store operations.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the event store.
///
/// The error text is user-visible on the ingestion path (spelled into the
/// 500 response body), so variants carry the backend's own reason verbatim.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store error: {reason}")]
    Backend {
        /// Failure reason reported by the backend.
        reason: String,
    },

    /// The backend could not be reached.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Failure reason reported by the transport.
        reason: String,
    },
}

impl StoreError {
    /// Create a backend error with the given reason.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }

    /// Create an unavailable error with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let err = StoreError::backend("duplicate key");
        assert_eq!(err.to_string(), "store error: duplicate key");
    }

    #[test]
    fn unavailable_error_display() {
        let err = StoreError::unavailable("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
