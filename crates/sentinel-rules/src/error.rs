//! Error types for rule evaluation.

use thiserror::Error;

/// Result type alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while evaluating a single rule.
///
/// Rule errors never reach the caller of the ingestion pipeline: the engine
/// catches them, logs them, and treats the rule as having produced no alert.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A windowed query against the event store failed.
    #[error("{0}")]
    Store(#[from] sentinel_store::StoreError),

    /// The enrichment HTTP client could not be constructed or used.
    #[error("enrichment error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serializing the event or body for inspection failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_store::StoreError;

    #[test]
    fn store_error_passes_through_display() {
        let err = RuleError::from(StoreError::backend("query failed"));
        assert_eq!(err.to_string(), "store error: query failed");
    }
}
