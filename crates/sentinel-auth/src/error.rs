//! Error types for authentication.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while resolving an API key.
///
/// There is deliberately a single variant: a missing key, an unknown key,
/// and a failed lookup are all reported identically so internal failures
/// never leak as a distinct signal to unauthenticated callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The API key is absent, malformed, or does not match any project.
    #[error("Invalid API Key")]
    InvalidApiKey,
}
