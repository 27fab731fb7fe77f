//! API key resolution.

use std::sync::Arc;

use sentinel_store::EventStore;
use sentinel_types::Project;
use tracing::warn;

use crate::error::{AuthError, AuthResult};

/// Resolves API keys to project identities through the event store.
#[derive(Debug)]
pub struct Authenticator<S> {
    store: Arc<S>,
}

impl<S> Clone for Authenticator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EventStore> Authenticator<S> {
    /// Creates an authenticator backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a raw API key to the project owning it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidApiKey`] when the key is empty, when no
    /// project owns it, or when the lookup itself fails. Lookup failures are
    /// logged but reported identically to an unknown key.
    pub async fn resolve(&self, api_key: &str) -> AuthResult<Project> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AuthError::InvalidApiKey);
        }

        match self.store.project_by_api_key(api_key).await {
            Ok(Some(project)) => Ok(project),
            Ok(None) => Err(AuthError::InvalidApiKey),
            Err(err) => {
                warn!(error = %err, "api key lookup failed, rejecting as invalid");
                Err(AuthError::InvalidApiKey)
            }
        }
    }
}
