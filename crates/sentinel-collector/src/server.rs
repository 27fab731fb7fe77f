//! Collector server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use sentinel_rules::GeoClient;
use sentinel_store::EventStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::CollectorConfig;
use crate::error::{CollectorError, CollectorResult};
use crate::routes::create_router;
use crate::state::CollectorState;

/// The collector HTTP server.
///
/// Wraps the composed pipeline state and serves the `/collect` intake API.
#[derive(Debug)]
pub struct CollectorServer<S> {
    state: Arc<CollectorState<S>>,
}

impl<S> Clone for CollectorServer<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: EventStore + 'static> CollectorServer<S> {
    /// Create a new collector server around the given store and geo client.
    #[must_use]
    pub fn new(config: CollectorConfig, store: Arc<S>, geo: GeoClient) -> Self {
        let state = Arc::new(CollectorState::new(config, store, geo));
        Self { state }
    }

    /// Get the collector state for external access.
    #[must_use]
    pub fn state(&self) -> Arc<CollectorState<S>> {
        Arc::clone(&self.state)
    }

    /// Create the router without starting the server.
    ///
    /// Useful for testing or embedding in another server.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        create_router(Arc::clone(&self.state))
    }

    /// Start the server and listen for connections.
    ///
    /// This method runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self, addr: SocketAddr) -> CollectorResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CollectorError::BindFailed(addr, e))?;

        info!(addr = %addr, "Collector listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| CollectorError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, addr: SocketAddr, shutdown: F) -> CollectorResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CollectorError::BindFailed(addr, e))?;

        info!(addr = %addr, "Collector listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| CollectorError::Internal(e.to_string()))?;

        info!("Collector shut down");
        Ok(())
    }
}
