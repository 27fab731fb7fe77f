//! Route configuration for the collector API.

use std::sync::Arc;

use axum::routing::{get, post, Router};
use sentinel_store::EventStore;
use tower_http::trace::TraceLayer;

use crate::handlers::{collect, health};
use crate::state::CollectorState;

/// Create the collector API router.
pub fn create_router<S: EventStore + 'static>(state: Arc<CollectorState<S>>) -> Router {
    Router::new()
        // Event intake
        .route("/collect", post(collect::<S>))
        // Liveness
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
