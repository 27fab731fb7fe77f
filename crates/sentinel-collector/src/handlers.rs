//! HTTP request handlers for the collector API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use sentinel_store::EventStore;
use sentinel_types::{LogEvent, RawEvent};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::CollectorResult;
use crate::ingest::IngestedEvent;
use crate::state::CollectorState;

/// Header carrying the project API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Successful collection response.
#[derive(Debug, Serialize)]
pub struct CollectResponse {
    /// Always true; failures use the error wire shape instead.
    pub success: bool,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status message.
    pub status: String,
    /// Service name.
    pub service: String,
}

/// Handle `POST /collect` — the ingestion-and-detection pipeline.
///
/// The request advances `Received → Authenticated → Persisted → Evaluated →
/// Responded`, exiting early with 403 on authentication failure and 500 on
/// persistence failure. Success is determined by persistence alone:
/// evaluation runs on its own task (so a vanished caller cannot cancel it)
/// and its outcome never changes the response.
pub async fn collect<S: EventStore + 'static>(
    State(state): State<Arc<CollectorState<S>>>,
    headers: HeaderMap,
    Json(raw): Json<RawEvent>,
) -> CollectorResult<Json<CollectResponse>> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let project = state.authenticator().resolve(api_key).await?;
    debug!(project_id = %project.id, "request authenticated");

    let IngestedEvent { event, body } = state.ingestor().ingest(&project, raw).await?;

    // Persistence is the commit point. Evaluation is detached from the
    // request future; awaiting the handle only delays the response, it does
    // not tie the task's fate to the connection.
    let evaluation = tokio::spawn(evaluate_and_emit(Arc::clone(&state), event, body));
    match evaluation.await {
        Ok(emitted) => debug!(alerts = emitted, "evaluation complete"),
        Err(err) => warn!(error = %err, "evaluation task failed"),
    }

    Ok(Json(CollectResponse { success: true }))
}

/// Runs rule evaluation for one persisted event and persists every draft.
///
/// Returns the number of alerts persisted. Sink failures are logged and do
/// not stop sibling alerts.
async fn evaluate_and_emit<S: EventStore>(
    state: Arc<CollectorState<S>>,
    event: LogEvent,
    body: Option<serde_json::Value>,
) -> usize {
    let drafts = state.engine().evaluate_event(&event, body.as_ref()).await;

    let mut emitted = 0;
    for draft in drafts {
        match state.sink().emit(draft, event.project_id, event.id).await {
            Ok(_) => emitted += 1,
            Err(err) => {
                error!(log_id = %event.id, error = %err, "failed to persist alert");
            }
        }
    }
    emitted
}

/// Handle `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "logsentinel-collector".to_string(),
    })
}
