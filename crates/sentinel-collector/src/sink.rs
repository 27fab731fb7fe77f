//! Alert persistence.
//!
//! The [`AlertSink`] completes rule drafts into full alerts — binding the
//! triggering event's project and log ids — and persists them. The sink does
//! not deduplicate: idempotence is a rule's responsibility.

use std::sync::Arc;

use sentinel_store::EventStore;
use sentinel_types::{Alert, AlertDraft, LogId, ProjectId};
use tracing::info;

use crate::error::SinkError;

/// Persists alerts and reports them to the operator.
#[derive(Debug)]
pub struct AlertSink<S> {
    store: Arc<S>,
}

impl<S> Clone for AlertSink<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EventStore> AlertSink<S> {
    /// Creates a sink backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Completes a draft and persists it.
    ///
    /// `project_id` and `log_id` come from the triggering event, which keeps
    /// the alert/event ownership invariant by construction. The store stamps
    /// `created_at` at persistence time.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when persistence fails. Callers log it and
    /// continue: the triggering request has already succeeded, and sibling
    /// alerts are unaffected.
    pub async fn emit(
        &self,
        draft: AlertDraft,
        project_id: ProjectId,
        log_id: LogId,
    ) -> Result<Alert, SinkError> {
        let alert = self
            .store
            .insert_alert(draft.complete(project_id, log_id))
            .await?;

        info!(
            alert_id = %alert.id,
            rule = %alert.rule_id,
            severity = %alert.severity,
            project_id = %alert.project_id,
            log_id = %alert.log_id,
            message = %alert.message,
            "alert raised"
        );

        Ok(alert)
    }
}
