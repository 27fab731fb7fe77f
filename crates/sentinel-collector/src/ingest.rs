//! Event ingestion.
//!
//! The [`Ingestor`] sits between the untrusted wire payload and the store:
//! it validates the fields a [`sentinel_types::LogEvent`] requires, stamps
//! the identity of the authenticated project — never the client's claim —
//! and persists the event. Nothing downstream ever sees an event that is
//! not durable.

use std::sync::Arc;

use chrono::Utc;
use sentinel_store::EventStore;
use sentinel_types::{LogEvent, NewLogEvent, Project, RawEvent};
use tracing::debug;

use crate::error::IngestError;

/// A persisted event together with its transient request body.
///
/// The body never reaches the store; it exists only for the duration of rule
/// evaluation.
#[derive(Debug, Clone)]
pub struct IngestedEvent {
    /// The durable event, with its store-assigned id.
    pub event: LogEvent,
    /// Opaque request body for detection rules.
    pub body: Option<serde_json::Value>,
}

/// Validates, normalizes, and durably records incoming events.
#[derive(Debug)]
pub struct Ingestor<S> {
    store: Arc<S>,
}

impl<S> Clone for Ingestor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EventStore> Ingestor<S> {
    /// Creates an ingestor backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validates and persists one event on behalf of `project`.
    ///
    /// The project identity always comes from the authenticated caller; a
    /// client-supplied project id in the payload is ignored. A missing
    /// timestamp defaults to ingestion time.
    ///
    /// # Errors
    ///
    /// Returns a validation error when required fields are absent or
    /// unusable, or a store error when persistence fails. Either way the
    /// pipeline stops: no rules run over an unpersisted event.
    pub async fn ingest(
        &self,
        project: &Project,
        raw: RawEvent,
    ) -> Result<IngestedEvent, IngestError> {
        let method = raw.method.ok_or(IngestError::MissingField { name: "method" })?;
        let url = raw.url.ok_or(IngestError::MissingField { name: "url" })?;

        let status = raw.status.ok_or(IngestError::MissingField { name: "status" })?;
        let status = u16::try_from(status).map_err(|_| IngestError::InvalidField {
            name: "status",
            reason: format!("{status} is not a valid HTTP status"),
        })?;

        let duration = raw
            .duration
            .ok_or(IngestError::MissingField { name: "duration" })?;
        let duration_ms = u64::try_from(duration).map_err(|_| IngestError::InvalidField {
            name: "duration",
            reason: "must be non-negative".to_string(),
        })?;

        let timestamp = raw.timestamp.unwrap_or_else(Utc::now);

        let event = self
            .store
            .insert_event(NewLogEvent {
                project_id: project.id,
                user_id: raw.user_id,
                ip: raw.ip,
                method,
                url,
                status,
                duration_ms,
                user_agent: raw.user_agent,
                timestamp,
            })
            .await?;

        debug!(log_id = %event.id, project_id = %event.project_id, "event persisted");

        Ok(IngestedEvent {
            event,
            body: raw.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_store::MemoryStore;
    use sentinel_types::{LogId, UserId};

    fn make_raw() -> RawEvent {
        RawEvent {
            ip: Some("203.0.113.9".to_string()),
            method: Some("GET".to_string()),
            url: Some("/products".to_string()),
            status: Some(200),
            duration: Some(35),
            user_agent: Some("curl/8.0".to_string()),
            user_id: Some("end-user-1".to_string()),
            timestamp: None,
            body: None,
        }
    }

    fn make_project() -> Project {
        Project::new(UserId::new(), "key", "App")
    }

    #[tokio::test]
    async fn ingest_persists_and_returns_id() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(Arc::clone(&store));
        let project = make_project();

        let ingested = ingestor.ingest(&project, make_raw()).await.unwrap();

        assert_eq!(ingested.event.id, LogId(1));
        assert_eq!(ingested.event.project_id, project.id);
        assert_eq!(store.event_count(), 1);
    }

    #[tokio::test]
    async fn project_id_comes_from_authenticated_project() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(Arc::clone(&store));
        let project = make_project();

        // RawEvent has no project field at all: a spoofed id in the JSON
        // payload is dropped during deserialization.
        let raw: RawEvent = serde_json::from_str(
            r#"{"method":"GET","url":"/x","status":200,"duration":1,"project_id":"spoofed"}"#,
        )
        .unwrap();
        let ingested = ingestor.ingest(&project, raw).await.unwrap();

        assert_eq!(ingested.event.project_id, project.id);
    }

    #[tokio::test]
    async fn missing_timestamp_defaults_to_now() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(store);

        let before = Utc::now();
        let ingested = ingestor.ingest(&make_project(), make_raw()).await.unwrap();

        assert!(ingested.event.timestamp >= before);
        assert!(ingested.event.timestamp <= Utc::now());
    }

    #[tokio::test]
    async fn supplied_timestamp_is_kept() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(store);

        let event_time = Utc::now() - chrono::Duration::seconds(90);
        let mut raw = make_raw();
        raw.timestamp = Some(event_time);
        let ingested = ingestor.ingest(&make_project(), raw).await.unwrap();

        assert_eq!(ingested.event.timestamp, event_time);
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(Arc::clone(&store));
        let project = make_project();

        for strip in ["method", "url", "status", "duration"] {
            let mut raw = make_raw();
            match strip {
                "method" => raw.method = None,
                "url" => raw.url = None,
                "status" => raw.status = None,
                _ => raw.duration = None,
            }
            let result = ingestor.ingest(&project, raw).await;
            assert!(
                matches!(result, Err(IngestError::MissingField { name }) if name == strip),
                "expected missing-field error for {strip}"
            );
        }
        assert_eq!(store.event_count(), 0);
    }

    #[tokio::test]
    async fn negative_duration_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(store);

        let mut raw = make_raw();
        raw.duration = Some(-5);
        let result = ingestor.ingest(&make_project(), raw).await;

        assert!(matches!(
            result,
            Err(IngestError::InvalidField { name: "duration", .. })
        ));
    }

    #[tokio::test]
    async fn out_of_range_status_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(store);

        let mut raw = make_raw();
        raw.status = Some(100_000);
        let result = ingestor.ingest(&make_project(), raw).await;

        assert!(matches!(
            result,
            Err(IngestError::InvalidField { name: "status", .. })
        ));
    }

    #[tokio::test]
    async fn body_is_carried_transiently_not_persisted() {
        let store = Arc::new(MemoryStore::new());
        let ingestor = Ingestor::new(Arc::clone(&store));

        let mut raw = make_raw();
        raw.body = Some(serde_json::json!({"comment": "hello"}));
        let ingested = ingestor.ingest(&make_project(), raw).await.unwrap();

        assert!(ingested.body.is_some());
        // The persisted record has no body field to begin with
        let stored = serde_json::to_value(&store.events()[0]).unwrap();
        assert!(stored.get("body").is_none());
    }
}
