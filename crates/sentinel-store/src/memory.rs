//! In-memory event store.
//!
//! This module provides [`MemoryStore`], a thread-safe [`EventStore`]
//! implementation backed by reader-writer locked collections and atomic id
//! counters. It serves as the test double for the whole pipeline and as a
//! self-contained development backend for the collector binary.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sentinel_types::{Alert, AlertId, LogEvent, LogId, NewAlert, NewLogEvent, Project};

use crate::error::StoreResult;
use crate::traits::EventStore;

/// Thread-safe in-memory store for projects, log events, and alerts.
#[derive(Debug)]
pub struct MemoryStore {
    /// Projects indexed by API key.
    projects: RwLock<HashMap<String, Project>>,
    /// All persisted log events, in insertion order.
    events: RwLock<Vec<LogEvent>>,
    /// All persisted alerts, in insertion order.
    alerts: RwLock<Vec<Alert>>,
    /// Next log event id.
    next_log_id: AtomicU64,
    /// Next alert id.
    next_alert_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new empty store.
    ///
    /// Id assignment starts at 1 so a zero id never denotes a persisted row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
            events: RwLock::new(Vec::new()),
            alerts: RwLock::new(Vec::new()),
            next_log_id: AtomicU64::new(1),
            next_alert_id: AtomicU64::new(1),
        }
    }

    /// Registers a project so its API key resolves.
    ///
    /// Replaces any project previously registered under the same key.
    pub fn register_project(&self, project: Project) {
        tracing::debug!(project_id = %project.id, name = %project.name, "project registered");
        self.projects
            .write()
            .insert(project.api_key.as_str().to_string(), project);
    }

    /// Returns a snapshot of all persisted log events.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.read().clone()
    }

    /// Returns a snapshot of all persisted alerts.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().clone()
    }

    /// Returns the number of persisted log events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    /// Returns the number of persisted alerts.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts.read().len()
    }
}

impl EventStore for MemoryStore {
    async fn project_by_api_key(&self, api_key: &str) -> StoreResult<Option<Project>> {
        Ok(self.projects.read().get(api_key).cloned())
    }

    async fn insert_event(&self, event: NewLogEvent) -> StoreResult<LogEvent> {
        let id = LogId(self.next_log_id.fetch_add(1, Ordering::Relaxed));
        let event = event.into_event(id);
        self.events.write().push(event.clone());
        Ok(event)
    }

    async fn count_failures_since(
        &self,
        ip: &str,
        status: u16,
        since: DateTime<Utc>,
    ) -> StoreResult<u64> {
        let count = self
            .events
            .read()
            .iter()
            .filter(|e| e.ip.as_deref() == Some(ip) && e.status == status && e.timestamp >= since)
            .count();
        Ok(count as u64)
    }

    async fn insert_alert(&self, alert: NewAlert) -> StoreResult<Alert> {
        let id = AlertId(self.next_alert_id.fetch_add(1, Ordering::Relaxed));
        let alert = Alert {
            id,
            project_id: alert.project_id,
            log_id: alert.log_id,
            rule_id: alert.rule_id,
            message: alert.message,
            severity: alert.severity,
            created_at: Utc::now(),
        };
        self.alerts.write().push(alert.clone());
        Ok(alert)
    }
}
