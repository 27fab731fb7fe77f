//! The event store trait.
//!
//! [`EventStore`] abstracts over storage backends so the pipeline can run
//! against the in-memory backend in tests and a database-backed client in
//! production. Methods return named `Send` futures (implementable with plain
//! `async fn`) so generic callers can move evaluation onto spawned tasks.

use std::future::Future;

use chrono::{DateTime, Utc};
use sentinel_types::{Alert, LogEvent, NewAlert, NewLogEvent, Project};

use crate::error::StoreResult;

/// Typed access to persisted projects, log events, and alerts.
///
/// The pipeline needs exactly four operations: a point lookup by unique API
/// key, two inserts returning the store-assigned id, and one time-ranged
/// count filtered by equality on `ip` and `status`.
pub trait EventStore: Send + Sync {
    /// Look up the project owning exactly this API key.
    ///
    /// Returns `Ok(None)` when no project matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn project_by_api_key(
        &self,
        api_key: &str,
    ) -> impl Future<Output = StoreResult<Option<Project>>> + Send;

    /// Persist a log event, assigning it an identifier.
    ///
    /// Assigned ids strictly increase in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the event.
    fn insert_event(
        &self,
        event: NewLogEvent,
    ) -> impl Future<Output = StoreResult<LogEvent>> + Send;

    /// Count events from `ip` with the given `status` whose timestamp is at
    /// or after `since` (inclusive lower bound).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn count_failures_since(
        &self,
        ip: &str,
        status: u16,
        since: DateTime<Utc>,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Persist an alert, assigning its identifier and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the alert.
    fn insert_alert(&self, alert: NewAlert) -> impl Future<Output = StoreResult<Alert>> + Send;
}
