//! Log event types.
//!
//! Three shapes, one per trust level:
//! - [`RawEvent`]: the wire payload exactly as an agent sent it — every field
//!   optional, nothing trusted
//! - [`NewLogEvent`]: a validated event stamped with the authenticated
//!   project, ready for insertion
//! - [`LogEvent`]: the persisted, immutable record with its store-assigned id

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{LogId, ProjectId};

/// The untrusted ingestion payload.
///
/// This is the boundary type for external, possibly hostile, data: fields may
/// be absent, and the opaque `body` is handed to detection rules transiently
/// without ever being persisted. Any client-supplied project identity is
/// ignored — the project always comes from the authenticated API key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    /// Client IP address as observed by the instrumented application.
    pub ip: Option<String>,
    /// HTTP method of the recorded request.
    pub method: Option<String>,
    /// Request URL including the query string.
    pub url: Option<String>,
    /// HTTP response status code.
    pub status: Option<i64>,
    /// Request handling duration in milliseconds.
    pub duration: Option<i64>,
    /// User agent header of the recorded request.
    pub user_agent: Option<String>,
    /// End-user identity observed by the instrumented application.
    pub user_id: Option<String>,
    /// Event time. Defaults to ingestion time when absent.
    pub timestamp: Option<DateTime<Utc>>,
    /// Opaque request body payload, inspected by detection rules only.
    pub body: Option<serde_json::Value>,
}

/// A validated log event awaiting persistence.
///
/// Carries everything a [`LogEvent`] does except the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLogEvent {
    /// Owning project, stamped from the authenticated identity.
    pub project_id: ProjectId,
    /// End-user identity observed by the instrumented application.
    pub user_id: Option<String>,
    /// Client IP address.
    pub ip: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Request URL including the query string.
    pub url: String,
    /// HTTP response status code.
    pub status: u16,
    /// Request handling duration in milliseconds.
    pub duration_ms: u64,
    /// User agent header.
    pub user_agent: Option<String>,
    /// Event time (not persistence time).
    pub timestamp: DateTime<Utc>,
}

impl NewLogEvent {
    /// Complete this event with its store-assigned id.
    #[must_use]
    pub fn into_event(self, id: LogId) -> LogEvent {
        LogEvent {
            id,
            project_id: self.project_id,
            user_id: self.user_id,
            ip: self.ip,
            method: self.method,
            url: self.url,
            status: self.status,
            duration_ms: self.duration_ms,
            user_agent: self.user_agent,
            timestamp: self.timestamp,
        }
    }
}

/// One persisted HTTP request observation.
///
/// Immutable after creation: rules read it but never mutate it. Every
/// persisted event has a non-zero id and belongs to exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Store-assigned identifier, monotonically orderable.
    pub id: LogId,
    /// Owning project.
    pub project_id: ProjectId,
    /// End-user identity observed by the instrumented application.
    pub user_id: Option<String>,
    /// Client IP address.
    pub ip: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Request URL including the query string.
    pub url: String,
    /// HTTP response status code.
    pub status: u16,
    /// Request handling duration in milliseconds.
    pub duration_ms: u64,
    /// User agent header.
    pub user_agent: Option<String>,
    /// Event time (not persistence time).
    pub timestamp: DateTime<Utc>,
}
