//! # sentinel-types
//!
//! Shared data model for the LogSentinel ingestion-and-detection pipeline.
//!
//! This crate defines the types that flow between the collector, the event
//! store, and the rule engine:
//! - [`Project`]: the tenant boundary, identified by an API key
//! - [`RawEvent`]: the untrusted ingestion payload as received over the wire
//! - [`LogEvent`]: a validated, persisted HTTP request observation
//! - [`Alert`]: a persisted detection finding referencing its trigger event
//! - [`Severity`] / [`RuleId`]: the closed classification vocabulary

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alert;
pub mod error;
pub mod event;
pub mod ids;
pub mod project;

pub use alert::{Alert, AlertDraft, NewAlert, RuleId, Severity};
pub use error::ModelError;
pub use event::{LogEvent, NewLogEvent, RawEvent};
pub use ids::{AlertId, LogId, ProjectId, UserId};
pub use project::{ApiKey, Project};
