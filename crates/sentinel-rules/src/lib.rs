//! # sentinel-rules
//!
//! Threat detection rule engine for the LogSentinel pipeline.
//!
//! The engine runs a fixed, ordered set of detection rules against each
//! persisted log event and produces zero or more alert drafts:
//! - **R1** brute-force login: repeated failures from one IP inside a
//!   trailing window, counted through the event store
//! - **R2** SQL injection: keyword and comment-token patterns in the URL or
//!   request body
//! - **R3** XSS payload: script tag in the serialized event
//! - **R4** geo anomaly: successful login resolving outside the home country
//!   via an external IP lookup
//!
//! Rules are evaluated with bounded concurrency and a per-rule timeout; a
//! failing or timed-out rule is logged and skipped without affecting its
//! siblings or the request that triggered evaluation.

pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod rules;

pub use config::{DetectionConfig, GeoConfig};
pub use engine::RuleEngine;
pub use error::{RuleError, RuleResult};
pub use geo::{CountryLookup, GeoClient};
pub use rules::DetectionRule;
