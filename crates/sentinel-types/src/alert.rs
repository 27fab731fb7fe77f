//! Alert types and the detection vocabulary.
//!
//! This module provides:
//! - [`Severity`]: ordinal alert classification
//! - [`RuleId`]: the closed set of registered detection rules
//! - [`AlertDraft`]: what a rule returns when it fires
//! - [`NewAlert`]: a completed draft bound to its triggering event
//! - [`Alert`]: the persisted, append-only finding

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AlertId, LogId, ProjectId};

/// The severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, review when convenient.
    Low,
    /// Suspicious activity worth investigating.
    Medium,
    /// Likely attack in progress.
    High,
}

impl Severity {
    /// Returns the severity as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the priority of this severity (higher = more urgent).
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable identifier for a registered detection rule.
///
/// Rules are process-wide configuration: the set is closed and fixed for a
/// given deployment, so it is modeled as an enum rather than free-form
/// strings. The wire form is the stable short code (`R1`..`R4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Repeated failed logins from one IP inside the trailing window.
    #[serde(rename = "R1")]
    BruteForceLogin,
    /// SQL keywords or comment tokens in the URL or request body.
    #[serde(rename = "R2")]
    SqlInjection,
    /// Script tag in the serialized event.
    #[serde(rename = "R3")]
    XssPayload,
    /// Successful login from outside the configured home country.
    #[serde(rename = "R4")]
    GeoAnomaly,
}

impl RuleId {
    /// Returns the stable short code for this rule.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BruteForceLogin => "R1",
            Self::SqlInjection => "R2",
            Self::XssPayload => "R3",
            Self::GeoAnomaly => "R4",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a rule produces when it fires.
///
/// A draft carries only what the rule itself knows; it is completed into a
/// [`NewAlert`] by attaching the triggering event's project and log ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDraft {
    /// The rule that fired.
    pub rule_id: RuleId,
    /// Human-readable finding message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
}

impl AlertDraft {
    /// Create a new draft.
    #[must_use]
    pub fn new(rule_id: RuleId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule_id,
            message: message.into(),
            severity,
        }
    }

    /// Complete this draft into a [`NewAlert`] bound to its triggering event.
    #[must_use]
    pub fn complete(self, project_id: ProjectId, log_id: LogId) -> NewAlert {
        NewAlert {
            project_id,
            log_id,
            rule_id: self.rule_id,
            message: self.message,
            severity: self.severity,
        }
    }
}

/// A completed alert awaiting persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    /// Project owning the triggering event.
    pub project_id: ProjectId,
    /// The triggering event.
    pub log_id: LogId,
    /// The rule that fired.
    pub rule_id: RuleId,
    /// Human-readable finding message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
}

/// A persisted detection finding.
///
/// Append-only: never updated or deleted by the pipeline. Invariant: the
/// alert's `project_id` equals the `project_id` of the referenced log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Store-assigned identifier.
    pub id: AlertId,
    /// Project owning the triggering event.
    pub project_id: ProjectId,
    /// The triggering event.
    pub log_id: LogId,
    /// The rule that fired.
    pub rule_id: RuleId,
    /// Human-readable finding message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// When the alert was persisted.
    pub created_at: DateTime<Utc>,
}
