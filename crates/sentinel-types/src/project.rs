//! Project identity and API key handling.
//!
//! A [`Project`] is the tenant boundary: every persisted log event and alert
//! belongs to exactly one project, and the project's [`ApiKey`] is the sole
//! credential the collector accepts.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ids::{ProjectId, UserId};

/// A project API key.
///
/// The key is the raw secret as provisioned; the event store performs a point
/// lookup on the exact value. The `Debug` representation is redacted and the
/// buffer is zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key is empty after trimming whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the key in debug output
        let visible = if self.0.len() > 8 {
            format!("{}...", &self.0[..8])
        } else {
            "[SHORT]".to_string()
        };
        f.debug_tuple("ApiKey").field(&visible).finish()
    }
}

/// A project owning log events and alerts.
///
/// Projects are created by provisioning (outside this pipeline) and are
/// referenced, never duplicated, by everything they own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// User who owns this project.
    pub user_id: UserId,
    /// The API key agents authenticate with.
    pub api_key: ApiKey,
    /// Human-readable project name.
    pub name: String,
}

impl Project {
    /// Create a new project with a freshly minted identifier.
    #[must_use]
    pub fn new(user_id: UserId, api_key: impl Into<ApiKey>, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            user_id,
            api_key: api_key.into(),
            name: name.into(),
        }
    }
}
