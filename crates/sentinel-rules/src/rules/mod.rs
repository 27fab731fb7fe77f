//! The registered detection rules.
//!
//! Rules form a closed set: each is a [`DetectionRule`] variant with a
//! stable [`RuleId`], evaluated in registration order. A rule inspects one
//! persisted event (plus the transient request body) and decides whether to
//! draft an alert; it never mutates anything.

mod brute_force;
mod geo_anomaly;
mod sql_injection;
mod xss;

use sentinel_store::EventStore;
use sentinel_types::{AlertDraft, LogEvent, RuleId};

use crate::config::DetectionConfig;
use crate::error::RuleResult;
use crate::geo::GeoClient;

/// Everything a rule may consult while evaluating one event.
pub(crate) struct RuleContext<'a, S> {
    /// The persisted event under evaluation.
    pub event: &'a LogEvent,
    /// Transient request body from the ingestion payload, if any.
    pub body: Option<&'a serde_json::Value>,
    /// Store access for windowed history queries.
    pub store: &'a S,
    /// IP geolocation client.
    pub geo: &'a GeoClient,
    /// Detection parameters.
    pub config: &'a DetectionConfig,
}

/// A registered detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionRule {
    /// R1: repeated failed logins from one IP inside the trailing window.
    BruteForceLogin,
    /// R2: SQL keywords or comment tokens in the URL or request body.
    SqlInjection,
    /// R3: script tag in the serialized event.
    XssPayload,
    /// R4: successful login from outside the configured home country.
    GeoAnomaly,
}

impl DetectionRule {
    /// Returns the stable identifier of this rule.
    #[must_use]
    pub const fn id(&self) -> RuleId {
        match self {
            Self::BruteForceLogin => RuleId::BruteForceLogin,
            Self::SqlInjection => RuleId::SqlInjection,
            Self::XssPayload => RuleId::XssPayload,
            Self::GeoAnomaly => RuleId::GeoAnomaly,
        }
    }

    /// The standard rule set, in registration (and therefore emission) order.
    #[must_use]
    pub fn standard_set() -> Vec<Self> {
        vec![
            Self::BruteForceLogin,
            Self::SqlInjection,
            Self::XssPayload,
            Self::GeoAnomaly,
        ]
    }

    /// Evaluates this rule against one event.
    pub(crate) async fn evaluate<S: EventStore>(
        &self,
        ctx: &RuleContext<'_, S>,
    ) -> RuleResult<Option<AlertDraft>> {
        match self {
            Self::BruteForceLogin => brute_force::evaluate(ctx).await,
            Self::SqlInjection => sql_injection::evaluate(ctx),
            Self::XssPayload => xss::evaluate(ctx),
            Self::GeoAnomaly => geo_anomaly::evaluate(ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_registration_order() {
        let rules = DetectionRule::standard_set();
        let ids: Vec<_> = rules.iter().map(DetectionRule::id).collect();

        assert_eq!(
            ids,
            vec![
                RuleId::BruteForceLogin,
                RuleId::SqlInjection,
                RuleId::XssPayload,
                RuleId::GeoAnomaly,
            ]
        );
    }
}
