//! Rule engine orchestration.
//!
//! [`RuleEngine`] runs the registered rule set against one persisted event.
//! Rules are independent, so they run concurrently — bounded by the
//! configured limit — while alert drafts are still emitted in registration
//! order. Each evaluation gets its own timeout, and any failure or timeout
//! degrades to "no alert" for that rule alone.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use sentinel_store::EventStore;
use sentinel_types::{AlertDraft, LogEvent};
use tracing::warn;

use crate::config::DetectionConfig;
use crate::geo::GeoClient;
use crate::rules::{DetectionRule, RuleContext};

/// Evaluates the registered detection rules against persisted events.
///
/// The engine holds no persistent state of its own: everything it knows
/// about history it queries from the store per evaluation.
#[derive(Debug)]
pub struct RuleEngine<S> {
    store: Arc<S>,
    geo: GeoClient,
    config: DetectionConfig,
    rules: Vec<DetectionRule>,
}

impl<S: EventStore> RuleEngine<S> {
    /// Creates an engine with the standard rule set.
    #[must_use]
    pub fn new(store: Arc<S>, geo: GeoClient, config: DetectionConfig) -> Self {
        Self::with_rules(store, geo, config, DetectionRule::standard_set())
    }

    /// Creates an engine with an explicit, ordered rule list.
    #[must_use]
    pub fn with_rules(
        store: Arc<S>,
        geo: GeoClient,
        config: DetectionConfig,
        rules: Vec<DetectionRule>,
    ) -> Self {
        Self {
            store,
            geo,
            config,
            rules,
        }
    }

    /// Returns the registered rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Returns the detection configuration.
    #[must_use]
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Evaluates every registered rule against one persisted event.
    ///
    /// `body` is the transient request payload from ingestion, if any.
    /// Returns the drafts of all rules that fired, in registration order.
    /// A rule that errors or exceeds the timeout is logged and skipped; it
    /// never affects sibling rules or the caller.
    pub async fn evaluate_event(
        &self,
        event: &LogEvent,
        body: Option<&serde_json::Value>,
    ) -> Vec<AlertDraft> {
        let ctx = RuleContext {
            event,
            body,
            store: self.store.as_ref(),
            geo: &self.geo,
            config: &self.config,
        };
        let timeout = self.config.rule_timeout;

        let results: Vec<Option<AlertDraft>> = stream::iter(self.rules.iter().copied())
            .map(|rule| {
                let ctx = &ctx;
                async move {
                    match tokio::time::timeout(timeout, rule.evaluate(ctx)).await {
                        Ok(Ok(draft)) => draft,
                        Ok(Err(err)) => {
                            warn!(rule = %rule.id(), error = %err, "rule evaluation failed, skipping");
                            None
                        }
                        Err(_) => {
                            warn!(
                                rule = %rule.id(),
                                timeout_ms = timeout.as_millis() as u64,
                                "rule evaluation timed out, skipping"
                            );
                            None
                        }
                    }
                }
            })
            .buffered(self.config.max_concurrent_rules.max(1))
            .collect()
            .await;

        results.into_iter().flatten().collect()
    }
}
