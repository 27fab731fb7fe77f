//! Shared collector state.

use std::sync::Arc;

use sentinel_auth::Authenticator;
use sentinel_rules::{GeoClient, RuleEngine};
use sentinel_store::EventStore;

use crate::config::CollectorConfig;
use crate::ingest::Ingestor;
use crate::sink::AlertSink;

/// Everything a request handler needs: the composed pipeline components
/// plus configuration. One instance is shared across all requests; none of
/// it is mutable — durable state lives in the store alone.
#[derive(Debug)]
pub struct CollectorState<S> {
    config: CollectorConfig,
    authenticator: Authenticator<S>,
    ingestor: Ingestor<S>,
    engine: RuleEngine<S>,
    sink: AlertSink<S>,
}

impl<S: EventStore> CollectorState<S> {
    /// Composes the pipeline around one store and geo client.
    #[must_use]
    pub fn new(config: CollectorConfig, store: Arc<S>, geo: GeoClient) -> Self {
        let authenticator = Authenticator::new(Arc::clone(&store));
        let ingestor = Ingestor::new(Arc::clone(&store));
        let sink = AlertSink::new(Arc::clone(&store));
        let engine = RuleEngine::new(store, geo, config.detection.clone());

        Self {
            config,
            authenticator,
            ingestor,
            engine,
            sink,
        }
    }

    /// Returns the service configuration.
    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Returns the authenticator.
    #[must_use]
    pub fn authenticator(&self) -> &Authenticator<S> {
        &self.authenticator
    }

    /// Returns the ingestor.
    #[must_use]
    pub fn ingestor(&self) -> &Ingestor<S> {
        &self.ingestor
    }

    /// Returns the rule engine.
    #[must_use]
    pub fn engine(&self) -> &RuleEngine<S> {
        &self.engine
    }

    /// Returns the alert sink.
    #[must_use]
    pub fn sink(&self) -> &AlertSink<S> {
        &self.sink
    }
}
