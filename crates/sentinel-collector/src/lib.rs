//! # sentinel-collector
//!
//! The LogSentinel collector service: the HTTP boundary that composes the
//! ingestion-and-detection pipeline.
//!
//! A request moves through a fixed sequence —
//! `Received → Authenticated → Persisted → Evaluated → Responded` — with
//! early exits on authentication failure (403) and persistence failure
//! (500). Persistence is the commit point: the caller observes success once
//! the event is durable, and rule evaluation runs to completion on its own
//! task even if the caller goes away. Rules are advisory; their failures
//! never fail a request.
//!
//! This crate provides:
//! - [`Ingestor`]: validates and persists untrusted event payloads
//! - [`AlertSink`]: persists and reports the alerts rules produce
//! - [`CollectorState`] / [`create_router`] / [`CollectorServer`]: the axum
//!   wiring around the pipeline
//! - the `sentinel-collector` binary serving the API

pub mod config;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod routes;
pub mod server;
pub mod sink;
pub mod state;

pub use config::CollectorConfig;
pub use error::{CollectorError, CollectorResult, IngestError, SinkError};
pub use handlers::API_KEY_HEADER;
pub use ingest::{IngestedEvent, Ingestor};
pub use routes::create_router;
pub use server::CollectorServer;
pub use sink::AlertSink;
pub use state::CollectorState;
