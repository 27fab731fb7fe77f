//! LogSentinel collector binary.
//!
//! Serves the authenticated `/collect` intake API backed by the in-memory
//! event store. Runtime parameters come from the environment:
//! - `SENTINEL_BIND_ADDR` (or the first CLI argument): listen address
//! - `SENTINEL_HOME_COUNTRY`: expected login country for the geo rule
//! - `SENTINEL_GEO_ENDPOINT`: IP→country lookup service base URL
//! - `SENTINEL_DEV_API_KEY`: seeds a development project under this key

use std::net::SocketAddr;
use std::sync::Arc;

use sentinel_collector::{CollectorConfig, CollectorServer};
use sentinel_rules::{DetectionConfig, GeoClient, GeoConfig};
use sentinel_store::MemoryStore;
use sentinel_types::{Project, UserId};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_addr: SocketAddr = std::env::var("SENTINEL_BIND_ADDR")
        .ok()
        .or_else(|| std::env::args().nth(1))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 4000)));

    let mut detection = DetectionConfig::default();
    if let Ok(country) = std::env::var("SENTINEL_HOME_COUNTRY") {
        detection = detection.with_home_country(country);
    }

    let mut geo_config = GeoConfig::default();
    if let Ok(endpoint) = std::env::var("SENTINEL_GEO_ENDPOINT") {
        geo_config = geo_config.with_endpoint(endpoint);
    }

    let config = CollectorConfig::new(bind_addr)
        .with_detection(detection)
        .with_geo(geo_config.clone());

    let geo = match GeoClient::new(&geo_config) {
        Ok(geo) => geo,
        Err(err) => {
            error!("failed to build geo client: {err}");
            std::process::exit(1);
        }
    };

    let store = Arc::new(MemoryStore::new());
    if let Ok(api_key) = std::env::var("SENTINEL_DEV_API_KEY") {
        let project = Project::new(UserId::new(), api_key, "development");
        info!(project_id = %project.id, "seeded development project");
        store.register_project(project);
    }

    info!("Starting LogSentinel collector on {}", bind_addr);
    info!("  Intake endpoint: http://{}/collect", bind_addr);

    let server = CollectorServer::new(config, store, geo);
    if let Err(e) = server.serve(bind_addr).await {
        error!("Collector error: {}", e);
        std::process::exit(1);
    }
}
