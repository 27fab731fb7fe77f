//! Collector service configuration.

use std::net::SocketAddr;

use sentinel_rules::{DetectionConfig, GeoConfig};

/// Configuration for the collector service.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
    /// Detection rule parameters.
    pub detection: DetectionConfig,
    /// IP geolocation client parameters.
    pub geo: GeoConfig,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            detection: DetectionConfig::default(),
            geo: GeoConfig::default(),
        }
    }
}

impl CollectorConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the detection parameters.
    #[must_use]
    pub fn with_detection(mut self, detection: DetectionConfig) -> Self {
        self.detection = detection;
        self
    }

    /// Set the geolocation client parameters.
    #[must_use]
    pub fn with_geo(mut self, geo: GeoConfig) -> Self {
        self.geo = geo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_collector_port() {
        let config = CollectorConfig::default();
        assert_eq!(config.bind_addr.port(), 4000);
    }

    #[test]
    fn builder_overrides() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 9000));
        let config = CollectorConfig::new(addr)
            .with_detection(DetectionConfig::default().with_home_country("Norway"))
            .with_geo(GeoConfig::default().with_endpoint("http://localhost:8089"));

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.detection.home_country, "Norway");
        assert_eq!(config.geo.endpoint, "http://localhost:8089");
    }
}
