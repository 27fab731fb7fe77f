//! IP geolocation enrichment.
//!
//! [`GeoClient`] resolves an IP address to a country name over HTTP. The
//! upstream service is treated as unreliable: timeouts, non-2xx responses,
//! and malformed bodies all degrade to [`CountryLookup::Unknown`] instead of
//! surfacing an error, so a flaky lookup can never stall or fail the
//! ingestion pipeline beyond its own timeout budget.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::GeoConfig;
use crate::error::RuleResult;

/// Longest plausible country name; anything longer is a malformed response.
const MAX_COUNTRY_LEN: usize = 56;

/// Country lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryLookup {
    /// Country was resolved.
    Found(String),
    /// Country could not be determined.
    Unknown,
}

/// HTTP client for IP→country resolution.
///
/// Lookups hit `{endpoint}/{ip}/country_name/` and expect a plain country
/// name in the response body. Successful resolutions are cached per IP;
/// failures are not, so transient outages are retried on the next event.
pub struct GeoClient {
    http: reqwest::Client,
    endpoint: String,
    /// Cache of IP -> resolved country.
    cache: RwLock<HashMap<String, String>>,
    /// Optional lookup override (for testing/integration).
    #[allow(clippy::type_complexity)]
    custom_lookup: Option<Box<dyn Fn(&str) -> CountryLookup + Send + Sync>>,
}

impl GeoClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &GeoConfig) -> RuleResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            cache: RwLock::new(HashMap::new()),
            custom_lookup: None,
        })
    }

    /// Replaces the HTTP lookup with a custom function.
    ///
    /// This allows tests and embedded deployments to resolve countries
    /// deterministically without the network.
    #[must_use]
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> CountryLookup + Send + Sync + 'static,
    {
        self.custom_lookup = Some(Box::new(lookup));
        self
    }

    /// Resolves the country for an IP address.
    ///
    /// Never fails: every error path collapses to [`CountryLookup::Unknown`].
    pub async fn country_for(&self, ip: &str) -> CountryLookup {
        if let Some(lookup) = &self.custom_lookup {
            return lookup(ip);
        }

        if let Some(country) = self.cache.read().get(ip) {
            return CountryLookup::Found(country.clone());
        }

        let result = self.fetch_country(ip).await;
        if let CountryLookup::Found(country) = &result {
            self.cache.write().insert(ip.to_string(), country.clone());
        }
        result
    }

    /// Performs the HTTP lookup.
    async fn fetch_country(&self, ip: &str) -> CountryLookup {
        let url = format!("{}/{ip}/country_name/", self.endpoint);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(ip = %ip, error = %err, "country lookup request failed");
                return CountryLookup::Unknown;
            }
        };

        if !response.status().is_success() {
            debug!(ip = %ip, status = %response.status(), "country lookup returned non-success");
            return CountryLookup::Unknown;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(ip = %ip, error = %err, "country lookup body unreadable");
                return CountryLookup::Unknown;
            }
        };

        let country = body.trim();
        // Error payloads come back as JSON rather than a bare country name
        if country.is_empty() || country.len() > MAX_COUNTRY_LEN || country.contains('{') {
            debug!(ip = %ip, "country lookup returned malformed body");
            return CountryLookup::Unknown;
        }

        CountryLookup::Found(country.to_string())
    }

    /// Returns the number of cached resolutions.
    #[must_use]
    pub fn cache_size(&self) -> usize {
        self.cache.read().len()
    }

    /// Clears the resolution cache.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}

// Manual Debug implementation to skip the custom_lookup field
impl std::fmt::Debug for GeoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoClient")
            .field("endpoint", &self.endpoint)
            .field("cache_size", &self.cache.read().len())
            .field("has_custom_lookup", &self.custom_lookup.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn make_client() -> GeoClient {
        GeoClient::new(&GeoConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn custom_lookup_bypasses_http() {
        let client = make_client().with_lookup(|_| CountryLookup::Found("Norway".into()));

        let result = client.country_for("203.0.113.9").await;
        assert_eq!(result, CountryLookup::Found("Norway".to_string()));
    }

    #[tokio::test]
    async fn custom_lookup_can_return_unknown() {
        let client = make_client().with_lookup(|_| CountryLookup::Unknown);

        let result = client.country_for("203.0.113.9").await;
        assert_eq!(result, CountryLookup::Unknown);
    }

    #[tokio::test]
    async fn lookup_receives_requested_ip() {
        let client = make_client().with_lookup(|ip| CountryLookup::Found(format!("country-of-{ip}")));

        let result = client.country_for("198.51.100.7").await;
        assert_eq!(
            result,
            CountryLookup::Found("country-of-198.51.100.7".to_string())
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_to_unknown() {
        // Reserved TEST-NET address with an aggressive timeout: the request
        // cannot succeed, and the failure must not surface as an error.
        let config = GeoConfig::default()
            .with_endpoint("http://192.0.2.1:9")
            .with_timeout(std::time::Duration::from_millis(50));
        let client = GeoClient::new(&config).unwrap();

        let result = client.country_for("203.0.113.9").await;
        assert_eq!(result, CountryLookup::Unknown);
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let config = GeoConfig::default().with_endpoint("https://ipapi.co/");
        let client = GeoClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("https://ipapi.co"));
        assert!(!debug.contains("ipapi.co/\""));
    }

    #[test]
    fn debug_skips_custom_lookup() {
        let client = make_client().with_lookup(|_| CountryLookup::Unknown);
        let debug = format!("{client:?}");
        assert!(debug.contains("has_custom_lookup: true"));
    }

    #[tokio::test]
    async fn custom_lookup_counts_every_call() {
        // The override path never touches the cache; each event re-resolves.
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);
        let client = make_client().with_lookup(move |_| {
            calls_clone.fetch_add(1, Ordering::Relaxed);
            CountryLookup::Found("India".into())
        });

        client.country_for("203.0.113.9").await;
        client.country_for("203.0.113.9").await;
        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(client.cache_size(), 0);
    }
}
