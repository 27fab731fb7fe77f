//! Detection configuration.
//!
//! All process-wide detection parameters live here and are passed into the
//! [`crate::RuleEngine`] at construction — nothing is read from globals.

use std::time::Duration;

/// Configuration for the detection rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
    /// Country name logins are expected to originate from (R4).
    pub home_country: String,
    /// URL substring identifying login endpoints (R1, R4).
    pub login_path: String,
    /// HTTP status treated as an authentication failure (R1).
    pub login_failure_status: u16,
    /// HTTP status treated as a successful login (R4).
    pub login_success_status: u16,
    /// Length of the trailing brute-force window in seconds (R1).
    pub brute_force_window_secs: u64,
    /// Failure count at which the brute-force rule fires (R1).
    pub brute_force_threshold: u64,
    /// Budget for a single rule evaluation, including store and network time.
    pub rule_timeout: Duration,
    /// Upper bound on rules evaluated concurrently for one event.
    pub max_concurrent_rules: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            home_country: "India".to_string(),
            login_path: "/login".to_string(),
            login_failure_status: 401,
            login_success_status: 200,
            brute_force_window_secs: 120,
            brute_force_threshold: 5,
            rule_timeout: Duration::from_secs(5),
            max_concurrent_rules: 4,
        }
    }
}

impl DetectionConfig {
    /// Set the expected home country.
    #[must_use]
    pub fn with_home_country(mut self, country: impl Into<String>) -> Self {
        self.home_country = country.into();
        self
    }

    /// Set the login endpoint path substring.
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set the authentication failure status.
    #[must_use]
    pub const fn with_login_failure_status(mut self, status: u16) -> Self {
        self.login_failure_status = status;
        self
    }

    /// Set the brute-force window length in seconds.
    #[must_use]
    pub const fn with_brute_force_window_secs(mut self, secs: u64) -> Self {
        self.brute_force_window_secs = secs;
        self
    }

    /// Set the brute-force failure threshold.
    #[must_use]
    pub const fn with_brute_force_threshold(mut self, threshold: u64) -> Self {
        self.brute_force_threshold = threshold;
        self
    }

    /// Set the per-rule evaluation timeout.
    #[must_use]
    pub const fn with_rule_timeout(mut self, timeout: Duration) -> Self {
        self.rule_timeout = timeout;
        self
    }

    /// Set the rule concurrency limit.
    #[must_use]
    pub const fn with_max_concurrent_rules(mut self, max: usize) -> Self {
        self.max_concurrent_rules = max;
        self
    }

    /// Returns the brute-force window as a chrono duration for timestamp math.
    #[must_use]
    pub fn brute_force_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.brute_force_window_secs as i64)
    }
}

/// Configuration for the IP geolocation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoConfig {
    /// Base URL of the country lookup service.
    pub endpoint: String,
    /// Budget for a single lookup request.
    pub timeout: Duration,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ipapi.co".to_string(),
            timeout: Duration::from_secs(3),
        }
    }
}

impl GeoConfig {
    /// Set the lookup service base URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-lookup timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_rule_table() {
        let config = DetectionConfig::default();

        assert_eq!(config.login_path, "/login");
        assert_eq!(config.login_failure_status, 401);
        assert_eq!(config.login_success_status, 200);
        assert_eq!(config.brute_force_window_secs, 120);
        assert_eq!(config.brute_force_threshold, 5);
    }

    #[test]
    fn builder_overrides() {
        let config = DetectionConfig::default()
            .with_home_country("Norway")
            .with_login_path("/auth/signin")
            .with_login_failure_status(403)
            .with_brute_force_window_secs(60)
            .with_brute_force_threshold(10)
            .with_rule_timeout(Duration::from_millis(500))
            .with_max_concurrent_rules(2);

        assert_eq!(config.home_country, "Norway");
        assert_eq!(config.login_path, "/auth/signin");
        assert_eq!(config.login_failure_status, 403);
        assert_eq!(config.brute_force_window_secs, 60);
        assert_eq!(config.brute_force_threshold, 10);
        assert_eq!(config.rule_timeout, Duration::from_millis(500));
        assert_eq!(config.max_concurrent_rules, 2);
    }

    #[test]
    fn window_converts_to_chrono() {
        let config = DetectionConfig::default().with_brute_force_window_secs(90);
        assert_eq!(config.brute_force_window(), chrono::Duration::seconds(90));
    }

    #[test]
    fn geo_config_defaults() {
        let config = GeoConfig::default();
        assert_eq!(config.endpoint, "https://ipapi.co");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
