//! Client configuration

use std::time::Duration;

/// Default geocoding endpoint (Nominatim-compatible)
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org";

/// Interval between live pickup-person location fetches
pub const DEFAULT_TRACKING_INTERVAL: Duration = Duration::from_secs(4);

/// Client configuration for connecting to the EcoSaathi backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Geocoding service base URL (free-text address lookup)
    pub geocode_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Live-location polling interval
    pub tracking_interval: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            timeout: 30,
            tracking_interval: DEFAULT_TRACKING_INTERVAL,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the geocoding service base URL
    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    /// Set the live-location polling interval
    pub fn with_tracking_interval(mut self, interval: Duration) -> Self {
        self.tracking_interval = interval;
        self
    }

    /// Create an API client from this configuration
    pub fn build_client(&self) -> super::EcoClient {
        super::EcoClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
