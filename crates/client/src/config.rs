//! Client configuration: base URL selection, token regeneration policy, and
//! the default request timeout.

use std::time::Duration;

/// Built-in US region base URL.
pub const US_BASE_URL: &str = "https://app.sentria.io/api/v2.0";

/// Built-in EU region base URL.
pub const EU_BASE_URL: &str = "https://app-eu.sentria.io/api/v2.0";

/// Default per-request timeout (15 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Hosted regions of the Sentria platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Us => US_BASE_URL,
            Self::Eu => EU_BASE_URL,
        }
    }
}

/// Where API calls are sent: a built-in region or an arbitrary URL override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    Region(Region),
    Custom(String),
}

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Region(region) => region.base_url(),
            Self::Custom(url) => url,
        }
    }
}

impl From<Region> for BaseUrl {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl From<String> for BaseUrl {
    fn from(url: String) -> Self {
        Self::Custom(url)
    }
}

impl From<&str> for BaseUrl {
    fn from(url: &str) -> Self {
        Self::Custom(url.to_string())
    }
}

/// Configuration for [`crate::ApiClient`].
///
/// Constructed once at startup; the regeneration flag and the timeout apply
/// to every registered tenant uniformly.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: BaseUrl,

    /// When true, every authenticated call obtains a fresh token and the
    /// token cache is never consulted.
    pub regenerate_token_per_request: bool,

    /// Timeout applied to each network exchange.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<BaseUrl>) -> Self {
        Self {
            base_url: base_url.into(),
            regenerate_token_per_request: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn regenerate_token_per_request(mut self, regenerate: bool) -> Self {
        self.regenerate_token_per_request = regenerate;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Region::Us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_map_to_built_in_urls() {
        assert_eq!(BaseUrl::from(Region::Us).as_str(), "https://app.sentria.io/api/v2.0");
        assert_eq!(BaseUrl::from(Region::Eu).as_str(), "https://app-eu.sentria.io/api/v2.0");
    }

    #[test]
    fn custom_url_overrides_regions() {
        let base = BaseUrl::from("https://sandbox.example.com/api");
        assert_eq!(base.as_str(), "https://sandbox.example.com/api");
    }

    #[test]
    fn defaults_are_single_attempt_fifteen_seconds() {
        let config = ClientConfig::default();
        assert!(!config.regenerate_token_per_request);
        assert_eq!(config.request_timeout, Duration::from_millis(15_000));
    }
}
