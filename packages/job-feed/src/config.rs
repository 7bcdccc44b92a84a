//! Feed configuration loaded from the environment.

use std::env;
use std::time::Duration;

use crate::error::{FeedError, Result};
use crate::feed::DEFAULT_LOOK_AHEAD_PX;
use crate::types::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Default transport timeout for one page fetch.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the job feed and its backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Base URL of the backend API group (e.g. `https://x1.xano.io/api:abc`).
    pub base_url: String,

    /// Page size used when the address does not name one.
    ///
    /// Default: 12.
    pub per_page: u32,

    /// How far below the viewport the sentinel may be and still count as
    /// visible, in pixels.
    ///
    /// Default: 700.
    pub look_ahead_px: u32,

    /// Transport timeout for a single request.
    ///
    /// Default: 30 seconds.
    pub request_timeout: Duration,
}

impl FeedConfig {
    /// Create a config with default values for everything but the backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            per_page: DEFAULT_PER_PAGE,
            look_ahead_px: DEFAULT_LOOK_AHEAD_PX,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `XANO_BASE_URL` (or `VITE_XANO_BASE_URL`) is required; the rest fall
    /// back to defaults when unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("XANO_BASE_URL")
            .or_else(|| lookup("VITE_XANO_BASE_URL"))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FeedError::Configuration("XANO_BASE_URL must be set".into()))?;
        url::Url::parse(&base_url).map_err(|e| {
            FeedError::Configuration(format!("XANO_BASE_URL is not a valid URL: {e}"))
        })?;

        let mut config = Self::new(base_url);
        if let Some(per_page) = parse_var::<u32>(&lookup, "JOBS_PER_PAGE")? {
            config = config.with_per_page(per_page);
        }
        if let Some(px) = parse_var::<u32>(&lookup, "JOBS_LOOK_AHEAD_PX")? {
            config = config.with_look_ahead_px(px);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "JOBS_REQUEST_TIMEOUT_SECS")? {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Set the default page size (clamped to 1..=100).
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Set the look-ahead margin.
    pub fn with_look_ahead_px(mut self, px: u32) -> Self {
        self.look_ahead_px = px;
        self
    }

    /// Set the transport timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| FeedError::Configuration(format!("{key} must be a valid number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_base_url_is_configuration_error() {
        let err = FeedConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, FeedError::Configuration(_)));

        let err = FeedConfig::from_lookup(lookup(&[("XANO_BASE_URL", "  ")])).unwrap_err();
        assert!(matches!(err, FeedError::Configuration(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FeedConfig::from_lookup(lookup(&[("XANO_BASE_URL", "nope")])).unwrap_err();
        assert!(matches!(err, FeedError::Configuration(_)));
    }

    #[test]
    fn test_defaults() {
        let config =
            FeedConfig::from_lookup(lookup(&[("XANO_BASE_URL", "https://x1.xano.io/api:abc")]))
                .unwrap();
        assert_eq!(config, FeedConfig::new("https://x1.xano.io/api:abc"));
        assert_eq!(config.per_page, 12);
        assert_eq!(config.look_ahead_px, 700);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_vite_fallback_and_overrides() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("VITE_XANO_BASE_URL", "https://x1.xano.io/api:abc"),
            ("JOBS_PER_PAGE", "250"),
            ("JOBS_LOOK_AHEAD_PX", "300"),
            ("JOBS_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://x1.xano.io/api:abc");
        assert_eq!(config.per_page, MAX_PER_PAGE);
        assert_eq!(config.look_ahead_px, 300);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_number_is_configuration_error() {
        let err = FeedConfig::from_lookup(lookup(&[
            ("XANO_BASE_URL", "https://x1.xano.io/api:abc"),
            ("JOBS_PER_PAGE", "twelve"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JOBS_PER_PAGE"));
    }
}
