use std::time::Duration;

use fxfeed_feed::DEFAULT_FEED_URL;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub feed_url: String,
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
}

impl Config {
    /// Reads `FXFEED_*` variables, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let feed_url = lookup("FXFEED_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let timeout_ms = lookup("FXFEED_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let interval_secs = lookup("FXFEED_REFRESH_INTERVAL_SECS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS);

        Self {
            feed_url,
            request_timeout: Duration::from_millis(timeout_ms),
            refresh_interval: Duration::from_secs(interval_secs),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, feed_url: Option<String>, interval_secs: Option<u64>) -> Self {
        if let Some(url) = feed_url {
            self.feed_url = url;
        }
        if let Some(secs) = interval_secs.filter(|secs| *secs > 0) {
            self.refresh_interval = Duration::from_secs(secs);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.feed_url, "https://www.fx-exchange.com/gbp/rss.xml");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("FXFEED_URL", "http://localhost:8080/rss.xml"),
            ("FXFEED_REQUEST_TIMEOUT_MS", "1500"),
            ("FXFEED_REFRESH_INTERVAL_SECS", "60"),
        ]);
        assert_eq!(config.feed_url, "http://localhost:8080/rss.xml");
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = config_from(&[
            ("FXFEED_URL", "  "),
            ("FXFEED_REQUEST_TIMEOUT_MS", "soon"),
            ("FXFEED_REFRESH_INTERVAL_SECS", "0"),
        ]);
        assert_eq!(config, config_from(&[]));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[]).with_overrides(Some("http://mirror/rss.xml".into()), Some(10));
        assert_eq!(config.feed_url, "http://mirror/rss.xml");
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
    }
}
