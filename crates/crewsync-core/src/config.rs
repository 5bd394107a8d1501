//! Client configuration.

use std::time::Duration;

/// Settings for the REST client and the polling scheduler.
///
/// Defaults mirror the dashboard: first poll 5 seconds after mount, then a
/// fixed 30-second interval. No jitter, no backoff.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:5000`.
    pub base_url: String,

    /// Bearer token for every request. Empty means "not signed in" and maps
    /// to an auth error before any request is issued.
    pub token: String,

    /// Delay before the first poll.
    pub initial_delay: Duration,

    /// Fixed interval between polls.
    pub poll_interval: Duration,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            initial_delay: Duration::from_secs(5),
            poll_interval: Duration::from_secs(30),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_timers() {
        let config = ClientConfig::new("http://localhost:5000", "tok");
        assert_eq!(config.initial_delay, Duration::from_secs(5));
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }
}
