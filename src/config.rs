//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_SERVER_URL};
use std::env;
use std::time::Duration;

/// Runtime configuration for the autosave engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the persistence backend.
    pub server_url: String,
    /// Quiet window each channel waits for before persisting an edit burst.
    pub debounce_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are
    /// missing or unparsable.
    pub fn from_env() -> Self {
        let server_url =
            env::var("DRAFTSYNC_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let debounce_ms = env::var("DRAFTSYNC_DEBOUNCE_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_DELAY_MS);
        Self {
            server_url,
            debounce_delay: Duration::from_millis(debounce_ms),
        }
    }

    /// Override the debounce delay, keeping everything else.
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            debounce_delay: Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_shared_constants() {
        let config = Config::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(
            config.debounce_delay,
            Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS)
        );
    }

    #[test]
    fn with_debounce_delay_overrides_only_the_delay() {
        let config = Config::default().with_debounce_delay(Duration::from_millis(50));
        assert_eq!(config.debounce_delay, Duration::from_millis(50));
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }
}
