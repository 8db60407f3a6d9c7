//! Timeout settings for directory requests

use crate::error::{ConfigError, ConfigResult, DirectoryError};
use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum time a whole request may take, connect included
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const MAX_REASONABLE_TIMEOUT_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub connect_ms: u64,
    pub total_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            total_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl TimeoutConfig {
    /// Replace the request timeout with whole seconds. The current connect
    /// timeout is kept but clamped so it never exceeds the request timeout.
    pub fn with_total_secs(self, total_secs: u64) -> Self {
        let total_ms = total_secs.saturating_mul(1000);
        Self {
            connect_ms: self.connect_ms.min(total_ms),
            total_ms,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.connect_ms == 0 {
            return Err(ConfigError::Invalid(
                "Connect timeout must be greater than 0".to_string(),
            ));
        }

        if self.total_ms == 0 {
            return Err(ConfigError::Invalid(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.connect_ms > self.total_ms {
            return Err(ConfigError::Invalid(
                "Connect timeout cannot be greater than request timeout".to_string(),
            ));
        }

        if self.total_ms > MAX_REASONABLE_TIMEOUT_MS {
            tracing::warn!(
                total_ms = self.total_ms,
                "Request timeout is very long, consider reducing it"
            );
        }

        Ok(())
    }

    pub fn apply_to_client_builder(&self, builder: ClientBuilder) -> ClientBuilder {
        builder
            .connect_timeout(Duration::from_millis(self.connect_ms))
            .timeout(Duration::from_millis(self.total_ms))
    }

    /// Classify a reqwest failure into timeout, connect, or generic HTTP error
    pub fn classify(&self, error: reqwest::Error) -> DirectoryError {
        if error.is_timeout() {
            DirectoryError::Timeout(self.total_ms)
        } else if error.is_connect() {
            DirectoryError::Connection(error.to_string())
        } else {
            DirectoryError::Http(error)
        }
    }
}
