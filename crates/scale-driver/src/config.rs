//! Driver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout applied to connect, write and read when not overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a scale driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Scale address as `host:port`.
    pub address: String,
    /// Bound on establishing the connection.
    #[serde(default = "default_timeout")]
    pub connect_timeout: Duration,
    /// Bound on sending a command frame.
    #[serde(default = "default_timeout")]
    pub write_timeout: Duration,
    /// Bound on receiving the response, measured from the start of the read.
    #[serde(default = "default_timeout")]
    pub read_timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl DriverConfig {
    /// Create a configuration for `address` with default timeouts.
    pub fn new(address: impl Into<String>) -> Self {
        DriverConfig {
            address: address.into(),
            connect_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the write timeout.
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Override the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}
