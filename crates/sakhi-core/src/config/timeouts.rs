//! Transport timeout configuration
//!
//! The dispatcher itself has no intrinsic timeout; these values configure the
//! HTTP client used to reach the completion service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default connection timeout for the completion API (30 seconds)
pub const CONNECTION_SECS: u64 = 30;

/// Default request timeout for the completion API (60 seconds)
pub const REQUEST_SECS: u64 = 60;

/// Timeouts applied to the completion service transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed to establish a connection
    pub connection_timeout_secs: u64,
    /// Time allowed for a whole request, including the response body
    pub request_timeout_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: CONNECTION_SECS,
            request_timeout_secs: REQUEST_SECS,
        }
    }
}

impl TimeoutConfig {
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
