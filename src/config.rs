//! Retry parameters as a config-file section.

use serde::{Deserialize, Serialize};

use crate::error::InvalidConfiguration;
use crate::policy::RetryPolicy;

/// Retry parameters as they appear in a host application's config file
/// (e.g. a `[retry]` table). Converted into a validated [`RetryPolicy`]
/// with `TryFrom`, so an out-of-range `max_attempts` is rejected at load
/// time rather than on first use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Whether non-final recognized failures are logged at warn level.
    #[serde(default)]
    pub log_each_failure: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            log_each_failure: false,
        }
    }
}

impl TryFrom<RetryConfig> for RetryPolicy {
    type Error = InvalidConfiguration;

    fn try_from(cfg: RetryConfig) -> Result<Self, Self::Error> {
        Ok(RetryPolicy::new(cfg.max_attempts)?.log_each_failure(cfg.log_each_failure))
    }
}
