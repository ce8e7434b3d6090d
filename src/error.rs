//! Construction-time configuration error.

use thiserror::Error;

/// Rejected retry configuration. `max_attempts` counts the first call, so
/// zero would mean the wrapped operation is never invoked at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("max_attempts must be >= 1, got {got}")]
pub struct InvalidConfiguration {
    /// The rejected attempt count.
    pub got: u32,
}
