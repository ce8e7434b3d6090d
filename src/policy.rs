//! Retry policy: how many attempts are allowed and whether intermediate
//! failures are logged.

use crate::error::InvalidConfiguration;

/// Decision returned by the retry policy for one failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; the caller propagates the error.
    NoRetry,
    /// Invoke the operation again.
    Retry,
}

/// Retry parameters shared by every invocation of a wrapped operation.
///
/// Construction enforces `max_attempts >= 1`; the fields are private so a
/// policy in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    log_each_failure: bool,
}

impl RetryPolicy {
    /// Build a policy allowing `max_attempts` invocations (including the first).
    pub fn new(max_attempts: u32) -> Result<Self, InvalidConfiguration> {
        if max_attempts < 1 {
            return Err(InvalidConfiguration { got: max_attempts });
        }
        Ok(Self {
            max_attempts,
            log_each_failure: false,
        })
    }

    /// Log every non-final recognized failure at warn level.
    pub fn log_each_failure(mut self, enabled: bool) -> Self {
        self.log_each_failure = enabled;
        self
    }

    /// Maximum number of attempts (including the first).
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub(crate) fn should_log_each_failure(&self) -> bool {
        self.log_each_failure
    }

    /// Verdict for a failed attempt. `attempt` is 1-based (1 = first attempt).
    /// Unrecognized failures are never retried.
    pub fn decide(&self, attempt: u32, recognized: bool) -> RetryDecision {
        if !recognized || attempt >= self.max_attempts {
            RetryDecision::NoRetry
        } else {
            RetryDecision::Retry
        }
    }
}
