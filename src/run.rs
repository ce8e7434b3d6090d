//! Retry loop: run a closure until success, an unrecognized failure, or
//! exhaustion of the attempt budget.

use std::fmt;

use crate::policy::{RetryDecision, RetryPolicy};
use crate::wrap::Recognize;

/// Runs a closure until it succeeds or the policy says to stop.
///
/// Success returns immediately. An unrecognized failure propagates at once
/// with no logging. A recognized failure on the final attempt is logged at
/// error level with its full `Debug` rendering and then propagated
/// unchanged; earlier recognized failures log a warn-level summary when the
/// policy asks for it, then the next attempt starts right away (no delay).
///
/// `name` identifies the operation in log messages. The error value
/// propagated is always the one the closure returned, never a replacement.
pub fn run_with_retry<T, E, F, C>(
    policy: &RetryPolicy,
    name: &str,
    recognize: &C,
    mut f: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    C: Recognize<E> + ?Sized,
    E: fmt::Display + fmt::Debug,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let recognized = recognize.is_recognized(&e);
                match policy.decide(attempt, recognized) {
                    RetryDecision::NoRetry => {
                        if recognized {
                            tracing::error!(
                                "try_multi: exhausted {} attempts calling {}: {:?}",
                                policy.max_attempts(),
                                name,
                                e
                            );
                        }
                        return Err(e);
                    }
                    RetryDecision::Retry => {
                        if policy.should_log_each_failure() {
                            tracing::warn!(
                                "try_multi: attempt {}/{} failed calling {}: {}",
                                attempt,
                                policy.max_attempts(),
                                name,
                                e
                            );
                        }
                        attempt += 1;
                    }
                }
            }
        }
    }
}
