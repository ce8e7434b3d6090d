//! Retry wrapper.
//!
//! Re-invokes a fallible operation up to a fixed number of attempts when it
//! fails with a recognized error, optionally logging intermediate failures
//! and always logging the final exhaustion before propagating the original
//! error unchanged. No backoff: attempts are immediate and sequential.

pub mod config;
pub mod error;
pub mod policy;
pub mod run;
pub mod wrap;

pub use config::RetryConfig;
pub use error::InvalidConfiguration;
pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
pub use wrap::{wrap, AnyFailure, Recognize, RecognizeIf, Wrapped};
