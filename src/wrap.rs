//! Reusable wrapper around a fallible operation: the operation, a retry
//! policy, and a recognizer bundled into one callable object.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use crate::policy::RetryPolicy;
use crate::run::run_with_retry;

/// Seam deciding whether a failure is retryable.
///
/// [`AnyFailure`] is the default and accepts everything; [`RecognizeIf`]
/// adapts a plain `Fn(&E) -> bool` predicate.
pub trait Recognize<E> {
    /// Whether `err` counts as a recognized (retryable) failure.
    fn is_recognized(&self, err: &E) -> bool;
}

/// Default recognizer: every failure is retryable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFailure;

impl<E> Recognize<E> for AnyFailure {
    fn is_recognized(&self, _err: &E) -> bool {
        true
    }
}

/// Recognizer backed by a predicate function.
#[derive(Debug, Clone, Copy)]
pub struct RecognizeIf<P>(pub P);

impl<E, P> Recognize<E> for RecognizeIf<P>
where
    P: Fn(&E) -> bool,
{
    fn is_recognized(&self, err: &E) -> bool {
        (self.0)(err)
    }
}

/// A fallible operation bundled with a retry policy and recognizer.
///
/// Holds no per-invocation state; each [`call`](Wrapped::call) runs its own
/// attempt loop, so one `Wrapped` can serve concurrent callers without
/// synchronization, provided the operation itself can.
pub struct Wrapped<F, C = AnyFailure> {
    op: F,
    recognize: C,
    policy: RetryPolicy,
    name: Cow<'static, str>,
}

/// Wrap `op` so that [`Wrapped::call`] retries recognized failures per
/// `policy`. By default every failure is recognized.
///
/// The operation identifier used in log messages defaults to the type name
/// of `op`; override it with [`Wrapped::name`] when the default is noisy.
pub fn wrap<F>(op: F, policy: RetryPolicy) -> Wrapped<F, AnyFailure> {
    Wrapped {
        name: Cow::Borrowed(type_name::<F>()),
        op,
        recognize: AnyFailure,
        policy,
    }
}

impl<F, C> Wrapped<F, C> {
    /// Set the operation identifier used in log messages.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Restrict retries to failures the predicate accepts; anything else
    /// propagates on first occurrence.
    pub fn recognize<P>(self, pred: P) -> Wrapped<F, RecognizeIf<P>> {
        Wrapped {
            op: self.op,
            recognize: RecognizeIf(pred),
            policy: self.policy,
            name: self.name,
        }
    }

    /// Invoke the operation, retrying recognized failures per the policy.
    ///
    /// `args` is handed to the operation by reference on every attempt, so
    /// the arguments do not need to be cloneable. Returns the operation's
    /// result from the first successful attempt, or propagates its error
    /// unchanged once the policy stops retrying.
    pub fn call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(&A) -> Result<T, E>,
        C: Recognize<E>,
        E: fmt::Display + fmt::Debug,
    {
        run_with_retry(&self.policy, &self.name, &self.recognize, || {
            (self.op)(&args)
        })
    }
}
