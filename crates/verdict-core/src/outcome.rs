//! Outcome wrapper for fallible operations.
//!
//! [`Outcome`] represents the result of an operation as an explicit value
//! instead of an unwound panic: either a success payload or a failure error,
//! never both. [`wrap_async_call`] adapts an async operation into this
//! representation, capturing panics as inspectable errors, and
//! [`wrap_async_call_with_cleanup`] additionally guarantees a cleanup
//! callback runs exactly once on every exit path.

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use thiserror::Error;
use tracing::warn;

/// The outcome of a fallible operation: a success payload or a failure error.
///
/// The discriminant is fixed at construction and the two variants are
/// mutually exclusive; matching on the enum is exhaustive by construction.
/// No bound is placed on `E` here — the error-shaped constraint is enforced
/// where it matters, on the async adapters.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T, E> {
    /// The operation completed and produced a payload.
    Success {
        /// The payload value, stored verbatim.
        data: T,
    },
    /// The operation failed.
    Failure {
        /// The error value, stored verbatim.
        error: E,
    },
}

/// A boxed future resolving to an [`Outcome`].
pub type AsyncOutcome<'a, T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send + 'a>>;

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome wrapping `data` verbatim.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Creates a failure outcome wrapping `error` verbatim.
    ///
    /// No validation is performed on `error`; any value is accepted.
    pub fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    /// Returns `true` if this is the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` if this is the failure variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns the payload if this is a success.
    #[must_use]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error if this is a failure.
    #[must_use]
    pub fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Consumes the outcome, returning the payload if this is a success.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the outcome, returning the error if this is a failure.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Converts into a [`Result`] for interop with `?`-based plumbing.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error } => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Error synthesized when a wrapped operation panics instead of returning
/// an error value.
///
/// String-typed panic payloads become the message verbatim; any other
/// payload shape normalizes to an opaque description. Either way the
/// failure variant always holds an inspectable error value.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PanicPayload {
    message: String,
}

impl PanicPayload {
    fn from_unwind(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "operation panicked with a non-string payload".to_string()
        };
        Self { message }
    }

    /// The string form of the original panic payload.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Executes an async operation and captures its outcome as an [`Outcome`].
///
/// An `Ok` value becomes [`Outcome::Success`]; an `Err` value passes through
/// unchanged into [`Outcome::Failure`]. A panic inside the operation is
/// caught and normalized into a [`PanicPayload`] before conversion into `E`,
/// so the returned future always resolves to a settled outcome and never
/// panics itself.
pub async fn wrap_async_call<F, Fut, T, E>(operation: F) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<PanicPayload>,
{
    match AssertUnwindSafe(operation()).catch_unwind().await {
        Ok(Ok(data)) => Outcome::success(data),
        Ok(Err(error)) => Outcome::failure(error),
        Err(payload) => Outcome::failure(E::from(PanicPayload::from_unwind(payload))),
    }
}

/// Like [`wrap_async_call`], with a cleanup callback that runs exactly once
/// on every exit path, after the outcome has been determined.
///
/// The callback is held by a drop guard, so it also runs if the returned
/// future is dropped before completion. A panic inside the callback is
/// swallowed and logged at `warn` level; it never disturbs the computed
/// outcome.
pub async fn wrap_async_call_with_cleanup<F, Fut, T, E, C>(operation: F, cleanup: C) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<PanicPayload>,
    C: FnOnce(),
{
    let _guard = CleanupGuard::new(cleanup);
    wrap_async_call(operation).await
}

/// Runs the held callback exactly once when dropped.
struct CleanupGuard<C: FnOnce()> {
    cleanup: Option<C>,
}

impl<C: FnOnce()> CleanupGuard<C> {
    fn new(cleanup: C) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }
}

impl<C: FnOnce()> Drop for CleanupGuard<C> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            if std::panic::catch_unwind(AssertUnwindSafe(cleanup)).is_err() {
                warn!("cleanup callback panicked; outcome preserved");
            }
        }
    }
}
