//! Extension trait for ergonomic `Result` to `Outcome` adaptation.
//!
//! This module provides [`OutcomeExt`], which lets existing `Result`-based
//! code enter an outcome pipeline without verbose wrapping at every call
//! site.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeExt;
//!
//! let outcome = "42".parse::<i32>().into_outcome();
//! assert_eq!(outcome.resolve().ok(), Some(42));
//! ```

use crate::traits::KindedError;
use crate::types::Outcome;

/// Extension trait for adapting `Result` values into [`Outcome`]s.
///
/// This is the bridge for incremental adoption: fallible std or third-party
/// APIs return `Result`, and a single trailing method call lifts them into
/// the deferred-handler pipeline.
///
/// # Examples
///
/// ## Lifting a Result
///
/// ```
/// use outcome_rail::traits::OutcomeExt;
///
/// let outcome = "7".parse::<i32>().into_outcome().map(|x| x * 3);
/// assert_eq!(outcome.resolve().ok(), Some(21));
/// ```
///
/// ## Lifting and registering in one step
///
/// ```
/// use outcome_rail::traits::{KindedError, OutcomeExt};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl KindedError for Timeout {
///     type Kind = &'static str;
///     fn kind(&self) -> Self::Kind {
///         "timeout"
///     }
/// }
///
/// let result: Result<(), Timeout> = Err(Timeout);
/// let outcome = result.handle_kind("timeout", |_| eprintln!("timed out"));
/// assert!(outcome.is_failed());
/// ```
pub trait OutcomeExt<T, E> {
    /// Lifts the result into an [`Outcome`] with an empty handler chain.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Lifts the result into an [`Outcome`] and registers a kind-scoped
    /// handler in the same step.
    ///
    /// On `Ok` the action is discarded unregistered, matching
    /// [`Outcome::handle_kind`] on a success.
    fn handle_kind<F>(self, kind: E::Kind, action: F) -> Outcome<T, E>
    where
        E: KindedError,
        E::Kind: 'static,
        F: Fn(&E) + 'static;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn handle_kind<F>(self, kind: E::Kind, action: F) -> Outcome<T, E>
    where
        E: KindedError,
        E::Kind: 'static,
        F: Fn(&E) + 'static,
    {
        self.into_outcome().handle_kind(kind, action)
    }
}
