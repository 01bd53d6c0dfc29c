//! Conversion helpers between `Result` and `Outcome`.
//!
//! These adapters make it straightforward to incrementally adopt
//! `outcome-rail` by lifting legacy results into outcomes at pipeline entry
//! and flattening outcomes back into core types at terminal call sites.
//!
//! Note the asymmetry: lifting a `Result` is free of side effects, while
//! flattening an `Outcome` is a consumption point and therefore dispatches
//! any pending handlers, exactly like
//! [`Outcome::resolve`](crate::types::Outcome::resolve).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::{outcome_to_result, result_to_outcome};
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert!(outcome.is_success());
//!
//! let result = outcome_to_result(outcome.map(|x| x + 1));
//! assert_eq!(result.ok(), Some(43));
//! ```

use crate::types::{Failure, Outcome};

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if the result is `Ok`
/// * `Outcome::Failed` with an empty handler chain if the result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok: Result<i32, &str> = Ok(42);
/// assert!(result_to_outcome(ok).is_success());
///
/// let err: Result<i32, &str> = Err("failed");
/// assert!(result_to_outcome(err).is_failed());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::ok(value),
        Err(error) => Outcome::error(error),
    }
}

/// Converts an `Outcome` to a `Result`, dispatching pending handlers.
///
/// This is a consumption point: on a failed outcome every matching handler
/// fires, in registration order, before the original error is returned as
/// `Err`.
///
/// # Arguments
///
/// * `outcome` - The outcome to consume
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, &str>::error("failed");
/// assert_eq!(outcome_to_result(outcome), Err("failed"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.resolve()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Lifts a `Result` into an `Outcome` with an empty handler chain.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    /// Wraps an existing failure record, preserving its handler chain.
    #[inline]
    fn from(failure: Failure<E>) -> Self {
        Outcome::from_failure(failure)
    }
}
