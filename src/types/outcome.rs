//! Success-or-failure container with deferred, kind-scoped error handling.

use crate::traits::KindedError;
use crate::types::failure::{Failure, Handler};

/// A computation result that is either a success value or a captured failure.
///
/// `Outcome<T, E>` lets a pipeline of fallible operations compose lazily:
/// failures short-circuit through [`map`](Outcome::map) and
/// [`and_then`](Outcome::and_then) untouched, kind-scoped side effects are
/// attached along the way with [`handle_kind`](Outcome::handle_kind), and
/// nothing observable happens until the outcome is finally consumed with
/// [`resolve`](Outcome::resolve).
///
/// Unlike [`Result`], an `Outcome` carries its pending error handling with
/// it: the failed variant owns a [`Failure`] record holding the original
/// error plus an ordered chain of handlers. Handlers are observers only -
/// there is no recovery combinator, and the error surfaced by `resolve` is
/// always the originally captured one.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(T)` - Contains a successful value
/// * `Failed(Failure<E>)` - Contains the failure record
///
/// # Ownership of the failure record
///
/// Combinators move the failure record into the outcome they return; the
/// handler chain is neither copied nor shared. A handler registered after a
/// propagation step is therefore visible exactly to the single current owner
/// of the record.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ten: Result<i32, &str> = Outcome::ok(2)
///     .map(|x| x + 3)
///     .and_then(|x| Outcome::ok(x * 2))
///     .resolve();
///
/// assert_eq!(ten, Ok(10));
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<T, E> {
    Success(T),
    Failed(Failure<E>),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a successful value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::ok(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Captures an error as a failure with an empty handler chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::error("boom");
    /// assert_eq!(outcome.resolve(), Err("boom"));
    /// ```
    #[inline]
    pub fn error(error: E) -> Self {
        Self::Failed(Failure::new(error))
    }

    /// Wraps an existing failure record, preserving its handler chain.
    #[inline]
    pub fn from_failure(failure: Failure<E>) -> Self {
        Self::Failed(failure)
    }

    /// Returns `true` if the outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure record.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// Returns the raw internal representation without dispatching handlers.
    ///
    /// This is the non-consuming observer of the container: no handler runs,
    /// no error is surfaced, and successful access never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::ok(7);
    /// assert_eq!(outcome.peek().ok(), Some(&7));
    ///
    /// let failed = Outcome::<i32, &str>::error("boom");
    /// assert_eq!(failed.peek().unwrap_err().error(), &"boom");
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<&T, &Failure<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(failure) => Err(failure),
        }
    }

    /// Consumes the outcome, returning the success value if any.
    ///
    /// No handler dispatch occurs; a dropped failure record takes its unrun
    /// chain with it.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure record if any.
    ///
    /// No handler dispatch occurs.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<Failure<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Transforms the success value, short-circuiting on failure.
    ///
    /// On failure the same failure record - error and handler chain alike -
    /// moves into the returned outcome unchanged, and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Function that transforms the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled.resolve(), Ok(42));
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failed(failure) => Outcome::Failed(failure),
        }
    }

    /// Chains a fallible operation, short-circuiting on failure.
    ///
    /// On success, `f` is applied directly and may itself produce a failure.
    /// On failure, behaves exactly like [`map`](Outcome::map): the failure
    /// record propagates untouched and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome in the pipeline
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::ok(x / 2)
    ///     } else {
    ///         Outcome::error("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(10).and_then(halve).resolve(), Ok(5));
    /// assert_eq!(Outcome::ok(3).and_then(halve).resolve(), Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failed(failure) => Outcome::Failed(failure),
        }
    }

    /// Registers a side-effecting handler scoped to a specific error kind.
    ///
    /// On failure, the handler is appended to the chain and will fire during
    /// [`resolve`](Outcome::resolve) only if the carried error's runtime kind
    /// equals `kind`; the error and value are untouched. On success this is a
    /// no-op - the action is not even boxed.
    ///
    /// Handlers fire in registration order, and never alter the error that
    /// `resolve` surfaces.
    ///
    /// # Arguments
    ///
    /// * `kind` - The error kind the handler is scoped to
    /// * `action` - Side effect invoked with the error on a kind match
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use outcome_rail::{Outcome, traits::KindedError};
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
    /// let seen = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&seen);
    ///
    /// let resolved = Outcome::<i32, Timeout>::error(Timeout)
    ///     .handle_kind("timeout", move |_| counter.set(counter.get() + 1))
    ///     .resolve();
    ///
    /// assert!(resolved.is_err());
    /// assert_eq!(seen.get(), 1);
    /// ```
    #[inline]
    pub fn handle_kind<F>(mut self, kind: E::Kind, action: F) -> Self
    where
        E: KindedError,
        E::Kind: 'static,
        F: Fn(&E) + 'static,
    {
        if let Self::Failed(failure) = &mut self {
            failure.handle_kind(kind, action);
        }
        self
    }

    /// Registers a pre-built handler with an arbitrary predicate.
    ///
    /// The general form of [`handle_kind`](Outcome::handle_kind); on success
    /// the handler is dropped unregistered.
    #[inline]
    pub fn with_handler(mut self, handler: Handler<E>) -> Self {
        if let Self::Failed(failure) = &mut self {
            failure.register(handler);
        }
        self
    }

    /// Consumes the outcome, dispatching pending handlers on failure.
    ///
    /// On success, returns `Ok(value)`; no handler runs. On failure, every
    /// matching handler in the chain fires in registration order - exactly
    /// once per `resolve` call - and the original error is then surfaced as
    /// `Err`. Handlers observe the error but never replace it.
    ///
    /// This is the only operation that triggers handler side effects; an
    /// outcome that is never resolved dispatches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(5).resolve(), Ok(5));
    /// assert_eq!(Outcome::<i32, &str>::error("boom").resolve(), Err("boom"));
    /// ```
    #[inline]
    pub fn resolve(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(failure) => Err(failure.into_dispatched()),
        }
    }
}
