//! Failure record and kind-conditioned handler chain.
//!
//! This module provides [`Failure`], the error-bearing half of
//! [`Outcome`](crate::types::Outcome). A failure owns the original error plus
//! an ordered chain of [`Handler`] entries. Handlers are registered as the
//! outcome travels through a pipeline and stay dormant until the outcome is
//! resolved, at which point the whole chain is dispatched against the carried
//! error in registration order.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use outcome_rail::{Failure, Handler};
//!
//! let fired = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&fired);
//!
//! let mut failure = Failure::new("disk full");
//! failure.register(Handler::when(
//!     |e: &&str| e.contains("disk"),
//!     move |_| counter.set(counter.get() + 1),
//! ));
//!
//! // Nothing has fired yet: handlers are lazy until dispatch.
//! assert_eq!(fired.get(), 0);
//!
//! assert_eq!(failure.dispatch(), &"disk full");
//! assert_eq!(fired.get(), 1);
//! ```

use core::fmt;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::traits::KindedError;
use crate::types::HandlerVec;

/// A single kind-conditioned side-effecting callback in a handler chain.
///
/// A handler is a (predicate, action) pair: the action runs only when the
/// predicate accepts the live error. The action observes the error by
/// reference and can never replace it.
pub struct Handler<E> {
    matches: Box<dyn Fn(&E) -> bool>,
    action: Box<dyn Fn(&E)>,
}

impl<E> Handler<E> {
    /// Creates a handler from an arbitrary predicate and action.
    ///
    /// This is the open escape hatch for matching strategies beyond kind
    /// equality (substring checks, severity thresholds, and so on).
    ///
    /// # Arguments
    ///
    /// * `predicate` - Decides whether the action runs for a given error
    /// * `action` - Side effect invoked with the error when the predicate holds
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Handler;
    ///
    /// let handler = Handler::when(
    ///     |e: &&str| e.starts_with("io"),
    ///     |e| eprintln!("i/o trouble: {e}"),
    /// );
    /// assert!(handler.matches(&"io: timed out"));
    /// assert!(!handler.matches(&"parse: bad digit"));
    /// ```
    #[inline]
    pub fn when<P, F>(predicate: P, action: F) -> Self
    where
        P: Fn(&E) -> bool + 'static,
        F: Fn(&E) + 'static,
    {
        Self { matches: Box::new(predicate), action: Box::new(action) }
    }

    /// Creates a handler that fires only for errors of the given kind.
    ///
    /// The kind is compared with [`KindedError::is_kind`] at dispatch time,
    /// so the handler observes the error's *runtime* kind, not the static
    /// type it was registered through.
    ///
    /// # Arguments
    ///
    /// * `kind` - The error kind this handler is scoped to
    /// * `action` - Side effect invoked with the error on a kind match
    #[inline]
    pub fn for_kind<F>(kind: E::Kind, action: F) -> Self
    where
        E: KindedError,
        E::Kind: 'static,
        F: Fn(&E) + 'static,
    {
        Self::when(move |error: &E| error.is_kind(&kind), action)
    }

    /// Returns `true` if this handler's predicate accepts the error.
    #[inline]
    pub fn matches(&self, error: &E) -> bool {
        (self.matches)(error)
    }

    /// Runs the action if the predicate accepts the error.
    ///
    /// Returns whether the action fired. Non-matching errors leave the
    /// handler a no-op.
    #[inline]
    pub fn fire(&self, error: &E) -> bool {
        if (self.matches)(error) {
            (self.action)(error);
            true
        } else {
            false
        }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// The error-bearing record of a failed [`Outcome`](crate::types::Outcome).
///
/// A `Failure` owns exactly one error - the original trigger, which is never
/// replaced - and an ordered chain of zero or more [`Handler`]s. The chain is
/// dispatched by [`dispatch`](Failure::dispatch) (directly or through
/// [`Outcome::resolve`](crate::types::Outcome::resolve)); until then every
/// registered side effect stays dormant.
///
/// Dispatch is deliberately repeatable: each call re-runs the full chain.
/// There is no "already dispatched" memoization.
#[must_use]
pub struct Failure<E> {
    error: E,
    handlers: HandlerVec<E>,
}

impl<E> Failure<E> {
    /// Captures an error with an empty handler chain.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error, handlers: HandlerVec::new() }
    }

    /// Returns a reference to the carried error without dispatching.
    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the failure, returning the error without dispatching.
    ///
    /// Registered handlers are dropped unrun. Use
    /// [`into_dispatched`](Failure::into_dispatched) to run them first.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Returns the number of registered handlers.
    #[inline]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if at least one handler is registered.
    #[inline]
    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Appends a handler to the chain.
    ///
    /// Handlers dispatch in registration order: the handler registered first
    /// observes the error first.
    #[inline]
    pub fn register(&mut self, handler: Handler<E>) {
        self.handlers.push(handler);
    }

    /// Appends a handler scoped to a specific error kind.
    ///
    /// Shorthand for `register(Handler::for_kind(kind, action))`. The carried
    /// error is untouched; only the chain grows.
    #[inline]
    pub fn handle_kind<F>(&mut self, kind: E::Kind, action: F)
    where
        E: KindedError,
        E::Kind: 'static,
        F: Fn(&E) + 'static,
    {
        self.register(Handler::for_kind(kind, action));
    }

    /// Runs every matching handler against the carried error, in
    /// registration order, then returns the error unchanged.
    ///
    /// Non-matching handlers are skipped. Calling `dispatch` twice runs the
    /// matching handlers twice; each call is independent.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use outcome_rail::{Failure, Handler};
    ///
    /// let fired = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&fired);
    ///
    /// let mut failure = Failure::new("boom");
    /// failure.register(Handler::when(|_: &&str| true, move |_| {
    ///     counter.set(counter.get() + 1);
    /// }));
    ///
    /// failure.dispatch();
    /// failure.dispatch();
    /// assert_eq!(fired.get(), 2);
    /// ```
    pub fn dispatch(&self) -> &E {
        let mut _fired = 0usize;
        for handler in &self.handlers {
            if handler.fire(&self.error) {
                _fired += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            registered = self.handlers.len(),
            fired = _fired,
            "dispatched failure handler chain"
        );

        &self.error
    }

    /// Dispatches the handler chain once, then yields the owned error.
    ///
    /// This is the consuming counterpart of [`dispatch`](Failure::dispatch)
    /// and the path taken by [`Outcome::resolve`](crate::types::Outcome::resolve).
    #[inline]
    pub fn into_dispatched(self) -> E {
        self.dispatch();
        self.error
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("error", &self.error)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<E> From<E> for Failure<E> {
    /// Captures a bare error with an empty handler chain.
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
