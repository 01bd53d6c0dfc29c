//! Core container types.
//!
//! This module provides the success-or-failure container and its supporting
//! pieces: [`Outcome`] for composing fallible pipelines, [`Failure`] for the
//! captured error plus its pending handler chain, and [`Handler`] for a
//! single kind-conditioned side effect.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<i32, &str>::ok(2)
//!     .map(|x| x + 3)
//!     .and_then(|x| Outcome::ok(x * 2));
//!
//! assert_eq!(outcome.resolve(), Ok(10));
//! ```
use smallvec::SmallVec;

pub mod failure;
pub mod outcome;

pub use failure::{Failure, Handler};
pub use outcome::Outcome;

/// SmallVec-backed collection used for a failure's handler chain.
///
/// Uses inline storage for up to 1 element to avoid heap allocations in the
/// common case where a failure carries a single handler.
pub type HandlerVec<E> = SmallVec<[Handler<E>; 1]>;
