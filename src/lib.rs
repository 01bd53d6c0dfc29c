//! Deferred, kind-scoped error handling on top of a success-or-failure
//! container. The public surface of every submodule is re-exported at the
//! crate root, so consumers can depend on `outcome_rail::*` or pick focused
//! pieces as needed.
//!
//! # Examples
//!
//! ## Composing a Pipeline
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let ten: Result<i32, &str> = Outcome::ok(2)
//!     .map(|x| x + 3)
//!     .and_then(|x| Outcome::ok(x * 2))
//!     .resolve();
//!
//! assert_eq!(ten, Ok(10));
//! ```
//!
//! ## Deferred Kind-Scoped Handlers
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use outcome_rail::{impl_kinded, Outcome, traits::KindedError};
//!
//! #[derive(Debug)]
//! enum ParseError {
//!     NotAString,
//!     NotAnInteger,
//! }
//!
//! impl_kinded!(ParseError => &'static str {
//!     ParseError::NotAString => "not_a_string",
//!     ParseError::NotAnInteger => "not_an_integer",
//! });
//!
//! let hits = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&hits);
//!
//! let resolved = Outcome::<String, ParseError>::error(ParseError::NotAString)
//!     .handle_kind("not_a_string", move |_| counter.set(counter.get() + 1))
//!     .handle_kind("not_an_integer", |_| panic!("wrong kind"))
//!     .resolve();
//!
//! // The original error surfaces; only the matching handler fired.
//! assert!(matches!(resolved, Err(ParseError::NotAString)));
//! assert_eq!(hits.get(), 1);
//! ```
//!
//! ## Lifting Existing Results
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let total = "2".parse::<i32>()
//!     .into_outcome()
//!     .map(|x| x + 3)
//!     .resolve();
//!
//! assert_eq!(total.ok(), Some(5));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Macros for entering outcome pipelines
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for kind classification and `Result` interop
pub mod traits;
/// Outcome container, failure record, and handler chain
pub mod types;

// Re-export common types that might be needed at root,
// but encourage using the prelude for application code.
pub use convert::*;
pub use traits::*;
pub use types::{Failure, Handler, HandlerVec, Outcome};
