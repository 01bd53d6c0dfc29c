//! Core traits for kind classification and `Result` interop.
//!
//! This module defines the traits that make the outcome pipeline pluggable:
//!
//! - [`KindedError`]: classification of errors into application-defined
//!   kinds, the capability handler dispatch is keyed on
//! - [`OutcomeExt`]: ergonomic adapters lifting `Result` values into
//!   [`Outcome`](crate::types::Outcome) pipelines
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{KindedError, OutcomeExt};
//!
//! #[derive(Debug)]
//! struct BadDigit;
//!
//! impl KindedError for BadDigit {
//!     type Kind = &'static str;
//!     fn kind(&self) -> Self::Kind {
//!         "bad_digit"
//!     }
//! }
//!
//! let result: Result<i32, BadDigit> = Err(BadDigit);
//! let outcome = result.into_outcome();
//! assert!(outcome.is_failed());
//! ```

pub mod kinded;
pub mod outcome_ext;

pub use kinded::KindedError;
pub use outcome_ext::OutcomeExt;
