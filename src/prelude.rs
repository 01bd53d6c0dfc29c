//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`impl_kinded!`]
//! - **Types**: [`Outcome`], [`Failure`], [`Handler`]
//! - **Traits**: [`KindedError`], [`OutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, core::num::ParseIntError> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! assert_eq!(parse_port("8080").resolve().ok(), Some(8080));
//! ```

// Macros
pub use crate::{impl_kinded, outcome};

// Core types
pub use crate::types::{Failure, Handler, Outcome};

// Traits
pub use crate::traits::{KindedError, OutcomeExt};
