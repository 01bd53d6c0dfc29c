//! Error-kind classification for scoped handler dispatch.
//!
//! This module provides the [`KindedError`] trait for classifying errors
//! into application-defined kinds. The container is agnostic to what the
//! kind hierarchy looks like beyond needing to test "does this error match
//! kind K" - handlers registered with
//! [`Outcome::handle_kind`](crate::types::Outcome::handle_kind) use this
//! trait to decide whether to fire at dispatch time.
//!
//! # Choosing a Kind type
//!
//! Kinds only need equality. A fieldless enum gives exhaustive matching and
//! cheap comparison; `&'static str` labels keep things compact when the
//! taxonomy is open-ended. The [`impl_kinded!`](crate::impl_kinded) macro
//! derives the impl from match arms either way.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::KindedError;
//!
//! #[derive(Debug)]
//! enum ApiError {
//!     Timeout,
//!     RateLimited { retry_after_ms: u64 },
//!     InvalidInput,
//! }
//!
//! impl KindedError for ApiError {
//!     type Kind = &'static str;
//!
//!     fn kind(&self) -> Self::Kind {
//!         match self {
//!             ApiError::Timeout => "timeout",
//!             ApiError::RateLimited { .. } => "rate_limited",
//!             ApiError::InvalidInput => "invalid_input",
//!         }
//!     }
//! }
//!
//! let err = ApiError::RateLimited { retry_after_ms: 250 };
//! assert_eq!(err.kind(), "rate_limited");
//! assert!(err.is_kind(&"rate_limited"));
//! assert!(!err.is_kind(&"timeout"));
//! ```

/// Classification of errors into application-defined kinds.
///
/// A kind is a cheap, comparable discriminator for an error's runtime
/// variant. Handler dispatch tests the *live* error's kind against the kind
/// a handler was registered for, so an error type with payload-carrying
/// variants still dispatches on the variant alone.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used with kind-scoped handlers",
    label = "this error type does not implement `KindedError`",
    note = "implement `KindedError` manually or derive it with the `impl_kinded!` macro"
)]
pub trait KindedError {
    /// The kind discriminator type. Equality is all dispatch needs.
    type Kind: PartialEq;

    /// Returns the kind of this error.
    fn kind(&self) -> Self::Kind;

    /// Returns `true` if this error's kind equals `kind`.
    #[inline]
    fn is_kind(&self, kind: &Self::Kind) -> bool {
        self.kind() == *kind
    }
}
