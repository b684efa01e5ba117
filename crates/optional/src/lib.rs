//! Null-safe single-value container with validated combinators.
//!
//! [`Optional`] holds zero or one value and forces callers to deal with
//! absence explicitly. Every operation that the container cannot honour (an
//! absent callback, a missing value) is reported as an [`OptionalError`]
//! rather than a panic.
//!
//! # Example
//!
//! ```
//! use optional::{Optional, OptionalError};
//!
//! let doubled = Optional::of(21)
//!     .map(Some(|v: i32| v.checked_mul(2)))
//!     .expect("mapper given");
//! assert_eq!(doubled.or_else(0), 42);
//!
//! let err = Optional::<i32>::empty().or_else_throw().expect_err("empty");
//! assert!(matches!(err, OptionalError::InvalidState { .. }));
//! ```

mod error;
mod optional;

pub use error::OptionalError;
pub use optional::Optional;
