//! General-purpose utilities gathered in one crate.
//!
//! The null-safe [`Optional`] and the paged [`EntityList`] are re-exported
//! from their own crates. This crate adds an error hierarchy with typed cause
//! chaining ([`BaseError`]) and small validation helpers for dates, numbers,
//! and UUIDs.
//!
//! # Example
//!
//! ```
//! use prog_utils::{BaseError, HttpError, Optional, OptionalError, is_uuid};
//!
//! let id = Optional::of("not-a-uuid")
//!     .filter(Some(|id: &&str| is_uuid(id)))
//!     .expect("predicate given");
//!
//! let cause = id.or_else_throw().expect_err("identifier was rejected");
//! let err = HttpError::new(400, "bad identifier").with_cause(cause);
//!
//! assert_eq!(err.status(), 400);
//! assert!(err.cause_ref().and_then(|c| c.downcast_ref::<OptionalError>()).is_some());
//! ```

mod base_error;
pub mod datetime;
mod error;
pub mod number;
mod uuid_check;

pub use base_error::{BaseError, Cause, HttpError, UnknownError};
pub use datetime::{
    DateInput, date_days_after, date_days_before, day_of_week, days_diff_between_dates,
    truncate_time,
};
pub use error::DateTimeError;
pub use number::{
    NumberKind, NumberLike, is_float, is_integer, is_number, is_positive_integer_string,
};
pub use optional::{Optional, OptionalError};
pub use pagination::{
    EntityList, Page, PaginationError, PaginationHeaders, RequestQueryParams, ZeroHandling,
    headers,
};
pub use uuid_check::is_uuid;
