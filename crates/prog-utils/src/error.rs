//! Error types for the helper functions of this crate.

use thiserror::Error;

/// Errors raised by the date helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    /// The computed or supplied instant is outside the representable range.
    #[error("date is outside the supported range")]
    OutOfRange,

    /// Text could not be read as a date or date-time.
    #[error("unrecognised date: '{input}'")]
    Unparseable {
        /// The rejected input, trimmed.
        input: String,
    },
}
