//! Error types for the optional crate.
//!
//! Every failing [`crate::Optional`] operation reports one of two kinds: a
//! required argument was absent, or the operation needed a value that was not
//! there. Both are returned synchronously to the immediate caller.

use thiserror::Error;
use tracing::debug;

/// Errors returned by [`crate::Optional`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OptionalError {
    /// A required argument (value, callback, or callback result) was absent.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Which argument was rejected and why.
        message: &'static str,
    },

    /// The operation required a present value but the optional was empty.
    #[error("invalid state: {message}")]
    InvalidState {
        /// Description of the missing state.
        message: &'static str,
    },
}

impl OptionalError {
    /// Returns `true` for [`OptionalError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`OptionalError::InvalidState`].
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// The message carried by either variant.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidArgument { message } | Self::InvalidState { message } => *message,
        }
    }

    pub(crate) fn invalid_argument(message: &'static str) -> Self {
        debug!(reason = message, "optional operation rejected an absent argument");
        Self::InvalidArgument { message }
    }

    pub(crate) fn invalid_state(message: &'static str) -> Self {
        debug!(reason = message, "optional operation required a present value");
        Self::InvalidState { message }
    }
}
