//! Application error hierarchy with typed cause chaining.
//!
//! [`BaseError`] is the common surface of every error in the hierarchy: a
//! message, an optional cause, and the name of the concrete type. Callers
//! extend the hierarchy by wrapping one of the provided errors and
//! implementing [`BaseError`] by delegation.

use std::error::Error;

use thiserror::Error;

/// Boxed cause attached to an error in the hierarchy.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Common surface of the error hierarchy.
pub trait BaseError: Error + Send + Sync + 'static {
    /// Human-readable message.
    fn message(&self) -> &str;

    /// The error that caused this one, if any.
    fn cause_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)>;

    /// Name of the concrete error type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An error tied to an HTTP status code.
///
/// # Examples
///
/// ```
/// use prog_utils::{BaseError, HttpError};
///
/// let err = HttpError::new(503, "upstream unavailable").with_cause("connection refused");
/// assert_eq!(err.status(), 503);
/// assert_eq!(err.message(), "upstream unavailable");
/// assert_eq!(err.cause_ref().map(ToString::to_string).as_deref(), Some("connection refused"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpError {
    status: u16,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl HttpError {
    /// Create an error with no cause.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the error that caused this one.
    #[must_use]
    pub fn with_cause(self, cause: impl Into<Cause>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..self
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }
}

impl BaseError for HttpError {
    fn message(&self) -> &str {
        &self.message
    }

    fn cause_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// An error whose origin is not otherwise classified.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UnknownError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl UnknownError {
    /// Create an error with no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the error that caused this one.
    #[must_use]
    pub fn with_cause(self, cause: impl Into<Cause>) -> Self {
        Self {
            cause: Some(cause.into()),
            ..self
        }
    }

    /// Wrap `cause`, reusing its message.
    #[must_use]
    pub fn from_cause<C>(cause: C) -> Self
    where
        C: Error + Send + Sync + 'static,
    {
        Self::new(cause.to_string()).with_cause(cause)
    }
}

impl BaseError for UnknownError {
    fn message(&self) -> &str {
        &self.message
    }

    fn cause_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
