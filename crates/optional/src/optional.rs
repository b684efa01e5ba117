//! The [`Optional`] container and its combinators.
//!
//! Callbacks are taken as `Option<F>`: `None` stands for an absent callback
//! and is rejected with [`OptionalError::InvalidArgument`] wherever the
//! operation would need it.

use crate::error::OptionalError;

const VALUE_MISSING: &str = "value must not be null";
const NO_VALUE_PRESENT: &str = "no value present";
const VALUE_NOT_PRESENT: &str = "value is not present";
const ACTION_MISSING: &str = "action must not be null";
const EMPTY_ACTION_MISSING: &str = "empty action must not be null";
const PREDICATE_MISSING: &str = "predicate must not be null";
const MAPPER_MISSING: &str = "mapper must not be null";
const MAPPER_RESULT_MISSING: &str = "mapper must not produce null result";
const SUPPLIER_MISSING: &str = "supplier must not be null";
const SUPPLIER_RESULT_MISSING: &str = "supplier must not produce null result";
const EXCEPTION_RESULT_MISSING: &str =
    "exception supplier must return an exception, it returned null instead";

/// A container holding at most one value.
///
/// An `Optional` is either present (holding a value) or empty. The state is
/// fixed at construction; combinators consume the receiver and hand back a
/// new container or the receiver itself.
///
/// # Examples
///
/// ```
/// use optional::Optional;
///
/// let kept = Optional::of(123).filter(Some(|v: &i32| *v > 100)).expect("predicate given");
/// assert_eq!(kept.get(), Ok(&123));
///
/// let dropped = Optional::of(123).filter(Some(|v: &i32| *v <= 100)).expect("predicate given");
/// assert!(dropped.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// The canonical empty instance.
    pub const EMPTY: Self = Self { value: None };

    /// Returns the canonical empty instance.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Wraps a present value.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wraps `value`, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when `value` is `None`.
    pub fn try_of(value: Option<T>) -> Result<Self, OptionalError> {
        value
            .map(Self::of)
            .ok_or_else(|| OptionalError::invalid_argument(VALUE_MISSING))
    }

    /// Wraps `value` if present, otherwise returns [`Optional::empty`].
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Returns `true` when a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` when no value is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidState`] when the optional is empty.
    pub fn get(&self) -> Result<&T, OptionalError> {
        self.value
            .as_ref()
            .ok_or_else(|| OptionalError::invalid_state(NO_VALUE_PRESENT))
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Unwraps into the standard library representation.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Invokes `action` with the value when one is present.
    ///
    /// The action is validated before presence is inspected, so an absent
    /// action is rejected on an empty optional as well.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when `action` is `None`.
    pub fn if_present<F>(&self, action: Option<F>) -> Result<(), OptionalError>
    where
        F: FnOnce(&T),
    {
        let consume = action.ok_or_else(|| OptionalError::invalid_argument(ACTION_MISSING))?;
        if let Some(value) = &self.value {
            consume(value);
        }
        Ok(())
    }

    /// Invokes `action` with the value when present, otherwise `empty_action`.
    ///
    /// Both callbacks are validated before dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when either callback is
    /// `None`. Neither callback runs in that case.
    pub fn if_present_or_else<F, G>(
        &self,
        action: Option<F>,
        empty_action: Option<G>,
    ) -> Result<(), OptionalError>
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        let consume = action.ok_or_else(|| OptionalError::invalid_argument(ACTION_MISSING))?;
        let otherwise =
            empty_action.ok_or_else(|| OptionalError::invalid_argument(EMPTY_ACTION_MISSING))?;
        match &self.value {
            Some(value) => consume(value),
            None => otherwise(),
        }
        Ok(())
    }

    /// Keeps the value only if it matches `predicate`.
    ///
    /// An empty optional is returned untouched without looking at the
    /// predicate.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when a value is present and
    /// `predicate` is `None`.
    pub fn filter<P>(self, predicate: Option<P>) -> Result<Self, OptionalError>
    where
        P: FnOnce(&T) -> bool,
    {
        let Some(value) = self.value.as_ref() else {
            return Ok(self);
        };
        let test = predicate.ok_or_else(|| OptionalError::invalid_argument(PREDICATE_MISSING))?;
        if test(value) {
            Ok(self)
        } else {
            Ok(Self::empty())
        }
    }

    /// Transforms the value, collapsing a `None` result to empty.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when a value is present and
    /// `mapper` is `None`.
    pub fn map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<U>,
    {
        let Some(value) = self.value else {
            return Ok(Optional::empty());
        };
        let apply = mapper.ok_or_else(|| OptionalError::invalid_argument(MAPPER_MISSING))?;
        Ok(Optional::of_nullable(apply(value)))
    }

    /// Transforms the value into another optional, returned without
    /// re-wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when a value is present and
    /// either `mapper` is `None` or it produces `None`.
    pub fn flat_map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        let Some(value) = self.value else {
            return Ok(Optional::empty());
        };
        let apply = mapper.ok_or_else(|| OptionalError::invalid_argument(MAPPER_MISSING))?;
        apply(value).ok_or_else(|| OptionalError::invalid_argument(MAPPER_RESULT_MISSING))
    }

    /// Returns the receiver when present, otherwise the optional produced by
    /// `supplier`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when empty and `supplier`
    /// is `None` or produces `None`.
    pub fn or<S>(self, supplier: Option<S>) -> Result<Self, OptionalError>
    where
        S: FnOnce() -> Option<Self>,
    {
        if self.is_present() {
            return Ok(self);
        }
        let supply = supplier.ok_or_else(|| OptionalError::invalid_argument(SUPPLIER_MISSING))?;
        supply().ok_or_else(|| OptionalError::invalid_argument(SUPPLIER_RESULT_MISSING))
    }

    /// Returns the value when present, otherwise `other`.
    #[must_use]
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the value when present.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidState`] when the optional is empty.
    pub fn or_else_throw(self) -> Result<T, OptionalError> {
        self.value
            .ok_or_else(|| OptionalError::invalid_state(VALUE_NOT_PRESENT))
    }

    /// Returns the value when present, otherwise the error produced by
    /// `exception_supplier`.
    ///
    /// # Errors
    ///
    /// When empty, returns the supplied error verbatim. Without a supplier the
    /// error is [`OptionalError::InvalidState`]; a supplier that yields `None`
    /// produces [`OptionalError::InvalidArgument`]. Both are converted into
    /// `E`.
    pub fn or_else_throw_with<E, S>(self, exception_supplier: Option<S>) -> Result<T, E>
    where
        S: FnOnce() -> Option<E>,
        E: From<OptionalError>,
    {
        match (self.value, exception_supplier) {
            (Some(value), _) => Ok(value),
            (None, None) => Err(E::from(OptionalError::invalid_state(VALUE_NOT_PRESENT))),
            (None, Some(supply)) => Err(supply().unwrap_or_else(|| {
                E::from(OptionalError::invalid_argument(EXCEPTION_RESULT_MISSING))
            })),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
