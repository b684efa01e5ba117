//! Numeric classification of loosely typed values.
//!
//! Values are classified the way a permissive numeric coercion would see
//! them: numeric text counts as a number, booleans never do, and infinities
//! count as numbers but never as integers.

/// Numeric classification of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Not numeric at all, including NaN.
    NotANumber,
    /// A finite whole number.
    Integer,
    /// Numeric but not a finite whole number: fractions and infinities.
    NonInteger,
}

/// Values that can be classified numerically.
pub trait NumberLike {
    /// Classify `self`.
    fn number_kind(&self) -> NumberKind;
}

macro_rules! integer_number_like {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumberLike for $ty {
                fn number_kind(&self) -> NumberKind {
                    NumberKind::Integer
                }
            }
        )*
    };
}

integer_number_like!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[expect(
    clippy::float_cmp,
    reason = "a zero fractional part is exact for whole floats"
)]
fn classify_float(value: f64) -> NumberKind {
    if value.is_nan() {
        NumberKind::NotANumber
    } else if value.is_finite() && value.fract() == 0.0 {
        NumberKind::Integer
    } else {
        NumberKind::NonInteger
    }
}

fn classify_text(text: &str) -> NumberKind {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NumberKind::NotANumber;
    }
    if let Some(kind) = classify_radix(trimmed) {
        return kind;
    }

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return NumberKind::NonInteger;
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return NumberKind::NotANumber;
    }
    trimmed
        .parse::<f64>()
        .map_or(NumberKind::NotANumber, classify_float)
}

/// Unsigned `0x`, `0o`, and `0b` literals.
fn classify_radix(text: &str) -> Option<NumberKind> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = text.get(2..)?;
    let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    Some(if valid {
        NumberKind::Integer
    } else {
        NumberKind::NotANumber
    })
}

impl NumberLike for f64 {
    fn number_kind(&self) -> NumberKind {
        classify_float(*self)
    }
}

impl NumberLike for f32 {
    fn number_kind(&self) -> NumberKind {
        classify_float(f64::from(*self))
    }
}

impl NumberLike for bool {
    fn number_kind(&self) -> NumberKind {
        NumberKind::NotANumber
    }
}

impl NumberLike for str {
    fn number_kind(&self) -> NumberKind {
        classify_text(self)
    }
}

impl NumberLike for String {
    fn number_kind(&self) -> NumberKind {
        classify_text(self)
    }
}

impl<T: NumberLike + ?Sized> NumberLike for &T {
    fn number_kind(&self) -> NumberKind {
        (**self).number_kind()
    }
}

/// Whether `value` is numeric, NaN excluded.
///
/// # Examples
///
/// ```
/// use prog_utils::number::{is_float, is_integer, is_number};
///
/// assert!(is_number("1e3"));
/// assert!(is_integer("1e3"));
/// assert!(is_float(&0.5_f64));
/// assert!(!is_number(&f64::NAN));
/// ```
#[must_use]
pub fn is_number<V: NumberLike + ?Sized>(value: &V) -> bool {
    value.number_kind() != NumberKind::NotANumber
}

/// Whether `value` is a finite whole number.
#[must_use]
pub fn is_integer<V: NumberLike + ?Sized>(value: &V) -> bool {
    value.number_kind() == NumberKind::Integer
}

/// Whether `value` is numeric but not a finite whole number.
#[must_use]
pub fn is_float<V: NumberLike + ?Sized>(value: &V) -> bool {
    value.number_kind() == NumberKind::NonInteger
}

/// Whether `text` spells a positive integer in plain decimal digits.
///
/// Leading zeros, signs, whitespace and values beyond `u64` are rejected.
/// Every value up to `u64::MAX` is accepted exactly, including those above
/// 2^53 that a round trip through `f64` would lose.
#[must_use]
pub fn is_positive_integer_string(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('0')
        && text.bytes().all(|b| b.is_ascii_digit())
        && text.parse::<u64>().is_ok()
}
