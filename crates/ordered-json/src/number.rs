//! Deferred-precision JSON numbers.
//!
//! A decoded number keeps the exact text of its source literal, so encoding it
//! again reproduces the same digits. Conversion to a native numeric type only
//! happens when the caller asks for it, and any precision lost in that
//! conversion is the caller's concern.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNumberError;
use crate::json::util::scan_number;

/// A JSON number.
///
/// # Example
///
/// ```
/// use ordered_json::Number;
///
/// let n: Number = "12345678901234567890.000000000000000001".parse().unwrap();
/// assert_eq!(n.to_string(), "12345678901234567890.000000000000000001");
/// assert_eq!(Number::from(1).as_literal(), Some("1"));
/// assert!(!Number::from(f64::NAN).is_finite());
/// ```
#[derive(Clone, PartialEq)]
pub struct Number(N);

#[derive(Clone, PartialEq)]
enum N {
    /// Validated JSON number literal text.
    Literal(Box<str>),
    /// NaN or an infinity. Has no JSON form, so encoding it fails.
    NonFinite(f64),
}

impl Number {
    /// Builds a number from a literal already checked against the JSON grammar.
    pub(crate) fn from_literal_unchecked(literal: &str) -> Self {
        Number(N::Literal(literal.into()))
    }

    /// Build a number from an `f64`.
    ///
    /// Finite values are stored as their shortest round-trip decimal text.
    /// NaN and the infinities are kept as they are; encoding them is an error.
    pub fn from_f64(f: f64) -> Self {
        if f.is_finite() {
            Number(N::Literal(format!("{f}").into_boxed_str()))
        } else {
            Number(N::NonFinite(f))
        }
    }

    /// The literal text of this number, or `None` for a non-finite float.
    pub fn as_literal(&self) -> Option<&str> {
        match &self.0 {
            N::Literal(s) => Some(s),
            N::NonFinite(_) => None,
        }
    }

    /// Whether this number can be written as a JSON literal.
    pub fn is_finite(&self) -> bool {
        matches!(self.0, N::Literal(_))
    }

    /// Whether the literal has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        match &self.0 {
            N::Literal(s) => !s.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')),
            N::NonFinite(_) => false,
        }
    }

    /// The value as an `i64`, if the literal is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        match &self.0 {
            N::Literal(s) if self.is_integer() => s.parse().ok(),
            _ => None,
        }
    }

    /// The value as a `u64`, if the literal is a non-negative integer in range.
    pub fn as_u64(&self) -> Option<u64> {
        match &self.0 {
            N::Literal(s) if self.is_integer() => s.parse().ok(),
            _ => None,
        }
    }

    /// The value as the nearest `f64`. May lose precision.
    pub fn as_f64(&self) -> f64 {
        match &self.0 {
            // A grammar-checked literal always parses; out-of-range
            // magnitudes saturate to infinity.
            N::Literal(s) => s.parse().unwrap_or(f64::NAN),
            N::NonFinite(f) => *f,
        }
    }

    pub(crate) fn non_finite_value(&self) -> Option<f64> {
        match self.0 {
            N::NonFinite(f) => Some(f),
            N::Literal(_) => None,
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match scan_number(s.as_bytes(), 0) {
            Ok(end) if end == s.len() => Ok(Number::from_literal_unchecked(s)),
            _ => Err(ParseNumberError(s.to_string())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            N::Literal(s) => f.write_str(s),
            N::NonFinite(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(i: $ty) -> Self {
                    Number(N::Literal(i.to_string().into_boxed_str()))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::from_f64(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::from_f64(f64::from(f))
    }
}
