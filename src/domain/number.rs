// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric payload for value nodes.
//!
//! A [`Number`] remembers the width it was stored with so that its canonical text is the
//! text of the original type (`0.1` for an `f32`, not the widened binary value), while
//! every accessor converts with the usual narrowing and widening rules: integer
//! narrowing wraps in two's complement, float to integer saturates with NaN mapping to 0.

use std::fmt;

/// A numeric payload able to hold any integer up to 64 bits or any float up to `f64`.
///
/// # Examples
///
/// ```
/// use confmaster::domain::Number;
///
/// let n = Number::I32(300);
/// assert_eq!(n.as_i8(), 44);
/// assert_eq!(n.as_i64(), 300);
/// assert_eq!(n.to_string(), "300");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// An 8-bit signed integer.
    I8(i8),
    /// A 16-bit signed integer.
    I16(i16),
    /// A 32-bit signed integer.
    I32(i32),
    /// A 64-bit signed integer.
    I64(i64),
    /// A single precision float.
    F32(f32),
    /// A double precision float.
    F64(f64),
}

impl Number {
    /// Returns `true` for the integer variants.
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Converts to `i8`.
    ///
    /// Floats go through `i32` first, so `300.7` becomes `300` and then wraps to `44`.
    pub fn as_i8(&self) -> i8 {
        match *self {
            Number::F32(v) => v as i32 as i8,
            Number::F64(v) => v as i32 as i8,
            _ => self.as_i64() as i8,
        }
    }

    /// Converts to `i16`, truncating like [`as_i8`](Self::as_i8).
    pub fn as_i16(&self) -> i16 {
        match *self {
            Number::F32(v) => v as i32 as i16,
            Number::F64(v) => v as i32 as i16,
            _ => self.as_i64() as i16,
        }
    }

    /// Converts to `i32`.
    pub fn as_i32(&self) -> i32 {
        match *self {
            Number::F32(v) => v as i32,
            Number::F64(v) => v as i32,
            _ => self.as_i64() as i32,
        }
    }

    /// Converts to `i64`.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::I8(v) => i64::from(v),
            Number::I16(v) => i64::from(v),
            Number::I32(v) => i64::from(v),
            Number::I64(v) => v,
            Number::F32(v) => v as i64,
            Number::F64(v) => v as i64,
        }
    }

    /// Converts to `f32`.
    pub fn as_f32(&self) -> f32 {
        match *self {
            Number::F32(v) => v,
            Number::F64(v) => v as f32,
            _ => self.as_i64() as f32,
        }
    }

    /// Converts to `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::F32(v) => f64::from(v),
            Number::F64(v) => v,
            _ => self.as_i64() as f64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{}", v),
            Number::I16(v) => write!(f, "{}", v),
            Number::I32(v) => write!(f, "{}", v),
            Number::I64(v) => write!(f, "{}", v),
            // Debug keeps the fractional part (`1.0`) and stays shortest round-trip.
            Number::F32(v) => write!(f, "{:?}", v),
            Number::F64(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i8> for Number {
    fn from(v: i8) -> Self {
        Number::I8(v)
    }
}

impl From<i16> for Number {
    fn from(v: i16) -> Self {
        Number::I16(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::I32(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::I64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::F32(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::F64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_narrowing_wraps() {
        assert_eq!(Number::I32(300).as_i8(), 44);
        assert_eq!(Number::I32(-129).as_i8(), 127);
        assert_eq!(Number::I64(70_000).as_i16(), 4_464);
        assert_eq!(Number::I64(i64::from(i32::MAX) + 1).as_i32(), i32::MIN);
    }

    #[test]
    fn test_float_to_integer_saturates() {
        assert_eq!(Number::F64(1e20).as_i64(), i64::MAX);
        assert_eq!(Number::F64(-1e20).as_i32(), i32::MIN);
        assert_eq!(Number::F64(f64::NAN).as_i64(), 0);
        assert_eq!(Number::F32(2.9).as_i32(), 2);
    }

    #[test]
    fn test_float_to_small_integer_goes_through_i32() {
        assert_eq!(Number::F64(300.7).as_i8(), 44);
        assert_eq!(Number::F64(1e10).as_i8(), -1);
    }

    #[test]
    fn test_widening() {
        assert_eq!(Number::I8(-5).as_i64(), -5);
        assert_eq!(Number::I32(7).as_f64(), 7.0);
        assert_eq!(Number::F32(0.5).as_f64(), 0.5);
        assert_eq!(Number::F64(0.25).as_f32(), 0.25);
    }

    #[test]
    fn test_display_integers() {
        assert_eq!(Number::I8(-3).to_string(), "-3");
        assert_eq!(Number::I64(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_display_floats() {
        assert_eq!(Number::F64(1.0).to_string(), "1.0");
        assert_eq!(Number::F64(0.1).to_string(), "0.1");
        assert_eq!(Number::F32(0.1).to_string(), "0.1");
        assert_eq!(Number::F64(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn test_is_integer() {
        assert!(Number::I16(1).is_integer());
        assert!(!Number::F32(1.0).is_integer());
    }
}
