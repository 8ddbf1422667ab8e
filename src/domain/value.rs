// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar value node with type coercion.
//!
//! This module provides the `ValueNode` type, which holds either a numeric payload or a
//! string payload and converts it to the requested scalar type on access. Hand-built
//! trees usually store typed numbers while text backends hand back strings; both give
//! the same answers from the accessors below.

use crate::domain::errors::{NodeError, Result};
use crate::domain::number::Number;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq)]
enum Payload {
    #[default]
    Unset,
    Number(Number),
    String(String),
}

/// A scalar node holding a number or a string.
///
/// Every setter replaces the previous payload entirely. A freshly created value has no
/// payload and every accessor fails with [`NodeError::UnsetValue`] until one is set.
///
/// # Examples
///
/// ```
/// use confmaster::domain::ValueNode;
///
/// let value = ValueNode::from("0x1F");
/// assert_eq!(value.as_i32().unwrap(), 31);
///
/// let value = ValueNode::from(300);
/// assert_eq!(value.as_i8().unwrap(), 44);
/// assert_eq!(value.as_string().unwrap(), "300");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueNode {
    payload: Payload,
}

impl ValueNode {
    /// Creates a value node with no payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a payload has been set.
    pub fn is_set(&self) -> bool {
        self.payload != Payload::Unset
    }

    /// Returns the numeric payload, if the value is number-backed.
    pub fn number(&self) -> Option<Number> {
        match &self.payload {
            Payload::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, if the value is string-backed.
    pub fn string(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    /// Stores an `i8`.
    pub fn set_i8(&mut self, value: i8) {
        self.payload = Payload::Number(Number::I8(value));
    }

    /// Stores an `i16`.
    pub fn set_i16(&mut self, value: i16) {
        self.payload = Payload::Number(Number::I16(value));
    }

    /// Stores an `i32`.
    pub fn set_i32(&mut self, value: i32) {
        self.payload = Payload::Number(Number::I32(value));
    }

    /// Stores an `i64`.
    pub fn set_i64(&mut self, value: i64) {
        self.payload = Payload::Number(Number::I64(value));
    }

    /// Stores an `f32`.
    pub fn set_f32(&mut self, value: f32) {
        self.payload = Payload::Number(Number::F32(value));
    }

    /// Stores an `f64`.
    pub fn set_f64(&mut self, value: f64) {
        self.payload = Payload::Number(Number::F64(value));
    }

    /// Stores a boolean as the integer `1` or `0`.
    pub fn set_bool(&mut self, value: bool) {
        self.payload = Payload::Number(Number::I32(i32::from(value)));
    }

    /// Stores a character as the low 8 bits of its code point.
    pub fn set_char(&mut self, value: char) {
        self.payload = Payload::Number(Number::I8(u32::from(value) as u8 as i8));
    }

    /// Stores a string.
    pub fn set_string(&mut self, value: impl Into<String>) {
        self.payload = Payload::String(value.into());
    }

    /// Stores any numeric payload.
    pub fn set_number(&mut self, value: Number) {
        self.payload = Payload::Number(value);
    }

    /// Converts the value to an `i8`.
    ///
    /// Strings are decoded with optional sign and `0x`, `#` or leading-`0` radix prefix.
    pub fn as_i8(&self) -> Result<i8> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_i8()),
            Payload::String(s) => decode_integer(s, "i8"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to an `i16`.
    pub fn as_i16(&self) -> Result<i16> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_i16()),
            Payload::String(s) => decode_integer(s, "i16"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to an `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confmaster::domain::ValueNode;
    ///
    /// assert_eq!(ValueNode::from("-010").as_i32().unwrap(), -8);
    /// assert!(ValueNode::from("3.14").as_i32().is_err());
    /// ```
    pub fn as_i32(&self) -> Result<i32> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_i32()),
            Payload::String(s) => decode_integer(s, "i32"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self) -> Result<i64> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_i64()),
            Payload::String(s) => decode_integer(s, "i64"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to an `f32`.
    ///
    /// Strings use Rust float syntax plus an optional `f`/`d` suffix, so `inf` and `NaN`
    /// are accepted while hexadecimal floats such as `0x1p3` are not.
    pub fn as_f32(&self) -> Result<f32> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_f32()),
            Payload::String(s) => parse_floating(s, "f32"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Accepts the same text as [`as_f32`](Self::as_f32).
    pub fn as_f64(&self) -> Result<f64> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_f64()),
            Payload::String(s) => parse_floating(s, "f64"),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// A number is `true` when its `i8` truncation is non-zero. A string is `true` only
    /// when it equals `"true"` ignoring ASCII case; any other string is `false`.
    pub fn as_bool(&self) -> Result<bool> {
        match &self.payload {
            Payload::Number(n) => Ok(n.as_i8() != 0),
            Payload::String(s) => Ok(s.eq_ignore_ascii_case("true")),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to a character.
    ///
    /// A number yields the character whose code is its low 8 bits; a string yields its
    /// first character and fails when empty.
    pub fn as_char(&self) -> Result<char> {
        match &self.payload {
            Payload::Number(n) => Ok(char::from(n.as_i8() as u8)),
            Payload::String(s) => s.chars().next().ok_or_else(|| NodeError::FormatError {
                value: String::new(),
                target_type: "char",
                source: None,
            }),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }

    /// Converts the value to a string.
    ///
    /// Numbers render as their canonical decimal text. Floats use the shortest text that
    /// reads back to the same value and always shows a fraction or an exponent, written
    /// `1.0`, `1e20`, `inf` or `NaN`.
    pub fn as_string(&self) -> Result<String> {
        match &self.payload {
            Payload::String(s) => Ok(s.clone()),
            Payload::Number(n) => Ok(n.to_string()),
            Payload::Unset => Err(NodeError::UnsetValue),
        }
    }
}

/// Decodes an integer the way configuration text usually spells one: an optional sign,
/// then a `0x`/`0X`/`#` hex prefix, a leading `0` for octal, or plain decimal.
fn decode_integer<T>(text: &str, target_type: &'static str) -> Result<T>
where
    T: TryFrom<i128>,
{
    let invalid = || NodeError::FormatError {
        value: text.to_string(),
        target_type,
        source: None,
    };

    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(d) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))
    {
        (16, d)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    // from_str_radix would accept a second sign after the prefix
    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return Err(invalid());
    }

    let magnitude = i128::from_str_radix(digits, radix)
        .map_err(|e| NodeError::from_parse_int_error(text, target_type, e))?;
    let signed = if negative { -magnitude } else { magnitude };
    T::try_from(signed).map_err(|_| invalid())
}

/// Parses a float, ignoring surrounding whitespace and an optional `f`/`d` type suffix.
fn parse_floating<T>(text: &str, target_type: &'static str) -> Result<T>
where
    T: FromStr<Err = ParseFloatError>,
{
    let trimmed = text.trim();
    trimmed
        .parse::<T>()
        .or_else(|e| {
            match trimmed.strip_suffix(|c: char| matches!(c, 'f' | 'F' | 'd' | 'D')) {
                Some(body) => body.parse::<T>(),
                None => Err(e),
            }
        })
        .map_err(|e| NodeError::from_parse_float_error(text, target_type, e))
}

impl From<i8> for ValueNode {
    fn from(v: i8) -> Self {
        let mut node = ValueNode::new();
        node.set_i8(v);
        node
    }
}

impl From<i16> for ValueNode {
    fn from(v: i16) -> Self {
        let mut node = ValueNode::new();
        node.set_i16(v);
        node
    }
}

impl From<i32> for ValueNode {
    fn from(v: i32) -> Self {
        let mut node = ValueNode::new();
        node.set_i32(v);
        node
    }
}

impl From<i64> for ValueNode {
    fn from(v: i64) -> Self {
        let mut node = ValueNode::new();
        node.set_i64(v);
        node
    }
}

impl From<f32> for ValueNode {
    fn from(v: f32) -> Self {
        let mut node = ValueNode::new();
        node.set_f32(v);
        node
    }
}

impl From<f64> for ValueNode {
    fn from(v: f64) -> Self {
        let mut node = ValueNode::new();
        node.set_f64(v);
        node
    }
}

impl From<bool> for ValueNode {
    fn from(v: bool) -> Self {
        let mut node = ValueNode::new();
        node.set_bool(v);
        node
    }
}

impl From<char> for ValueNode {
    fn from(v: char) -> Self {
        let mut node = ValueNode::new();
        node.set_char(v);
        node
    }
}

impl From<Number> for ValueNode {
    fn from(v: Number) -> Self {
        let mut node = ValueNode::new();
        node.set_number(v);
        node
    }
}

impl From<String> for ValueNode {
    fn from(v: String) -> Self {
        let mut node = ValueNode::new();
        node.set_string(v);
        node
    }
}

impl From<&str> for ValueNode {
    fn from(v: &str) -> Self {
        let mut node = ValueNode::new();
        node.set_string(v);
        node
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Number(n) => write!(f, "{}", n),
            Payload::String(s) => f.write_str(s),
            Payload::Unset => f.write_str("<unset>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unset() {
        let value = ValueNode::new();
        assert!(!value.is_set());
        assert!(matches!(value.as_i32(), Err(NodeError::UnsetValue)));
        assert!(matches!(value.as_bool(), Err(NodeError::UnsetValue)));
        assert!(matches!(value.as_char(), Err(NodeError::UnsetValue)));
        assert!(matches!(value.as_string(), Err(NodeError::UnsetValue)));
        assert!(matches!(value.as_f64(), Err(NodeError::UnsetValue)));
    }

    #[test]
    fn test_set_replaces_payload() {
        let mut value = ValueNode::from("hello");
        value.set_i32(5);
        assert_eq!(value.string(), None);
        assert_eq!(value.number(), Some(Number::I32(5)));

        value.set_string("world");
        assert_eq!(value.number(), None);
        assert_eq!(value.string(), Some("world"));
    }

    #[test]
    fn test_numeric_narrowing() {
        let value = ValueNode::from(300);
        assert_eq!(value.as_i8().unwrap(), 44);
        assert_eq!(value.as_i16().unwrap(), 300);
        assert_eq!(value.as_i64().unwrap(), 300);
        assert_eq!(value.as_f64().unwrap(), 300.0);
    }

    #[test]
    fn test_float_payload_to_integers() {
        let value = ValueNode::from(2.75f64);
        assert_eq!(value.as_i32().unwrap(), 2);
        assert_eq!(value.as_f32().unwrap(), 2.75);
    }

    #[test]
    fn test_bool_storage() {
        let value = ValueNode::from(true);
        assert_eq!(value.number(), Some(Number::I32(1)));
        assert!(value.as_bool().unwrap());
        assert_eq!(value.as_string().unwrap(), "1");

        let value = ValueNode::from(false);
        assert!(!value.as_bool().unwrap());
    }

    #[test]
    fn test_bool_from_number_uses_low_byte() {
        assert!(ValueNode::from(7).as_bool().unwrap());
        assert!(!ValueNode::from(256).as_bool().unwrap());
    }

    #[test]
    fn test_bool_from_string_never_fails() {
        let true_values = vec!["true", "True", "TRUE"];
        for val in true_values {
            assert!(ValueNode::from(val).as_bool().unwrap(), "Failed for value: {}", val);
        }
        let false_values = vec!["false", "yes", "1", "", "truth"];
        for val in false_values {
            assert!(!ValueNode::from(val).as_bool().unwrap(), "Failed for value: {}", val);
        }
    }

    #[test]
    fn test_char_storage() {
        let value = ValueNode::from('A');
        assert_eq!(value.number(), Some(Number::I8(65)));
        assert_eq!(value.as_char().unwrap(), 'A');
        assert_eq!(value.as_string().unwrap(), "65");
    }

    #[test]
    fn test_char_from_string() {
        assert_eq!(ValueNode::from("xyz").as_char().unwrap(), 'x');
        assert!(matches!(
            ValueNode::from("").as_char(),
            Err(NodeError::FormatError { .. })
        ));
    }

    #[test]
    fn test_char_from_number_low_byte() {
        assert_eq!(ValueNode::from(0x141).as_char().unwrap(), 'A');
    }

    #[test]
    fn test_decode_decimal() {
        assert_eq!(ValueNode::from("42").as_i32().unwrap(), 42);
        assert_eq!(ValueNode::from("-42").as_i32().unwrap(), -42);
        assert_eq!(ValueNode::from("+42").as_i64().unwrap(), 42);
        assert_eq!(ValueNode::from("0").as_i8().unwrap(), 0);
    }

    #[test]
    fn test_decode_hex_and_octal() {
        assert_eq!(ValueNode::from("0x1F").as_i32().unwrap(), 31);
        assert_eq!(ValueNode::from("0X1f").as_i32().unwrap(), 31);
        assert_eq!(ValueNode::from("#ff").as_i16().unwrap(), 255);
        assert_eq!(ValueNode::from("-0x10").as_i64().unwrap(), -16);
        assert_eq!(ValueNode::from("017").as_i32().unwrap(), 15);
    }

    #[test]
    fn test_decode_range_is_checked() {
        assert_eq!(ValueNode::from("127").as_i8().unwrap(), 127);
        assert_eq!(ValueNode::from("-128").as_i8().unwrap(), -128);
        assert!(ValueNode::from("128").as_i8().is_err());
        assert!(ValueNode::from("2147483648").as_i32().is_err());
        assert_eq!(
            ValueNode::from("-0x8000000000000000").as_i64().unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_decode_invalid() {
        for text in ["", "-", "0x", "0x-5", "--5", "3.14", "08", "abc", " 5"] {
            let result = ValueNode::from(text).as_i32();
            assert!(
                matches!(result, Err(NodeError::FormatError { .. })),
                "Expected format error for: {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_floating() {
        assert_eq!(ValueNode::from("6.25").as_f64().unwrap(), 6.25);
        assert_eq!(ValueNode::from(" 2.5 ").as_f64().unwrap(), 2.5);
        assert_eq!(ValueNode::from("1.5f").as_f32().unwrap(), 1.5);
        assert_eq!(ValueNode::from("1e3d").as_f64().unwrap(), 1000.0);
        assert_eq!(ValueNode::from("10").as_f64().unwrap(), 10.0);
        assert!(ValueNode::from("NaN").as_f64().unwrap().is_nan());
        assert_eq!(ValueNode::from("-inf").as_f64().unwrap(), f64::NEG_INFINITY);
        assert!(ValueNode::from("f").as_f64().is_err());
        assert!(ValueNode::from("abc").as_f32().is_err());
    }

    #[test]
    fn test_string_passthrough() {
        let value = ValueNode::from("  spaces  ");
        assert_eq!(value.as_string().unwrap(), "  spaces  ");
    }

    #[test]
    fn test_number_to_string_and_back() {
        let value = ValueNode::from(0.1f32);
        let text = value.as_string().unwrap();
        assert_eq!(text, "0.1");
        assert_eq!(ValueNode::from(text).as_f32().unwrap(), 0.1f32);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueNode::from(12).to_string(), "12");
        assert_eq!(ValueNode::from("x").to_string(), "x");
        assert_eq!(ValueNode::new().to_string(), "<unset>");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ValueNode::from("a");
        let mut clone = original.clone();
        clone.set_i32(1);
        assert_eq!(original.string(), Some("a"));
    }

    #[test]
    fn test_float_text_forms() {
        assert_eq!(ValueNode::from(1e20).as_string().unwrap(), "1e20");
        assert_eq!(ValueNode::from(1.0f32).as_string().unwrap(), "1.0");
        assert_eq!(ValueNode::from("inf").as_f64().unwrap(), f64::INFINITY);
        assert!(ValueNode::from("NaN").as_f32().unwrap().is_nan());
        assert!(matches!(
            ValueNode::from("0x1p3").as_f64(),
            Err(NodeError::FormatError { .. })
        ));
    }
}
