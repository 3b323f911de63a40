//! Style values and their type tags.
//!
//! [`StyleValue`] is the tagged union stored in layers and resolved styles.
//! Every schema entry declares exactly one expected [`ValueKind`]; validation
//! compares the runtime tag against the declared one.

use std::fmt;

use crate::color::Color;

/// The value of a single style parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Numeric value (sizes, widths, alphas).
    Number(f64),
    /// String value (keywords such as `tight`, font names).
    Str(String),
    /// Boolean flag.
    Bool(bool),
    /// Color value.
    Color(Color),
    /// Sequence of numbers (figure sizes, anchors).
    NumberSeq(Vec<f64>),
}

/// Discriminant of [`StyleValue`], used by schema declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Expects [`StyleValue::Number`].
    Number,
    /// Expects [`StyleValue::Str`].
    Str,
    /// Expects [`StyleValue::Bool`].
    Bool,
    /// Expects [`StyleValue::Color`].
    Color,
    /// Expects [`StyleValue::NumberSeq`].
    NumberSeq,
}

impl ValueKind {
    /// Human-readable name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Str => "string",
            ValueKind::Bool => "boolean",
            ValueKind::Color => "color",
            ValueKind::NumberSeq => "number sequence",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StyleValue {
    /// Returns the type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Number(_) => ValueKind::Number,
            StyleValue::Str(_) => ValueKind::Str,
            StyleValue::Bool(_) => ValueKind::Bool,
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::NumberSeq(_) => ValueKind::NumberSeq,
        }
    }

    /// Extracts the number, if this is a [`StyleValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string, if this is a [`StyleValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the boolean, if this is a [`StyleValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the color, if this is a [`StyleValue::Color`].
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Extracts the number sequence, if this is a [`StyleValue::NumberSeq`].
    pub fn as_number_seq(&self) -> Option<&[f64]> {
        match self {
            StyleValue::NumberSeq(seq) => Some(seq),
            _ => None,
        }
    }
}

// Serialized in backend-facing form: colors as hex strings, everything else
// as the plain scalar or sequence.
impl serde::Serialize for StyleValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => serializer.serialize_f64(*n),
            StyleValue::Str(s) => serializer.serialize_str(s),
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
            StyleValue::Color(c) => serializer.serialize_str(&c.to_hex()),
            StyleValue::NumberSeq(seq) => serde::Serialize::serialize(seq, serializer),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Str(s) => write!(f, "'{}'", s),
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Color(c) => write!(f, "{}", c),
            StyleValue::NumberSeq(seq) => {
                let parts: Vec<String> = seq.iter().map(|n| n.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<usize> for StyleValue {
    fn from(n: usize) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

impl From<Vec<f64>> for StyleValue {
    fn from(seq: Vec<f64>) -> Self {
        StyleValue::NumberSeq(seq)
    }
}

impl From<(f64, f64)> for StyleValue {
    fn from((a, b): (f64, f64)) -> Self {
        StyleValue::NumberSeq(vec![a, b])
    }
}
