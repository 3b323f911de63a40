//! Static schema: expected value kind and constraints per style key.
//!
//! Every key that can appear in a resolved style is declared here once, with
//! the [`ValueKind`] it must carry and an optional [`Constraint`]. The
//! resolver validates every resolved entry against this schema before
//! returning.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::key::StyleKey;
use crate::value::{StyleValue, ValueKind};

/// Optional restriction on a value beyond its kind.
///
/// Numeric constraints apply to [`StyleValue::Number`] and to every element
/// of a [`StyleValue::NumberSeq`].
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Strictly positive number.
    Positive,
    /// Inclusive numeric range; either bound may be open.
    Range {
        /// Lower bound, inclusive.
        min: Option<f64>,
        /// Upper bound, inclusive.
        max: Option<f64>,
    },
    /// String must equal one of the listed keywords.
    OneOf(Vec<String>),
}

impl Constraint {
    /// Inclusive `0.0..=1.0` range, for alpha values and fractions.
    pub fn unit_interval() -> Self {
        Constraint::Range {
            min: Some(0.0),
            max: Some(1.0),
        }
    }

    /// Keyword list from string slices.
    pub fn one_of(options: &[&str]) -> Self {
        Constraint::OneOf(options.iter().map(|s| s.to_string()).collect())
    }

    fn check_number(&self, n: f64) -> Result<(), String> {
        match self {
            Constraint::Positive => {
                if n > 0.0 {
                    Ok(())
                } else {
                    Err(format!("expected positive number, got {}", n))
                }
            }
            Constraint::Range { min, max } => {
                if let Some(lo) = min {
                    if n < *lo {
                        return Err(format!("expected number >= {}, got {}", lo, n));
                    }
                }
                if let Some(hi) = max {
                    if n > *hi {
                        return Err(format!("expected number <= {}, got {}", hi, n));
                    }
                }
                Ok(())
            }
            Constraint::OneOf(_) => Err("keyword constraint on a numeric value".to_string()),
        }
    }

    fn check(&self, value: &StyleValue) -> Result<(), String> {
        match (self, value) {
            (Constraint::OneOf(options), StyleValue::Str(s)) => {
                if options.iter().any(|o| o == s) {
                    Ok(())
                } else {
                    Err(format!(
                        "expected one of {}; got '{}'",
                        options.join(", "),
                        s
                    ))
                }
            }
            (_, StyleValue::Number(n)) => self.check_number(*n),
            (_, StyleValue::NumberSeq(seq)) => {
                for n in seq {
                    self.check_number(*n)?;
                }
                Ok(())
            }
            // Booleans and colors carry no constraints beyond their kind.
            _ => Ok(()),
        }
    }
}

/// Declared expectation for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    /// The value variant this key must hold.
    pub kind: ValueKind,
    /// Optional range/keyword restriction.
    pub constraint: Option<Constraint>,
}

/// Read-only declaration of every valid style key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    entries: BTreeMap<StyleKey, SchemaEntry>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a key with its expected kind, returning the schema for
    /// chaining. Fails on a malformed key; re-declaring a key replaces the
    /// prior entry.
    pub fn declare(mut self, key: &str, kind: ValueKind) -> Result<Self, String> {
        let key = StyleKey::new(key)?;
        self.entries.insert(
            key,
            SchemaEntry {
                kind,
                constraint: None,
            },
        );
        Ok(self)
    }

    /// Declares a key with a kind and a constraint.
    pub fn declare_with(
        mut self,
        key: &str,
        kind: ValueKind,
        constraint: Constraint,
    ) -> Result<Self, String> {
        let key = StyleKey::new(key)?;
        self.entries.insert(
            key,
            SchemaEntry {
                kind,
                constraint: Some(constraint),
            },
        );
        Ok(self)
    }

    /// Returns the entry for a key, if declared.
    pub fn get(&self, key: &StyleKey) -> Option<&SchemaEntry> {
        self.entries.get(key)
    }

    /// Returns `true` if the key is declared.
    pub fn contains(&self, key: &StyleKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over declared keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.keys()
    }

    /// Validates a value against the declaration for `key`.
    ///
    /// On success returns the (possibly normalized) value to store: a string
    /// that parses as a color is coerced to [`StyleValue::Color`] when the
    /// schema expects one, so stylesheet files can write `axes.edgecolor:
    /// bfbfbf` without quoting. The caller must have checked that the key is
    /// declared; an undeclared key is reported as a schema error here.
    pub fn check(&self, key: &StyleKey, value: &StyleValue) -> Result<StyleValue, String> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| "no schema entry".to_string())?;

        let value = match (entry.kind, value) {
            (ValueKind::Color, StyleValue::Str(s)) => match Color::parse(s) {
                Ok(color) => StyleValue::Color(color),
                Err(e) => return Err(format!("expected color, got '{}' ({})", s, e)),
            },
            _ if value.kind() == entry.kind => value.clone(),
            _ => {
                return Err(format!(
                    "expected {}, got {} ({})",
                    entry.kind,
                    value.kind(),
                    value
                ))
            }
        };

        if let Some(constraint) = &entry.constraint {
            constraint.check(&value)?;
        }
        Ok(value)
    }
}
