//! Layered style resolution.
//!
//! [`StyleResolver`] owns the base layer (built-in defaults), at most one
//! active theme layer, and a read-only [`Schema`]. [`resolve`] merges them
//! with call-site overrides in fixed precedence order (base < theme <
//! overrides), validates every resolved entry, and returns an immutable
//! [`ResolvedStyle`] or an error listing every problem found.
//!
//! # Lifecycle
//!
//! Construct one resolver at startup, register defaults once, and switch
//! themes with [`with_theme`] as needed. Resolution never mutates the
//! resolver, so a configured resolver can serve any number of `resolve`
//! calls.
//!
//! # Thread safety
//!
//! The registration methods take `&mut self` and must be serialized by the
//! caller (e.g. behind a mutex) if a resolver is shared across threads.
//! [`resolve`] takes `&self`, performs no interior mutation and no I/O, and
//! may run concurrently once registration is complete.
//!
//! [`resolve`]: StyleResolver::resolve
//! [`with_theme`]: StyleResolver::with_theme
//!
//! # Example
//!
//! ```rust
//! use plastik_style::{Constraint, Schema, StyleKey, StyleLayer, StyleResolver, ValueKind};
//!
//! let schema = Schema::new()
//!     .declare_with("axes.linewidth", ValueKind::Number, Constraint::Positive)?
//!     .declare_with("legend.fontsize", ValueKind::Number, Constraint::Positive)?;
//!
//! let mut resolver = StyleResolver::new(schema);
//! resolver.register_default(StyleKey::new("axes.linewidth")?, 0.5)?;
//! resolver.with_theme(
//!     "print",
//!     StyleLayer::new("print").with(StyleKey::new("legend.fontsize")?, 8),
//! )?;
//!
//! let overrides = StyleLayer::new("overrides").with(StyleKey::new("axes.linewidth")?, 1.0);
//! let resolved = resolver.resolve(&overrides)?;
//!
//! assert_eq!(resolved.number("axes.linewidth"), Some(1.0));
//! assert_eq!(resolved.number("legend.fontsize"), Some(8.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeMap;

use crate::error::{StyleError, Violation};
use crate::key::StyleKey;
use crate::layer::StyleLayer;
use crate::schema::Schema;
use crate::value::StyleValue;

/// Name given to the base layer in error messages.
const BASE_LAYER: &str = "defaults";

/// Merges default, theme, and override layers into validated, immutable
/// parameter sets.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    schema: Schema,
    base: StyleLayer,
    theme: Option<(String, StyleLayer)>,
}

impl StyleResolver {
    /// Creates a resolver over the given schema with an empty base layer and
    /// no theme.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            base: StyleLayer::new(BASE_LAYER),
            theme: None,
        }
    }

    /// Returns the schema this resolver validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Adds one key to the base layer.
    ///
    /// Base entries are declared once, at initialization: registering a key
    /// that is already present fails with [`StyleError::DuplicateKey`], and a
    /// key the schema does not declare fails with
    /// [`StyleError::SchemaMismatch`].
    pub fn register_default(
        &mut self,
        key: StyleKey,
        value: impl Into<StyleValue>,
    ) -> Result<(), StyleError> {
        if self.base.get(&key).is_some() {
            return Err(StyleError::DuplicateKey { key });
        }
        if !self.schema.contains(&key) {
            return Err(StyleError::SchemaMismatch {
                layer: BASE_LAYER.to_string(),
                keys: vec![key],
            });
        }
        self.base.insert(key, value.into());
        Ok(())
    }

    /// Adds every entry of `layer` to the base layer, with the same rules as
    /// [`register_default`](Self::register_default). Undeclared keys are
    /// collected and reported together.
    pub fn register_defaults(&mut self, layer: &StyleLayer) -> Result<(), StyleError> {
        let undeclared: Vec<StyleKey> = layer
            .keys()
            .filter(|k| !self.schema.contains(k))
            .cloned()
            .collect();
        if !undeclared.is_empty() {
            return Err(StyleError::SchemaMismatch {
                layer: layer.name().to_string(),
                keys: undeclared,
            });
        }
        for (key, value) in layer.iter() {
            if self.base.get(key).is_some() {
                return Err(StyleError::DuplicateKey { key: key.clone() });
            }
            self.base.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    /// Installs the theme layer, above defaults and below overrides.
    ///
    /// Only one theme is active at a time; installing another replaces the
    /// prior one without error; switching themes at runtime is a supported
    /// use case. Keys absent from the schema fail with
    /// [`StyleError::SchemaMismatch`] and leave the previous theme in place.
    pub fn with_theme(&mut self, name: &str, layer: StyleLayer) -> Result<(), StyleError> {
        let undeclared: Vec<StyleKey> = layer
            .keys()
            .filter(|k| !self.schema.contains(k))
            .cloned()
            .collect();
        if !undeclared.is_empty() {
            return Err(StyleError::SchemaMismatch {
                layer: name.to_string(),
                keys: undeclared,
            });
        }
        self.theme = Some((name.to_string(), layer));
        Ok(())
    }

    /// Removes the active theme, if any.
    pub fn clear_theme(&mut self) {
        self.theme = None;
    }

    /// Returns the active theme name, if one is installed.
    pub fn theme_name(&self) -> Option<&str> {
        self.theme.as_ref().map(|(name, _)| name.as_str())
    }

    /// Merges base, theme, and `overrides` and validates the result.
    ///
    /// A pure function of the three layers: identical inputs always produce
    /// identical output (or the identical error), and the resolver itself is
    /// never modified. Empty overrides are valid and yield the base+theme
    /// merge.
    ///
    /// # Errors
    ///
    /// - [`StyleError::UnknownKeys`] when any override key is absent from the
    ///   schema; every unknown key is listed.
    /// - [`StyleError::InvalidValues`] when any resolved value has the wrong
    ///   variant or fails its constraint; every violation is listed.
    ///
    /// Nothing partial is returned on failure.
    pub fn resolve(&self, overrides: &StyleLayer) -> Result<ResolvedStyle, StyleError> {
        let unknown: Vec<StyleKey> = overrides
            .keys()
            .filter(|k| !self.schema.contains(k))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(StyleError::UnknownKeys { keys: unknown });
        }

        let mut accumulator: BTreeMap<StyleKey, StyleValue> = BTreeMap::new();
        for (key, value) in self.base.iter() {
            accumulator.insert(key.clone(), value.clone());
        }
        if let Some((_, theme)) = &self.theme {
            for (key, value) in theme.iter() {
                accumulator.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in overrides.iter() {
            accumulator.insert(key.clone(), value.clone());
        }

        let mut violations = Vec::new();
        for (key, value) in accumulator.iter_mut() {
            match self.schema.check(key, value) {
                Ok(normalized) => *value = normalized,
                Err(reason) => violations.push(Violation {
                    key: key.clone(),
                    reason,
                }),
            }
        }
        if !violations.is_empty() {
            return Err(StyleError::InvalidValues { violations });
        }

        Ok(ResolvedStyle {
            entries: accumulator,
        })
    }
}

/// The final, immutable, validated parameter set.
///
/// Produced only by [`StyleResolver::resolve`]; fully materialized, with no
/// references back to the layers it was merged from. Color-typed entries are
/// normalized to [`StyleValue::Color`] even when the source layer spelled
/// them as strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl ResolvedStyle {
    /// Looks up a value by key string.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Looks up a numeric value.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    /// Looks up a string value.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Looks up a boolean value.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(StyleValue::as_bool)
    }

    /// Looks up a color value.
    pub fn color(&self, key: &str) -> Option<crate::Color> {
        self.get(key).and_then(StyleValue::as_color)
    }

    /// Looks up a number-sequence value.
    pub fn number_seq(&self, key: &str) -> Option<&[f64]> {
        self.get(key).and_then(StyleValue::as_number_seq)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter()
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was resolved (all three layers empty).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the resolved style as a flat YAML mapping, colors as hex
    /// strings. The output round-trips through
    /// [`StyleLayer::from_yaml`](crate::StyleLayer::from_yaml).
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl serde::Serialize for ResolvedStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

/// The rendering collaborator's entry point: maps each resolved key to the
/// corresponding native parameter. What the backend does with the values is
/// outside this crate's scope.
pub trait ApplyStyle {
    /// Applies every entry of `style` to the backend.
    fn apply_style(&mut self, style: &ResolvedStyle);
}
