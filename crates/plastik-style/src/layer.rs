//! Style layers: named, ordered sources of key/value settings.

use std::collections::BTreeMap;
use std::path::Path;

use crate::key::StyleKey;
use crate::stylesheet::{self, StylesheetError};
use crate::value::StyleValue;

/// One named source of style settings: built-in defaults, a theme, or
/// call-site overrides.
///
/// Layers are built with the consuming [`with`](StyleLayer::with) builder and
/// are immutable afterwards; the resolver only ever reads them. Entries
/// iterate in key order, which keeps resolution deterministic.
///
/// # Example
///
/// ```rust
/// use plastik_style::{StyleKey, StyleLayer};
///
/// let overrides = StyleLayer::new("overrides")
///     .with(StyleKey::new("axes.linewidth").unwrap(), 1.0)
///     .with(StyleKey::new("legend.fontsize").unwrap(), 8);
///
/// assert_eq!(overrides.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleLayer {
    name: String,
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl StyleLayer {
    /// Creates an empty layer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the layer for chaining. Setting the same key
    /// twice keeps the last value.
    pub fn with(mut self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    pub(crate) fn insert(&mut self, key: StyleKey, value: StyleValue) {
        self.entries.insert(key, value);
    }

    /// Loads a layer from a flat stylesheet file (`key: value` lines, `#`
    /// comments). The layer name is the file stem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("stylesheet");

        stylesheet::parse_stylesheet(name, &content).map_err(|e| e.with_path(path))
    }

    /// Parses a layer from a flat YAML mapping. Nested mappings are rejected;
    /// themes are flat key/value files just like stylesheets.
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self, StylesheetError> {
        stylesheet::parse_yaml_layer(name.into(), yaml)
    }

    /// Returns the layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter()
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.keys()
    }

    /// Returns `true` if the layer has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StyleKey {
        StyleKey::new(s).unwrap()
    }

    #[test]
    fn builder_collects_entries() {
        let layer = StyleLayer::new("defaults")
            .with(key("axes.linewidth"), 0.5)
            .with(key("xtick.direction"), "in")
            .with(key("axes.grid"), false);

        assert_eq!(layer.name(), "defaults");
        assert_eq!(layer.len(), 3);
        assert_eq!(
            layer.get(&key("axes.linewidth")),
            Some(&StyleValue::Number(0.5))
        );
    }

    #[test]
    fn last_write_wins() {
        let layer = StyleLayer::new("l")
            .with(key("a.b"), 1.0)
            .with(key("a.b"), 2.0);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.get(&key("a.b")), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn iterates_in_key_order() {
        let layer = StyleLayer::new("l")
            .with(key("legend.fontsize"), 8)
            .with(key("axes.linewidth"), 0.5);
        let keys: Vec<&str> = layer.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["axes.linewidth", "legend.fontsize"]);
    }

    #[test]
    fn from_file_names_layer_after_stem() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.style");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# comment\naxes.linewidth: 0.5").unwrap();

        let layer = StyleLayer::from_file(&path).unwrap();
        assert_eq!(layer.name(), "paper");
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn from_file_missing() {
        assert!(StyleLayer::from_file("/nonexistent/nope.style").is_err());
    }
}
