//! Namespaced style keys.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Delimiter between namespace segments of a [`StyleKey`].
pub const KEY_DELIMITER: char = '.';

/// Identifier for a single style parameter, scoped by `.`-separated
/// namespace segments (`axes.linewidth`, `legend.fontsize`).
///
/// Keys are validated at construction: every segment must be non-empty and
/// consist of ASCII alphanumerics, `_` or `-`. A resolved style contains each
/// key at most once; uniqueness is guaranteed by the map types holding them.
///
/// # Example
///
/// ```rust
/// use plastik_style::StyleKey;
///
/// let key = StyleKey::new("axes.linewidth").unwrap();
/// assert_eq!(key.namespace(), Some("axes"));
/// assert_eq!(key.leaf(), "linewidth");
///
/// assert!(StyleKey::new("axes..linewidth").is_err());
/// assert!(StyleKey::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleKey(String);

impl StyleKey {
    /// Creates a key from a dotted identifier, validating its shape.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err("style key must not be empty".to_string());
        }
        for segment in raw.split(KEY_DELIMITER) {
            if segment.is_empty() {
                return Err(format!("style key '{}' has an empty segment", raw));
            }
            if let Some(c) = segment
                .chars()
                .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
            {
                return Err(format!("style key '{}' has invalid character '{}'", raw, c));
            }
        }
        Ok(StyleKey(raw))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the namespace portion (everything before the last delimiter),
    /// or `None` for a single-segment key.
    pub fn namespace(&self) -> Option<&str> {
        self.0.rfind(KEY_DELIMITER).map(|i| &self.0[..i])
    }

    /// Returns the final segment of the key.
    pub fn leaf(&self) -> &str {
        match self.0.rfind(KEY_DELIMITER) {
            Some(i) => &self.0[i + 1..],
            None => &self.0,
        }
    }

    /// Iterates over the namespace segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_DELIMITER)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StyleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::new(s)
    }
}

// Allows `&str` lookups in maps keyed by StyleKey.
impl Borrow<str> for StyleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_keys() {
        assert!(StyleKey::new("axes.linewidth").is_ok());
        assert!(StyleKey::new("xtick.major.size").is_ok());
        assert!(StyleKey::new("legend.bbox_to_anchor").is_ok());
        assert!(StyleKey::new("font-size").is_ok());
    }

    #[test]
    fn accepts_single_segment() {
        let key = StyleKey::new("dpi").unwrap();
        assert_eq!(key.namespace(), None);
        assert_eq!(key.leaf(), "dpi");
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(StyleKey::new("").is_err());
        assert!(StyleKey::new(".").is_err());
        assert!(StyleKey::new("axes.").is_err());
        assert!(StyleKey::new(".linewidth").is_err());
        assert!(StyleKey::new("axes..linewidth").is_err());
        assert!(StyleKey::new("axes.line width").is_err());
        assert!(StyleKey::new("axes.line:width").is_err());
    }

    #[test]
    fn namespace_and_leaf() {
        let key = StyleKey::new("xtick.major.size").unwrap();
        assert_eq!(key.namespace(), Some("xtick.major"));
        assert_eq!(key.leaf(), "size");
        assert_eq!(key.segments().collect::<Vec<_>>(), ["xtick", "major", "size"]);
    }

    #[test]
    fn ordering_matches_string_ordering() {
        let a = StyleKey::new("axes.linewidth").unwrap();
        let b = StyleKey::new("legend.fontsize").unwrap();
        assert!(a < b);
    }
}
