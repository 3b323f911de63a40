//! Stylesheet parsing.
//!
//! Two input formats produce a [`StyleLayer`]:
//!
//! - The flat stylesheet format: one `key: value` pair per line, `#` starting
//!   a comment (full-line or trailing), blank lines ignored.
//! - A flat YAML mapping, for theme files.
//!
//! Parsing is deliberately schema-free; it records what the file says and
//! leaves validation to [`StyleResolver::resolve`](crate::StyleResolver::resolve).
//! That is why bare words parse as strings even when they look like hex
//! colors: the schema coerces them where a color is expected.
//!
//! # Value grammar (flat format)
//!
//! | Input | Parsed as |
//! |---|---|
//! | `0.5` | number |
//! | `3.37, 2.08277` | number sequence |
//! | `true` / `True` / `false` / `False` | boolean |
//! | `"tight"` or `'tight'` | string (quotes stripped) |
//! | anything else | string, verbatim |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::key::StyleKey;
use crate::layer::StyleLayer;
use crate::value::StyleValue;

/// Error type for stylesheet parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StylesheetError {
    /// A line could not be parsed.
    #[error("{}line {line}: {message}", location(.path))]
    Parse {
        /// Source file, when parsing from disk.
        path: Option<PathBuf>,
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The file could not be read.
    #[error("{message}")]
    Load {
        /// Error message from the loader.
        message: String,
    },
}

impl StylesheetError {
    /// Attaches a source path to a parse error, for file-based loading.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            StylesheetError::Parse { line, message, .. } => StylesheetError::Parse {
                path: Some(path.to_path_buf()),
                line,
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("{}: ", p.display()),
        None => String::new(),
    }
}

/// Parses the flat stylesheet format into a named layer.
///
/// # Example
///
/// ```rust
/// use plastik_style::parse_stylesheet;
///
/// let layer = parse_stylesheet(
///     "paper",
///     r#"
/// ## publication defaults
/// axes.linewidth: 0.5
/// figure.figsize: 3.37, 2.08277
/// xtick.direction: in     # inward ticks
/// axes.grid: False
/// "#,
/// )
/// .unwrap();
///
/// assert_eq!(layer.len(), 4);
/// ```
pub fn parse_stylesheet(name: &str, content: &str) -> Result<StyleLayer, StylesheetError> {
    let mut layer = StyleLayer::new(name);

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let (key_part, value_part) = line.split_once(':').ok_or_else(|| {
            StylesheetError::Parse {
                path: None,
                line: line_no,
                message: format!("expected 'key: value', got '{}'", line),
            }
        })?;

        let key = StyleKey::new(key_part.trim()).map_err(|e| StylesheetError::Parse {
            path: None,
            line: line_no,
            message: e,
        })?;

        let value = parse_value(value_part.trim()).map_err(|e| StylesheetError::Parse {
            path: None,
            line: line_no,
            message: e,
        })?;

        layer.insert(key, value);
    }

    Ok(layer)
}

/// Parses a flat YAML mapping into a named layer.
///
/// Scalar values map to the same variants as the flat format; sequences of
/// numbers become number sequences. Nested mappings are rejected so theme
/// files stay flat like stylesheets.
pub fn parse_yaml_layer(name: String, yaml: &str) -> Result<StyleLayer, StylesheetError> {
    let doc: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            line: e.location().map(|l| l.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

    let mapping = match doc {
        serde_yaml::Value::Mapping(m) => m,
        serde_yaml::Value::Null => serde_yaml::Mapping::new(),
        other => {
            return Err(StylesheetError::Parse {
                path: None,
                line: 0,
                message: format!("expected a mapping at the top level, got {:?}", other),
            })
        }
    };

    let mut layer = StyleLayer::new(name);
    for (k, v) in mapping {
        let key_str = k.as_str().ok_or_else(|| StylesheetError::Parse {
            path: None,
            line: 0,
            message: format!("non-string key {:?}", k),
        })?;
        let key = StyleKey::new(key_str).map_err(|e| StylesheetError::Parse {
            path: None,
            line: 0,
            message: e,
        })?;
        let value = yaml_value(key_str, &v)?;
        layer.insert(key, value);
    }
    Ok(layer)
}

fn yaml_value(key: &str, value: &serde_yaml::Value) -> Result<StyleValue, StylesheetError> {
    let err = |message: String| StylesheetError::Parse {
        path: None,
        line: 0,
        message,
    };

    match value {
        serde_yaml::Value::Number(n) => {
            let n = n
                .as_f64()
                .ok_or_else(|| err(format!("'{}': non-finite number", key)))?;
            Ok(StyleValue::Number(n))
        }
        serde_yaml::Value::Bool(b) => Ok(StyleValue::Bool(*b)),
        serde_yaml::Value::String(s) => Ok(StyleValue::Str(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let mut numbers = Vec::with_capacity(seq.len());
            for item in seq {
                let n = item.as_f64().ok_or_else(|| {
                    err(format!("'{}': sequence items must be numbers", key))
                })?;
                numbers.push(n);
            }
            Ok(StyleValue::NumberSeq(numbers))
        }
        serde_yaml::Value::Mapping(_) => Err(err(format!(
            "'{}': nested mappings are not supported in style layers",
            key
        ))),
        other => Err(err(format!("'{}': unsupported value {:?}", key, other))),
    }
}

/// Removes a trailing comment, honoring quoted strings.
fn strip_comment(line: &str) -> &str {
    let mut in_quote: Option<char> = None;
    for (i, c) in line.char_indices() {
        match in_quote {
            Some(q) if c == q => in_quote = None,
            None if c == '"' || c == '\'' => in_quote = Some(c),
            None if c == '#' => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parses one value according to the flat-format grammar.
fn parse_value(raw: &str) -> Result<StyleValue, String> {
    if raw.is_empty() {
        return Err("missing value".to_string());
    }

    // Quoted string.
    if raw.len() >= 2 {
        let bytes = raw.as_bytes();
        if (bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\'')
        {
            return Ok(StyleValue::Str(raw[1..raw.len() - 1].to_string()));
        }
    }

    match raw {
        "true" | "True" => return Ok(StyleValue::Bool(true)),
        "false" | "False" => return Ok(StyleValue::Bool(false)),
        _ => {}
    }

    // Comma-separated numbers; anything non-numeric keeps the whole value
    // as a string (e.g. a font family list).
    if raw.contains(',') {
        let parts: Vec<&str> = raw.split(',').map(|p| p.trim()).collect();
        let numbers: Result<Vec<f64>, _> = parts.iter().map(|p| p.parse::<f64>()).collect();
        if let Ok(numbers) = numbers {
            return Ok(StyleValue::NumberSeq(numbers));
        }
        return Ok(StyleValue::Str(raw.to_string()));
    }

    if let Ok(n) = raw.parse::<f64>() {
        return Ok(StyleValue::Number(n));
    }

    Ok(StyleValue::Str(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StyleKey {
        StyleKey::new(s).unwrap()
    }

    #[test]
    fn parses_numbers_strings_bools() {
        let layer = parse_stylesheet(
            "t",
            "axes.linewidth: 0.5\nsavefig.bbox: tight\naxes.grid: False\n",
        )
        .unwrap();
        assert_eq!(
            layer.get(&key("axes.linewidth")),
            Some(&StyleValue::Number(0.5))
        );
        assert_eq!(
            layer.get(&key("savefig.bbox")),
            Some(&StyleValue::Str("tight".into()))
        );
        assert_eq!(layer.get(&key("axes.grid")), Some(&StyleValue::Bool(false)));
    }

    #[test]
    fn parses_number_sequences() {
        let layer = parse_stylesheet("t", "figure.figsize: 3.37, 2.08277\n").unwrap();
        assert_eq!(
            layer.get(&key("figure.figsize")),
            Some(&StyleValue::NumberSeq(vec![3.37, 2.08277]))
        );
    }

    #[test]
    fn comma_list_of_words_stays_a_string() {
        let layer = parse_stylesheet("t", "font.family: Times, Palatino, serif\n").unwrap();
        assert_eq!(
            layer.get(&key("font.family")),
            Some(&StyleValue::Str("Times, Palatino, serif".into()))
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let layer = parse_stylesheet(
            "t",
            "# full-line comment\n\naxes.linewidth: 0.5  # trailing comment\n",
        )
        .unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(
            layer.get(&key("axes.linewidth")),
            Some(&StyleValue::Number(0.5))
        );
    }

    #[test]
    fn hash_inside_quotes_is_not_a_comment() {
        let layer = parse_stylesheet("t", "axes.edgecolor: \"#bfbfbf\"\n").unwrap();
        assert_eq!(
            layer.get(&key("axes.edgecolor")),
            Some(&StyleValue::Str("#bfbfbf".into()))
        );
    }

    #[test]
    fn quoted_strings_keep_spaces() {
        let layer = parse_stylesheet("t", "figure.title: 'hello: world'\n").unwrap();
        assert_eq!(
            layer.get(&key("figure.title")),
            Some(&StyleValue::Str("hello: world".into()))
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_stylesheet("t", "axes.linewidth: 0.5\nnot a pair\n").unwrap_err();
        match err {
            StylesheetError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_value() {
        let err = parse_stylesheet("t", "axes.linewidth:\n").unwrap_err();
        assert!(err.to_string().contains("missing value"));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(parse_stylesheet("t", "axes..linewidth: 0.5\n").is_err());
    }

    #[test]
    fn yaml_layer_round_trip() {
        let layer = StyleLayer::from_yaml(
            "dark",
            r#"
axes.linewidth: 1.0
figure.facecolor: "1a1a1a"
axes.grid: true
figure.figsize: [3.37, 2.08277]
"#,
        )
        .unwrap();
        assert_eq!(layer.name(), "dark");
        assert_eq!(layer.len(), 4);
        assert_eq!(
            layer.get(&key("figure.figsize")),
            Some(&StyleValue::NumberSeq(vec![3.37, 2.08277]))
        );
    }

    #[test]
    fn yaml_rejects_nested_mappings() {
        let err = StyleLayer::from_yaml("bad", "axes:\n  linewidth: 1.0\n").unwrap_err();
        assert!(err.to_string().contains("nested"));
    }

    #[test]
    fn yaml_empty_document_is_empty_layer() {
        let layer = StyleLayer::from_yaml("empty", "").unwrap();
        assert!(layer.is_empty());
    }
}
