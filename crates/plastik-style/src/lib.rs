//! # plastik-style: layered style resolution for plot styling
//!
//! `plastik-style` merges a layered set of style definitions (built-in
//! defaults, a named theme, and call-site overrides) into one immutable,
//! validated parameter set, and reports conflicts or invalid values before
//! any rendering call is made.
//!
//! ## Core concepts
//!
//! - [`StyleKey`]: namespaced identifier (`axes.linewidth`, `legend.fontsize`)
//! - [`StyleValue`]: tagged union over numbers, strings, booleans, colors,
//!   and number sequences
//! - [`StyleLayer`]: one named, immutable source of settings
//! - [`Schema`]: static declaration of expected kind and constraint per key
//! - [`StyleResolver`]: merges layers in fixed precedence order
//!   (base < theme < overrides) and validates the result
//! - [`ResolvedStyle`]: the frozen output, handed unchanged to the rendering
//!   collaborator behind the [`ApplyStyle`] seam
//!
//! ## Quick start
//!
//! ```rust
//! use plastik_style::{Constraint, Schema, StyleKey, StyleLayer, StyleResolver, ValueKind};
//!
//! let schema = Schema::new()
//!     .declare_with("axes.linewidth", ValueKind::Number, Constraint::Positive)?
//!     .declare_with("legend.fontsize", ValueKind::Number, Constraint::Positive)?
//!     .declare_with(
//!         "xtick.direction",
//!         ValueKind::Str,
//!         Constraint::one_of(&["in", "out", "inout"]),
//!     )?;
//!
//! let mut resolver = StyleResolver::new(schema);
//! resolver.register_default(StyleKey::new("axes.linewidth")?, 0.5)?;
//! resolver.register_default(StyleKey::new("xtick.direction")?, "in")?;
//!
//! let overrides = StyleLayer::new("overrides").with(StyleKey::new("axes.linewidth")?, 1.0);
//! let resolved = resolver.resolve(&overrides)?;
//!
//! assert_eq!(resolved.number("axes.linewidth"), Some(1.0));
//! assert_eq!(resolved.str_value("xtick.direction"), Some("in"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error reporting
//!
//! Resolution is all-or-nothing. Unknown override keys and invalid values
//! are collected exhaustively and reported in one error, with `(key, reason)`
//! pairs available through [`StyleError::violations`] for batch display:
//!
//! ```rust
//! use plastik_style::{Schema, StyleError, StyleKey, StyleLayer, StyleResolver, ValueKind};
//!
//! let schema = Schema::new().declare("axes.linewidth", ValueKind::Number)?;
//! let resolver = StyleResolver::new(schema);
//!
//! let overrides = StyleLayer::new("overrides").with(StyleKey::new("axes.linwidth")?, 1.0);
//! match resolver.resolve(&overrides) {
//!     Err(StyleError::UnknownKeys { keys }) => {
//!         assert_eq!(keys[0].as_str(), "axes.linwidth");
//!     }
//!     other => panic!("expected UnknownKeys, got {:?}", other),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Stylesheet files
//!
//! Layers load from flat stylesheet text (`key: value` lines, `#` comments)
//! via [`parse_stylesheet`] / [`StyleLayer::from_file`], or from flat YAML
//! mappings via [`StyleLayer::from_yaml`].

mod color;
mod error;
mod key;
mod layer;
mod resolver;
mod schema;
mod stylesheet;
mod value;

pub use color::Color;
pub use error::{StyleError, Violation};
pub use key::{StyleKey, KEY_DELIMITER};
pub use layer::StyleLayer;
pub use resolver::{ApplyStyle, ResolvedStyle, StyleResolver};
pub use schema::{Constraint, Schema, SchemaEntry};
pub use stylesheet::{parse_stylesheet, StylesheetError};
pub use value::{StyleValue, ValueKind};
