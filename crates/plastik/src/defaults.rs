//! Built-in default style and its schema.
//!
//! The defaults live in an embedded flat stylesheet (`assets/default.style`)
//! and target publication figures: a 3.37 × 2.08277 in figure (one journal
//! column), 8 pt fonts, 0.5 pt spines, inward ticks mirrored on all four
//! sides, tight save boxes.
//!
//! [`default_schema`] declares every built-in key with its kind and
//! constraint; [`default_resolver`] wires schema and defaults together and is
//! the object most callers construct once at startup.

use once_cell::sync::Lazy;
use plastik_style::{
    parse_stylesheet, Constraint, Schema, StyleLayer, StyleResolver, ValueKind,
};

/// The embedded default stylesheet, in the flat `key: value` format.
pub const DEFAULT_STYLE: &str = include_str!("../assets/default.style");

/// Legend locations understood by the rendering backend.
const LEGEND_LOCATIONS: &[&str] = &[
    "best",
    "upper center",
    "lower center",
    "center right",
    "center left",
    "upper right",
    "upper left",
    "lower right",
    "lower left",
];

const TICK_DIRECTIONS: &[&str] = &["in", "out", "inout"];

static SCHEMA: Lazy<Schema> = Lazy::new(|| build_schema().expect("built-in schema is valid"));

static BASE: Lazy<StyleLayer> = Lazy::new(|| {
    parse_stylesheet("default", DEFAULT_STYLE).expect("built-in stylesheet parses")
});

fn build_schema() -> Result<Schema, String> {
    use Constraint::Positive;
    use ValueKind::{Bool, Color, Number, NumberSeq, Str};

    let schema = Schema::new()
        .declare_with("figure.figsize", NumberSeq, Positive)?
        .declare_with("figure.dpi", Number, Positive)?
        .declare("figure.facecolor", Color)?
        .declare("figure.edgecolor", Color)?
        .declare_with("font.size", Number, Positive)?
        .declare("font.family", Str)?
        .declare_with("axes.labelsize", Number, Positive)?
        .declare_with("axes.titlesize", Number, Positive)?
        .declare_with("axes.linewidth", Number, Positive)?
        .declare("axes.edgecolor", Color)?
        .declare("axes.facecolor", Color)?
        .declare("axes.labelcolor", Color)?
        .declare("axes.grid", Bool)?
        .declare_with("lines.linewidth", Number, Positive)?
        .declare_with("lines.markersize", Number, Positive)?;

    let schema = schema
        .declare_with("xtick.direction", Str, Constraint::one_of(TICK_DIRECTIONS))?
        .declare_with("ytick.direction", Str, Constraint::one_of(TICK_DIRECTIONS))?
        .declare_with("xtick.labelsize", Number, Positive)?
        .declare_with("ytick.labelsize", Number, Positive)?
        .declare("xtick.top", Bool)?
        .declare("ytick.right", Bool)?
        .declare("xtick.color", Color)?
        .declare("ytick.color", Color)?
        .declare_with("xtick.major.size", Number, Positive)?
        .declare_with("xtick.minor.size", Number, Positive)?
        .declare_with("ytick.major.size", Number, Positive)?
        .declare_with("ytick.minor.size", Number, Positive)?;

    schema
        .declare("text.color", Color)?
        .declare("text.usetex", Bool)?
        .declare_with("legend.fontsize", Number, Positive)?
        .declare("legend.frameon", Bool)?
        .declare_with("legend.framealpha", Number, Constraint::unit_interval())?
        .declare("legend.edgecolor", Color)?
        .declare("legend.facecolor", Color)?
        .declare_with("legend.loc", Str, Constraint::one_of(LEGEND_LOCATIONS))?
        .declare_with("legend.ncol", Number, Positive)?
        .declare("legend.bbox_to_anchor", NumberSeq)?
        .declare_with("grid.alpha", Number, Constraint::unit_interval())?
        .declare("grid.color", Color)?
        .declare_with("grid.linewidth", Number, Positive)?
        .declare_with("savefig.bbox", Str, Constraint::one_of(&["tight", "standard"]))?
        .declare_with("savefig.dpi", Number, Positive)?
        .declare("savefig.facecolor", Color)
}

/// Returns the schema declaring every built-in style key.
pub fn default_schema() -> Schema {
    SCHEMA.clone()
}

/// Returns the base layer parsed from the embedded default stylesheet.
pub fn base_layer() -> StyleLayer {
    BASE.clone()
}

/// Returns a resolver with the default schema and base layer installed.
///
/// Construct one at startup and keep it around; switch themes with
/// [`StyleResolver::with_theme`] and pass per-plot overrides to
/// [`StyleResolver::resolve`].
///
/// # Example
///
/// ```rust
/// use plastik::default_resolver;
/// use plastik_style::StyleLayer;
///
/// let resolver = default_resolver();
/// let resolved = resolver.resolve(&StyleLayer::new("overrides")).unwrap();
/// assert_eq!(resolved.number("axes.linewidth"), Some(0.5));
/// ```
pub fn default_resolver() -> StyleResolver {
    let mut resolver = StyleResolver::new(default_schema());
    resolver
        .register_defaults(&base_layer())
        .expect("built-in defaults match the schema");
    resolver
}
