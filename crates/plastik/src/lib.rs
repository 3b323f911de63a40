//! # plastik: publication-quality plot styling
//!
//! `plastik` is a convenience layer over a plotting backend's configuration
//! surface: a built-in publication style sheet, a dark theme with OS
//! color-mode detection, color-list generation, legend placement, sub-figure
//! grids, ridge-plot layout, and log-axis tick formatting.
//!
//! Styling flows through [`plastik_style`]: the helpers here produce
//! override [`StyleLayer`](plastik_style::StyleLayer)s or plain layout data,
//! and [`default_resolver`] merges defaults, the active theme, and per-plot
//! overrides into one validated
//! [`ResolvedStyle`](plastik_style::ResolvedStyle) for the backend.
//!
//! ## Quick start
//!
//! ```rust
//! use plastik::default_resolver;
//! use plastik::legend::{LegendSpec, Side};
//!
//! let mut resolver = default_resolver();
//!
//! // Dark figures when the OS is in dark mode.
//! resolver.with_theme("adaptive", plastik::theme::adaptive_theme()).unwrap();
//!
//! // Per-plot override: legend above the axes, two entries per row.
//! let overrides = LegendSpec::new(Side::Top, 4).max_columns(2).layer();
//! let resolved = resolver.resolve(&overrides).unwrap();
//!
//! assert_eq!(resolved.str_value("legend.loc"), Some("upper center"));
//! assert_eq!(resolved.number("axes.linewidth"), Some(0.5));
//! ```

use plastik_style::StyleKey;

pub mod colors;
pub mod defaults;
mod error;
pub mod grid;
pub mod legend;
pub mod ridge;
pub mod theme;
pub mod ticks;

pub use defaults::{base_layer, default_resolver, default_schema, DEFAULT_STYLE};
pub use error::PlastikError;
pub use theme::{detect_color_mode, set_color_mode_detector, ColorMode};

/// Builds a [`StyleKey`] from a literal known to the built-in schema.
pub(crate) fn skey(key: &'static str) -> StyleKey {
    StyleKey::new(key).expect("literal style key")
}
