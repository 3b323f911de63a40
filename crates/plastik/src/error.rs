//! Error types for the plot-styling helpers.

use thiserror::Error;

/// Errors raised by the styling helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlastikError {
    /// A palette name not in the built-in registry.
    #[error("unknown palette '{name}' (available: {available})")]
    UnknownPalette {
        /// The requested name.
        name: String,
        /// Comma-separated list of registered palettes.
        available: String,
    },

    /// An anchor color string that does not parse.
    #[error("invalid anchor color: {message}")]
    InvalidColor {
        /// Error message from the color parser.
        message: String,
    },

    /// Gradients interpolate between anchors, so one color is not enough.
    #[error("gradient needs at least two anchor colors, got {count}")]
    TooFewAnchors {
        /// Number of anchors supplied.
        count: usize,
    },

    /// A legend side string that is not one of the eight placements.
    #[error("unknown legend side '{value}'")]
    UnknownSide {
        /// The unrecognized input.
        value: String,
    },

    /// Ridge plots need data to lay out.
    #[error("ridge plot needs at least one series")]
    EmptyRidge,

    /// Log-axis ticks need a positive, non-empty range.
    #[error("log ticks need 0 < lo < hi, got {lo}..{hi}")]
    InvalidLogRange {
        /// Lower bound supplied.
        lo: f64,
        /// Upper bound supplied.
        hi: f64,
    },

    /// Log-axis ticks need a base greater than one.
    #[error("log base must be greater than 1, got {base}")]
    InvalidLogBase {
        /// Base supplied.
        base: f64,
    },
}
