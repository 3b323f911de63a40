//! Legend placement outside the axes.
//!
//! Moves the legend to one of eight positions around the plot and lays the
//! entries out in as few rows as possible. The output is a `legend.*`
//! override layer for [`StyleResolver::resolve`](plastik_style::StyleResolver::resolve).
//!
//! # Example
//!
//! ```rust
//! use plastik::legend::{LegendSpec, Side};
//!
//! // Four labels, at most two per row, above the axes.
//! let spec = LegendSpec::new(Side::Top, 4).max_columns(2);
//! assert_eq!(spec.columns(), 2);
//!
//! let layer = spec.layer();
//! assert_eq!(layer.name(), "legend");
//! ```

use std::str::FromStr;

use plastik_style::StyleLayer;

use crate::error::PlastikError;
use crate::skey;

/// Where the legend sits, relative to the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Centered above the axes.
    Top,
    /// Centered below the axes.
    Bottom,
    /// Centered right of the axes.
    Right,
    /// Centered left of the axes.
    Left,
    /// Above and to the right.
    TopRight,
    /// Above and to the left.
    TopLeft,
    /// Below and to the right.
    BottomRight,
    /// Below and to the left.
    BottomLeft,
}

impl Side {
    /// The backend location keyword for this side.
    pub fn location(self) -> &'static str {
        match self {
            Side::Top => "upper center",
            Side::Bottom => "lower center",
            Side::Right => "center right",
            Side::Left => "center left",
            Side::TopRight => "upper right",
            Side::TopLeft => "upper left",
            Side::BottomRight => "lower right",
            Side::BottomLeft => "lower left",
        }
    }

    /// The bounding-box anchor placing the legend just outside the axes.
    pub fn anchor(self) -> (f64, f64) {
        match self {
            Side::Top => (0.5, 1.05),
            Side::Bottom => (0.5, -0.05),
            Side::Right => (1.04, 0.5),
            Side::Left => (-0.04, 0.5),
            Side::TopRight => (1.04, 1.05),
            Side::TopLeft => (-0.04, 1.05),
            Side::BottomRight => (1.04, -0.05),
            Side::BottomLeft => (-0.04, -0.05),
        }
    }
}

impl FromStr for Side {
    type Err = PlastikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "right" => Ok(Side::Right),
            "left" => Ok(Side::Left),
            "top right" => Ok(Side::TopRight),
            "top left" => Ok(Side::TopLeft),
            "bottom right" => Ok(Side::BottomRight),
            "bottom left" => Ok(Side::BottomLeft),
            other => Err(PlastikError::UnknownSide {
                value: other.to_string(),
            }),
        }
    }
}

/// Number of legend columns for `n_labels` entries with at most
/// `max_columns` per row.
///
/// Rows are filled first (`n_row = ceil(n / max)`), then the column count is
/// the smallest one that fits every entry. `max_columns` is capped at the
/// label count, and degenerate inputs fall back to a single column.
pub fn legend_columns(n_labels: usize, max_columns: usize) -> usize {
    if n_labels == 0 || max_columns == 0 {
        return 1;
    }
    let max_columns = max_columns.min(n_labels);
    let n_rows = n_labels.div_ceil(max_columns);
    let mut n_cols = 1;
    while n_labels > n_cols * n_rows {
        n_cols += 1;
    }
    n_cols
}

/// A legend placement: side, entry count, column cap, and frame alpha.
#[derive(Debug, Clone)]
pub struct LegendSpec {
    side: Side,
    n_labels: usize,
    max_columns: usize,
    frame_alpha: f64,
}

impl LegendSpec {
    /// Creates a placement for `n_labels` legend entries on the given side,
    /// with the defaults of at most 4 columns and a 0.8 frame alpha.
    pub fn new(side: Side, n_labels: usize) -> Self {
        Self {
            side,
            n_labels,
            max_columns: 4,
            frame_alpha: 0.8,
        }
    }

    /// Caps the number of entries per row.
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Sets the legend frame background alpha.
    pub fn frame_alpha(mut self, alpha: f64) -> Self {
        self.frame_alpha = alpha;
        self
    }

    /// The resolved column count.
    pub fn columns(&self) -> usize {
        legend_columns(self.n_labels, self.max_columns)
    }

    /// The side this legend sits on.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Builds the `legend.*` override layer for this placement.
    pub fn layer(&self) -> StyleLayer {
        let (ax, ay) = self.side.anchor();
        StyleLayer::new("legend")
            .with(skey("legend.loc"), self.side.location())
            .with(skey("legend.bbox_to_anchor"), (ax, ay))
            .with(skey("legend.ncol"), self.columns())
            .with(skey("legend.framealpha"), self.frame_alpha)
    }
}
