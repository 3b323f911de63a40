//! Sub-figure grid layout.
//!
//! Computes everything a backend needs to lay out an (rows × columns) grid of
//! axes: the figure size in inches, the per-axes rectangles in figure
//! coordinates, subplot labels, and which tick labels to hide when axes are
//! shared. Shared axes squash the figure so panels sit flush against each
//! other.
//!
//! # Example
//!
//! ```rust
//! use plastik::grid::{FigureGrid, Share};
//!
//! let grid = FigureGrid::new(2, 3).share_axes(Share::X);
//! let rects = grid.axes_rects();
//! assert_eq!(rects.len(), 6);
//! assert_eq!(rects[0].label, "$\\mathrm{(a)}$");
//! // Top-row axes hide their x tick labels when x is shared.
//! assert!(rects[0].hide_x_tick_labels);
//! assert!(!rects[5].hide_x_tick_labels);
//! ```

/// Width of one column in inches, matching a two-column journal layout.
const COLUMN_WIDTH: f64 = 3.37;
/// Height of one panel in inches (golden-ratio-ish against the width).
const PANEL_HEIGHT: f64 = 2.08277;
/// Fraction of a panel removed per shared edge.
const SQUASH: f64 = 0.25;

/// Which axes the panels share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Share {
    /// Shared x-axis: columns sit flush vertically.
    X,
    /// Shared y-axis: rows sit flush horizontally.
    Y,
    /// Both axes shared.
    Both,
}

impl Share {
    fn shares_x(self) -> bool {
        matches!(self, Share::X | Share::Both)
    }

    fn shares_y(self) -> bool {
        matches!(self, Share::Y | Share::Both)
    }
}

/// One axes slot: its rectangle in figure coordinates plus its label and
/// tick-label visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesRect {
    /// Left edge, in 0..1 figure coordinates.
    pub left: f64,
    /// Bottom edge, in 0..1 figure coordinates.
    pub bottom: f64,
    /// Width, in 0..1 figure coordinates.
    pub width: f64,
    /// Height, in 0..1 figure coordinates.
    pub height: f64,
    /// Subplot label text, placed at the grid's label position.
    pub label: String,
    /// Suppress x tick labels (inner rows of an x-shared grid).
    pub hide_x_tick_labels: bool,
    /// Suppress y tick labels (inner columns of a y-shared grid).
    pub hide_y_tick_labels: bool,
}

/// Builder for an (rows × columns) grid of axes.
#[derive(Debug, Clone)]
pub struct FigureGrid {
    rows: usize,
    columns: usize,
    labels: Option<Vec<String>>,
    label_pos: (f64, f64),
    share: Option<Share>,
    columns_first: bool,
    expand_top: f64,
}

impl FigureGrid {
    /// Creates a grid with the given shape. Zero rows or columns are bumped
    /// to one.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: rows.max(1),
            columns: columns.max(1),
            labels: None,
            label_pos: (-0.2, 0.95),
            share: None,
            columns_first: false,
            expand_top: 1.0,
        }
    }

    /// Replaces the generated `(a)`, `(b)`, ... labels. A list whose length
    /// does not match the panel count is ignored in favor of the generated
    /// ones.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the label position, relative to each panel's bottom-left corner.
    pub fn label_pos(mut self, x: f64, y: f64) -> Self {
        self.label_pos = (x, y);
        self
    }

    /// Shares the given axes between panels, squashing the figure so the
    /// panels touch.
    pub fn share_axes(mut self, share: Share) -> Self {
        self.share = Some(share);
        self
    }

    /// Numbers labels down the columns instead of across the rows.
    pub fn columns_first(mut self, columns_first: bool) -> Self {
        self.columns_first = columns_first;
        self
    }

    /// Makes the figure taller by this factor while the panels keep their
    /// size. Room for a common legend above the grid.
    pub fn expand_top(mut self, factor: f64) -> Self {
        self.expand_top = factor;
        self
    }

    /// Where subplot labels go, relative to each panel.
    pub fn label_position(&self) -> (f64, f64) {
        self.label_pos
    }

    /// The figure size `(width, height)` in inches.
    pub fn figsize(&self) -> (f64, f64) {
        let (height, width) = self.panel_extent();
        (width, height * self.expand_top)
    }

    /// Full or squashed extents, `(height, width)`, before top expansion.
    fn panel_extent(&self) -> (f64, f64) {
        let rows = self.rows as f64;
        let columns = self.columns as f64;
        let full_cols = COLUMN_WIDTH * columns;
        let squash_cols = full_cols - (columns - 1.0) * COLUMN_WIDTH * SQUASH;
        let full_rows = PANEL_HEIGHT * rows;
        let squash_rows = full_rows - (rows - 1.0) * PANEL_HEIGHT * SQUASH;
        match self.share {
            None => (full_rows, full_cols),
            Some(Share::X) => (squash_rows, full_cols),
            Some(Share::Y) => (full_rows, squash_cols),
            Some(Share::Both) => (squash_rows, squash_cols),
        }
    }

    /// The subplot labels, in panel order (row-major).
    pub fn subplot_labels(&self) -> Vec<String> {
        let count = self.rows * self.columns;
        let mut labels = match &self.labels {
            Some(custom) if custom.len() == count => custom.clone(),
            _ => (0..count).map(|i| format!("$\\mathrm{{({})}}$", letters(i))).collect(),
        };
        if self.columns_first {
            labels = (0..self.rows)
                .flat_map(|j| (0..self.columns).map(move |i| (i, j)))
                .map(|(i, j)| labels[i * self.rows + j].clone())
                .collect();
        }
        labels
    }

    /// The per-axes rectangles in figure coordinates, row-major from the top
    /// row down.
    pub fn axes_rects(&self) -> Vec<AxesRect> {
        let rows = self.rows as f64;
        let columns = self.columns as f64;
        let shares_x = self.share.is_some_and(Share::shares_x);
        let shares_y = self.share.is_some_and(Share::shares_y);
        let labels = self.subplot_labels();

        let mut rects = Vec::with_capacity(self.rows * self.columns);
        for r in 0..self.rows {
            let (bottom, height) = if shares_x {
                let rel_height = 0.75 + SQUASH / rows / self.expand_top;
                let height = 0.75 / rows / rel_height / self.expand_top;
                let bottom_pad = 0.2 / rows / rel_height / self.expand_top;
                (bottom_pad + height * (rows - 1.0 - r as f64), height)
            } else {
                let bottom_pad = 0.2 / rows;
                let height = 0.75 / rows / self.expand_top;
                (
                    bottom_pad + (rows - 1.0 - r as f64) / rows / self.expand_top,
                    height,
                )
            };
            for c in 0..self.columns {
                let (left, width) = if shares_y {
                    let rel_width = 0.75 + SQUASH / columns;
                    let width = 0.75 / columns / rel_width;
                    let left_pad = 0.2 / columns / rel_width;
                    (left_pad + width * c as f64, width)
                } else {
                    let left_pad = 0.2 / columns;
                    let width = 0.75 / columns;
                    (left_pad + c as f64 / columns, width)
                };
                rects.push(AxesRect {
                    left,
                    bottom,
                    width,
                    height,
                    label: labels[self.columns * r + c].clone(),
                    hide_x_tick_labels: shares_x && r != self.rows - 1,
                    hide_y_tick_labels: shares_y && c != 0,
                });
            }
        }
        rects
    }
}

/// Alphabetic label for panel `i`: a..z, then aa, ab, ...
fn letters(i: usize) -> String {
    let mut i = i;
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (i % 26) as u8);
        i /= 26;
        if i == 0 {
            break;
        }
        i -= 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
