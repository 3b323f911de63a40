//! Ridge-plot layout.
//!
//! A ridge plot stacks one axes per series in a single column, optionally
//! overlapping. This module computes the layout: figure size, panel spacing,
//! common x/y ranges, and which side each y-axis puts its ticks on. Drawing
//! stays with the rendering backend.
//!
//! Options come from a compact flag string: `b` (blank) removes all axis
//! lines, `c` (crop) clips the x-range to the smallest common limit, `g`
//! (grid) turns the grid on, `s` (slalom) alternates y-tick sides, and `z`
//! (squeeze) overlaps adjacent panels by half their height, which implies
//! slalom. Unrecognized characters are ignored.

use plastik_style::StyleLayer;

use crate::error::PlastikError;
use crate::skey;

/// Fixed ridge figure width in inches.
const RIDGE_WIDTH: f64 = 4.0;
/// Default figure height contributed by each ridge, in inches.
const RIDGE_HEIGHT: f64 = 1.0;
/// Smallest y-limit shown on a log-scaled y-axis when the data reaches zero.
const LOG_FLOOR: f64 = 1e-3;

/// Layout options for a ridge plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RidgeOptions {
    /// Remove all spines and ticks.
    pub blank: bool,
    /// Crop the x-range to the intersection of all series.
    pub crop: bool,
    /// Show the grid.
    pub grid: bool,
    /// Alternate y-axis tick sides between left and right.
    pub slalom: bool,
    /// Overlap adjacent panels by half their height.
    pub squeeze: bool,
}

impl RidgeOptions {
    /// Parses the flag string: any of `bcgsz`, in any order; other
    /// characters have no effect.
    pub fn from_flags(flags: &str) -> Self {
        Self {
            blank: flags.contains('b'),
            crop: flags.contains('c'),
            grid: flags.contains('g'),
            slalom: flags.contains('s'),
            squeeze: flags.contains('z'),
        }
    }
}

/// Plot scale of the ridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Linear on both axes.
    #[default]
    Plot,
    /// Logarithmic x.
    SemilogX,
    /// Logarithmic y.
    SemilogY,
    /// Logarithmic on both axes.
    LogLog,
}

impl PlotKind {
    fn log_y(self) -> bool {
        matches!(self, PlotKind::SemilogY | PlotKind::LogLog)
    }
}

/// One series in a ridge plot.
#[derive(Debug, Clone, PartialEq)]
pub enum RidgeSeries {
    /// y-values plotted against their index.
    Y(Vec<f64>),
    /// Explicit (x, y) data.
    XY {
        /// Sample positions.
        x: Vec<f64>,
        /// Sample values.
        y: Vec<f64>,
    },
}

impl RidgeSeries {
    fn x_limits(&self) -> (f64, f64) {
        match self {
            // Index positions, padded half a step on both ends.
            RidgeSeries::Y(y) => (-0.5, y.len() as f64 - 0.5),
            RidgeSeries::XY { x, .. } => min_max(x),
        }
    }

    fn y_values(&self) -> &[f64] {
        match self {
            RidgeSeries::Y(y) => y,
            RidgeSeries::XY { y, .. } => y,
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    (lo, hi)
}

/// Which side a ridge's y-axis puts its ticks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSide {
    /// Ticks and labels on the left.
    Left,
    /// Ticks and labels on the right.
    Right,
}

/// The computed ridge layout, ready for a rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeLayout {
    /// Figure size `(width, height)` in inches.
    pub figsize: (f64, f64),
    /// Vertical spacing between panels, as a fraction of panel height.
    /// Negative when squeezing.
    pub hspace: f64,
    /// Common x-range for every ridge.
    pub x_range: (f64, f64),
    /// Common y-range, after the log floor and any explicit limit.
    pub y_range: (f64, f64),
    /// Per-ridge y-tick side, top ridge first.
    pub tick_sides: Vec<TickSide>,
    /// Whether the grid is shown.
    pub show_grid: bool,
    /// Whether spines and ticks are removed entirely.
    pub blank: bool,
}

/// Builder for a ridge plot over a list of series.
#[derive(Debug, Clone)]
pub struct Ridge {
    series: Vec<RidgeSeries>,
    options: RidgeOptions,
    y_scale: f64,
    kind: PlotKind,
    ylim: Option<(f64, f64)>,
}

impl Ridge {
    /// Creates a ridge plot over `series`, top ridge first. At least one
    /// series is required.
    pub fn new(series: Vec<RidgeSeries>) -> Result<Self, PlastikError> {
        if series.is_empty() {
            return Err(PlastikError::EmptyRidge);
        }
        Ok(Self {
            series,
            options: RidgeOptions::default(),
            y_scale: 1.0,
            kind: PlotKind::default(),
            ylim: None,
        })
    }

    /// Sets options from the `bcgsz` flag string.
    pub fn flags(mut self, flags: &str) -> Self {
        self.options = RidgeOptions::from_flags(flags);
        self
    }

    /// Sets options directly.
    pub fn options(mut self, options: RidgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Scales the per-ridge height (and thereby the total figure height).
    pub fn y_scale(mut self, scale: f64) -> Self {
        self.y_scale = scale;
        self
    }

    /// Sets the plot scale.
    pub fn kind(mut self, kind: PlotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Fixes the y-range instead of deriving it from the data.
    pub fn ylim(mut self, lo: f64, hi: f64) -> Self {
        self.ylim = Some((lo, hi));
        self
    }

    /// Number of ridges.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always false: construction rejects empty series lists.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Computes the layout.
    pub fn layout(&self) -> RidgeLayout {
        let n = self.series.len();
        let options = self.options;
        let slalom = options.slalom || options.squeeze;

        let figsize = (RIDGE_WIDTH, RIDGE_HEIGHT * self.y_scale * n as f64);
        let hspace = if options.squeeze { -0.5 } else { 0.0 };

        let x_range = self.x_range();
        let y_range = self.y_range();

        let tick_sides = (0..n)
            .map(|i| {
                if slalom && i % 2 == 1 {
                    TickSide::Right
                } else {
                    TickSide::Left
                }
            })
            .collect();

        RidgeLayout {
            figsize,
            hspace,
            x_range,
            y_range,
            tick_sides,
            show_grid: options.grid,
            blank: options.blank,
        }
    }

    /// Common x-range: the intersection of per-series limits when cropping,
    /// the union otherwise.
    fn x_range(&self) -> (f64, f64) {
        let limits = self.series.iter().map(RidgeSeries::x_limits);
        if self.options.crop {
            limits.fold((f64::NEG_INFINITY, f64::INFINITY), |(lo, hi), (a, b)| {
                (lo.max(a), hi.min(b))
            })
        } else {
            limits.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
                (lo.min(a), hi.max(b))
            })
        }
    }

    fn y_range(&self) -> (f64, f64) {
        if let Some(ylim) = self.ylim {
            return ylim;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for series in &self.series {
            let (a, b) = min_max(series.y_values());
            lo = lo.min(a);
            hi = hi.max(b);
        }
        if self.kind.log_y() && lo <= 0.0 {
            lo = LOG_FLOOR;
        }
        (lo, hi)
    }
}

/// Override layer for ridge grids: grid on with a light touch, as the `g`
/// flag expects.
pub fn grid_layer() -> StyleLayer {
    StyleLayer::new("ridge-grid")
        .with(skey("axes.grid"), true)
        .with(skey("grid.alpha"), 0.3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(x: Vec<f64>, y: Vec<f64>) -> RidgeSeries {
        RidgeSeries::XY { x, y }
    }

    #[test]
    fn flags_parse_in_any_order() {
        let opts = RidgeOptions::from_flags("gsz");
        assert!(opts.grid && opts.slalom && opts.squeeze);
        assert!(!opts.blank && !opts.crop);

        let opts = RidgeOptions::from_flags("zg");
        assert!(opts.grid && opts.squeeze);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        assert_eq!(
            RidgeOptions::from_flags("qxy7"),
            RidgeOptions::default()
        );
        let opts = RidgeOptions::from_flags("bcgsz");
        assert!(opts.blank && opts.crop && opts.grid && opts.slalom && opts.squeeze);
    }

    #[test]
    fn empty_series_rejected() {
        assert!(matches!(Ridge::new(vec![]), Err(PlastikError::EmptyRidge)));
    }

    #[test]
    fn figsize_scales_with_series_count() {
        let ridge = Ridge::new(vec![
            RidgeSeries::Y(vec![1.0, 2.0]),
            RidgeSeries::Y(vec![3.0, 4.0]),
            RidgeSeries::Y(vec![5.0, 6.0]),
        ])
        .unwrap();
        assert_eq!(ridge.layout().figsize, (4.0, 3.0));

        let scaled = Ridge::new(vec![RidgeSeries::Y(vec![1.0])])
            .unwrap()
            .y_scale(2.0);
        assert_eq!(scaled.layout().figsize, (4.0, 2.0));
    }

    #[test]
    fn squeeze_overlaps_panels_and_implies_slalom() {
        let ridge = Ridge::new(vec![
            RidgeSeries::Y(vec![1.0]),
            RidgeSeries::Y(vec![2.0]),
            RidgeSeries::Y(vec![3.0]),
        ])
        .unwrap()
        .flags("z");
        let layout = ridge.layout();
        assert_eq!(layout.hspace, -0.5);
        assert_eq!(
            layout.tick_sides,
            vec![TickSide::Left, TickSide::Right, TickSide::Left]
        );
    }

    #[test]
    fn no_slalom_keeps_ticks_left() {
        let ridge = Ridge::new(vec![
            RidgeSeries::Y(vec![1.0]),
            RidgeSeries::Y(vec![2.0]),
        ])
        .unwrap();
        let layout = ridge.layout();
        assert_eq!(layout.hspace, 0.0);
        assert_eq!(layout.tick_sides, vec![TickSide::Left, TickSide::Left]);
    }

    #[test]
    fn index_series_pad_half_a_step() {
        let ridge = Ridge::new(vec![RidgeSeries::Y(vec![1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(ridge.layout().x_range, (-0.5, 2.5));
    }

    #[test]
    fn union_and_intersection_of_x_limits() {
        let series = vec![
            xy(vec![0.0, 10.0], vec![1.0, 1.0]),
            xy(vec![2.0, 15.0], vec![1.0, 1.0]),
        ];

        let union = Ridge::new(series.clone()).unwrap();
        assert_eq!(union.layout().x_range, (0.0, 15.0));

        let cropped = Ridge::new(series).unwrap().flags("c");
        assert_eq!(cropped.layout().x_range, (2.0, 10.0));
    }

    #[test]
    fn log_floor_applies_when_data_touches_zero() {
        let ridge = Ridge::new(vec![xy(vec![1.0, 2.0], vec![0.0, 5.0])])
            .unwrap()
            .kind(PlotKind::SemilogY);
        assert_eq!(ridge.layout().y_range, (1e-3, 5.0));

        // Linear y keeps the zero.
        let linear = Ridge::new(vec![xy(vec![1.0, 2.0], vec![0.0, 5.0])]).unwrap();
        assert_eq!(linear.layout().y_range, (0.0, 5.0));
    }

    #[test]
    fn explicit_ylim_wins() {
        let ridge = Ridge::new(vec![xy(vec![1.0], vec![10.0])])
            .unwrap()
            .ylim(0.0, 1.0);
        assert_eq!(ridge.layout().y_range, (0.0, 1.0));
    }

    #[test]
    fn grid_layer_resolves() {
        let resolver = crate::defaults::default_resolver();
        let resolved = resolver.resolve(&grid_layer()).unwrap();
        assert_eq!(resolved.flag("axes.grid"), Some(true));
        assert_eq!(resolved.number("grid.alpha"), Some(0.3));
    }
}
