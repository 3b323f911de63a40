//! Property-based tests for the layout and color helpers.

use proptest::prelude::*;

use plastik::colors::{create_colorlist, ColorSpec};
use plastik::grid::{FigureGrid, Share};
use plastik::legend::legend_columns;
use plastik::ticks::log_ticks;

proptest! {
    /// The column count never exceeds the cap or the label count, and the
    /// row-first fill always has room for every entry.
    #[test]
    fn legend_columns_fit_all_labels(n in 1usize..200, cap in 1usize..20) {
        let cols = legend_columns(n, cap);
        prop_assert!(cols >= 1);
        prop_assert!(cols <= cap.min(n));

        let rows = n.div_ceil(cap.min(n));
        prop_assert!(cols * rows >= n);
        // One fewer column would not fit.
        prop_assert!(cols == 1 || (cols - 1) * rows < n);
    }

    /// Color lists have exactly the requested length for every palette.
    #[test]
    fn colorlist_length_matches(n in 0usize..64) {
        for name in ["viridis", "magma", "plasma", "grayscale"] {
            let list = create_colorlist(&ColorSpec::palette(name), n).unwrap();
            prop_assert_eq!(list.len(), n);
        }
    }

    /// Every axes rectangle stays inside the unit square, for any shape,
    /// sharing mode, and top expansion.
    #[test]
    fn grid_rects_stay_in_bounds(
        rows in 1usize..6,
        cols in 1usize..6,
        share in prop::option::of(prop::sample::select(vec![Share::X, Share::Y, Share::Both])),
        expand in 1.0f64..1.5,
    ) {
        let mut grid = FigureGrid::new(rows, cols).expand_top(expand);
        if let Some(share) = share {
            grid = grid.share_axes(share);
        }

        let rects = grid.axes_rects();
        prop_assert_eq!(rects.len(), rows * cols);
        for rect in &rects {
            prop_assert!(rect.width > 0.0 && rect.height > 0.0);
            prop_assert!(rect.left >= -1e-9);
            prop_assert!(rect.bottom >= -1e-9);
            prop_assert!(rect.left + rect.width <= 1.0 + 1e-9);
            prop_assert!(rect.bottom + rect.height <= 1.0 + 1e-9);
        }
    }

    /// Log ticks bracket any valid range and step by exactly one exponent.
    #[test]
    fn log_ticks_bracket_and_step(
        lo_exp in -6.0f64..6.0,
        span in 0.1f64..6.0,
        base in prop::sample::select(vec![2.0, 10.0, 4.0]),
    ) {
        let lo = 10f64.powf(lo_exp);
        let hi = 10f64.powf(lo_exp + span);
        let ticks = log_ticks(lo, hi, base).unwrap();

        prop_assert!(ticks.first().unwrap().value <= lo * (1.0 + 1e-12));
        prop_assert!(ticks.last().unwrap().value >= hi * (1.0 - 1e-12));
        for pair in ticks.windows(2) {
            let ratio = pair[1].value / pair[0].value;
            prop_assert!((ratio - base).abs() < 1e-6 * base);
        }
    }
}
