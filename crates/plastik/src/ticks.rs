//! Log-axis tick placement and labels.
//!
//! Produces base-power tick positions covering a data range, with math-text
//! labels (`$10^{2}$`), for any base greater than one. The companion
//! [`log_tick_layer`] carries the tick styling the formatter is applied with.
//!
//! # Example
//!
//! ```rust
//! use plastik::ticks::log_ticks;
//!
//! let ticks = log_ticks(0.05, 30.0, 10.0).unwrap();
//! let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
//! assert_eq!(labels, ["$10^{-2}$", "$10^{-1}$", "$10^{0}$", "$10^{1}$", "$10^{2}$"]);
//! ```

use plastik_style::StyleLayer;

use crate::error::PlastikError;
use crate::skey;

/// Which axis to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x-axis.
    X,
    /// The y-axis.
    Y,
    /// Both axes.
    Both,
}

/// One tick: its data coordinate and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position in data coordinates.
    pub value: f64,
    /// Math-text label, e.g. `$2^{5}$`.
    pub label: String,
}

/// Returns the base-power ticks covering `lo..hi`.
///
/// The first tick is the largest power not above `lo` and the last is the
/// smallest power not below `hi`, so the returned ticks always bracket the
/// data range.
///
/// # Errors
///
/// The range must satisfy `0 < lo < hi`, and `base` must be greater than one.
pub fn log_ticks(lo: f64, hi: f64, base: f64) -> Result<Vec<Tick>, PlastikError> {
    if !(lo > 0.0 && hi > lo) {
        return Err(PlastikError::InvalidLogRange { lo, hi });
    }
    if !(base > 1.0) {
        return Err(PlastikError::InvalidLogBase { base });
    }

    let k_lo = (lo.ln() / base.ln()).floor() as i32;
    let k_hi = (hi.ln() / base.ln()).ceil() as i32;

    let base_str = format_base(base);
    let ticks = (k_lo..=k_hi)
        .map(|k| Tick {
            value: base.powi(k),
            label: format!("${}^{{{}}}$", base_str, k),
        })
        .collect();
    Ok(ticks)
}

fn format_base(base: f64) -> String {
    if base.fract() == 0.0 {
        format!("{}", base as i64)
    } else {
        format!("{}", base)
    }
}

/// The tick styling applied together with the log formatter: inward ticks
/// with visible minor marks on the chosen axes.
pub fn log_tick_layer(axis: Axis) -> StyleLayer {
    let mut layer = StyleLayer::new("log-ticks");
    if matches!(axis, Axis::X | Axis::Both) {
        layer = layer
            .with(skey("xtick.direction"), "in")
            .with(skey("xtick.major.size"), 3.0)
            .with(skey("xtick.minor.size"), 1.5);
    }
    if matches!(axis, Axis::Y | Axis::Both) {
        layer = layer
            .with(skey("ytick.direction"), "in")
            .with(skey("ytick.major.size"), 3.0)
            .with(skey("ytick.minor.size"), 1.5);
    }
    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_bracket_the_range() {
        let ticks = log_ticks(0.05, 30.0, 10.0).unwrap();
        assert!(ticks.first().unwrap().value <= 0.05);
        assert!(ticks.last().unwrap().value >= 30.0);
    }

    #[test]
    fn base_ten_labels() {
        let ticks = log_ticks(1.0, 100.0, 10.0).unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["$10^{0}$", "$10^{1}$", "$10^{2}$"]);
    }

    #[test]
    fn arbitrary_base() {
        let ticks = log_ticks(1.0, 32.0, 2.0).unwrap();
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [1.0, 2.0, 4.0, 8.0, 16.0, 32.0]);
        assert_eq!(ticks[1].label, "$2^{1}$");
    }

    #[test]
    fn exact_power_bounds_do_not_overshoot() {
        let ticks = log_ticks(1.0, 1000.0, 10.0).unwrap();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0].value, 1.0);
        assert_eq!(ticks[3].value, 1000.0);
    }

    #[test]
    fn negative_exponents() {
        let ticks = log_ticks(0.001, 0.1, 10.0).unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["$10^{-3}$", "$10^{-2}$", "$10^{-1}$"]);
    }

    #[test]
    fn invalid_ranges_rejected() {
        assert!(matches!(
            log_ticks(-1.0, 10.0, 10.0),
            Err(PlastikError::InvalidLogRange { .. })
        ));
        assert!(matches!(
            log_ticks(10.0, 1.0, 10.0),
            Err(PlastikError::InvalidLogRange { .. })
        ));
        assert!(matches!(
            log_ticks(1.0, 10.0, 1.0),
            Err(PlastikError::InvalidLogBase { .. })
        ));
        assert!(matches!(
            log_ticks(1.0, 10.0, 0.5),
            Err(PlastikError::InvalidLogBase { .. })
        ));
    }

    #[test]
    fn layer_touches_only_the_requested_axis() {
        let x_only = log_tick_layer(Axis::X);
        assert_eq!(x_only.len(), 3);
        assert!(x_only.keys().all(|k| k.as_str().starts_with("xtick")));

        let both = log_tick_layer(Axis::Both);
        assert_eq!(both.len(), 6);
    }

    #[test]
    fn layer_resolves_against_defaults() {
        let resolver = crate::defaults::default_resolver();
        let resolved = resolver.resolve(&log_tick_layer(Axis::Both)).unwrap();
        assert_eq!(resolved.str_value("ytick.direction"), Some("in"));
    }
}
