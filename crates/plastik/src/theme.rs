//! Built-in themes and OS color-mode detection.
//!
//! The dark theme flips figure, axes, text, and tick colors for dark
//! backgrounds; everything else inherits from the defaults. Use
//! [`set_color_mode_detector`] to override OS detection for testing.

use std::sync::Mutex;

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use plastik_style::{Color, StyleLayer};

use crate::skey;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Light mode (light background, dark foreground).
    Light,
    /// Dark mode (dark background, light foreground).
    Dark,
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to decide whether the user prefers a light or
/// dark figure theme. Useful for testing or for forcing a mode.
pub fn set_color_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred color mode from the OS.
///
/// The detector can be overridden via [`set_color_mode_detector`].
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

const DARK_BG: Color = Color::rgb(26, 26, 26);
const DARK_FG: Color = Color::rgb(224, 224, 224);

/// Returns the built-in dark theme layer.
///
/// Install it with [`StyleResolver::with_theme`](plastik_style::StyleResolver::with_theme);
/// switching back to the light defaults is
/// [`clear_theme`](plastik_style::StyleResolver::clear_theme).
pub fn dark() -> StyleLayer {
    StyleLayer::new("dark")
        .with(skey("figure.facecolor"), DARK_BG)
        .with(skey("figure.edgecolor"), DARK_BG)
        .with(skey("axes.facecolor"), DARK_BG)
        .with(skey("axes.edgecolor"), DARK_FG)
        .with(skey("axes.labelcolor"), DARK_FG)
        .with(skey("text.color"), DARK_FG)
        .with(skey("xtick.color"), DARK_FG)
        .with(skey("ytick.color"), DARK_FG)
        .with(skey("legend.edgecolor"), Color::rgb(128, 128, 128))
        .with(skey("legend.facecolor"), DARK_BG)
        .with(skey("grid.color"), Color::rgb(64, 64, 64))
        .with(skey("savefig.facecolor"), DARK_BG)
}

/// Returns the theme layer matching the detected color mode: [`dark`] in dark
/// mode, an empty layer (plain defaults) in light mode.
pub fn adaptive_theme() -> StyleLayer {
    match detect_color_mode() {
        ColorMode::Dark => dark(),
        ColorMode::Light => StyleLayer::new("light"),
    }
}
