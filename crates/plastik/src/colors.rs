//! Color-list generation.
//!
//! Plot color lists are drawn from a [`Gradient`]: a handful of anchor colors
//! interpolated in CIE LAB space. LAB is perceptually uniform, so sampled
//! lists keep consistent brightness steps instead of the muddy midpoints RGB
//! interpolation produces.
//!
//! # Example
//!
//! ```rust
//! use plastik::colors::{create_colorlist, ColorSpec};
//!
//! // Five colors from a built-in palette.
//! let list = create_colorlist(&ColorSpec::palette("viridis"), 5).unwrap();
//! assert_eq!(list.len(), 5);
//!
//! // Or between two custom anchors.
//! let custom = ColorSpec::anchors(&["#2eff2e", "#6543ff"]).unwrap();
//! let list = create_colorlist(&custom, 3).unwrap();
//! assert_eq!(list[0].to_hex(), "#2eff2e");
//! assert_eq!(list[2].to_hex(), "#6543ff");
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use plastik_style::Color;

use crate::error::PlastikError;

// ─── CIE LAB internals ─────────────────────────────────────────────────────

/// CIE LAB color (internal representation for perceptually uniform interpolation).
#[derive(Debug, Clone, Copy)]
struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

/// D65 reference white point for CIE XYZ → LAB conversion.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value (0.0–1.0) to sRGB (0–255), clamped.
fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

/// LAB forward transform helper.
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// LAB inverse transform helper.
fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Convert a [`Color`] to CIE LAB via XYZ (D65 illuminant).
fn rgb_to_lab(color: Color) -> Lab {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);

    // sRGB → XYZ (D65) using the standard matrix
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a CIE LAB value back to [`Color`] via XYZ (D65 illuminant).
fn lab_to_rgb(lab: Lab) -> Color {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * lab_f_inv(fy);
    let z = ZN * lab_f_inv(fz);

    // XYZ → linear RGB (D65)
    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Color::rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

/// Linearly interpolate between two LAB colors.
fn lerp_lab(t: f64, a: &Lab, b: &Lab) -> Lab {
    Lab {
        l: a.l + t * (b.l - a.l),
        a: a.a + t * (b.a - a.a),
        b: a.b + t * (b.b - a.b),
    }
}

// ─── Gradient ───────────────────────────────────────────────────────────────

/// A color ramp through a sequence of anchor colors, interpolated in LAB.
#[derive(Debug, Clone)]
pub struct Gradient {
    anchors: Vec<Color>,
}

impl Gradient {
    /// Creates a gradient through the given anchors, in order. At least two
    /// anchors are required.
    pub fn new(anchors: Vec<Color>) -> Result<Self, PlastikError> {
        if anchors.len() < 2 {
            return Err(PlastikError::TooFewAnchors {
                count: anchors.len(),
            });
        }
        Ok(Gradient { anchors })
    }

    /// Samples the gradient at `t`, clamped to `0.0..=1.0`. `0.0` is the
    /// first anchor, `1.0` the last.
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let segments = (self.anchors.len() - 1) as f64;
        let scaled = t * segments;
        let idx = (scaled.floor() as usize).min(self.anchors.len() - 2);
        let frac = scaled - idx as f64;

        // Exact anchors at segment boundaries; the LAB round trip stays for
        // interior samples only.
        if frac <= 0.0 {
            return self.anchors[idx];
        }
        if frac >= 1.0 {
            return self.anchors[idx + 1];
        }

        let a = rgb_to_lab(self.anchors[idx]);
        let b = rgb_to_lab(self.anchors[idx + 1]);
        lab_to_rgb(lerp_lab(frac, &a, &b))
    }

    /// Returns `n` evenly spaced colors along the gradient, endpoints
    /// inclusive. `n = 1` returns the first anchor alone.
    pub fn colors(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// The anchor colors this gradient passes through.
    pub fn anchors(&self) -> &[Color] {
        &self.anchors
    }
}

// ─── Built-in palettes ──────────────────────────────────────────────────────

fn anchor(hex: &'static str) -> Color {
    Color::parse(hex).expect("literal palette color")
}

static PALETTES: Lazy<BTreeMap<&'static str, Vec<Color>>> = Lazy::new(|| {
    let mut palettes = BTreeMap::new();
    palettes.insert(
        "viridis",
        vec![
            anchor("440154"),
            anchor("3b528b"),
            anchor("21918c"),
            anchor("5ec962"),
            anchor("fde725"),
        ],
    );
    palettes.insert(
        "magma",
        vec![
            anchor("000004"),
            anchor("51127c"),
            anchor("b73779"),
            anchor("fc8961"),
            anchor("fcfdbf"),
        ],
    );
    palettes.insert(
        "plasma",
        vec![
            anchor("0d0887"),
            anchor("7e03a8"),
            anchor("cc4778"),
            anchor("f89540"),
            anchor("f0f921"),
        ],
    );
    palettes.insert("grayscale", vec![anchor("000000"), anchor("ffffff")]);
    palettes
});

/// Returns the gradient for a built-in palette name.
pub fn palette(name: &str) -> Result<Gradient, PlastikError> {
    match PALETTES.get(name) {
        Some(anchors) => Gradient::new(anchors.clone()),
        None => Err(PlastikError::UnknownPalette {
            name: name.to_string(),
            available: PALETTES
                .keys()
                .copied()
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

// ─── create_colorlist ───────────────────────────────────────────────────────

/// How to pick colors: a built-in palette name, or explicit anchor colors.
#[derive(Debug, Clone)]
pub enum ColorSpec {
    /// Draw from a named built-in palette.
    Palette(String),
    /// Interpolate between explicit anchors, first to last.
    Anchors(Vec<Color>),
}

impl ColorSpec {
    /// Spec for a built-in palette.
    pub fn palette(name: impl Into<String>) -> Self {
        ColorSpec::Palette(name.into())
    }

    /// Spec from anchor color strings (named or hex).
    pub fn anchors(colors: &[&str]) -> Result<Self, PlastikError> {
        let parsed: Result<Vec<Color>, String> = colors.iter().map(|c| Color::parse(c)).collect();
        match parsed {
            Ok(colors) => Ok(ColorSpec::Anchors(colors)),
            Err(message) => Err(PlastikError::InvalidColor { message }),
        }
    }
}

/// Creates `n` colors from a palette name or a list of anchor colors.
pub fn create_colorlist(spec: &ColorSpec, n: usize) -> Result<Vec<Color>, PlastikError> {
    let gradient = match spec {
        ColorSpec::Palette(name) => palette(name)?,
        ColorSpec::Anchors(anchors) => Gradient::new(anchors.clone())?,
    };
    Ok(gradient.colors(n))
}

/// Like [`create_colorlist`], but returns `#rrggbb` hex strings, the form a
/// rendering backend takes directly.
pub fn create_hex_colorlist(spec: &ColorSpec, n: usize) -> Result<Vec<String>, PlastikError> {
    Ok(create_colorlist(spec, n)?
        .into_iter()
        .map(Color::to_hex)
        .collect())
}
