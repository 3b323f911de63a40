//! Plot color values.
//!
//! Colors accept the formats a plotting backend understands:
//!
//! - Named colors: `black`, `white`, `red`, `gray`, ...
//! - Single-letter shorthands: `k`, `w`, `r`, `g`, `b`, `c`, `m`, `y`
//! - RGB hex, with or without the `#` prefix: `#ff6b35`, `1a1a1a`, `#fff`
//!
//! The hex-without-prefix form matters because `#` starts a comment in the
//! flat stylesheet format, so stylesheet files write `axes.edgecolor: bfbfbf`.

use std::fmt;
use std::str::FromStr;

/// An RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Creates a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses a color from a string.
    ///
    /// Accepts named colors, single-letter shorthands, and 3- or 6-digit hex
    /// (the `#` prefix is optional).
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty color value".to_string());
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Ok(color) = Self::parse_named(s) {
            return Ok(color);
        }

        // Bare hex, as written in stylesheet files.
        if s.len() == 3 || s.len() == 6 {
            if let Ok(color) = Self::parse_hex(s) {
                return Ok(color);
            }
        }

        Err(format!("unknown color '{}'", s))
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        match hex.len() {
            // 3-digit hex: rgb -> rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?
                    * 17;
                let g = u8::from_str_radix(&hex[1..2], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?
                    * 17;
                let b = u8::from_str_radix(&hex[2..3], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?
                    * 17;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| format!("invalid hex color '{}'", hex))?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!(
                "invalid hex color '{}' (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses a named color or single-letter shorthand.
    fn parse_named(name: &str) -> Result<Self, String> {
        let color = match name.to_lowercase().as_str() {
            "black" | "k" => Color::rgb(0, 0, 0),
            "white" | "w" => Color::rgb(255, 255, 255),
            "red" | "r" => Color::rgb(255, 0, 0),
            "green" | "g" => Color::rgb(0, 128, 0),
            "blue" | "b" => Color::rgb(0, 0, 255),
            "cyan" | "c" => Color::rgb(0, 255, 255),
            "magenta" | "m" => Color::rgb(255, 0, 255),
            "yellow" | "y" => Color::rgb(255, 255, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "orange" => Color::rgb(255, 165, 0),
            _ => return Err(format!("unknown color name '{}'", name)),
        };
        Ok(color)
    }

    /// Formats the color as a `#rrggbb` hex string, the form handed to the
    /// rendering backend.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}
