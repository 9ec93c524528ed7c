// File: crates/chart-core/src/color.rs
// Summary: CSS-style color specs ("#1a73e8", "rgba(26, 115, 232, 0.8)") and their Skia conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::ChartError;

/// An sRGB color with 8-bit channels and a unit alpha.
/// Contract: `a` is within [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: unit(a) }
    }

    /// Same color with its alpha replaced (not multiplied).
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: unit(a), ..self }
    }

    pub fn alpha_u8(&self) -> u8 {
        (unit(self.a) * 255.0).round() as u8
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.alpha_u8(), self.r, self.g, self.b)
    }
}

impl From<ColorSpec> for skia::Color {
    fn from(c: ColorSpec) -> Self {
        c.to_skia()
    }
}

fn unit(a: f32) -> f32 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

fn channel(s: &str) -> Option<u8> {
    let v: f32 = s.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(v.round().clamp(0.0, 255.0) as u8)
}

fn parse_hex(hex: &str) -> Option<ColorSpec> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(ColorSpec::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(ColorSpec::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(ColorSpec::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f32 / 255.0)),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<ColorSpec> {
    // accepts "26, 115, 232, 0.8" and "60 64 67 / 0.3"
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [r, g, b] => Some(ColorSpec::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let a = match a.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => a.parse::<f32>().ok()?,
            };
            Some(ColorSpec::rgba(channel(r)?, channel(g)?, channel(b)?, a))
        }
        _ => None,
    }
}

impl FromStr for ColorSpec {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let parsed = if let Some(hex) = t.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = t.strip_prefix("rgba(").or_else(|| t.strip_prefix("rgb(")) {
            body.strip_suffix(')').and_then(parse_functional)
        } else {
            match t.as_str() {
                "black" => Some(ColorSpec::rgb(0, 0, 0)),
                "white" => Some(ColorSpec::rgb(255, 255, 255)),
                "transparent" => Some(ColorSpec::rgba(0, 0, 0, 0.0)),
                _ => None,
            }
        };
        parsed.ok_or_else(|| ChartError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ColorSpec> for String {
    fn from(c: ColorSpec) -> Self {
        c.to_string()
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
