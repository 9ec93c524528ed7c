// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark console palettes: neutral chart colors and named color tokens.

use crate::color::ColorSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Bottom/left guides of the line chart.
    pub axis_guide: ColorSpec,
    /// Unfilled part of the donut ring.
    pub ring_track: ColorSpec,
    /// Progress bar track.
    pub border: ColorSpec,
    pub primary: ColorSpec,
    pub primary_light: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            axis_guide: ColorSpec { r: 218, g: 220, b: 224, a: 0.6 },
            ring_track: ColorSpec::rgb(0xf1, 0xf3, 0xf4),
            border: ColorSpec::rgb(218, 220, 224),
            primary: ColorSpec::rgb(26, 115, 232),
            primary_light: ColorSpec::rgb(66, 133, 244),
            secondary: ColorSpec::rgb(52, 168, 83),
            accent: ColorSpec::rgb(251, 188, 4),
            success: ColorSpec::rgb(30, 142, 62),
            warning: ColorSpec::rgb(249, 171, 0),
            error: ColorSpec::rgb(234, 67, 53),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis_guide: ColorSpec { r: 95, g: 99, b: 104, a: 0.6 },
            ring_track: ColorSpec::rgb(0x3c, 0x40, 0x43),
            border: ColorSpec::rgb(60, 64, 67),
            primary: ColorSpec::rgb(138, 180, 248),
            primary_light: ColorSpec::rgb(174, 203, 250),
            secondary: ColorSpec::rgb(129, 201, 149),
            accent: ColorSpec::rgb(253, 214, 99),
            success: ColorSpec::rgb(129, 201, 149),
            warning: ColorSpec::rgb(251, 188, 4),
            error: ColorSpec::rgb(242, 139, 130),
        }
    }

    /// Look up a named token (`primary`, `warning`, ...).
    pub fn token(&self, name: &str) -> Option<ColorSpec> {
        let c = match name.trim().to_ascii_lowercase().as_str() {
            "primary" => self.primary,
            "primary-light" => self.primary_light,
            "secondary" => self.secondary,
            "accent" => self.accent,
            "success" => self.success,
            "warning" => self.warning,
            "error" => self.error,
            "border" => self.border,
            _ => return None,
        };
        Some(c)
    }

    /// Resolve a token or a literal color spec; anything else falls back to `primary`.
    pub fn resolve(&self, color: &str) -> ColorSpec {
        self.token(color)
            .or_else(|| color.parse().ok())
            .unwrap_or(self.primary)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
