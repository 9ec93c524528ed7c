// File: crates/chart-core/src/line.rs
// Summary: Line/area series renderer: sample normalization, axis guides, gradient fill.

use skia_safe as skia;

use crate::color::ColorSpec;
use crate::geometry::Point;
use crate::grid::linspace;
use crate::options::LineOptions;
use crate::theme::Theme;

/// Inset on every side when axis guides are shown.
pub const AXIS_PADDING: f32 = 20.0;
pub const STROKE_WIDTH: f32 = 2.0;
/// Opacity of the area fill at the top edge, relative to the stroke color.
pub const FILL_TOP_OPACITY: f32 = 0.3;

/// Pixel geometry of one line chart draw, all in logical units.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub min: f64,
    pub max: f64,
    /// `max - min`, or 1.0 for a flat series.
    pub range: f64,
    pub points: Vec<Point>,
}

/// (min, max) of the samples, `None` for an empty slice.
pub fn value_range(samples: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = samples.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

/// Horizontal position of sample `index` out of `count`.
/// A lone sample sits in the middle of the chart area.
#[inline]
pub fn sample_x(index: usize, count: usize, padding: f32, chart_width: f32) -> f32 {
    if count <= 1 {
        return padding + chart_width * 0.5;
    }
    padding + (index as f32 / (count - 1) as f32) * chart_width
}

/// Vertical position of `value`; larger values draw higher.
#[inline]
pub fn sample_y(value: f64, min: f64, range: f64, height: f32, padding: f32, chart_height: f32) -> f32 {
    let normalized = ((value - min) / range) as f32;
    height - padding - normalized * chart_height
}

impl LineLayout {
    /// `None` when there is nothing to draw.
    pub fn compute(samples: &[f64], width: f32, height: f32, show_axis: bool) -> Option<Self> {
        let (min, max) = value_range(samples)?;
        let padding = if show_axis { AXIS_PADDING } else { 0.0 };
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let chart_width = width - padding * 2.0;
        let chart_height = height - padding * 2.0;
        let n = samples.len();
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Point::new(
                    sample_x(i, n, padding, chart_width),
                    sample_y(v, min, range, height, padding, chart_height),
                )
            })
            .collect();
        Some(Self { width, height, padding, min, max, range, points })
    }

    pub fn chart_width(&self) -> f32 { self.width - self.padding * 2.0 }
    pub fn chart_height(&self) -> f32 { self.height - self.padding * 2.0 }

    /// Bottom edge of the chart area.
    pub fn baseline_y(&self) -> f32 { self.height - self.padding }

    pub fn stroke_path(&self) -> skia::Path {
        let mut path = skia::Path::new();
        let mut pts = self.points.iter();
        if let Some(&first) = pts.next() {
            path.move_to(first);
            for &p in pts {
                path.line_to(p);
            }
        }
        path
    }

    /// Polyline closed down to the chart's bottom edge.
    pub fn area_path(&self) -> skia::Path {
        let mut path = self.stroke_path();
        if !self.points.is_empty() {
            let base = self.baseline_y();
            path.line_to((self.padding + self.chart_width(), base));
            path.line_to((self.padding, base));
            path.close();
        }
        path
    }
}

/// x positions for `count` labels spread edge to edge across `width`.
pub fn label_positions(count: usize, width: f32) -> Vec<f32> {
    linspace(0.0, width as f64, count).into_iter().map(|x| x as f32).collect()
}

fn draw_axis_guides(canvas: &skia::Canvas, layout: &LineLayout, color: ColorSpec) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(color.to_skia());

    let p = layout.padding;
    let base = layout.baseline_y();
    // x axis, then y axis
    canvas.draw_line((p, base), (layout.width - p, base), &paint);
    canvas.draw_line((p, p), (p, base), &paint);
}

fn area_shader(color: ColorSpec, height: f32) -> Option<skia::Shader> {
    let colors = [
        color.with_alpha(color.a * FILL_TOP_OPACITY).to_skia(),
        color.with_alpha(0.0).to_skia(),
    ];
    skia::gradient_shader::linear(
        (skia::Point::new(0.0, 0.0), skia::Point::new(0.0, height)),
        &colors[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    )
}

/// Draw the series onto a cleared canvas in logical units.
/// Returns false (and draws nothing) for an empty sample slice.
pub fn draw_line_chart(
    canvas: &skia::Canvas,
    samples: &[f64],
    width: f32,
    opts: &LineOptions,
    theme: &Theme,
) -> bool {
    let Some(layout) = LineLayout::compute(samples, width, opts.height, opts.show_axis) else {
        return false;
    };

    if opts.show_axis {
        draw_axis_guides(canvas, &layout, theme.axis_guide);
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(STROKE_WIDTH);
    stroke.set_color(opts.color.to_skia());
    canvas.draw_path(&layout.stroke_path(), &stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_shader(area_shader(opts.color, layout.height));
    canvas.draw_path(&layout.area_path(), &fill);

    true
}
