// File: crates/chart-core/src/donut.rs
// Summary: Donut (ring) renderer: proportional clockwise arcs from 12 o'clock over a track ring.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::color::ColorSpec;
use crate::geometry::Point;
use crate::options::DonutOptions;
use crate::theme::Theme;

/// Gap between the ring and the surface edge.
pub const RING_MARGIN: f32 = 2.0;
/// 12 o'clock, in radians (screen space, clockwise positive).
pub const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub color: ColorSpec,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: f64, color: ColorSpec) -> Self {
        Self { label: label.into(), value, color }
    }
}

/// Sum of segment values; an all-zero (or empty) set counts as 1.
pub fn total(segments: &[Segment]) -> f64 {
    let sum: f64 = segments.iter().map(|s| s.value).sum();
    if sum == 0.0 { 1.0 } else { sum }
}

/// Angular extent of one segment, radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub sweep: f64,
}

impl ArcSpan {
    pub fn end(&self) -> f64 { self.start + self.sweep }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutLayout {
    pub center: Point,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// One span per segment, in input order.
    pub arcs: Vec<ArcSpan>,
}

impl DonutLayout {
    /// Geometry at animation `progress` (clamped to [0, 1]).
    pub fn compute(segments: &[Segment], size: f32, thickness: f32, progress: f64) -> Self {
        let outer_radius = (size / 2.0 - RING_MARGIN).max(0.0);
        let inner_radius = (outer_radius - thickness).max(0.0);
        let progress = if progress.is_nan() { 1.0 } else { progress.clamp(0.0, 1.0) };
        let total = total(segments);

        let mut current = START_ANGLE;
        let arcs = segments
            .iter()
            .map(|s| {
                let sweep = (s.value / total) * TAU * progress;
                let span = ArcSpan { start: current, sweep };
                current += sweep;
                span
            })
            .collect();

        Self { center: Point::new(size / 2.0, size / 2.0), outer_radius, inner_radius, arcs }
    }

    pub fn track_path(&self) -> skia::Path {
        let mut path = skia::Path::new();
        path.set_fill_type(skia::PathFillType::EvenOdd);
        path.add_circle(self.center, self.outer_radius, None);
        if self.inner_radius > 0.0 {
            path.add_circle(self.center, self.inner_radius, None);
        }
        path
    }

    /// Closed ring wedge covering `span`; empty for a zero sweep.
    pub fn wedge_path(&self, span: ArcSpan) -> skia::Path {
        let mut path = skia::Path::new();
        if span.sweep == 0.0 || !span.sweep.is_finite() || self.outer_radius <= 0.0 {
            return path;
        }
        let start = span.start.to_degrees() as f32;
        let sweep = span.sweep.to_degrees() as f32;

        append_arc(&mut path, oval(self.center, self.outer_radius), start, sweep, true);
        if self.inner_radius > 0.0 {
            append_arc(&mut path, oval(self.center, self.inner_radius), start + sweep, -sweep, false);
        } else {
            path.line_to(self.center);
        }
        path.close();
        path
    }
}

fn oval(center: Point, radius: f32) -> skia::Rect {
    skia::Rect::from_xywh(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
}

/// Arc in pieces of at most 180 degrees; Skia collapses a single full-turn arc.
fn append_arc(path: &mut skia::Path, oval: skia::Rect, start: f32, sweep: f32, move_to: bool) {
    let pieces = (sweep.abs() / 180.0).ceil().max(1.0);
    let step = sweep / pieces;
    for i in 0..pieces as usize {
        path.arc_to(oval, start + step * i as f32, step, move_to && i == 0);
    }
}

/// Draw the track ring and every segment at `progress` onto a cleared canvas.
pub fn draw_donut(
    canvas: &skia::Canvas,
    segments: &[Segment],
    opts: &DonutOptions,
    theme: &Theme,
    progress: f64,
) -> DonutLayout {
    let layout = DonutLayout::compute(segments, opts.size, opts.thickness, progress);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    paint.set_color(theme.ring_track.to_skia());
    canvas.draw_path(&layout.track_path(), &paint);

    for (segment, span) in segments.iter().zip(&layout.arcs) {
        paint.set_color(segment.color.to_skia());
        canvas.draw_path(&layout.wedge_path(*span), &paint);
    }
    layout
}
