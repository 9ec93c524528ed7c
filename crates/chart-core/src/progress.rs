// File: crates/chart-core/src/progress.rs
// Summary: Horizontal progress bar: clamped percentage, rounded track and fill.

use skia_safe as skia;

use crate::options::{LabelPosition, ProgressOptions};
use crate::theme::Theme;

/// `value / max` as a percentage clamped to [0, 100].
/// A non-positive or non-finite `max`, or a NaN `value`, reads as 0. This differs
/// from the web console, where `value / 0` overflowed to a full bar: a bar with
/// no capacity shows empty here.
pub fn percentage(value: f64, max: f64) -> f64 {
    if !(max > 0.0) || !max.is_finite() || value.is_nan() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Text shown beside or above the bar, `None` when labels are off.
pub fn label(value: f64, max: f64, opts: &ProgressOptions) -> Option<String> {
    if !opts.show_label {
        return None;
    }
    let pct = percentage(value, max);
    Some(match opts.label_position {
        LabelPosition::Right => format!("{:.0}%", pct),
        LabelPosition::Top => format!("{} / {}  {:.0}%", value, max, pct),
    })
}

/// Draw track and fill across `width` logical px. Returns the fill width.
pub fn draw_progress_bar(
    canvas: &skia::Canvas,
    value: f64,
    max: f64,
    width: f32,
    opts: &ProgressOptions,
    theme: &Theme,
) -> f32 {
    let h = opts.height.max(0.0);
    let radius = h / 2.0;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    paint.set_color(theme.border.to_skia());
    let track = skia::Rect::from_xywh(0.0, 0.0, width.max(0.0), h);
    canvas.draw_round_rect(track, radius, radius, &paint);

    let fill_w = width.max(0.0) * (percentage(value, max) / 100.0) as f32;
    if fill_w > 0.0 {
        paint.set_color(theme.resolve(&opts.color).to_skia());
        let fill = skia::Rect::from_xywh(0.0, 0.0, fill_w, h);
        canvas.draw_round_rect(fill, radius, radius, &paint);
    }
    fill_w
}
