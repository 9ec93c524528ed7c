// File: crates/chart-core/src/geometry.rs
// Summary: Logical/physical sizes, device-pixel-ratio scaling and small pixel-math helpers.

/// Size in device-independent (CSS-like) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
    pub const fn square(side: f32) -> Self {
        Self { width: side, height: side }
    }
}

/// Size of the backing pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for skia_safe::Point {
    fn from(p: Point) -> Self {
        skia_safe::Point::new(p.x, p.y)
    }
}

/// Ratios that are zero, negative or not finite mean "unknown display" and act as 1.
#[inline]
pub fn sanitize_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

/// `physical = logical × dpr`, truncated like a canvas backing store.
pub fn physical_size(logical: LogicalSize, dpr: f32) -> PhysicalSize {
    let dpr = sanitize_dpr(dpr);
    let px = |v: f32| if v.is_finite() { (v.max(0.0) * dpr).floor() as i32 } else { 0 };
    PhysicalSize { width: px(logical.width), height: px(logical.height) }
}
