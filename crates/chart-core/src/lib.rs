// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the console chart renderers, their
//          mounted components, surfaces, theming and configuration.

pub mod animation;
pub mod color;
pub mod component;
pub mod donut;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod line;
pub mod options;
pub mod progress;
pub mod surface;
pub mod theme;

pub use animation::{Clock, ManualClock, MonotonicClock, NextFrame, SweepAnimation};
pub use color::ColorSpec;
pub use component::{DonutChart, LineChart};
pub use donut::{draw_donut, ArcSpan, DonutLayout, Segment};
pub use error::{ChartError, Result};
pub use geometry::{physical_size, LogicalSize, PhysicalSize, Point};
pub use legend::{Legend, LegendEntry};
pub use line::{draw_line_chart, LineLayout};
pub use options::{ConsoleConfig, DonutOptions, LabelPosition, LineOptions, ProgressOptions};
pub use progress::draw_progress_bar;
pub use surface::RasterSurface;
pub use theme::Theme;
