// File: crates/chart-core/src/component.rs
// Summary: Mounted chart components: own a surface, redraw fully on input change/resize,
//          drive the donut sweep from host frame ticks, detach cleanly on unmount.
// Notes:
// - Every redraw is a full raster replace; there is no partial update path.
// - Drawing without a mounted surface is skipped silently, never an error.

use crate::animation::{NextFrame, SweepAnimation};
use crate::donut::{draw_donut, DonutLayout, Segment};
use crate::error::Result;
use crate::geometry::LogicalSize;
use crate::legend::Legend;
use crate::line::{draw_line_chart, label_positions, LineLayout};
use crate::options::{DonutOptions, LineOptions};
use crate::surface::RasterSurface;
use crate::theme::Theme;

/// Line/area chart whose width follows the host and whose height is an option.
pub struct LineChart {
    samples: Vec<f64>,
    options: LineOptions,
    theme: Theme,
    surface: Option<RasterSurface>,
    redraws: u64,
}

impl LineChart {
    pub fn new(samples: Vec<f64>, options: LineOptions) -> Self {
        Self { samples, options, theme: Theme::default(), surface: None, redraws: 0 }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn samples(&self) -> &[f64] { &self.samples }
    pub fn options(&self) -> &LineOptions { &self.options }
    pub fn is_mounted(&self) -> bool { self.surface.is_some() }
    pub fn redraw_count(&self) -> u64 { self.redraws }

    pub fn surface(&self) -> Option<&RasterSurface> { self.surface.as_ref() }
    pub fn surface_mut(&mut self) -> Option<&mut RasterSurface> { self.surface.as_mut() }

    /// Attach to a host of logical `width` and draw the first frame.
    pub fn mount(&mut self, width: f32, dpr: f32) -> Result<()> {
        let size = LogicalSize::new(width, self.options.height);
        self.surface = Some(RasterSurface::new(size, dpr)?);
        log::debug!("line chart mounted at {:?} (dpr {})", size, dpr);
        self.redraw();
        Ok(())
    }

    pub fn unmount(&mut self) {
        if self.surface.take().is_some() {
            log::debug!("line chart unmounted");
        }
    }

    /// Host resize. Ignored (returns false) once unmounted.
    pub fn on_resize(&mut self, width: f32) -> Result<bool> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        surface.resize(LogicalSize::new(width, self.options.height))?;
        Ok(self.redraw())
    }

    pub fn set_samples(&mut self, samples: Vec<f64>) -> bool {
        if samples == self.samples {
            return false;
        }
        self.samples = samples;
        self.redraw()
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        self.redraw()
    }

    /// Height changes reallocate the surface at the current width.
    pub fn set_options(&mut self, options: LineOptions) -> Result<bool> {
        if options == self.options {
            return Ok(false);
        }
        if let Some(surface) = self.surface.as_mut() {
            let width = surface.logical_size().width;
            surface.resize(LogicalSize::new(width, options.height))?;
        }
        self.options = options;
        Ok(self.redraw())
    }

    /// Full redraw; false when not mounted.
    pub fn redraw(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let width = surface.logical_size().width;
        let canvas = surface.begin_frame();
        let drew = draw_line_chart(canvas, &self.samples, width, &self.options, &self.theme);
        self.redraws += 1;
        log::trace!("line chart redraw #{} ({} samples, drew: {})", self.redraws, self.samples.len(), drew);
        true
    }

    /// Geometry of the current frame, if mounted and non-empty.
    pub fn layout(&self) -> Option<LineLayout> {
        let surface = self.surface.as_ref()?;
        LineLayout::compute(
            &self.samples,
            surface.logical_size().width,
            self.options.height,
            self.options.show_axis,
        )
    }

    /// (x, label) pairs for the label row under the chart.
    pub fn labels(&self) -> Vec<(f32, &str)> {
        let width = self.surface.as_ref().map(|s| s.logical_size().width).unwrap_or(0.0);
        label_positions(self.options.labels.len(), width)
            .into_iter()
            .zip(self.options.labels.iter().map(String::as_str))
            .collect()
    }
}

/// Donut chart with an optional sweep animation driven by host frame ticks.
pub struct DonutChart {
    segments: Vec<Segment>,
    options: DonutOptions,
    theme: Theme,
    surface: Option<RasterSurface>,
    animation: Option<SweepAnimation>,
    progress: f64,
    redraws: u64,
}

impl DonutChart {
    pub fn new(segments: Vec<Segment>, options: DonutOptions) -> Self {
        Self {
            segments,
            options,
            theme: Theme::default(),
            surface: None,
            animation: None,
            progress: 0.0,
            redraws: 0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn segments(&self) -> &[Segment] { &self.segments }
    pub fn options(&self) -> &DonutOptions { &self.options }
    pub fn is_mounted(&self) -> bool { self.surface.is_some() }
    pub fn redraw_count(&self) -> u64 { self.redraws }
    /// Progress of the last drawn frame.
    pub fn progress(&self) -> f64 { self.progress }
    pub fn is_animating(&self) -> bool { self.animation.is_some() }

    pub fn surface(&self) -> Option<&RasterSurface> { self.surface.as_ref() }
    pub fn surface_mut(&mut self) -> Option<&mut RasterSurface> { self.surface.as_mut() }

    /// Attach and draw the first frame. With `animate` the first frame is the
    /// empty track and the host must deliver frames until `Stop`.
    pub fn mount(&mut self, dpr: f32, now_ms: f64) -> Result<NextFrame> {
        let size = LogicalSize::square(self.options.size);
        self.surface = Some(RasterSurface::new(size, dpr)?);
        log::debug!("donut chart mounted at {:?} (dpr {})", size, dpr);
        Ok(self.restart(now_ms))
    }

    /// Drops the surface and any in-flight sweep.
    pub fn unmount(&mut self) {
        self.animation = None;
        if self.surface.take().is_some() {
            log::debug!("donut chart unmounted");
        }
    }

    /// One animation frame at `now_ms`.
    pub fn on_frame(&mut self, now_ms: f64) -> NextFrame {
        if self.surface.is_none() {
            self.animation = None;
            return NextFrame::Stop;
        }
        let Some(anim) = self.animation.as_mut() else {
            return NextFrame::Stop;
        };
        let next = anim.tick(now_ms);
        let progress = anim.progress();
        if next == NextFrame::Stop {
            self.animation = None;
            log::debug!("donut sweep finished");
        }
        self.draw_at(progress);
        next
    }

    /// New segments discard the running sweep and start over.
    pub fn set_segments(&mut self, segments: Vec<Segment>, now_ms: f64) -> NextFrame {
        if segments == self.segments {
            return self.next_frame();
        }
        self.segments = segments;
        self.restart(now_ms)
    }

    pub fn set_options(&mut self, options: DonutOptions, now_ms: f64) -> Result<NextFrame> {
        if options == self.options {
            return Ok(self.next_frame());
        }
        // The legend sits outside the ring; toggling it neither redraws nor replays the sweep.
        if DonutOptions { show_legend: self.options.show_legend, ..options.clone() } == self.options {
            self.options = options;
            return Ok(self.next_frame());
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(LogicalSize::square(options.size))?;
        }
        self.options = options;
        Ok(self.restart(now_ms))
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        self.draw_at(self.progress)
    }

    pub fn legend(&self) -> Option<Legend> {
        self.options.show_legend.then(|| Legend::from_segments(&self.segments))
    }

    /// Geometry of the last drawn frame.
    pub fn layout(&self) -> DonutLayout {
        DonutLayout::compute(&self.segments, self.options.size, self.options.thickness, self.progress)
    }

    fn next_frame(&self) -> NextFrame {
        if self.animation.is_some() { NextFrame::Schedule } else { NextFrame::Stop }
    }

    fn restart(&mut self, now_ms: f64) -> NextFrame {
        if self.surface.is_none() {
            self.animation = None;
            return NextFrame::Stop;
        }
        if self.options.animate {
            self.animation = Some(SweepAnimation::start(now_ms, self.options.duration_ms));
            self.draw_at(0.0);
            NextFrame::Schedule
        } else {
            self.animation = None;
            self.draw_at(1.0);
            NextFrame::Stop
        }
    }

    fn draw_at(&mut self, progress: f64) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let canvas = surface.begin_frame();
        draw_donut(canvas, &self.segments, &self.options, &self.theme, progress);
        self.progress = progress;
        self.redraws += 1;
        true
    }
}
