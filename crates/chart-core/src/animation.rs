// File: crates/chart-core/src/animation.rs
// Summary: Monotonic clocks and the donut sweep animation as an explicit state machine.

use std::cell::Cell;
use std::time::Instant;

/// Sweep length used by the donut chart.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock backed by `Instant`; zero at construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Default for MonotonicClock {
    fn default() -> Self { Self::new() }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for headless rendering and tests.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self { Self { now: Cell::new(start_ms) } }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 { self.now.get() }
}

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextFrame {
    Schedule,
    Stop,
}

/// Progress of a sweep started at `start_ms`.
/// Progress never decreases and is exactly 1.0 once `duration_ms` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepAnimation {
    start_ms: f64,
    duration_ms: f64,
    progress: f64,
}

impl SweepAnimation {
    pub fn start(now_ms: f64, duration_ms: f64) -> Self {
        Self { start_ms: now_ms, duration_ms, progress: 0.0 }
    }

    pub fn start_ms(&self) -> f64 { self.start_ms }
    pub fn duration_ms(&self) -> f64 { self.duration_ms }
    pub fn progress(&self) -> f64 { self.progress }
    pub fn is_finished(&self) -> bool { self.progress >= 1.0 }

    /// Advance to `now_ms`. A clock that steps backwards holds the current progress.
    pub fn tick(&mut self, now_ms: f64) -> NextFrame {
        let p = if self.duration_ms > 0.0 && self.duration_ms.is_finite() {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        // NaN timestamps leave progress untouched
        if p > self.progress {
            self.progress = p;
        }
        if self.is_finished() { NextFrame::Stop } else { NextFrame::Schedule }
    }
}
