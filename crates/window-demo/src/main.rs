// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that shows a line chart and an animated donut via RGBA blit (CPU)
//          using winit + softbuffer. Resizing redraws the line chart at the new width;
//          the donut sweep is driven by per-frame ticks. Any key replays the sweep.

use anyhow::{anyhow, Result};
use chart_core::{
    Clock, ColorSpec, ConsoleConfig, DonutChart, LineChart, LineOptions, MonotonicClock, NextFrame,
    RasterSurface, Segment,
};
use log::{debug, error, info};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Gap around and between charts, logical px.
const MARGIN: f32 = 16.0;
const BACKDROP: u32 = 0x00ff_ffff;

fn main() -> Result<()> {
    env_logger::init();

    // Optional arg: JSON config path
    let cfg = match std::env::args().nth(1) {
        Some(p) => ConsoleConfig::load(&p)?,
        None => ConsoleConfig::default(),
    };
    let theme = cfg.theme();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Console Charts - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(720.0, 460.0))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let clock = MonotonicClock::new();
    let mut size = window.inner_size();
    let mut dpr = window.scale_factor() as f32;

    let line_opts = LineOptions {
        height: 200.0,
        show_axis: true,
        color: ColorSpec::rgba(52, 168, 83, 0.8),
        labels: ["00:00", "06:00", "12:00", "18:00", "24:00"].iter().map(|s| s.to_string()).collect(),
    };
    let samples = (0..24).map(|i| 55.0 + ((i as f64) * 0.55).sin() * 20.0 + (i as f64)).collect();
    let mut line = LineChart::new(samples, line_opts).with_theme(theme);
    line.mount(line_width(size.width, dpr), dpr)?;

    let mut donut = DonutChart::new(resource_segments(), cfg.donut.clone()).with_theme(theme);
    let mut next = donut.mount(dpr, clock.now_ms())?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = if next == NextFrame::Schedule { ControlFlow::Poll } else { ControlFlow::Wait };
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    line.unmount();
                    donut.unmount();
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    match line.on_resize(line_width(size.width, dpr)) {
                        Ok(_) => window.request_redraw(),
                        Err(e) => error!("line chart resize failed: {e}"),
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    size = *new_inner_size;
                    dpr = scale_factor as f32;
                    info!("scale factor changed to {dpr}");
                    // backing buffers depend on dpr; remount both
                    let remounted = line
                        .mount(line_width(size.width, dpr), dpr)
                        .and_then(|_| donut.mount(dpr, clock.now_ms()));
                    match remounted {
                        Ok(n) => next = n,
                        Err(e) => error!("remount failed: {e}"),
                    }
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    donut.unmount();
                    match donut.mount(dpr, clock.now_ms()) {
                        Ok(n) => next = n,
                        Err(e) => error!("donut remount failed: {e}"),
                    }
                    *control_flow = ControlFlow::Poll;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if next == NextFrame::Schedule {
                    next = donut.on_frame(clock.now_ms());
                    if next == NextFrame::Stop {
                        debug!("sweep done; waiting for events");
                    }
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let (w, h) = (size.width.max(1), size.height.max(1));
                let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return };
                if let Err(e) = surface.resize(nw, nh) {
                    error!("resize error: {e:?}");
                    return;
                }
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        error!("frame error: {e:?}");
                        return;
                    }
                };
                frame.fill(BACKDROP);

                let m = (MARGIN * dpr) as usize;
                let line_bottom = m + (line.options().height * dpr) as usize;
                if let Some(s) = line.surface_mut() {
                    blit(&mut frame, w as usize, h as usize, s, m, m);
                }
                if let Some(s) = donut.surface_mut() {
                    blit(&mut frame, w as usize, h as usize, s, m, line_bottom + m);
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

/// Logical width available to the line chart inside a window `physical_width` px wide.
fn line_width(physical_width: u32, dpr: f32) -> f32 {
    (physical_width as f32 / dpr - MARGIN * 2.0).max(1.0)
}

fn resource_segments() -> Vec<Segment> {
    vec![
        Segment::new("Compute Engine", 65.0, ColorSpec::rgba(26, 115, 232, 0.8)),
        Segment::new("Storage", 20.0, ColorSpec::rgba(52, 168, 83, 0.8)),
        Segment::new("Networking", 10.0, ColorSpec::rgba(251, 188, 4, 0.8)),
        Segment::new("Others", 5.0, ColorSpec::rgba(234, 67, 53, 0.8)),
    ]
}

/// Alpha-blend a chart surface onto the 0RGB frame at physical offset (left, top).
fn blit(frame: &mut [u32], frame_w: usize, frame_h: usize, src: &mut RasterSurface, left: usize, top: usize) {
    let (rgba, w, h, stride) = match src.to_rgba8() {
        Ok(v) => v,
        Err(e) => {
            error!("read back failed: {e}");
            return;
        }
    };
    for y in 0..h as usize {
        let fy = top + y;
        if fy >= frame_h { break; }
        for x in 0..w as usize {
            let fx = left + x;
            if fx >= frame_w { break; }
            let i = y * stride + x * 4;
            let a = rgba[i + 3] as u32;
            if a == 0 { continue; }
            let dst = frame[fy * frame_w + fx];
            let mix = |s: u8, shift: u32| -> u32 {
                let d = (dst >> shift) & 0xff;
                (s as u32 * a + d * (255 - a)) / 255
            };
            frame[fy * frame_w + fx] = (mix(rgba[i], 16) << 16) | (mix(rgba[i + 1], 8) << 8) | mix(rgba[i + 2], 0);
        }
    }
}
