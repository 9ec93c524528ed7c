// File: crates/chart-core/tests/components.rs
// Purpose: Mount/redraw/resize/frame/unmount lifecycle of the chart components.

use chart_core::{
    Clock, ColorSpec, DonutChart, DonutOptions, LineChart, LineOptions, ManualClock, NextFrame,
    PhysicalSize, Segment,
};

fn segments() -> Vec<Segment> {
    vec![
        Segment::new("A", 50.0, ColorSpec::rgb(255, 0, 0)),
        Segment::new("B", 50.0, ColorSpec::rgb(0, 0, 255)),
    ]
}

#[test]
fn line_chart_redraws_only_when_mounted_and_changed() {
    let mut chart = LineChart::new(vec![1.0, 2.0, 3.0], LineOptions::default());
    assert!(!chart.redraw(), "nothing to draw on before mount");
    assert!(!chart.set_samples(vec![3.0, 2.0, 1.0]));
    assert_eq!(chart.redraw_count(), 0);

    chart.mount(200.0, 2.0).expect("mount");
    assert_eq!(chart.redraw_count(), 1);
    let surface = chart.surface().expect("surface");
    assert_eq!(surface.physical_size(), PhysicalSize { width: 400, height: 120 });

    assert!(!chart.set_samples(vec![3.0, 2.0, 1.0]), "same samples do not redraw");
    assert_eq!(chart.redraw_count(), 1);
    assert!(chart.set_samples(vec![5.0, 1.0]));
    assert_eq!(chart.redraw_count(), 2);
}

#[test]
fn line_chart_follows_resize_and_height() {
    let mut chart = LineChart::new(vec![10.0, 20.0, 10.0, 30.0], LineOptions::default());
    chart.mount(300.0, 1.0).expect("mount");

    assert!(chart.on_resize(150.0).expect("resize"));
    let layout = chart.layout().expect("layout");
    assert_eq!(layout.width, 150.0);
    assert!((layout.points[3].x - 150.0).abs() < 1e-4);

    let mut opts = chart.options().clone();
    opts.height = 200.0;
    opts.show_axis = true;
    assert!(chart.set_options(opts.clone()).expect("options"));
    let surface = chart.surface().expect("surface");
    assert_eq!(surface.physical_size(), PhysicalSize { width: 150, height: 200 });
    assert!(!chart.set_options(opts).expect("options"));
    assert_eq!(chart.redraw_count(), 3);
}

#[test]
fn line_chart_ignores_resize_after_unmount() {
    let mut chart = LineChart::new(vec![1.0, 2.0], LineOptions::default());
    chart.mount(100.0, 1.0).expect("mount");
    chart.unmount();
    assert!(!chart.is_mounted());
    assert!(!chart.on_resize(500.0).expect("resize"));
    assert_eq!(chart.redraw_count(), 1);
}

#[test]
fn line_chart_lays_out_labels_across_width() {
    let opts = LineOptions {
        labels: ["00:00", "06:00", "12:00", "18:00", "24:00"].iter().map(|s| s.to_string()).collect(),
        ..LineOptions::default()
    };
    let mut chart = LineChart::new(vec![1.0, 2.0], opts);
    chart.mount(400.0, 1.0).expect("mount");
    let labels = chart.labels();
    assert_eq!(labels.len(), 5);
    assert_eq!(labels[0], (0.0, "00:00"));
    assert_eq!(labels[2], (200.0, "12:00"));
    assert_eq!(labels[4], (400.0, "24:00"));
}

#[test]
fn static_donut_draws_once_at_full_progress() {
    let opts = DonutOptions { animate: false, ..DonutOptions::default() };
    let mut chart = DonutChart::new(segments(), opts);
    assert_eq!(chart.mount(1.0, 0.0).expect("mount"), NextFrame::Stop);
    assert_eq!(chart.progress(), 1.0);
    assert!(!chart.is_animating());
    assert_eq!(chart.on_frame(16.0), NextFrame::Stop);
    assert_eq!(chart.redraw_count(), 1);
}

#[test]
fn animated_donut_sweeps_until_done_then_stops_scheduling() {
    let clock = ManualClock::new(0.0);
    let mut chart = DonutChart::new(segments(), DonutOptions::default());
    assert_eq!(chart.mount(1.0, clock.now_ms()).expect("mount"), NextFrame::Schedule);
    assert_eq!(chart.progress(), 0.0);

    let mut last = 0.0;
    let mut frames = 0;
    loop {
        clock.advance(100.0);
        let next = chart.on_frame(clock.now_ms());
        frames += 1;
        assert!(chart.progress() >= last);
        last = chart.progress();
        if next == NextFrame::Stop {
            break;
        }
    }
    assert_eq!(frames, 10);
    assert_eq!(chart.progress(), 1.0);
    assert!(!chart.is_animating());

    let drawn = chart.redraw_count();
    assert_eq!(chart.on_frame(clock.now_ms() + 100.0), NextFrame::Stop);
    assert_eq!(chart.redraw_count(), drawn, "no frame after completion");
}

#[test]
fn new_segments_restart_the_sweep() {
    let clock = ManualClock::new(0.0);
    let mut chart = DonutChart::new(segments(), DonutOptions::default());
    chart.mount(1.0, clock.now_ms()).expect("mount");
    clock.advance(600.0);
    chart.on_frame(clock.now_ms());
    assert!((chart.progress() - 0.6).abs() < 1e-9);

    let next = chart.set_segments(vec![Segment::new("C", 1.0, ColorSpec::rgb(0, 255, 0))], clock.now_ms());
    assert_eq!(next, NextFrame::Schedule);
    assert_eq!(chart.progress(), 0.0);
    clock.advance(500.0);
    chart.on_frame(clock.now_ms());
    assert!((chart.progress() - 0.5).abs() < 1e-9);

    // unchanged input keeps the running sweep
    let same = chart.segments().to_vec();
    assert_eq!(chart.set_segments(same, clock.now_ms()), NextFrame::Schedule);
    assert!((chart.progress() - 0.5).abs() < 1e-9);
}

#[test]
fn unmount_cancels_in_flight_animation() {
    let mut chart = DonutChart::new(segments(), DonutOptions::default());
    chart.mount(1.0, 0.0).expect("mount");
    chart.on_frame(200.0);
    chart.unmount();
    let drawn = chart.redraw_count();
    assert_eq!(chart.on_frame(400.0), NextFrame::Stop);
    assert!(!chart.is_animating());
    assert_eq!(chart.redraw_count(), drawn);
}

#[test]
fn donut_legend_is_opt_in() {
    let chart = DonutChart::new(segments(), DonutOptions::default());
    assert!(chart.legend().is_none());
    let chart = DonutChart::new(segments(), DonutOptions { show_legend: true, ..DonutOptions::default() });
    let legend = chart.legend().expect("legend");
    assert_eq!(legend.entries.len(), 2);
    assert_eq!(legend.entries[0].label, "A");
}

#[test]
fn donut_size_change_reallocates_surface() {
    let mut chart = DonutChart::new(segments(), DonutOptions { animate: false, ..DonutOptions::default() });
    chart.mount(2.0, 0.0).expect("mount");
    assert_eq!(chart.surface().expect("surface").physical_size(), PhysicalSize { width: 240, height: 240 });
    let opts = DonutOptions { size: 80.0, animate: false, ..DonutOptions::default() };
    assert_eq!(chart.set_options(opts, 0.0).expect("options"), NextFrame::Stop);
    assert_eq!(chart.surface().expect("surface").physical_size(), PhysicalSize { width: 160, height: 160 });
    assert_eq!(chart.layout().outer_radius, 38.0);
}

#[test]
fn legend_toggle_keeps_the_running_sweep() {
    let clock = ManualClock::new(0.0);
    let mut chart = DonutChart::new(segments(), DonutOptions::default());
    chart.mount(1.0, clock.now_ms()).expect("mount");
    clock.advance(400.0);
    chart.on_frame(clock.now_ms());
    let drawn = chart.redraw_count();

    let opts = DonutOptions { show_legend: true, ..DonutOptions::default() };
    assert_eq!(chart.set_options(opts, clock.now_ms()).expect("options"), NextFrame::Schedule);
    assert!((chart.progress() - 0.4).abs() < 1e-9, "sweep must not restart");
    assert_eq!(chart.redraw_count(), drawn);
    assert!(chart.legend().is_some());

    clock.advance(600.0);
    assert_eq!(chart.on_frame(clock.now_ms()), NextFrame::Stop);
    assert_eq!(chart.progress(), 1.0);

    // any other option still restarts
    let opts = DonutOptions { show_legend: true, thickness: 12.0, ..DonutOptions::default() };
    assert_eq!(chart.set_options(opts, clock.now_ms()).expect("options"), NextFrame::Schedule);
    assert_eq!(chart.progress(), 0.0);
}
