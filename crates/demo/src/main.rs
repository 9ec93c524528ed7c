// File: crates/demo/src/main.rs
// Summary: Demo renders the console dashboard charts (sparklines, usage chart with axes,
//          resource donut + its sweep frames, progress bars) to PNGs.
// Usage: console-chart-demo [samples.csv] [--config console.json]

use anyhow::{Context, Result};
use chart_core::progress::{draw_progress_bar, label};
use chart_core::{
    Clock, ColorSpec, ConsoleConfig, DonutChart, LineChart, LineOptions, LogicalSize, ManualClock,
    NextFrame, RasterSurface, Segment,
};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Frame interval used when exporting the sweep, roughly 60 Hz.
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut csv_arg: Option<String> = None;
    let mut config_arg: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_arg = Some(args.next().context("--config needs a path")?),
            _ => csv_arg = Some(arg),
        }
    }

    let cfg = match &config_arg {
        Some(p) => ConsoleConfig::load(p).with_context(|| format!("failed to load config '{p}'"))?,
        None => ConsoleConfig::default(),
    };
    let theme = cfg.theme();
    info!("theme {} at dpr {}", theme.name, cfg.dpr);

    let usage = match &csv_arg {
        Some(raw) => {
            let path = resolve_path(raw)?;
            let samples = load_samples_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples from {}", samples.len(), path.display());
            samples
        }
        None => generate_chart_data(24, 10.0, 80.0, 7),
    };
    if usage.is_empty() {
        warn!("no samples loaded; the usage chart will be blank");
    }

    let out_dir = PathBuf::from("target/out");

    // 1) Sparklines, one per resource
    let sparks = [
        ("cpu", generate_chart_data(20, 30.0, 75.0, 1), cfg.line.color),
        ("memory", generate_chart_data(20, 40.0, 85.0, 2), theme.secondary),
    ];
    for (name, data, color) in sparks {
        let opts = LineOptions { color, ..cfg.line.clone() };
        let mut chart = LineChart::new(data, opts).with_theme(theme);
        chart.mount(240.0, cfg.dpr)?;
        let out = out_dir.join(format!("spark_{name}.png"));
        write_surface(chart.surface_mut(), &out)?;
    }

    // 2) Network usage with axes and time labels
    let mut usage_opts = cfg.line.clone();
    usage_opts.height = usage_opts.height.max(200.0);
    usage_opts.show_axis = true;
    usage_opts.color = ColorSpec::rgba(52, 168, 83, 0.8);
    if usage_opts.labels.is_empty() {
        usage_opts.labels = ["00:00", "06:00", "12:00", "18:00", "24:00"].iter().map(|s| s.to_string()).collect();
    }
    let mut usage_chart = LineChart::new(usage, usage_opts).with_theme(theme);
    usage_chart.mount(640.0, cfg.dpr)?;
    write_surface(usage_chart.surface_mut(), &out_dir.join("usage.png"))?;
    // host resize: the same component redrawn at a narrower width
    usage_chart.on_resize(360.0)?;
    write_surface(usage_chart.surface_mut(), &out_dir.join("usage_narrow.png"))?;
    let labels = usage_chart
        .labels()
        .iter()
        .map(|(x, l)| format!("{l}@{x:.0}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Labels: {labels}");

    // 3) Resource distribution donut, final frame plus the sweep
    let segments = resource_segments();
    let mut donut = DonutChart::new(segments.clone(), cfg.donut.clone()).with_theme(theme);
    let clock = ManualClock::new(0.0);
    let mut next = donut.mount(cfg.dpr, clock.now_ms())?;
    let mut frame = 0usize;
    while next == NextFrame::Schedule {
        clock.advance(FRAME_MS);
        next = donut.on_frame(clock.now_ms());
        frame += 1;
        // every 6th frame is plenty to see the sweep
        if frame % 6 == 0 {
            write_surface(donut.surface_mut(), &out_dir.join(format!("donut_frame_{frame:03}.png")))?;
        }
    }
    info!("donut settled at progress {} after {} frames", donut.progress(), frame);
    write_surface(donut.surface_mut(), &out_dir.join("donut.png"))?;
    if let Some(legend) = donut.legend() {
        println!("{legend}");
    }

    // 4) Resource usage bars
    let bars = [("CPU", 68.0, "primary"), ("Memory", 72.0, "secondary"), ("Disk", 45.0, "accent"), ("Network", 30.0, "warning")];
    for (name, value, color) in bars {
        let mut opts = cfg.progress.clone();
        opts.color = color.to_string();
        opts.show_label = true;
        let mut surface = RasterSurface::new(LogicalSize::new(320.0, opts.height), cfg.dpr)?;
        let canvas = surface.begin_frame();
        draw_progress_bar(canvas, value, 100.0, 320.0, &opts, &theme);
        let out = out_dir.join(format!("progress_{}.png", name.to_lowercase()));
        surface.write_png(&out)?;
        println!("{name}: {}  -> {}", label(value, 100.0, &opts).unwrap_or_default(), out.display());
    }

    Ok(())
}

fn write_surface(surface: Option<&mut RasterSurface>, out: &Path) -> Result<()> {
    let surface = surface.context("chart is not mounted")?;
    surface.write_png(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn resource_segments() -> Vec<Segment> {
    vec![
        Segment::new("Compute Engine", 65.0, ColorSpec::rgba(26, 115, 232, 0.8)),
        Segment::new("Storage", 20.0, ColorSpec::rgba(52, 168, 83, 0.8)),
        Segment::new("Networking", 10.0, ColorSpec::rgba(251, 188, 4, 0.8)),
        Segment::new("Others", 5.0, ColorSpec::rgba(234, 67, 53, 0.8)),
    ]
}

/// Deterministic pseudo-random walk between `min` and `max`.
fn generate_chart_data(points: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let span = max - min;
    let mut value = min + span * next();
    (0..points)
        .map(|_| {
            value = (value + (next() - 0.5) * span * 0.3).clamp(min, max);
            value
        })
        .collect()
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            println!("  (extension swapped between .csv/.cvs)");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Load one sample per row from a `value`/`usage`/`y` column, or the first numeric column.
fn load_samples_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!("headers: {:?}", headers);

    let named = headers
        .iter()
        .position(|h| matches!(h.as_str(), "value" | "usage" | "y" | "cpu" | "close"));

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parsed = match named {
            Some(ix) => rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok()),
            None => rec.iter().find_map(|s| s.trim().parse::<f64>().ok()),
        };
        match parsed {
            Some(v) if v.is_finite() => out.push(v),
            _ => warn!("skipping row without a numeric sample: {:?}", rec),
        }
    }
    Ok(out)
}
