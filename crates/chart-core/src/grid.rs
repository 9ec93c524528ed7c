// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced layout positions (label rows, legend columns).

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// A single step sits at `start`; zero steps yields nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
