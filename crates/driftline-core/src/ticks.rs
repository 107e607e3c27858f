// File: crates/driftline-core/src/ticks.rs
// Summary: Evenly spaced tick positions along one axis.

/// Returns `count` evenly spaced positions covering [start, end] inclusive.
///
/// Degenerate requests (count < 2) collapse to the two endpoints.
pub fn tick_positions(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (count as f64 - 1.0);
    (0..count).map(|i| start + step * i as f64).collect()
}
