use std::time::Duration;

use rand::Rng;

use super::types::{PhaseTiming, Position};

/// Draw a duration in `[min_secs, max_secs]`, skewed toward the lower bound
/// by raising the uniform sample to `pow`.
pub fn randrange_pow<R: Rng + ?Sized>(rng: &mut R, timing: &PhaseTiming) -> Duration {
    let r = rng.random::<f64>().powf(timing.pow);
    let secs = r * (timing.max_secs - timing.min_secs) + timing.min_secs;
    Duration::from_secs_f64(secs.max(0.0))
}

/// Pick a uniformly random cell of a `rows` x `cols` grid.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Position {
    Position {
        row: rng.random_range(0..rows.max(1)),
        col: rng.random_range(0..cols.max(1)),
    }
}

/// Round to `places` decimals using the exact decimal expansion of `value`,
/// so 0.015 (stored as 0.01499...) rounds down to 0.01.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
