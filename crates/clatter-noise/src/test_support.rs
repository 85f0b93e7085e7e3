//! Helpers shared by the unit tests of this crate.

use crate::source::NoiseSource;

/// Draw `n` samples from `source`.
pub fn draw(source: &impl NoiseSource, n: usize) -> Vec<f32> {
    (0..n).map(|_| source.sample()).collect()
}

/// Empirical mean and (population) standard deviation.
#[allow(clippy::cast_precision_loss)]
pub fn moments(samples: &[f32]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
    let var = samples
        .iter()
        .map(|&s| (f64::from(s) - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}
