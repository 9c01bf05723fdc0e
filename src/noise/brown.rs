//! Brown noise generator.
//!
//! A random walk over standard-normal steps concentrates power at low
//! frequencies; the low-pass stage then removes the residual high-frequency
//! energy of the walk before peak normalization.

use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use super::sample_count;
use crate::dsp::{apply_low_pass_filter, normalize_peak, validate_cutoff};
use crate::error::{NoiseError, Result};

/// Default low-pass cutoff applied to the random walk
pub const BROWN_NOISE_CUTOFF_HZ: f64 = 1000.0;

/// Standard-normal draws via the Box-Muller transform
///
/// Each pair of uniform draws yields two independent normal values; the
/// second one is kept for the next call.
#[derive(Debug, Clone, Default)]
pub struct GaussianSteps {
    spare: Option<f64>,
}

impl GaussianSteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one value with mean 0 and variance 1
    pub fn next_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        // u1 in (0, 1] keeps ln(u1) finite
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = rng.gen::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

/// Running sum: out[i] = steps[0] + ... + steps[i]
pub fn cumulative_sum(steps: &[f64]) -> Vec<f64> {
    steps
        .iter()
        .scan(0.0, |total, &step| {
            *total += step;
            Some(*total)
        })
        .collect()
}

/// Generate brown noise normalized to a peak of exactly 1.0
///
/// # Errors
/// * `InvalidArgument` - If duration, sample rate or cutoff are invalid
/// * `DegenerateSignal` - If the walk has no samples or is silent
pub fn generate_brown_noise<R: Rng + ?Sized>(
    duration_secs: f64,
    sample_rate: u32,
    cutoff_freq: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let num_samples = sample_count(duration_secs, sample_rate)?;
    validate_cutoff(cutoff_freq, sample_rate)?;

    let mut gaussian = GaussianSteps::new();
    let steps: Vec<f64> = (0..num_samples).map(|_| gaussian.next_step(rng)).collect();

    let walk = cumulative_sum(&steps);
    if walk.iter().all(|&s| s == 0.0) {
        return Err(NoiseError::degenerate("random walk"));
    }

    debug!(
        "Brown noise: {} samples, low-pass at {} Hz",
        num_samples, cutoff_freq
    );

    let filtered = apply_low_pass_filter(&walk, cutoff_freq, sample_rate)?;
    normalize_peak(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::verification::mean_abs_slope;
    use crate::noise::generate_white_noise;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cumulative_sum() {
        assert_eq!(cumulative_sum(&[1.0, 2.0, -0.5, 0.5]), vec![1.0, 3.0, 2.5, 3.0]);
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gaussian = GaussianSteps::new();
        let draws: Vec<f64> = (0..100_000).map(|_| gaussian.next_step(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let variance = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / draws.len() as f64;

        assert!(mean.abs() < 0.02, "mean was {}", mean);
        assert!((variance - 1.0).abs() < 0.03, "variance was {}", variance);
        assert!(draws.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_length_and_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = generate_brown_noise(2.0, 44100, BROWN_NOISE_CUTOFF_HZ, &mut rng).unwrap();

        assert_eq!(noise.len(), 88200);
        let peak = noise.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
        assert_abs_diff_eq!(peak, 1.0, epsilon = 1e-9);
        assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_smoother_than_white() {
        let mut rng = StdRng::seed_from_u64(42);
        let brown = generate_brown_noise(1.0, 44100, BROWN_NOISE_CUTOFF_HZ, &mut rng).unwrap();
        let white = generate_white_noise(1.0, 44100, &mut rng).unwrap();

        assert!(mean_abs_slope(&brown) * 10.0 < mean_abs_slope(&white));
    }

    #[test]
    fn test_single_sample() {
        let mut rng = StdRng::seed_from_u64(5);
        let noise = generate_brown_noise(1.0, 1, 0.25, &mut rng).unwrap();
        assert_eq!(noise.len(), 1);
        assert_abs_diff_eq!(noise[0].abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_walk_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_brown_noise(1e-6, 8000, 1000.0, &mut rng);
        assert!(matches!(result, Err(NoiseError::DegenerateSignal { .. })));
    }

    #[test]
    fn test_cutoff_checked_before_generation() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = generate_brown_noise(1.0, 44100, 30000.0, &mut rng);
        assert!(matches!(result, Err(NoiseError::InvalidArgument { .. })));
    }

    #[test]
    fn test_invalid_duration() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            generate_brown_noise(0.0, 44100, 1000.0, &mut rng),
            Err(NoiseError::InvalidArgument { .. })
        ));
    }
}
