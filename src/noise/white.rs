//! White noise generator.

use rand::Rng;

use super::sample_count;
use crate::error::Result;

/// Generate uniformly distributed white noise in [-1.0, 1.0]
///
/// Produces `floor(duration_secs * sample_rate)` independent samples.
pub fn generate_white_noise<R: Rng + ?Sized>(
    duration_secs: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let num_samples = sample_count(duration_secs, sample_rate)?;
    Ok((0..num_samples).map(|_| rng.gen_range(-1.0..=1.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoiseError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = generate_white_noise(1.0, 8000, &mut rng).unwrap();
        assert_eq!(noise.len(), 8000);
        assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_roughly_zero_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = generate_white_noise(1.0, 44100, &mut rng).unwrap();
        let mean = noise.iter().sum::<f64>() / noise.len() as f64;
        assert!(mean.abs() < 0.02);
    }

    #[test]
    fn test_fractional_duration_truncates() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = generate_white_noise(0.00005, 44100, &mut rng).unwrap();
        assert_eq!(noise.len(), 2);
    }

    #[test]
    fn test_tiny_duration_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = generate_white_noise(1e-6, 8000, &mut rng).unwrap();
        assert!(noise.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            generate_white_noise(-1.0, 8000, &mut rng),
            Err(NoiseError::InvalidArgument { .. })
        ));
        assert!(matches!(
            generate_white_noise(1.0, 0, &mut rng),
            Err(NoiseError::InvalidArgument { .. })
        ));
    }
}
