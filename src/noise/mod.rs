//! Noise generation
//!
//! Generators take an explicit random source so output is reproducible when
//! the caller seeds it. Use [`seeded_rng`] to build one from an optional seed.

mod brown;
mod white;

pub use brown::{cumulative_sum, generate_brown_noise, GaussianSteps, BROWN_NOISE_CUTOFF_HZ};
pub use white::generate_white_noise;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::audio::Signal;
use crate::error::{NoiseError, Result};

/// Noise color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseColor {
    /// Uniform samples, flat spectrum
    White,
    /// Integrated Gaussian steps, low-pass filtered (1/f^2 spectrum)
    #[default]
    Brown,
}

impl NoiseColor {
    pub fn name(self) -> &'static str {
        match self {
            NoiseColor::White => "white",
            NoiseColor::Brown => "brown",
        }
    }
}

impl fmt::Display for NoiseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseColor {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(NoiseColor::White),
            "brown" | "red" => Ok(NoiseColor::Brown),
            other => Err(NoiseError::invalid("color", other, "white or brown")),
        }
    }
}

/// Build a random source: seeded when `seed` is given, from OS entropy otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Largest sample count a WAV data chunk can hold at 4 bytes per sample
pub const MAX_SAMPLES: usize = (u32::MAX / 4) as usize;

/// Number of samples for a duration, truncating the product
///
/// # Errors
/// * `InvalidArgument` - If the duration is not a positive finite number, the
///   sample rate is zero, or the product exceeds [`MAX_SAMPLES`]
pub fn sample_count(duration_secs: f64, sample_rate: u32) -> Result<usize> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(NoiseError::invalid(
            "duration_secs",
            duration_secs,
            "a positive, finite number of seconds",
        ));
    }
    if sample_rate == 0 {
        return Err(NoiseError::invalid("sample_rate", sample_rate, "> 0 Hz"));
    }
    let samples = (duration_secs * sample_rate as f64).floor();
    if samples > MAX_SAMPLES as f64 {
        return Err(NoiseError::invalid(
            "duration_secs",
            duration_secs,
            &format!(
                "at most {:.0} seconds at {} Hz",
                (MAX_SAMPLES as f64 / sample_rate as f64).floor(),
                sample_rate
            ),
        ));
    }
    Ok(samples as usize)
}

/// Generate noise of the given color as a Signal
///
/// `cutoff_freq` only applies to brown noise.
pub fn generate<R: Rng + ?Sized>(
    color: NoiseColor,
    duration_secs: f64,
    sample_rate: u32,
    cutoff_freq: f64,
    rng: &mut R,
) -> Result<Signal> {
    let samples = match color {
        NoiseColor::White => generate_white_noise(duration_secs, sample_rate, rng)?,
        NoiseColor::Brown => generate_brown_noise(duration_secs, sample_rate, cutoff_freq, rng)?,
    };
    Signal::new(samples, sample_rate)
}
