//! Signal implementation
//!
//! Signal is the mono sample sequence handed from the generator to the encoder.

use crate::error::{NoiseError, Result};

/// Mono sample data with its sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Samples, normalized to -1.0..=1.0 once they leave the generator
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl Signal {
    /// Create a new signal with the given parameters
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(NoiseError::invalid("sample_rate", sample_rate, "> 0 Hz"));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Create a sine wave test tone
    pub fn sine_wave(frequency: f64, amplitude: f64, duration_secs: f64, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f64) as usize;
        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin()
            })
            .collect();

        Self {
            samples,
            sample_rate,
        }
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generated signals are always mono
    pub fn channels(&self) -> u16 {
        1
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the signal has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
