//! Generator configuration
//!
//! Defaults reproduce the stock render: ten seconds of brown noise at
//! 44.1 kHz, low-passed at 1 kHz, written to `dist/brown.wav`. A JSON file
//! can override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::{encoder_for_path, PcmFormat};
use crate::dsp::validate_cutoff;
use crate::error::Result;
use crate::noise::{sample_count, NoiseColor, BROWN_NOISE_CUTOFF_HZ};

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default duration in seconds
pub const DEFAULT_DURATION_SECS: f64 = 10.0;

/// Default output path
pub const DEFAULT_OUTPUT_PATH: &str = "dist/brown.wav";

/// Parameters for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Noise color to generate
    pub color: NoiseColor,
    /// Generation length in seconds
    pub duration_secs: f64,
    /// Samples per second
    pub sample_rate: u32,
    /// Low-pass cutoff for brown noise in Hz
    pub cutoff_hz: f64,
    /// Destination file; the extension selects the encoder
    pub output_path: PathBuf,
    /// Fixed seed for reproducible output; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Sample representation handed to the encoder
    pub pcm_format: PcmFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            color: NoiseColor::Brown,
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            cutoff_hz: BROWN_NOISE_CUTOFF_HZ,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            pcm_format: PcmFormat::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check every parameter before any work starts
    ///
    /// # Errors
    /// * `InvalidArgument` - Bad duration, sample rate, or (brown only) cutoff
    /// * `UnsupportedFormat` - No encoder for the output extension
    pub fn validate(&self) -> Result<()> {
        sample_count(self.duration_secs, self.sample_rate)?;
        if self.color == NoiseColor::Brown {
            validate_cutoff(self.cutoff_hz, self.sample_rate)?;
        }
        encoder_for_path(&self.output_path)?;
        Ok(())
    }
}
