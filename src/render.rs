//! Render pipeline
//!
//! Config -> generator -> PCM -> encoder -> file, followed by a report
//! describing what was written.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::audio::{encoder_for_path, write_atomically, PcmFormat, PcmStream, SignalAnalysis};
use crate::config::GeneratorConfig;
use crate::error::{NoiseError, Result};
use crate::noise::{generate, seeded_rng, NoiseColor};

/// Description of a rendered file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    pub output_path: PathBuf,
    pub color: NoiseColor,
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub num_samples: usize,
    pub pcm_format: PcmFormat,
    pub seed: Option<u64>,
    pub peak: f64,
    pub rms_db: f64,
    /// SHA-256 of the written file, lowercase hex
    pub sha256: String,
    pub created_at: DateTime<Utc>,
}

impl RenderReport {
    /// Save the report as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Human-readable description
    pub fn summary(&self) -> String {
        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        format!(
            "Wrote {} noise to {}\n\
             {} samples ({:.2}s @ {} Hz, {:?}) | seed: {}\n\
             Peak: {:.3} | RMS: {:.1} dBFS\n\
             SHA-256: {}",
            self.color,
            self.output_path.display(),
            self.num_samples,
            self.duration_secs,
            self.sample_rate,
            self.pcm_format,
            seed,
            self.peak,
            self.rms_db,
            self.sha256
        )
    }
}

/// SHA-256 of a file's contents as lowercase hex
pub fn file_sha256(path: &Path) -> Result<String> {
    let content = fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&content)))
}

/// Generate noise per `config` and write it to `config.output_path`
///
/// Nothing is written unless generation succeeds; encoder failures are
/// returned unchanged.
pub fn render(config: &GeneratorConfig) -> Result<RenderReport> {
    config.validate()?;
    let encoder = encoder_for_path(&config.output_path)?;

    info!(
        "Generating {:.2}s of {} noise at {} Hz",
        config.duration_secs, config.color, config.sample_rate
    );

    let mut rng = seeded_rng(config.seed);
    let signal = generate(
        config.color,
        config.duration_secs,
        config.sample_rate,
        config.cutoff_hz,
        &mut rng,
    )?;
    if signal.is_empty() {
        return Err(NoiseError::degenerate("render"));
    }
    let analysis = SignalAnalysis::analyze(&signal);

    let pcm = PcmStream::from_signal(&signal, config.pcm_format);
    write_atomically(encoder.as_ref(), &pcm, &config.output_path)?;
    let sha256 = file_sha256(&config.output_path)?;

    info!(
        "Wrote {} ({} frames, {} bytes/sample)",
        config.output_path.display(),
        pcm.frames(),
        pcm.sample_width()
    );

    Ok(RenderReport {
        output_path: config.output_path.clone(),
        color: config.color,
        sample_rate: config.sample_rate,
        duration_secs: signal.duration(),
        num_samples: signal.len(),
        pcm_format: config.pcm_format,
        seed: config.seed,
        peak: analysis.peak_linear,
        rms_db: analysis.rms_db,
        sha256,
        created_at: Utc::now(),
    })
}
