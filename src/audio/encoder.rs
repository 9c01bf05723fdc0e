//! Audio file output
//!
//! Encoders turn a PCM stream into a container file. The container is picked
//! from the output path's extension; WAV (via the hound crate) is the only
//! format that can be written.
//!
//! Output is staged in a hidden `.partial` sibling and renamed into place, so a
//! failed encode never leaves a truncated file at the requested path.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::{debug, warn};

use super::pcm::{PcmFormat, PcmStream};
use crate::error::{NoiseError, Result};

/// Writes PCM audio to a file
pub trait AudioEncoder {
    /// File extension this encoder produces (lowercase, no dot)
    fn extension(&self) -> &'static str;

    /// Encode the stream to `path`, creating or truncating it
    fn encode(&self, pcm: &PcmStream, path: &Path) -> Result<()>;
}

/// RIFF/WAVE encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl AudioEncoder for WavEncoder {
    fn extension(&self) -> &'static str {
        "wav"
    }

    fn encode(&self, pcm: &PcmStream, path: &Path) -> Result<()> {
        let encoder_err = |e: hound::Error| NoiseError::Encoder {
            path: path.display().to_string(),
            source: e,
        };

        let spec = WavSpec {
            channels: pcm.channels(),
            sample_rate: pcm.sample_rate(),
            bits_per_sample: pcm.format().bits_per_sample(),
            sample_format: match pcm.format() {
                PcmFormat::Float32 => SampleFormat::Float,
                PcmFormat::Int16 | PcmFormat::Int24 => SampleFormat::Int,
            },
        };

        let mut writer = WavWriter::create(path, spec).map_err(encoder_err)?;

        match pcm.format() {
            PcmFormat::Int16 => {
                for sample in pcm.int_samples() {
                    writer.write_sample(sample as i16).map_err(encoder_err)?;
                }
            }
            PcmFormat::Int24 => {
                // 24-bit stored as i32 in hound
                for sample in pcm.int_samples() {
                    writer.write_sample(sample).map_err(encoder_err)?;
                }
            }
            PcmFormat::Float32 => {
                for sample in pcm.float_samples() {
                    writer.write_sample(sample).map_err(encoder_err)?;
                }
            }
        }

        writer.finalize().map_err(encoder_err)?;
        Ok(())
    }
}

/// Lowercased extension of a path, if any
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Pick an encoder based on the output file extension
///
/// # Errors
/// * `UnsupportedFormat` - If the extension is missing or has no encoder
pub fn encoder_for_path(path: &Path) -> Result<Box<dyn AudioEncoder>> {
    match extension_of(path).as_deref() {
        Some("wav") | Some("wave") => Ok(Box::new(WavEncoder)),
        Some(other) => Err(NoiseError::UnsupportedFormat {
            format: format!("{} (only wav output is available)", other),
        }),
        None => Err(NoiseError::UnsupportedFormat {
            format: format!("{} has no file extension", path.display()),
        }),
    }
}

/// Hidden sibling path used while an encode is in progress
pub fn partial_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.partial", file_name))
}

/// Encode to a staging file and move it over `path` once complete
///
/// Creates the parent directory if needed. On failure the staging file is
/// removed and `path` is left untouched.
pub fn write_atomically(encoder: &dyn AudioEncoder, pcm: &PcmStream, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let staging = partial_path(path);
    debug!("Encoding {} frames to {}", pcm.frames(), staging.display());

    let result = encoder
        .encode(pcm, &staging)
        .and_then(|()| fs::rename(&staging, path).map_err(NoiseError::from));

    if result.is_err() && staging.exists() {
        if let Err(e) = fs::remove_file(&staging) {
            warn!("Could not remove partial output {}: {}", staging.display(), e);
        }
    }

    result
}
