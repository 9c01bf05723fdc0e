//! PCM conversion
//!
//! Turns a Signal into the raw little-endian byte stream an encoder consumes.

use super::Signal;
use serde::{Deserialize, Serialize};

/// Fixed-width sample representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcmFormat {
    /// 16-bit signed integer
    #[default]
    Int16,
    /// 24-bit signed integer, packed in 3 bytes
    Int24,
    /// 32-bit IEEE float
    Float32,
}

impl PcmFormat {
    /// Bytes per sample
    pub fn sample_width(self) -> usize {
        match self {
            PcmFormat::Int16 => 2,
            PcmFormat::Int24 => 3,
            PcmFormat::Float32 => 4,
        }
    }

    /// Bits per sample
    pub fn bits_per_sample(self) -> u16 {
        (self.sample_width() * 8) as u16
    }

    /// Parse a format name as used on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "int16" | "i16" | "16" => Some(PcmFormat::Int16),
            "int24" | "i24" | "24" => Some(PcmFormat::Int24),
            "float32" | "f32" | "32" => Some(PcmFormat::Float32),
            _ => None,
        }
    }

    /// Encode one sample (clamped to -1.0..=1.0) into `out`
    fn push_sample(self, sample: f64, out: &mut Vec<u8>) {
        let clamped = sample.clamp(-1.0, 1.0);
        match self {
            PcmFormat::Int16 => {
                let scaled = (clamped * 32767.0).round() as i16;
                out.extend_from_slice(&scaled.to_le_bytes());
            }
            PcmFormat::Int24 => {
                let scaled = (clamped * 8388607.0).round() as i32;
                out.extend_from_slice(&scaled.to_le_bytes()[..3]);
            }
            PcmFormat::Float32 => {
                out.extend_from_slice(&(clamped as f32).to_le_bytes());
            }
        }
    }
}

/// Raw PCM bytes with the metadata an encoder needs
#[derive(Debug, Clone, PartialEq)]
pub struct PcmStream {
    bytes: Vec<u8>,
    sample_rate: u32,
    format: PcmFormat,
    channels: u16,
}

impl PcmStream {
    /// Convert a signal to PCM bytes
    pub fn from_signal(signal: &Signal, format: PcmFormat) -> Self {
        let mut bytes = Vec::with_capacity(signal.len() * format.sample_width());
        for &sample in signal.samples() {
            format.push_sample(sample, &mut bytes);
        }
        Self {
            bytes,
            sample_rate: signal.sample_rate(),
            format,
            channels: signal.channels(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    /// Bytes per sample
    pub fn sample_width(&self) -> usize {
        self.format.sample_width()
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.bytes.len() / (self.sample_width() * self.channels as usize)
    }

    /// Decode the stream back into integer samples (Int16/Int24)
    pub fn int_samples(&self) -> impl Iterator<Item = i32> + '_ {
        let width = self.sample_width();
        self.bytes.chunks_exact(width).map(move |chunk| match width {
            2 => i16::from_le_bytes([chunk[0], chunk[1]]) as i32,
            // Sign-extend the packed 24-bit value
            _ => (i32::from_le_bytes([0, chunk[0], chunk[1], chunk[2]])) >> 8,
        })
    }

    /// Decode the stream back into float samples (Float32)
    pub fn float_samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }
}
