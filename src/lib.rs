//! Umber - Colored Noise Synthesis
//!
//! Umber generates white and brown noise and renders it to audio files.
//!
//! # Pipeline
//!
//! - Signal generation: uniform white noise, or a Gaussian random walk for brown noise
//! - Spectral shaping: order-4 Butterworth low-pass, then peak normalization
//! - Output: PCM conversion and WAV encoding, written atomically

pub mod audio;
pub mod cli;
pub mod config;
pub mod dsp;
pub mod error;
pub mod noise;
pub mod render;

pub use audio::Signal;
pub use config::GeneratorConfig;
pub use error::{NoiseError, Result};
pub use noise::NoiseColor;
