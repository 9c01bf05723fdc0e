//! Signal container, PCM conversion and file output
//!
//! This module is the boundary between generated samples and the encoder.

mod encoder;
mod pcm;
mod signal;
pub mod verification;

pub use encoder::{encoder_for_path, partial_path, write_atomically, AudioEncoder, WavEncoder};
pub use pcm::{PcmFormat, PcmStream};
pub use signal::Signal;
pub use verification::SignalAnalysis;
