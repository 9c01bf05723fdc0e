//! Peak normalization

use crate::error::{NoiseError, Result};

/// Maximum absolute value of a sequence (0.0 when empty)
pub fn peak_amplitude(waveform: &[f64]) -> f64 {
    waveform.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Rescale a waveform so its peak absolute value is exactly 1.0
///
/// # Errors
/// * `DegenerateSignal` - If the waveform is empty, silent, or contains a non-finite peak
pub fn normalize_peak(waveform: &[f64]) -> Result<Vec<f64>> {
    if waveform.iter().any(|s| !s.is_finite()) {
        return Err(NoiseError::degenerate("normalize"));
    }
    let peak = peak_amplitude(waveform);
    if peak == 0.0 {
        return Err(NoiseError::degenerate("normalize"));
    }
    Ok(waveform.iter().map(|s| s / peak).collect())
}
