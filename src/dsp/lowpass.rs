//! Low-pass spectral shaping
//!
//! Validates the cutoff against the Nyquist frequency, designs an order-4
//! Butterworth filter and runs it over the waveform.

use super::{butterworth_sections, sosfilt, SecondOrderSections};
use crate::error::{NoiseError, Result};
use log::debug;

/// Order of the low-pass filter used for spectral shaping
pub const FILTER_ORDER: usize = 4;

/// Nyquist frequency for a sample rate
pub fn nyquist(sample_rate: u32) -> f64 {
    0.5 * sample_rate as f64
}

/// Check that a cutoff can be realized at the given sample rate
pub fn validate_cutoff(cutoff_freq: f64, sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(NoiseError::invalid("sample_rate", sample_rate, "> 0 Hz"));
    }
    let nyquist_freq = nyquist(sample_rate);
    if !cutoff_freq.is_finite() || cutoff_freq <= 0.0 || cutoff_freq >= nyquist_freq {
        return Err(NoiseError::invalid(
            "cutoff_freq",
            cutoff_freq,
            &format!("between 0 and {} Hz (Nyquist), exclusive", nyquist_freq),
        ));
    }
    Ok(())
}

/// Design the low-pass filter for a cutoff in Hz
pub fn design_low_pass(cutoff_freq: f64, sample_rate: u32) -> Result<SecondOrderSections> {
    validate_cutoff(cutoff_freq, sample_rate)?;
    butterworth_sections(FILTER_ORDER, cutoff_freq / nyquist(sample_rate))
}

/// Apply a low-pass filter to a waveform
///
/// The output has the same length as the input and is not normalized.
///
/// # Errors
/// * `InvalidArgument` - If the waveform is empty, the sample rate is zero,
///   or the cutoff is not strictly between 0 Hz and Nyquist
pub fn apply_low_pass_filter(
    waveform: &[f64],
    cutoff_freq: f64,
    sample_rate: u32,
) -> Result<Vec<f64>> {
    if waveform.is_empty() {
        return Err(NoiseError::invalid("waveform", "[]", "at least one sample"));
    }
    let sections = design_low_pass(cutoff_freq, sample_rate)?;
    debug!(
        "Low-pass filtering {} samples at {} Hz (sample rate {} Hz)",
        waveform.len(),
        cutoff_freq,
        sample_rate
    );
    Ok(sosfilt(&sections, waveform))
}
