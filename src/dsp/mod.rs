//! Spectral shaping
//!
//! Filter design and application are kept separate so coefficients can be
//! checked against reference values independently of any signal:
//! - `butterworth_sections`: (order, normalized cutoff) -> second-order sections
//! - `butterworth_lowpass`: the same design as one transfer function
//! - `sosfilt` / `lfilter`: (sections or coefficients, waveform) -> waveform
//! - `apply_low_pass_filter`: the validated Hz-level entry point
//! - `normalize_peak`: rescale to a peak of exactly 1.0

mod butterworth;
mod iir;
mod lowpass;
mod normalize;

pub use butterworth::{
    butterworth_lowpass, butterworth_sections, FilterCoefficients, SecondOrderSections,
};
pub use iir::{lfilter, sosfilt};
pub use lowpass::{apply_low_pass_filter, design_low_pass, nyquist, validate_cutoff, FILTER_ORDER};
pub use normalize::{normalize_peak, peak_amplitude};
