//! Butterworth low-pass filter design
//!
//! Digital coefficients are obtained from the analog Butterworth prototype
//! through the bilinear transform, with the cutoff pre-warped so the -3 dB
//! point lands exactly on the requested frequency.
//!
//! The design is produced as a cascade of second-order sections, one per
//! conjugate pole pair (plus a first-order section for odd orders). Each
//! section has its zeros at z = -1 and unity gain at DC. Filtering runs on
//! the sections; the expanded single polynomial is only accurate well above
//! DC and serves reference comparisons.
//!
//! Transfer function of one section:
//! H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)

use crate::error::{NoiseError, Result};
use log::debug;
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Sampling frequency used for the bilinear transform (normalized, Nyquist = 1)
const BILINEAR_FS: f64 = 2.0;

/// IIR filter coefficients
///
/// `b` is the numerator (feed-forward) and `a` the denominator (feedback).
/// Both have the same length and `a[0]` is never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl FilterCoefficients {
    /// Create coefficients from numerator and denominator sequences
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() || b.len() != a.len() {
            return Err(NoiseError::invalid(
                "coefficients",
                format!("b.len()={}, a.len()={}", b.len(), a.len()),
                "two non-empty sequences of equal length",
            ));
        }
        if a[0] == 0.0 || !a[0].is_finite() {
            return Err(NoiseError::invalid("a[0]", a[0], "finite and non-zero"));
        }
        Ok(Self { b, a })
    }

    /// Numerator coefficients
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Denominator coefficients
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.a.len() - 1
    }

    /// Gain at 0 Hz
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// Magnitude response at a frequency given as a fraction of Nyquist (0..=1)
    pub fn magnitude_at(&self, normalized_freq: f64) -> f64 {
        let z_inv = Complex::from_polar(1.0, -PI * normalized_freq);
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .rev()
                .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
        };
        (eval(&self.b) / eval(&self.a)).norm()
    }
}

/// A cascade of low-order filter sections, applied one after another
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderSections {
    sections: Vec<FilterCoefficients>,
}

impl SecondOrderSections {
    /// Create a cascade from one or more sections
    pub fn new(sections: Vec<FilterCoefficients>) -> Result<Self> {
        if sections.is_empty() {
            return Err(NoiseError::invalid("sections", "[]", "at least one section"));
        }
        Ok(Self { sections })
    }

    /// Sections in processing order
    pub fn sections(&self) -> &[FilterCoefficients] {
        &self.sections
    }

    /// Total filter order
    pub fn order(&self) -> usize {
        self.sections.iter().map(FilterCoefficients::order).sum()
    }

    /// Gain at 0 Hz
    pub fn dc_gain(&self) -> f64 {
        self.sections.iter().map(FilterCoefficients::dc_gain).product()
    }

    /// Magnitude response at a frequency given as a fraction of Nyquist (0..=1)
    pub fn magnitude_at(&self, normalized_freq: f64) -> f64 {
        self.sections
            .iter()
            .map(|s| s.magnitude_at(normalized_freq))
            .product()
    }

    /// Multiply the sections out into a single transfer function
    pub fn to_transfer_function(&self) -> Result<FilterCoefficients> {
        let mut b = vec![1.0];
        let mut a = vec![1.0];
        for section in &self.sections {
            b = convolve(&b, section.b());
            a = convolve(&a, section.a());
        }
        FilterCoefficients::new(b, a)
    }
}

/// Design a digital Butterworth low-pass filter as second-order sections
///
/// # Arguments
/// * `order` - Filter order (number of poles), at least 1
/// * `normalized_cutoff` - Cutoff as a fraction of Nyquist, strictly inside (0, 1)
///
/// # Errors
/// * `InvalidArgument` - If the order is zero or the cutoff is outside (0, 1)
pub fn butterworth_sections(order: usize, normalized_cutoff: f64) -> Result<SecondOrderSections> {
    if order == 0 {
        return Err(NoiseError::invalid("order", order, ">= 1"));
    }
    if !normalized_cutoff.is_finite() || normalized_cutoff <= 0.0 || normalized_cutoff >= 1.0 {
        return Err(NoiseError::invalid(
            "normalized_cutoff",
            normalized_cutoff,
            "strictly between 0 and 1 (fraction of Nyquist)",
        ));
    }

    let n = order as f64;
    let fs2 = Complex::new(2.0 * BILINEAR_FS, 0.0);
    let warped = 2.0 * BILINEAR_FS * (PI * normalized_cutoff / BILINEAR_FS).tan();

    // Analog prototype pole k on the left half of the unit circle, scaled to the
    // warped cutoff, then mapped through the bilinear transform. Poles k and
    // order-1-k are conjugates.
    let digital_pole = |k: usize| {
        let m = 1.0 - n + 2.0 * k as f64;
        let p = -Complex::from_polar(1.0, PI * m / (2.0 * n)) * warped;
        (fs2 + p) / (fs2 - p)
    };

    let mut sections = Vec::with_capacity((order + 1) / 2);
    for k in 0..order / 2 {
        let pole = digital_pole(k);
        let a1 = -2.0 * pole.re;
        let a2 = pole.norm_sqr();
        let gain = (1.0 + a1 + a2) / 4.0;
        sections.push(FilterCoefficients::new(
            vec![gain, 2.0 * gain, gain],
            vec![1.0, a1, a2],
        )?);
    }
    if order % 2 == 1 {
        let a1 = -digital_pole(order / 2).re;
        let gain = (1.0 + a1) / 2.0;
        sections.push(FilterCoefficients::new(vec![gain, gain], vec![1.0, a1])?);
    }

    debug!(
        "Designed order-{} Butterworth low-pass at {:.6} x Nyquist ({} sections)",
        order,
        normalized_cutoff,
        sections.len()
    );

    SecondOrderSections::new(sections)
}

/// Design a digital Butterworth low-pass filter as a single transfer function
///
/// Same arguments and errors as [`butterworth_sections`]. Prefer the sections
/// for filtering; at cutoffs far below Nyquist the expanded polynomial is
/// numerically fragile.
pub fn butterworth_lowpass(order: usize, normalized_cutoff: f64) -> Result<FilterCoefficients> {
    butterworth_sections(order, normalized_cutoff)?.to_transfer_function()
}

/// Polynomial product, coefficients highest power first
fn convolve(x: &[f64], y: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; x.len() + y.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &yj) in y.iter().enumerate() {
            out[i + j] += xi * yj;
        }
    }
    out
}
