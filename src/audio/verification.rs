//! Signal verification utilities
//!
//! Objective measurements of generated noise, used by the render report and
//! by tests that check spectral shape without listening.
//!
//! # Measurements
//! - RMS (Root Mean Square) level
//! - Peak level
//! - DC offset
//! - Mean absolute slope (sample-to-sample change, a roughness indicator)
//! - Spectral analysis (FFT)

use crate::audio::Signal;
use rustfft::{num_complex::Complex, FftPlanner};

/// Convert linear amplitude to decibels
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

/// Convert decibels to linear amplitude
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Summary measurements of a signal
#[derive(Debug, Clone)]
pub struct SignalAnalysis {
    /// RMS level in linear scale
    pub rms_linear: f64,
    /// RMS level in decibels (relative to full scale)
    pub rms_db: f64,
    /// Peak level in linear scale
    pub peak_linear: f64,
    /// Peak level in decibels
    pub peak_db: f64,
    /// DC offset (mean of all samples)
    pub dc_offset: f64,
    /// Mean absolute sample-to-sample difference
    pub mean_abs_slope: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Sample rate
    pub sample_rate: u32,
}

impl SignalAnalysis {
    /// Analyze a signal and return its measurements
    pub fn analyze(signal: &Signal) -> Self {
        let samples = signal.samples();
        let rms_linear = calculate_rms(samples);
        let peak_linear = calculate_peak(samples);

        Self {
            rms_linear,
            rms_db: calculate_rms_db(samples),
            peak_linear,
            peak_db: linear_to_db(peak_linear),
            dc_offset: calculate_dc_offset(samples),
            mean_abs_slope: mean_abs_slope(samples),
            duration: signal.duration(),
            sample_rate: signal.sample_rate(),
        }
    }

    /// Generate a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Duration: {:.2}s @ {} Hz\n\
             RMS: {:.1} dBFS | Peak: {:.1} dBFS | DC Offset: {:.4}",
            self.duration, self.sample_rate, self.rms_db, self.peak_db, self.dc_offset
        )
    }
}

/// Calculate RMS (Root Mean Square) of samples
pub fn calculate_rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples.iter().map(|s| s * s).sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Calculate RMS in decibels
pub fn calculate_rms_db(samples: &[f64]) -> f64 {
    linear_to_db(calculate_rms(samples))
}

/// Calculate peak (maximum absolute value) of samples
pub fn calculate_peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Calculate DC offset (mean of samples)
pub fn calculate_dc_offset(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean absolute difference between consecutive samples
pub fn mean_abs_slope(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let total: f64 = samples.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    total / (samples.len() - 1) as f64
}

/// Magnitude of one FFT bin
#[derive(Debug, Clone)]
pub struct SpectralBin {
    pub frequency: f64,
    pub magnitude_db: f64,
}

/// Perform FFT analysis over the first `fft_size` samples
pub fn analyze_spectrum(samples: &[f64], sample_rate: u32, fft_size: usize) -> Vec<SpectralBin> {
    if fft_size == 0 || samples.len() < fft_size {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);

    // Hann window
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(fft_size)
        .enumerate()
        .map(|(i, &s)| {
            let window =
                0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / fft_size as f64).cos());
            Complex::new(s * window, 0.0)
        })
        .collect();

    fft.process(&mut buffer);

    let bin_hz = sample_rate as f64 / fft_size as f64;

    buffer
        .iter()
        .take(fft_size / 2)
        .enumerate()
        .map(|(i, c)| SpectralBin {
            frequency: i as f64 * bin_hz,
            magnitude_db: linear_to_db(c.norm() / (fft_size as f64 / 2.0)),
        })
        .collect()
}

/// Get magnitude at a specific frequency (nearest bin)
pub fn magnitude_at_frequency(
    samples: &[f64],
    sample_rate: u32,
    frequency: f64,
    fft_size: usize,
) -> f64 {
    let spectrum = analyze_spectrum(samples, sample_rate, fft_size);
    let bin_hz = sample_rate as f64 / fft_size as f64;
    let target_bin = (frequency / bin_hz).round() as usize;

    spectrum
        .get(target_bin)
        .map(|bin| bin.magnitude_db)
        .unwrap_or(f64::NEG_INFINITY)
}

/// Calculate spectral centroid (brightness indicator) in Hz
pub fn calculate_spectral_centroid(samples: &[f64], sample_rate: u32, fft_size: usize) -> f64 {
    let spectrum = analyze_spectrum(samples, sample_rate, fft_size);

    let mut weighted_sum = 0.0;
    let mut magnitude_sum = 0.0;

    for bin in &spectrum {
        let linear_mag = db_to_linear(bin.magnitude_db);
        weighted_sum += bin.frequency * linear_mag;
        magnitude_sum += linear_mag;
    }

    if magnitude_sum > 0.0 {
        weighted_sum / magnitude_sum
    } else {
        0.0
    }
}
