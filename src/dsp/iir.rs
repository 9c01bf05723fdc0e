//! IIR filter application
//!
//! Runs a designed filter over a sample sequence with a transposed
//! direct-form II structure, starting from zero state. A cascade of
//! sections keeps one state per section and feeds each sample through
//! them in order.

use super::{FilterCoefficients, SecondOrderSections};

/// Transposed direct-form II filter state
#[derive(Debug, Clone)]
struct DirectFormState {
    b: Vec<f64>,
    a: Vec<f64>,
    z: Vec<f64>,
}

impl DirectFormState {
    /// Build state with coefficients normalized by a[0]
    fn new(coefficients: &FilterCoefficients) -> Self {
        let a0 = coefficients.a()[0];
        let b: Vec<f64> = coefficients.b().iter().map(|c| c / a0).collect();
        let a: Vec<f64> = coefficients.a().iter().map(|c| c / a0).collect();
        let z = vec![0.0; b.len() - 1];
        Self { b, a, z }
    }

    /// Process a single sample
    fn process(&mut self, input: f64) -> f64 {
        let output = self.b[0] * input + self.z.first().copied().unwrap_or(0.0);

        let last = self.z.len();
        for i in 0..last {
            let carried = if i + 1 < last { self.z[i + 1] } else { 0.0 };
            self.z[i] = self.b[i + 1] * input + carried - self.a[i + 1] * output;
        }

        output
    }
}

/// Filter a waveform with the given coefficients
///
/// Causal, single pass, zero initial conditions. The output has the same
/// length as the input.
pub fn lfilter(coefficients: &FilterCoefficients, waveform: &[f64]) -> Vec<f64> {
    let mut state = DirectFormState::new(coefficients);
    waveform.iter().map(|&x| state.process(x)).collect()
}

/// Filter a waveform with a cascade of sections
///
/// Causal, single pass, zero initial conditions in every section. The output
/// has the same length as the input.
pub fn sosfilt(sections: &SecondOrderSections, waveform: &[f64]) -> Vec<f64> {
    let mut states: Vec<DirectFormState> = sections
        .sections()
        .iter()
        .map(DirectFormState::new)
        .collect();

    waveform
        .iter()
        .map(|&x| states.iter_mut().fold(x, |sample, state| state.process(sample)))
        .collect()
}
