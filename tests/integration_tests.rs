//! Integration Tests
//!
//! End-to-end tests for the Umber noise rendering pipeline.

use hound::WavReader;
use tempfile::tempdir;
use umber::audio::{PcmFormat, Signal};
use umber::noise::{generate, generate_brown_noise, generate_white_noise, seeded_rng};
use umber::render::{file_sha256, render};
use umber::{GeneratorConfig, NoiseColor, NoiseError};

// === Generator Scenarios ===

#[test]
fn test_white_noise_one_second_at_8k() {
    let mut rng = seeded_rng(Some(2024));
    let noise = generate_white_noise(1.0, 8000, &mut rng).unwrap();

    assert_eq!(noise.len(), 8000);
    assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
}

#[test]
fn test_brown_noise_two_seconds_at_44k() {
    let mut rng = seeded_rng(Some(2024));
    let noise = generate_brown_noise(2.0, 44100, 1000.0, &mut rng).unwrap();

    assert_eq!(noise.len(), 88200);
    let peak = noise.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
    assert!((peak - 1.0).abs() < 1e-9);
}

#[test]
fn test_lengths_follow_truncated_product() {
    let cases = [(1.0, 8000), (0.3, 44100), (2.75, 22050), (0.001, 48000), (3.3, 11025)];
    let mut rng = seeded_rng(Some(1));

    for (duration, rate) in cases {
        let expected = (duration * rate as f64).floor() as usize;
        let white = generate_white_noise(duration, rate, &mut rng).unwrap();
        let brown = generate_brown_noise(duration, rate, 1000.0, &mut rng).unwrap();
        assert_eq!(white.len(), expected, "white {}s @ {} Hz", duration, rate);
        assert_eq!(brown.len(), expected, "brown {}s @ {} Hz", duration, rate);
    }
}

#[test]
fn test_unseeded_generation_works() {
    let mut rng = seeded_rng(None);
    let signal = generate(NoiseColor::Brown, 0.2, 44100, 1000.0, &mut rng).unwrap();
    assert_eq!(signal.len(), 8820);
}

// === Full Pipeline Tests ===

#[test]
fn test_render_default_brown_to_wav() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        duration_secs: 1.0,
        output_path: dir.path().join("dist").join("brown.wav"),
        seed: Some(7),
        ..GeneratorConfig::default()
    };

    let report = render(&config).unwrap();

    let mut reader = WavReader::open(&config.output_path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration(), 44100);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert_eq!(peak, 32767);

    assert_eq!(report.num_samples, 44100);
    assert_eq!(report.sha256, file_sha256(&config.output_path).unwrap());
}

#[test]
fn test_render_white_float_round_trip() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        color: NoiseColor::White,
        duration_secs: 0.5,
        sample_rate: 8000,
        output_path: dir.path().join("white.wav"),
        seed: Some(99),
        pcm_format: PcmFormat::Float32,
        ..GeneratorConfig::default()
    };

    render(&config).unwrap();

    let expected = generate(
        NoiseColor::White,
        0.5,
        8000,
        config.cutoff_hz,
        &mut seeded_rng(Some(99)),
    )
    .unwrap();

    let mut reader = WavReader::open(&config.output_path).unwrap();
    let loaded: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
    assert_eq!(loaded.len(), expected.len());
    for (got, want) in loaded.iter().zip(expected.samples()) {
        assert!((*got as f64 - want).abs() < 1e-6);
    }
}

#[test]
fn test_mp3_output_rejected_without_writing() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        duration_secs: 0.1,
        output_path: dir.path().join("brown.mp3"),
        ..GeneratorConfig::default()
    };

    let result = render(&config);

    assert!(matches!(result, Err(NoiseError::UnsupportedFormat { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_cutoff_rejected_without_writing() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        duration_secs: 0.1,
        cutoff_hz: 30000.0,
        output_path: dir.path().join("brown.wav"),
        ..GeneratorConfig::default()
    };

    let result = render(&config);

    assert!(matches!(result, Err(NoiseError::InvalidArgument { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_signal_duration_matches_config() {
    let mut rng = seeded_rng(Some(5));
    let signal: Signal = generate(NoiseColor::White, 1.25, 16000, 1000.0, &mut rng).unwrap();
    assert!((signal.duration() - 1.25).abs() < 1e-9);
    assert_eq!(signal.channels(), 1);
}
