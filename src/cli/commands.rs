//! CLI Command Implementations
//!
//! Turns parsed flags into a configuration and runs the render.

use log::info;

use super::Cli;
use crate::audio::PcmFormat;
use crate::config::GeneratorConfig;
use crate::error::{NoiseError, Result};
use crate::render::{render, RenderReport};

/// Build the effective configuration: defaults, then `--config`, then flags
pub fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(color) = &cli.color {
        config.color = color.parse()?;
    }
    if let Some(duration) = cli.duration {
        config.duration_secs = duration;
    }
    if let Some(sample_rate) = cli.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(cutoff) = cli.cutoff {
        config.cutoff_hz = cutoff;
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(format) = &cli.format {
        config.pcm_format = PcmFormat::from_name(format)
            .ok_or_else(|| NoiseError::invalid("format", format, "int16, int24 or float32"))?;
    }

    Ok(config)
}

/// Render one file and print its summary.
pub fn generate(cli: &Cli) -> Result<RenderReport> {
    let config = resolve_config(cli)?;
    let report = render(&config)?;

    if let Some(report_path) = &cli.report {
        report.save(report_path)?;
        info!("Report saved: {}", report_path.display());
    }

    println!("{}", report.summary());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseColor;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_flags() {
        let config = resolve_config(&Cli::default()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("noise.json");
        std::fs::write(
            &config_path,
            r#"{"color": "white", "sample_rate": 22050, "duration_secs": 3.0}"#,
        )
        .unwrap();

        let cli = Cli {
            config: Some(config_path),
            duration: Some(1.5),
            format: Some("float32".to_string()),
            ..Cli::default()
        };
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.color, NoiseColor::White);
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.duration_secs, 1.5);
        assert_eq!(config.pcm_format, PcmFormat::Float32);
    }

    #[test]
    fn test_bad_flag_values() {
        let cli = Cli {
            color: Some("pink".to_string()),
            ..Cli::default()
        };
        assert!(matches!(
            resolve_config(&cli),
            Err(NoiseError::InvalidArgument { .. })
        ));

        let cli = Cli {
            format: Some("mp3".to_string()),
            ..Cli::default()
        };
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_generate_writes_file_and_report() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("white.wav");
        let report_path = dir.path().join("white.json");

        let cli = Cli {
            color: Some("white".to_string()),
            duration: Some(0.25),
            sample_rate: Some(8000),
            output: Some(output.clone()),
            seed: Some(1),
            report: Some(report_path.clone()),
            ..Cli::default()
        };
        let report = generate(&cli).unwrap();

        assert_eq!(report.output_path, PathBuf::from(&output));
        assert_eq!(report.num_samples, 2000);
        assert!(output.exists());
        assert!(report_path.exists());
    }
}
