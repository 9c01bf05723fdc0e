//! CLI Module
//!
//! Command-line interface for rendering one noise file per invocation.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

/// Umber - colored noise renderer
#[derive(Parser, Debug, Default)]
#[command(name = "umber")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON configuration file (flags below override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Noise color: white or brown
    #[arg(long)]
    pub color: Option<String>,

    /// Duration in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// Low-pass cutoff for brown noise in Hz
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Output file (.wav)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sample format: int16, int24 or float32
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write a JSON report of the render to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}
