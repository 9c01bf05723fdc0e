//! Umber CLI - Colored Noise Renderer
//!
//! Renders one white or brown noise file per invocation.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use umber::cli::{commands, Cli};
use umber::NoiseError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Umber noise renderer v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            if let Some(noise_err) = err.downcast_ref::<NoiseError>() {
                eprintln!("[{}] {}", noise_err.error_code(), noise_err.recovery_hint());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    commands::generate(cli).context("Noise render failed")?;
    Ok(())
}
