use std::io;
use std::process;

use anyhow::{Context, Result};
use latency::{sensor, serial, Correlator, LineSettings, SystemClock};
use renderer::{Renderer, RendererConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::hook::MeasurementHook;

/// Opens the sensor, starts the reader thread and runs the window until it closes.
///
/// Never returns if the sensor link fails after start-up: the reader thread
/// logs the failure and exits the process.
pub fn run(cli: Cli) -> Result<()> {
    let settings = LineSettings::default();
    let port = serial::open(&cli.port, &settings)?;

    let (sender, receiver) = crossbeam_channel::unbounded();
    sensor::spawn(port, sender, SystemClock::new(), |err| {
        tracing::error!(error = %err, "sensor link lost; exiting");
        process::exit(1);
    })
    .context("failed to start sensor reader thread")?;

    let hook = MeasurementHook::new(Correlator::new(receiver), SystemClock::new(), io::stdout());
    let mut renderer = Renderer::new(RendererConfig::default());
    tracing::info!(
        port = %cli.port,
        title = %renderer.config().title,
        "starting display latency measurement"
    );
    renderer.run(hook)
}

/// Diagnostics go to stderr; stdout is reserved for measurement lines.
pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
