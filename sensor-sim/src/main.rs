use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sensor_sim::{run, FrameFormat, RunOptions, ShutdownFlag, SimConfig, SimSensors, Summary};

#[derive(Parser)]
#[command(
    name = "sensor-sim",
    version,
    about = "Print simulated accelerometer and rangefinder readings"
)]
struct Cli {
    /// RNG seed for reproducible readings (entropy-seeded when omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Delay between frames in milliseconds.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
    /// Stop after this many frames instead of running until interrupted.
    #[arg(long)]
    ticks: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FrameFormat::Text)]
    format: FrameFormat,
    /// Print every reading on its own line with a separator between frames.
    #[arg(long)]
    verbose_frame: bool,
    /// Integrate acceleration into a dead-reckoned position.
    #[arg(long)]
    track: bool,
    /// Integration time step in seconds (overrides the config file).
    #[arg(long)]
    dt: Option<f64>,
    /// Optional JSON config with walk, field, distance and dt settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write a JSON run summary here on exit.
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("using config {}", path.display());
            SimConfig::load(path)?
        }
        None => SimConfig::default(),
    };
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    config.validate().context("invalid configuration")?;

    let mut sensors = SimSensors::from_config(&config, cli.seed, cli.track)?;
    let shutdown = ShutdownFlag::install_ctrl_c()?;
    let options = RunOptions {
        interval: Duration::from_millis(cli.interval_ms),
        max_ticks: cli.ticks,
        format: cli.format,
        verbose: cli.verbose_frame,
    };

    match cli.seed {
        Some(seed) => log::info!("starting simulation with seed {seed}"),
        None => log::info!("starting simulation with entropy seed"),
    }
    log::info!("press Ctrl-C to stop");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run(
        &mut sensors,
        &options,
        &shutdown,
        &mut out,
        Summary::new(cli.seed),
    )?;
    log::info!(
        "{} frames, {} saturated acceleration samples",
        summary.ticks(),
        summary.saturated_samples()
    );

    if let Some(path) = &cli.summary_out {
        summary.write_json(path)?;
        log::info!("wrote summary to {}", path.display());
    }

    Ok(())
}
