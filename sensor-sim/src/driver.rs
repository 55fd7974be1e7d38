//! Paced sampling loop.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand_chacha::ChaCha8Rng;
use sensors::{
    DeadReckoning, DistanceSensor, ImuSimulator, RngSource, UltrasonicSimulator, UniformSource,
};

use crate::config::SimConfig;
use crate::format::{write_frame, Frame, FrameFormat};
use crate::seed::derive_seed;
use crate::signal::ShutdownFlag;
use crate::summary::Summary;

/// Longest uninterrupted sleep while pacing; bounds interrupt latency.
const PACE_SLICE: Duration = Duration::from_millis(50);

/// Printed when the loop ends because of an interrupt.
pub const STOP_MESSAGE: &str = "simulation stopped by user";

/// Random source used by sensors built from a [`SimConfig`].
pub type DefaultSource = RngSource<ChaCha8Rng>;

/// The sensors one loop iteration reads from.
#[derive(Debug)]
pub struct SimSensors<S, D> {
    pub imu: ImuSimulator<S>,
    pub rangefinder: D,
    /// Integrates acceleration into position when present.
    pub tracker: Option<DeadReckoning>,
}

impl SimSensors<DefaultSource, UltrasonicSimulator<DefaultSource>> {
    /// Builds the sensors described by `config`.
    ///
    /// With a seed every sensor gets a derived, reproducible stream; without
    /// one each is seeded from OS entropy.
    pub fn from_config(config: &SimConfig, seed: Option<u64>, track: bool) -> Result<Self> {
        let source = |key: &str| {
            seed.map_or_else(DefaultSource::from_os_rng, |seed| {
                DefaultSource::seeded(derive_seed(seed, key))
            })
        };
        let imu = ImuSimulator::new(config.walk, config.field, source("imu"))
            .context("build accelerometer")?;
        let rangefinder = UltrasonicSimulator::new(config.distance, source("rangefinder"))
            .context("build rangefinder")?;
        let tracker = track
            .then(|| DeadReckoning::new(config.dt))
            .transpose()
            .context("build tracker")?;
        Ok(Self {
            imu,
            rangefinder,
            tracker,
        })
    }
}

impl<S: UniformSource, D: DistanceSensor> SimSensors<S, D> {
    /// Reads every sensor once.
    pub fn sample(&mut self, tick: u64) -> Frame {
        let bounds = self.imu.walk().config().bounds;
        let accel = self.imu.next_acceleration_step();
        let field = self.imu.next_field_sample();
        let distance_cm = self.rangefinder.measure_distance();
        let position = self
            .tracker
            .as_mut()
            .map(|tracker| tracker.integrate(accel.sample));
        let saturated_axes = accel
            .saturated(&bounds)
            .into_iter()
            .filter(|pinned| *pinned)
            .count();
        Frame {
            tick,
            acceleration: accel.sample,
            field,
            distance_cm,
            position,
            saturated_axes: u8::try_from(saturated_axes).unwrap_or(u8::MAX),
        }
    }
}

/// Loop settings that do not belong to any sensor.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Delay between frames.
    pub interval: Duration,
    /// Stop after this many frames; run until interrupted when `None`.
    pub max_ticks: Option<u64>,
    pub format: FrameFormat,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_ticks: None,
            format: FrameFormat::Text,
            verbose: false,
        }
    }
}

/// Samples, prints and paces until `shutdown` is raised or the tick limit
/// is reached.
///
/// An interrupt is a normal way to finish: it is logged, reported in the
/// summary and, for text output, announced on `out`.
pub fn run<S, D, W>(
    sensors: &mut SimSensors<S, D>,
    options: &RunOptions,
    shutdown: &ShutdownFlag,
    out: &mut W,
    mut summary: Summary,
) -> Result<Summary>
where
    S: UniformSource,
    D: DistanceSensor,
    W: Write,
{
    let mut tick = 0u64;
    let interrupted = loop {
        if shutdown.is_requested() {
            break true;
        }
        if options.max_ticks.is_some_and(|max| tick >= max) {
            break false;
        }
        tick += 1;

        let frame = sensors.sample(tick);
        write_frame(out, &frame, options.format, options.verbose)
            .with_context(|| format!("write frame {tick}"))?;
        out.flush().context("flush output")?;
        summary.push(&frame);
        log::trace!("frame {tick}: {frame:?}");

        if options.max_ticks.is_some_and(|max| tick >= max) {
            break false;
        }
        pace(options.interval, shutdown);
    };

    if interrupted {
        log::info!("interrupted after {tick} frames");
        if options.format == FrameFormat::Text {
            writeln!(out, "{STOP_MESSAGE}").context("write stop message")?;
        }
    }
    summary.finalize(interrupted);
    Ok(summary)
}

/// Sleeps for `interval`, returning early once shutdown is requested.
fn pace(interval: Duration, shutdown: &ShutdownFlag) {
    let deadline = Instant::now() + interval;
    loop {
        if shutdown.is_requested() {
            return;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(PACE_SLICE));
    }
}
