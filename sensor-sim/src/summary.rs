//! Run summary written at the end of a simulation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sensors::Axes;
use serde::Serialize;

use crate::format::Frame;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    seed: Option<u64>,
    ticks: u64,
    interrupted: bool,
    accel_min: Option<Axes>,
    accel_max: Option<Axes>,
    saturated_samples: u64,
    distance_min_cm: Option<f64>,
    distance_avg_cm: Option<f64>,
    distance_max_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_position: Option<Axes>,
    #[serde(skip)]
    distance_total_cm: f64,
}

impl Summary {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub const fn saturated_samples(&self) -> u64 {
        self.saturated_samples
    }

    pub const fn accel_range(&self) -> Option<(Axes, Axes)> {
        match (self.accel_min, self.accel_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub const fn distance_avg_cm(&self) -> Option<f64> {
        self.distance_avg_cm
    }

    pub const fn final_position(&self) -> Option<Axes> {
        self.final_position
    }

    pub fn push(&mut self, frame: &Frame) {
        self.ticks += 1;
        self.saturated_samples += u64::from(frame.saturated_axes);

        let accel = frame.acceleration;
        let min = self.accel_min.unwrap_or(accel);
        let max = self.accel_max.unwrap_or(accel);
        self.accel_min = Some(min.zip_with(accel, f64::min));
        self.accel_max = Some(max.zip_with(accel, f64::max));

        let distance = frame.distance_cm;
        self.distance_total_cm += distance;
        let lo = self.distance_min_cm.unwrap_or(distance);
        let hi = self.distance_max_cm.unwrap_or(distance);
        self.distance_min_cm = Some(lo.min(distance));
        self.distance_max_cm = Some(hi.max(distance));

        if frame.position.is_some() {
            self.final_position = frame.position;
        }
    }

    pub fn finalize(&mut self, interrupted: bool) {
        self.interrupted = interrupted;
        if self.ticks > 0 {
            #[allow(clippy::cast_precision_loss)]
            let ticks = self.ticks as f64;
            self.distance_avg_cm = Some(self.distance_total_cm / ticks);
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).context("serialize summary")?;
        fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tick: u64, accel: Axes, distance_cm: f64, saturated_axes: u8) -> Frame {
        Frame {
            tick,
            acceleration: accel,
            field: Axes::ZERO,
            distance_cm,
            position: None,
            saturated_axes,
        }
    }

    #[test]
    fn empty_summary_has_no_ranges() {
        let mut summary = Summary::new(Some(1));
        summary.finalize(false);
        assert_eq!(summary.ticks(), 0);
        assert!(summary.accel_range().is_none());
        assert!(summary.distance_avg_cm().is_none());
    }

    #[test]
    fn tracks_ranges_and_average() {
        let mut summary = Summary::new(None);
        summary.push(&frame(1, Axes::new(1.0, -2.0, 10.0), 100.0, 1));
        summary.push(&frame(2, Axes::new(-1.0, 3.0, 5.0), 300.0, 0));
        summary.finalize(true);

        let (min, max) = summary.accel_range().unwrap();
        assert_eq!(min, Axes::new(-1.0, -2.0, 5.0));
        assert_eq!(max, Axes::new(1.0, 3.0, 10.0));
        assert_eq!(summary.distance_avg_cm(), Some(200.0));
        assert_eq!(summary.saturated_samples(), 1);
        assert!(summary.interrupted());
    }

    #[test]
    fn keeps_last_position() {
        let mut summary = Summary::new(None);
        let mut tracked = frame(1, Axes::ZERO, 10.0, 0);
        tracked.position = Some(Axes::splat(4.0));
        summary.push(&tracked);
        assert_eq!(summary.final_position(), Some(Axes::splat(4.0)));
    }

    #[test]
    fn serializes_without_running_total() {
        let mut summary = Summary::new(Some(7));
        summary.push(&frame(1, Axes::ZERO, 50.0, 0));
        summary.finalize(false);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["seed"], 7);
        assert_eq!(value["ticks"], 1);
        assert!(value.get("distance_total_cm").is_none());
        assert!(value.get("final_position").is_none());
    }
}
