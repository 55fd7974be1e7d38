//! Simulation configuration loaded from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sensors::{BoundedWalk, DeadReckoning, DistanceConfig, FieldConfig, WalkConfig, DEFAULT_DT};
use serde::{Deserialize, Serialize};

/// Every tunable of a run. Missing keys fall back to the module defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Accelerometer random walk.
    pub walk: WalkConfig,
    /// Magnetometer range.
    pub field: FieldConfig,
    /// Rangefinder range in centimetres.
    pub distance: DistanceConfig,
    /// Dead-reckoning time step in seconds.
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            walk: WalkConfig::default(),
            field: FieldConfig::default(),
            distance: DistanceConfig::default(),
            dt: DEFAULT_DT,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section, reporting the first failure.
    pub fn validate(&self) -> Result<()> {
        BoundedWalk::new(self.walk).context("walk config")?;
        self.distance.validate().context("distance config")?;
        DeadReckoning::new(self.dt).context("dt")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensors::ACCEL_BOUNDS;

    #[test]
    fn empty_object_uses_defaults() {
        let config: SimConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn partial_override() {
        let config: SimConfig =
            serde_json::from_str(r#"{"walk":{"max_step":0.5},"dt":0.1}"#).unwrap();
        assert_eq!(config.walk.bounds, ACCEL_BOUNDS);
        assert_eq!(config.walk.max_step, 0.5);
        assert_eq!(config.dt, 0.1);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_json::from_str::<SimConfig>(r#"{"speed":3}"#).is_err());
    }

    #[test]
    fn validate_rejects_bad_dt() {
        let config = SimConfig {
            dt: 0.0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("time step"));
    }

    #[test]
    fn validate_rejects_negative_distance() {
        let config: SimConfig =
            serde_json::from_str(r#"{"distance":{"bounds":{"lo":-5.0,"hi":5.0}}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_step_too_large_to_sample() {
        let config: SimConfig = serde_json::from_str(r#"{"walk":{"max_step":1e308}}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("invalid max step"));
    }

    #[test]
    fn rejects_field_bounds_too_wide_to_sample() {
        let json = r#"{"field":{"bounds":{"lo":-1e308,"hi":1e308}}}"#;
        let err = serde_json::from_str::<SimConfig>(json).unwrap_err();
        assert!(err.to_string().contains("invalid bounds"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SimConfig::load(Path::new("/nonexistent/sensor-sim.json")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
