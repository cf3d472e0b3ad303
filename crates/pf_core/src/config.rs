//! Analysis Configuration
//!
//! Tunable thresholds for the invasion aggregator. Defaults reproduce the
//! published invasion metrics; a YAML file or environment variables can
//! override them.
//!
//! ## Environment Variables
//!
//! - `PF_ANALYSIS_CONFIG`: path to a YAML file with an `AnalysisConfig`
//! - `PF_MIN_PEAK_INTERVAL_S`: override `invasion.min_peak_interval_s`

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::warn;

/// Default minimum time from action start to peak weight, in seconds,
/// before an invasion speed sample is recorded.
pub const DEFAULT_MIN_PEAK_INTERVAL_S: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub invasion: InvasionThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvasionThresholds {
    /// Speed samples need the peak strictly later than this (seconds).
    pub min_peak_interval_s: f64,
}

impl Default for InvasionThresholds {
    fn default() -> Self {
        Self {
            min_peak_interval_s: DEFAULT_MIN_PEAK_INTERVAL_S,
        }
    }
}

impl AnalysisConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Load from `PF_ANALYSIS_CONFIG` and `PF_MIN_PEAK_INTERVAL_S`, falling
    /// back to defaults. Unreadable or invalid settings are logged and
    /// ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var("PF_ANALYSIS_CONFIG") {
            Ok(path) => Self::from_path(Path::new(&path)).unwrap_or_else(|err| {
                warn!("ignoring PF_ANALYSIS_CONFIG: {}", err);
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(raw) = env::var("PF_MIN_PEAK_INTERVAL_S") {
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {
                    config.invasion.min_peak_interval_s = value;
                }
                _ => warn!("ignoring PF_MIN_PEAK_INTERVAL_S={:?}", raw),
            }
        }
        config
    }

    fn validate(&self) -> Result<()> {
        let interval = self.invasion.min_peak_interval_s;
        if !interval.is_finite() || interval < 0.0 {
            return Err(DataError::InvalidConfig(format!(
                "invasion.min_peak_interval_s must be a non-negative number, got {}",
                interval
            )));
        }
        Ok(())
    }
}
