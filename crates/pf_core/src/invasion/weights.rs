//! # Field Weights
//!
//! Scoring-danger weight of a pitch location. The invasion aggregator only
//! sees the [`FieldWeight`] trait, so the fixed heuristic table can be swapped
//! for a data-driven zone table (or any closure) without touching the
//! segmentation or aggregation code.
//!
//! Coordinates are pitch percent with `x` measured from the team's own goal.

use crate::error::{DataError, Result};
use crate::events::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pure mapping from a pitch location to a danger weight.
pub trait FieldWeight {
    fn weight(&self, position: Position) -> f64;
}

impl<F> FieldWeight for F
where
    F: Fn(Position) -> f64,
{
    fn weight(&self, position: Position) -> f64 {
        self(position)
    }
}

/// Fixed rectangular zones of the attacking third.
///
/// | zone                                   | weight |
/// |----------------------------------------|--------|
/// | 65 <= x <= 75                          | 0.01   |
/// | 75 < x <= 85, 15 <= y <= 85            | 0.5    |
/// | x > 85, 15 <= y <= 25 or 75 <= y <= 85 | 0.5    |
/// | x > 75, y <= 15 or y >= 85             | 0.02   |
/// | x > 85, 40 <= y <= 60                  | 1.0    |
/// | x > 85, 25 <= y <= 40 or 60 <= y <= 85 | 0.8    |
/// | elsewhere                              | 0.0    |
///
/// Rows are checked top to bottom; the first match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicWeights;

impl FieldWeight for HeuristicWeights {
    fn weight(&self, position: Position) -> f64 {
        let Position { x, y } = position;

        if (65.0..=75.0).contains(&x) {
            return 0.01;
        }

        let wide_box = (15.0..=25.0).contains(&y) || (75.0..=85.0).contains(&y);
        if (x > 75.0 && x <= 85.0 && (15.0..=85.0).contains(&y)) || (x > 85.0 && wide_box) {
            return 0.5;
        }

        if x > 75.0 && (y <= 15.0 || y >= 85.0) {
            return 0.02;
        }

        if x > 85.0 && (40.0..=60.0).contains(&y) {
            return 1.0;
        }

        if x > 85.0 && ((25.0..=40.0).contains(&y) || (60.0..=85.0).contains(&y)) {
            return 0.8;
        }

        0.0
    }
}

/// Axis-aligned rectangle, bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub weight: f64,
}

impl Zone {
    pub fn contains(&self, position: Position) -> bool {
        (self.x[0]..=self.x[1]).contains(&position.x) && (self.y[0]..=self.y[1]).contains(&position.y)
    }
}

/// Data-driven weight model: first zone containing the position wins,
/// otherwise `default_weight`.
///
/// ```yaml
/// default_weight: 0.0
/// zones:
///   - { x: [88, 100], y: [37, 63], weight: 0.35 }
///   - { x: [83, 100], y: [20, 80], weight: 0.12 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneTable {
    #[serde(default)]
    pub default_weight: f64,
    pub zones: Vec<Zone>,
}

impl ZoneTable {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let table: ZoneTable = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> Result<()> {
        for (i, zone) in self.zones.iter().enumerate() {
            if zone.x[0] > zone.x[1] || zone.y[0] > zone.y[1] {
                return Err(DataError::InvalidConfig(format!(
                    "zone {} has inverted bounds",
                    i
                )));
            }
            if !zone.weight.is_finite() {
                return Err(DataError::InvalidConfig(format!(
                    "zone {} has a non-finite weight",
                    i
                )));
            }
        }
        Ok(())
    }
}

impl FieldWeight for ZoneTable {
    fn weight(&self, position: Position) -> f64 {
        self.zones
            .iter()
            .find(|zone| zone.contains(position))
            .map_or(self.default_weight, |zone| zone.weight)
    }
}
