//! StandardsTable - Per-level baselines used to normalize raw stats
//!
//! Every formula in the engine divides a raw stat by the baseline of some
//! level. A level that is not in the table resolves to the value of the
//! highest defined level, never to zero and never to an interpolated value.

use crate::config::StandardsDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Character or monster level
pub type Level = u32;

/// Standards table construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StandardsError {
    #[error("standards table `{0}` has no entries")]
    EmptyTable(&'static str),
    #[error("invalid level key `{key}` in `{table}`")]
    InvalidLevel { table: &'static str, key: String },
}

/// Immutable level-keyed baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StandardsDocument", into = "StandardsDocument")]
pub struct StandardsTable {
    six_dim: BTreeMap<Level, f64>,
    physical_defense: BTreeMap<Level, f64>,
}

impl StandardsTable {
    /// Build a table, rejecting empty maps and level 0
    pub fn new(
        six_dim: BTreeMap<Level, f64>,
        physical_defense: BTreeMap<Level, f64>,
    ) -> Result<Self, StandardsError> {
        validate("sixDimStandard", &six_dim)?;
        validate("physicalDefenseStandard", &physical_defense)?;

        Ok(StandardsTable {
            six_dim,
            physical_defense,
        })
    }

    /// The baseline table bundled with the engine (levels 1, 50 and 100)
    pub fn builtin() -> Self {
        StandardsTable {
            six_dim: BTreeMap::from([(1, 2520.0), (50, 5442.9), (100, 4480.0)]),
            physical_defense: BTreeMap::from([(1, 18.0), (50, 1412.3), (100, 4480.0)]),
        }
    }

    /// Six-dimension baseline for a level, falling back to the highest level
    pub fn six_dim_standard(&self, level: Level) -> f64 {
        lookup("sixDimStandard", &self.six_dim, level)
    }

    /// Physical defense baseline for a level, falling back to the highest level
    pub fn physical_defense_standard(&self, level: Level) -> f64 {
        lookup("physicalDefenseStandard", &self.physical_defense, level)
    }

    /// Highest level with an explicit six-dimension entry
    pub fn max_six_dim_level(&self) -> Level {
        self.six_dim.keys().next_back().copied().unwrap_or(0)
    }

    /// Highest level with an explicit physical defense entry
    pub fn max_physical_defense_level(&self) -> Level {
        self.physical_defense.keys().next_back().copied().unwrap_or(0)
    }

    pub fn six_dim_entries(&self) -> &BTreeMap<Level, f64> {
        &self.six_dim
    }

    pub fn physical_defense_entries(&self) -> &BTreeMap<Level, f64> {
        &self.physical_defense
    }

    /// Levels whose baseline is zero or negative in either table
    pub fn degenerate_levels(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self
            .six_dim
            .iter()
            .chain(self.physical_defense.iter())
            .filter(|(_, value)| **value <= 0.0 || value.is_nan())
            .map(|(level, _)| *level)
            .collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
}

impl Default for StandardsTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(table: &'static str, entries: &BTreeMap<Level, f64>) -> Result<(), StandardsError> {
    if entries.is_empty() {
        return Err(StandardsError::EmptyTable(table));
    }
    if entries.contains_key(&0) {
        return Err(StandardsError::InvalidLevel {
            table,
            key: "0".to_string(),
        });
    }
    Ok(())
}

fn lookup(table: &'static str, entries: &BTreeMap<Level, f64>, level: Level) -> f64 {
    if let Some(value) = entries.get(&level) {
        return *value;
    }

    match entries.last_key_value() {
        Some((highest, value)) => {
            log::debug!("{table}: level {level} not defined, using level {highest}");
            *value
        }
        // Unreachable through the constructors; NaN flows to the caller like
        // any other degenerate baseline.
        None => f64::NAN,
    }
}
