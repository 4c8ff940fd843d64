//! Standards document loading

use super::ConfigError;
use crate::standards::{Level, StandardsError, StandardsTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk shape of a standards table
///
/// Level keys are strings ("50") in both TOML and JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsDocument {
    #[serde(rename = "sixDimStandard")]
    pub six_dim: BTreeMap<String, f64>,
    #[serde(rename = "physicalDefenseStandard", alias = "phyDefStandard")]
    pub physical_defense: BTreeMap<String, f64>,
}

impl TryFrom<StandardsDocument> for StandardsTable {
    type Error = StandardsError;

    fn try_from(doc: StandardsDocument) -> Result<Self, Self::Error> {
        let six_dim = parse_levels("sixDimStandard", doc.six_dim)?;
        let physical_defense = parse_levels("physicalDefenseStandard", doc.physical_defense)?;
        StandardsTable::new(six_dim, physical_defense)
    }
}

impl From<StandardsTable> for StandardsDocument {
    fn from(table: StandardsTable) -> Self {
        let stringify = |entries: &BTreeMap<Level, f64>| -> BTreeMap<String, f64> {
            entries
                .iter()
                .map(|(level, value)| (level.to_string(), *value))
                .collect()
        };
        StandardsDocument {
            six_dim: stringify(table.six_dim_entries()),
            physical_defense: stringify(table.physical_defense_entries()),
        }
    }
}

fn parse_levels(
    table: &'static str,
    raw: BTreeMap<String, f64>,
) -> Result<BTreeMap<Level, f64>, StandardsError> {
    raw.into_iter()
        .map(|(key, value)| match key.trim().parse::<Level>() {
            Ok(level) => Ok((level, value)),
            Err(_) => Err(StandardsError::InvalidLevel { table, key }),
        })
        .collect()
}

/// Load a standards table, choosing JSON for `.json` files and TOML otherwise
pub fn load_standards(path: &Path) -> Result<StandardsTable, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let doc: StandardsDocument = if is_json {
        super::load_json(path)?
    } else {
        super::load_toml(path)?
    };

    let table = finish(doc)?;
    log::info!(
        "loaded standards from {}: {} six-dim levels, {} defense levels",
        path.display(),
        table.six_dim_entries().len(),
        table.physical_defense_entries().len()
    );
    Ok(table)
}

/// Parse a standards table from a TOML string
pub fn parse_standards_toml(content: &str) -> Result<StandardsTable, ConfigError> {
    let doc: StandardsDocument = super::parse_toml(content)?;
    finish(doc)
}

/// Parse a standards table from a JSON string
pub fn parse_standards_json(content: &str) -> Result<StandardsTable, ConfigError> {
    let doc: StandardsDocument = super::parse_json(content)?;
    finish(doc)
}

fn finish(doc: StandardsDocument) -> Result<StandardsTable, ConfigError> {
    let table = StandardsTable::try_from(doc)?;

    let degenerate = table.degenerate_levels();
    if !degenerate.is_empty() {
        log::warn!("standards table has non-positive baselines at levels {degenerate:?}");
    }

    Ok(table)
}
