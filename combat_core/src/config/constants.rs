//! Engine constants configuration

use serde::{Deserialize, Serialize};

/// How the luck/guardian differential feeds the crit multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritLuckPolicy {
    /// Differential is added as-is, so a guardian advantage can pull the
    /// multiplier below the base
    #[default]
    Signed,
    /// Differential is floored at zero first, so the multiplier never drops
    /// below the base
    Floored,
}

/// Tunable formula constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    /// Ordinary stat points granted by one PVP point
    #[serde(default = "default_pvp_point_ratio")]
    pub pvp_point_ratio: f64,
    /// Defense granted per point of guard left after penetration
    #[serde(default = "default_guard_defense_ratio")]
    pub guard_defense_ratio: f64,
    /// Base crit multiplier before the luck differential (1.0 = 100%)
    #[serde(default = "default_base")]
    pub crit_base: f64,
    /// Upper clamp of the crit multiplier term
    #[serde(default = "default_cap")]
    pub crit_multiplier_cap: f64,
    /// Base block term before the guardian differential
    #[serde(default = "default_base")]
    pub block_base: f64,
    /// Upper clamp of the block term
    #[serde(default = "default_cap")]
    pub block_reduction_cap: f64,
    #[serde(default)]
    pub crit_luck_policy: CritLuckPolicy,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            pvp_point_ratio: default_pvp_point_ratio(),
            guard_defense_ratio: default_guard_defense_ratio(),
            crit_base: default_base(),
            crit_multiplier_cap: default_cap(),
            block_base: default_base(),
            block_reduction_cap: default_cap(),
            crit_luck_policy: CritLuckPolicy::default(),
        }
    }
}

fn default_pvp_point_ratio() -> f64 {
    4.0
}
fn default_guard_defense_ratio() -> f64 {
    2.0 / 3.0
}
fn default_base() -> f64 {
    1.0
}
fn default_cap() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = EngineConstants::default();
        assert!((constants.pvp_point_ratio - 4.0).abs() < f64::EPSILON);
        assert!((constants.guard_defense_ratio - 2.0 / 3.0).abs() < f64::EPSILON);
        assert!((constants.crit_multiplier_cap - 3.0).abs() < f64::EPSILON);
        assert_eq!(constants.crit_luck_policy, CritLuckPolicy::Signed);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
pvp_point_ratio = 5
crit_luck_policy = "floored"
"#;

        let constants: EngineConstants = toml::from_str(toml).unwrap();
        assert!((constants.pvp_point_ratio - 5.0).abs() < f64::EPSILON);
        assert_eq!(constants.crit_luck_policy, CritLuckPolicy::Floored);
        // Unspecified fields keep their defaults
        assert!((constants.block_reduction_cap - 3.0).abs() < f64::EPSILON);
        assert!((constants.crit_base - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_document_is_default() {
        let constants: EngineConstants = toml::from_str("").unwrap();
        assert_eq!(constants, EngineConstants::default());
    }
}
