//! Damage estimate - Final damage after defense and resistance
//!
//! The two mitigation layers stack multiplicatively:
//! `total = 1 - (1 - defense_reduction) * (1 - resistance_reduction)`
//!
//! Defense uses the physical defense baseline, resistance the six-dimension
//! baseline, both at the attacker's level.

use crate::combatant::lenient;
use crate::defense::reduction_fraction;
use crate::standards::{Level, StandardsTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which defense/resistance pair an attack is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    #[default]
    Physical,
    Magical,
}

/// Defender's mitigation stats
///
/// Decodes leniently; the shell's short names (`phyDef`) win over the long
/// ones when both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DefenseProfile {
    pub physical_defense: f64,
    pub magical_defense: f64,
    pub physical_resistance: f64,
    pub magical_resistance: f64,
}

impl From<Value> for DefenseProfile {
    fn from(record: Value) -> Self {
        DefenseProfile {
            physical_defense: lenient::field(&record, &["phyDef", "physical_defense"]),
            magical_defense: lenient::field(&record, &["magDef", "magical_defense"]),
            physical_resistance: lenient::field(&record, &["phyRes", "physical_resistance"]),
            magical_resistance: lenient::field(&record, &["magRes", "magical_resistance"]),
        }
    }
}

impl DefenseProfile {
    /// (defense, resistance) for a damage kind
    pub fn for_kind(&self, kind: DamageKind) -> (f64, f64) {
        match kind {
            DamageKind::Physical => (self.physical_defense, self.physical_resistance),
            DamageKind::Magical => (self.magical_defense, self.magical_resistance),
        }
    }
}

/// Input for a PVE estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PveDamageInput {
    pub attacker_level: Level,
    pub attack_power: f64,
    pub kind: DamageKind,
    pub defender: DefenseProfile,
}

/// Input for a PVP estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PvpDamageInput {
    pub attacker_level: Level,
    pub attack_power: f64,
    pub kind: DamageKind,
    /// Flat defense ignored by the attack
    pub penetration: f64,
    pub defender: DefenseProfile,
}

/// Estimated damage of one hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    /// Fractions (0.25 = 25%)
    pub defense_reduction: f64,
    pub resistance_reduction: f64,
    pub total_reduction: f64,
    /// Rounded to the nearest whole point
    pub final_damage: f64,
    pub original_damage: f64,
    /// Defense left after penetration, PVP only
    pub effective_defense: Option<f64>,
}

impl DamageEstimate {
    pub fn damage_prevented(&self) -> f64 {
        self.original_damage - self.final_damage
    }
}

/// Estimate PVE damage against a defender profile
pub fn estimate_pve_damage(input: &PveDamageInput, standards: &StandardsTable) -> DamageEstimate {
    let (defense, resistance) = input.defender.for_kind(input.kind);
    mitigate(
        input.attack_power,
        defense,
        resistance,
        input.attacker_level,
        standards,
    )
}

/// Estimate PVP damage, letting penetration strip defense down to zero
pub fn estimate_pvp_damage(input: &PvpDamageInput, standards: &StandardsTable) -> DamageEstimate {
    let (defense, resistance) = input.defender.for_kind(input.kind);
    let effective_defense = (defense - input.penetration).max(0.0);

    DamageEstimate {
        effective_defense: Some(effective_defense),
        ..mitigate(
            input.attack_power,
            effective_defense,
            resistance,
            input.attacker_level,
            standards,
        )
    }
}

/// Reduction from six-dimension resistance: `value / (value + standard)`
pub fn six_dim_resistance_reduction(value: f64, level: Level, standards: &StandardsTable) -> f64 {
    let standard = standards.six_dim_standard(level);
    value / (value + standard)
}

/// Reduction from physical defense, same curve as [`crate::defense::defense_reduction`]
pub fn physical_defense_reduction(value: f64, level: Level, standards: &StandardsTable) -> f64 {
    reduction_fraction(value, standards.physical_defense_standard(level))
}

fn mitigate(
    attack_power: f64,
    defense: f64,
    resistance: f64,
    level: Level,
    standards: &StandardsTable,
) -> DamageEstimate {
    let defense_reduction = physical_defense_reduction(defense, level, standards);
    let resistance_reduction = six_dim_resistance_reduction(resistance, level, standards);
    let total_reduction = 1.0 - (1.0 - defense_reduction) * (1.0 - resistance_reduction);

    DamageEstimate {
        defense_reduction,
        resistance_reduction,
        total_reduction,
        final_damage: (attack_power * (1.0 - total_reduction)).round(),
        original_damage: attack_power,
        effective_defense: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn standards() -> StandardsTable {
        StandardsTable::new(
            BTreeMap::from([(50, 1000.0)]),
            BTreeMap::from([(50, 500.0)]),
        )
        .unwrap()
    }

    fn profile() -> DefenseProfile {
        DefenseProfile {
            physical_defense: 500.0,
            magical_defense: 1500.0,
            physical_resistance: 1000.0,
            magical_resistance: 0.0,
        }
    }

    #[test]
    fn test_pve_physical() {
        let input = PveDamageInput {
            attacker_level: 50,
            attack_power: 10_000.0,
            kind: DamageKind::Physical,
            defender: profile(),
        };
        let estimate = estimate_pve_damage(&input, &standards());

        // 500 / 1000 = 50%, 1000 / 2000 = 50%, total 75%
        assert!((estimate.defense_reduction - 0.5).abs() < 1e-9);
        assert!((estimate.resistance_reduction - 0.5).abs() < 1e-9);
        assert!((estimate.total_reduction - 0.75).abs() < 1e-9);
        assert!((estimate.final_damage - 2500.0).abs() < f64::EPSILON);
        assert!((estimate.damage_prevented() - 7500.0).abs() < f64::EPSILON);
        assert_eq!(estimate.effective_defense, None);
    }

    #[test]
    fn test_pve_magical_uses_magic_pair() {
        let input = PveDamageInput {
            attacker_level: 50,
            attack_power: 1000.0,
            kind: DamageKind::Magical,
            defender: profile(),
        };
        let estimate = estimate_pve_damage(&input, &standards());

        // 1500 / 2000 = 75%, no resistance
        assert!((estimate.total_reduction - 0.75).abs() < 1e-9);
        assert!((estimate.final_damage - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pvp_penetration() {
        let input = PvpDamageInput {
            attacker_level: 50,
            attack_power: 1000.0,
            kind: DamageKind::Physical,
            penetration: 300.0,
            defender: DefenseProfile {
                physical_defense: 800.0,
                ..Default::default()
            },
        };
        let estimate = estimate_pvp_damage(&input, &standards());

        assert_eq!(estimate.effective_defense, Some(500.0));
        assert!((estimate.final_damage - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pvp_penetration_floors_at_zero() {
        let input = PvpDamageInput {
            attacker_level: 50,
            attack_power: 1000.0,
            kind: DamageKind::Physical,
            penetration: 5000.0,
            defender: DefenseProfile {
                physical_defense: 800.0,
                ..Default::default()
            },
        };
        let estimate = estimate_pvp_damage(&input, &standards());

        assert_eq!(estimate.effective_defense, Some(0.0));
        assert_eq!(estimate.defense_reduction, 0.0);
        assert!((estimate.final_damage - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_defense_increases_damage() {
        let input = PveDamageInput {
            attacker_level: 50,
            attack_power: 1000.0,
            kind: DamageKind::Physical,
            defender: DefenseProfile {
                physical_defense: -250.0,
                ..Default::default()
            },
        };
        let estimate = estimate_pve_damage(&input, &standards());
        assert!((estimate.final_damage - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_from_shell_names() {
        let profile: DefenseProfile =
            serde_json::from_str(r#"{ "phyDef": "120", "magRes": 30, "magDef": null }"#).unwrap();
        assert!((profile.physical_defense - 120.0).abs() < f64::EPSILON);
        assert!((profile.magical_resistance - 30.0).abs() < f64::EPSILON);
        assert_eq!(profile.magical_defense, 0.0);
    }

    #[test]
    fn test_profile_with_both_spellings() {
        let profile: DefenseProfile = serde_json::from_str(
            r#"{ "phyDef": 0, "physical_defense": 800, "phyRes": 25, "physical_resistance": 25 }"#,
        )
        .unwrap();
        assert!((profile.physical_defense - 800.0).abs() < f64::EPSILON);
        assert!((profile.physical_resistance - 25.0).abs() < f64::EPSILON);

        let json = serde_json::to_value(profile).unwrap();
        let back: DefenseProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
