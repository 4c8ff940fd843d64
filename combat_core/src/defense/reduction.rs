//! Defense reduction - Diminishing returns above zero, linear below
//!
//! Positive defense: `Reduction = Defense / (Defense + Standard)`, which is
//! 50% when defense equals the standard and approaches but never reaches 100%.
//!
//! Zero or negative defense: `Reduction = Defense / Standard`, an unbounded
//! negative value (the defender takes extra damage).
//!
//! The standard is the physical defense baseline of the level of whoever
//! deals the damage being mitigated.

use crate::standards::{Level, StandardsTable};
use serde::{Deserialize, Serialize};

/// Mitigation from flat defense
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseReductionResult {
    /// Reduction as a fraction (0.5 = 50%, negative = amplification)
    pub reduction: f64,
}

impl DefenseReductionResult {
    /// Reduction as a percentage
    pub fn percent(&self) -> f64 {
        self.reduction * 100.0
    }

    /// Multiplier applied to incoming damage
    pub fn damage_factor(&self) -> f64 {
        1.0 - self.reduction
    }
}

/// Reduction of `defense` against an attacker of `opponent_level`
pub fn defense_reduction(
    defense: f64,
    opponent_level: Level,
    standards: &StandardsTable,
) -> DefenseReductionResult {
    let standard = standards.physical_defense_standard(opponent_level);
    DefenseReductionResult {
        reduction: reduction_fraction(defense, standard),
    }
}

/// Reduction fraction for a defense value against a raw standard
pub fn reduction_fraction(defense: f64, standard: f64) -> f64 {
    if defense > 0.0 {
        // A missing or zero standard gives no mitigation on this side
        if standard == 0.0 || standard.is_nan() {
            0.0
        } else {
            defense / (defense + standard)
        }
    } else {
        defense / standard
    }
}

/// Defense needed to reach a target reduction fraction against a level
pub fn defense_needed_for_reduction(
    target_reduction: f64,
    opponent_level: Level,
    standards: &StandardsTable,
) -> f64 {
    if target_reduction <= 0.0 {
        return 0.0;
    }
    if target_reduction >= 1.0 {
        return f64::INFINITY;
    }

    // r = d / (d + s)  =>  d = r * s / (1 - r)
    let standard = standards.physical_defense_standard(opponent_level);
    target_reduction * standard / (1.0 - target_reduction)
}
