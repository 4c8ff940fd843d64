//! Six-dimension resolution - Hit, crit and block probabilities
//!
//! Every stat is normalized by the baseline of the *opposing* side's level:
//! the attacker's offense is divided by the defender's standard and the
//! defender's counter-stat by the attacker's standard.
//!
//! - Hit: `d = hit/bStd - dodge/pStd`; 100% when `d >= 0`, else `1/(1+|d|)`
//! - Crit factor: `crit/bStd - tenacity/pStd`; positive selects the crit
//!   branch, zero or negative the block branch
//! - Crit bonus: `clamp(1 + luck/bStd - guardian/pStd, 0, 3)`
//! - Block reduction: `a/(|a|+1)` with `a = clamp(1 + guardian/pStd - luck/bStd, 0, 3)`
//!
//! Degenerate baselines (zero, NaN) are not guarded; the NaN or infinity
//! flows into the result.

use super::result::{CombatResult, StrikeBranch};
use crate::combatant::CombatantStats;
use crate::config::{CritLuckPolicy, EngineConstants};
use crate::standards::StandardsTable;

/// Resolve attacker against defender with the default constants
pub fn resolve_six_dimensions(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    standards: &StandardsTable,
) -> CombatResult {
    resolve_six_dimensions_with(attacker, defender, standards, &EngineConstants::default())
}

/// Resolve attacker against defender with explicit constants
pub fn resolve_six_dimensions_with(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    standards: &StandardsTable,
    constants: &EngineConstants,
) -> CombatResult {
    let p_std = standards.six_dim_standard(attacker.level);
    let b_std = standards.six_dim_standard(defender.level);

    let hit_diff = attacker.hit / b_std - defender.dodge / p_std;
    let hit_rate = hit_chance(hit_diff) * 100.0;

    let crit_factor = attacker.crit / b_std - defender.tenacity / p_std;

    log::trace!(
        "resolve lv{} -> lv{}: hit_diff={hit_diff:.4} crit_factor={crit_factor:.4}",
        attacker.level,
        defender.level
    );

    let branch = if crit_factor > 0.0 {
        let mut luck_diff = attacker.luck / b_std - defender.guardian / p_std;
        if constants.crit_luck_policy == CritLuckPolicy::Floored {
            luck_diff = luck_diff.max(0.0);
        }
        let multiplier = clamp_term(constants.crit_base + luck_diff, constants.crit_multiplier_cap);

        StrikeBranch::Crit {
            rate: cap_at_one(crit_factor) * 100.0,
            multiplier: multiplier * 100.0,
        }
    } else {
        // Recomputed rather than negated so the sign of zero stays positive
        let block_factor = defender.tenacity / p_std - attacker.crit / b_std;
        let term = clamp_term(
            constants.block_base + defender.guardian / p_std - attacker.luck / b_std,
            constants.block_reduction_cap,
        );

        StrikeBranch::Block {
            rate: cap_at_one(block_factor) * 100.0,
            reduction: saturate(term) * 100.0,
        }
    };

    CombatResult { hit_rate, branch }
}

/// Hit probability (0-1] for a hit/dodge differential
pub fn hit_chance(differential: f64) -> f64 {
    if differential >= 0.0 {
        1.0
    } else {
        1.0 - saturate(differential.abs())
    }
}

/// `x / (|x| + 1)`
fn saturate(x: f64) -> f64 {
    x / (x.abs() + 1.0)
}

// f64::min/max drop NaN; these keep it.
fn cap_at_one(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.min(1.0)
    }
}

fn clamp_term(x: f64, cap: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.min(cap).max(0.0)
    }
}
