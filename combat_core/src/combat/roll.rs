//! Attack rolls - Sample a concrete outcome from a CombatResult
//!
//! A crit deals `A × (1 + bonus)`, a blocked hit `A × (1 - reduction)`.

use super::result::{CombatResult, StrikeBranch};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of a single sampled attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    Miss,
    Normal,
    Critical,
    Blocked,
}

/// Roll one attack using the thread RNG
pub fn roll_attack(result: &CombatResult) -> AttackOutcome {
    let mut rng = rand::thread_rng();
    roll_attack_with_rng(result, &mut rng)
}

/// Roll one attack with a provided RNG (for deterministic testing)
pub fn roll_attack_with_rng(result: &CombatResult, rng: &mut impl Rng) -> AttackOutcome {
    if !rng.gen_bool(probability(result.hit_rate)) {
        return AttackOutcome::Miss;
    }

    match result.branch {
        StrikeBranch::Crit { rate, .. } if rng.gen_bool(probability(rate)) => {
            AttackOutcome::Critical
        }
        StrikeBranch::Block { rate, .. } if rng.gen_bool(probability(rate)) => {
            AttackOutcome::Blocked
        }
        _ => AttackOutcome::Normal,
    }
}

/// Damage multiplier applied to a base hit for an outcome
pub fn damage_multiplier(outcome: AttackOutcome, result: &CombatResult) -> f64 {
    match outcome {
        AttackOutcome::Miss => 0.0,
        AttackOutcome::Normal => 1.0,
        AttackOutcome::Critical => 1.0 + result.crit_multiplier() / 100.0,
        AttackOutcome::Blocked => 1.0 - result.block_reduction() / 100.0,
    }
}

/// Mean damage multiplier over all outcomes
pub fn expected_damage_multiplier(result: &CombatResult) -> f64 {
    let hit = probability(result.hit_rate);
    match result.branch {
        StrikeBranch::Crit { rate, multiplier } => {
            hit * (1.0 + probability(rate) * multiplier / 100.0)
        }
        StrikeBranch::Block { rate, reduction } => {
            hit * (1.0 - probability(rate) * reduction / 100.0)
        }
    }
}

/// Percentage to a probability usable by `gen_bool`
fn probability(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn crit_result(hit_rate: f64, rate: f64) -> CombatResult {
        CombatResult {
            hit_rate,
            branch: StrikeBranch::Crit {
                rate,
                multiplier: 150.0,
            },
        }
    }

    fn block_result(hit_rate: f64, rate: f64) -> CombatResult {
        CombatResult {
            hit_rate,
            branch: StrikeBranch::Block {
                rate,
                reduction: 40.0,
            },
        }
    }

    #[test]
    fn test_certain_outcomes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(roll_attack_with_rng(&crit_result(0.0, 100.0), &mut rng), AttackOutcome::Miss);
            assert_eq!(roll_attack_with_rng(&crit_result(100.0, 100.0), &mut rng), AttackOutcome::Critical);
            assert_eq!(roll_attack_with_rng(&block_result(100.0, 100.0), &mut rng), AttackOutcome::Blocked);
            assert_eq!(roll_attack_with_rng(&block_result(100.0, 0.0), &mut rng), AttackOutcome::Normal);
        }
    }

    #[test]
    fn test_nan_rates_never_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = block_result(f64::NAN, f64::NAN);
        assert_eq!(roll_attack_with_rng(&result, &mut rng), AttackOutcome::Miss);
    }

    #[test]
    fn test_frequencies_track_rates() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = crit_result(50.0, 50.0);
        let trials = 20_000;
        let crits = (0..trials)
            .filter(|_| roll_attack_with_rng(&result, &mut rng) == AttackOutcome::Critical)
            .count();
        // Expect 25%
        let freq = crits as f64 / trials as f64;
        assert!((freq - 0.25).abs() < 0.02, "crit frequency {freq}");
    }

    #[test]
    fn test_damage_multipliers() {
        let crit = crit_result(100.0, 50.0);
        assert!((damage_multiplier(AttackOutcome::Critical, &crit) - 2.5).abs() < f64::EPSILON);
        assert_eq!(damage_multiplier(AttackOutcome::Miss, &crit), 0.0);
        assert_eq!(damage_multiplier(AttackOutcome::Normal, &crit), 1.0);

        let block = block_result(100.0, 50.0);
        assert!((damage_multiplier(AttackOutcome::Blocked, &block) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_expected_multiplier() {
        // 80% hit, 50% crit at +150% -> 0.8 * (1 + 0.75) = 1.4
        let crit = crit_result(80.0, 50.0);
        assert!((expected_damage_multiplier(&crit) - 1.4).abs() < 1e-9);

        // 100% hit, 50% block at -40% -> 0.8
        let block = block_result(100.0, 50.0);
        assert!((expected_damage_multiplier(&block) - 0.8).abs() < 1e-9);
    }
}
