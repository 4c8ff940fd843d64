//! CombatResult - Outcome probabilities of one directional attack

use serde::{Deserialize, Serialize};

/// The crit/block half of a result; exactly one side is ever active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrikeBranch {
    /// Attacker out-crits the defender's tenacity
    Crit {
        /// Crit chance, 0-100
        rate: f64,
        /// Crit damage bonus, 0 to `crit_multiplier_cap * 100` (300 by default)
        multiplier: f64,
    },
    /// Defender's tenacity meets or exceeds the attacker's crit
    Block {
        /// Block chance, 0-100
        rate: f64,
        /// Damage reduction of a blocked hit, 0 to `cap / (cap + 1) * 100` where
        /// `cap` is `block_reduction_cap` (75 by default)
        reduction: f64,
    },
}

/// Result of resolving attacker against defender
///
/// All values are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub hit_rate: f64,
    pub branch: StrikeBranch,
}

/// Flat view of a result with the inactive pair reported as zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCombatResult {
    pub hit_rate: f64,
    pub crit_rate: f64,
    pub crit_multiplier: f64,
    pub block_rate: f64,
    pub block_reduction: f64,
}

impl CombatResult {
    pub fn is_crit_branch(&self) -> bool {
        matches!(self.branch, StrikeBranch::Crit { .. })
    }

    pub fn crit_rate(&self) -> f64 {
        match self.branch {
            StrikeBranch::Crit { rate, .. } => rate,
            StrikeBranch::Block { .. } => 0.0,
        }
    }

    pub fn crit_multiplier(&self) -> f64 {
        match self.branch {
            StrikeBranch::Crit { multiplier, .. } => multiplier,
            StrikeBranch::Block { .. } => 0.0,
        }
    }

    pub fn block_rate(&self) -> f64 {
        match self.branch {
            StrikeBranch::Block { rate, .. } => rate,
            StrikeBranch::Crit { .. } => 0.0,
        }
    }

    pub fn block_reduction(&self) -> f64 {
        match self.branch {
            StrikeBranch::Block { reduction, .. } => reduction,
            StrikeBranch::Crit { .. } => 0.0,
        }
    }

    pub fn flat(&self) -> FlatCombatResult {
        FlatCombatResult {
            hit_rate: self.hit_rate,
            crit_rate: self.crit_rate(),
            crit_multiplier: self.crit_multiplier(),
            block_rate: self.block_rate(),
            block_reduction: self.block_reduction(),
        }
    }

    /// One line per value, two decimals
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Hit rate: {:.2}%", self.hit_rate)];
        match self.branch {
            StrikeBranch::Crit { rate, multiplier } => {
                lines.push(format!("Crit rate: {rate:.2}%"));
                lines.push(format!("Crit damage bonus: {multiplier:.2}%"));
            }
            StrikeBranch::Block { rate, reduction } => {
                lines.push(format!("Block rate: {rate:.2}%"));
                lines.push(format!("Block reduction: {reduction:.2}%"));
            }
        }
        lines.join("\n")
    }
}

impl From<CombatResult> for FlatCombatResult {
    fn from(result: CombatResult) -> Self {
        result.flat()
    }
}
