//! Matchup reports - Both directions of a fight in one record
//!
//! Each side's defense is measured against the level of the other side,
//! since that is who inflicts the damage being mitigated.

use crate::combat::{resolve_six_dimensions_with, CombatResult};
use crate::combatant::CombatantStats;
use crate::config::EngineConstants;
use crate::defense::{defense_reduction, DefenseReductionResult};
use crate::pvp::{convert_pvp_stats_with, PvpRawStats};
use crate::standards::StandardsTable;
use serde::{Deserialize, Serialize};

/// Two-way comparison of combatants `a` and `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    /// `a` attacking `b`
    pub a_vs_b: CombatResult,
    /// `b` attacking `a`
    pub b_vs_a: CombatResult,
    /// `a`'s defense against `b`'s level
    pub a_mitigation: DefenseReductionResult,
    /// `b`'s defense against `a`'s level
    pub b_mitigation: DefenseReductionResult,
}

impl MatchupReport {
    pub fn summary(&self) -> String {
        format!(
            "A vs B:\n{}\n\nB vs A:\n{}\n\nDefense reduction:\nA: {:.2}%\nB: {:.2}%",
            self.a_vs_b.summary(),
            self.b_vs_a.summary(),
            self.a_mitigation.percent(),
            self.b_mitigation.percent(),
        )
    }
}

/// PVE matchup with the default constants
pub fn resolve_matchup(
    a: &CombatantStats,
    b: &CombatantStats,
    standards: &StandardsTable,
) -> MatchupReport {
    resolve_matchup_with(a, b, standards, &EngineConstants::default())
}

pub fn resolve_matchup_with(
    a: &CombatantStats,
    b: &CombatantStats,
    standards: &StandardsTable,
    constants: &EngineConstants,
) -> MatchupReport {
    MatchupReport {
        a_vs_b: resolve_six_dimensions_with(a, b, standards, constants),
        b_vs_a: resolve_six_dimensions_with(b, a, standards, constants),
        a_mitigation: defense_reduction(a.defense, b.level, standards),
        b_mitigation: defense_reduction(b.defense, a.level, standards),
    }
}

/// PVP matchup with the default constants
pub fn resolve_pvp_matchup(
    a: &PvpRawStats,
    b: &PvpRawStats,
    standards: &StandardsTable,
) -> MatchupReport {
    resolve_pvp_matchup_with(a, b, standards, &EngineConstants::default())
}

/// Convert both sides' PVP points, then resolve as a regular matchup
pub fn resolve_pvp_matchup_with(
    a: &PvpRawStats,
    b: &PvpRawStats,
    standards: &StandardsTable,
    constants: &EngineConstants,
) -> MatchupReport {
    let a = convert_pvp_stats_with(a, constants);
    let b = convert_pvp_stats_with(b, constants);
    resolve_matchup_with(&a, &b, standards, constants)
}
