//! combat_core - Six-dimension combat formula engine
//!
//! This library provides:
//! - StandardsTable: Per-level baselines with highest-level fallback
//! - Six-dimension resolution: Hit, crit and block probabilities
//! - Defense reduction: Mitigation from flat physical defense
//! - PVP conversion: PVP point stats folded into ordinary stats
//! - Damage estimates and two-way matchup reports built on the above
//!
//! Every calculation is a pure function of its inputs and a read-only
//! standards table.

pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod defense;
pub mod matchup;
pub mod prelude;
pub mod pvp;
pub mod standards;

// Re-export core types for convenience
pub use combat::{
    resolve_six_dimensions, resolve_six_dimensions_with, AttackOutcome, CombatResult,
    FlatCombatResult, StrikeBranch,
};
pub use combatant::CombatantStats;
pub use config::{ConfigError, CritLuckPolicy, EngineConstants};
pub use damage::{DamageEstimate, DamageKind, DefenseProfile};
pub use defense::{defense_reduction, DefenseReductionResult};
pub use matchup::{resolve_matchup, resolve_pvp_matchup, MatchupReport};
pub use pvp::{convert_pvp_stats, PvpRawStats};
pub use standards::{Level, StandardsError, StandardsTable};
