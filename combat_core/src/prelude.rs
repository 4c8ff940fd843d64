//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::CombatantStats;
pub use crate::standards::{Level, StandardsTable};

// Resolution
pub use crate::combat::{resolve_six_dimensions, AttackOutcome, CombatResult, StrikeBranch};
pub use crate::defense::{defense_reduction, DefenseReductionResult};

// PVP
pub use crate::pvp::{convert_pvp_stats, PvpRawStats};

// Reports
pub use crate::damage::{estimate_pve_damage, estimate_pvp_damage, DamageEstimate, DamageKind};
pub use crate::matchup::{resolve_matchup, resolve_pvp_matchup, MatchupReport};

// Config
pub use crate::config::{load_standards, EngineConstants};
