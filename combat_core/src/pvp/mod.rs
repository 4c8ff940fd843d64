//! PVP attribute conversion
//!
//! PVP-only point stats are folded into ordinary six-dimension stats and
//! defense so PVP fights run through the same resolver as PVE fights.
//!
//! - Each six-dimension point is worth `pvp_point_ratio` ordinary points (4)
//! - Guard first cancels penetration; whatever guard is left becomes
//!   defense at `guard_defense_ratio` (2/3)
//! - Penetration beyond guard contributes nothing, it never lowers the base
//!   defense through this path

use crate::combatant::{lenient, CombatantStats};
use crate::config::EngineConstants;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A combatant's stats including the PVP point block
///
/// Decodes leniently like [`CombatantStats`]: each field takes the first
/// non-zero of its spellings (`hitValP` then `focusP`, `defP` then `guard`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct PvpRawStats {
    #[serde(flatten)]
    pub base: CombatantStats,
    /// Guard points (adds defense)
    pub guard: f64,
    /// Penetration points (cancels the opponent-facing guard)
    pub penetration: f64,
    #[serde(rename = "focusP")]
    pub focus_points: f64,
    #[serde(rename = "agilityP")]
    pub agility_points: f64,
    #[serde(rename = "critP")]
    pub crit_points: f64,
    #[serde(rename = "tenacityP")]
    pub tenacity_points: f64,
    #[serde(rename = "luckyP")]
    pub luck_points: f64,
    #[serde(rename = "guardianP")]
    pub guardian_points: f64,
}

impl From<Value> for PvpRawStats {
    fn from(record: Value) -> Self {
        PvpRawStats::from_record(&record)
    }
}

impl PvpRawStats {
    pub fn new(base: CombatantStats) -> Self {
        PvpRawStats {
            base,
            ..Default::default()
        }
    }

    /// Set the six point stats in hit, dodge, crit, tenacity, luck, guardian order
    pub fn with_points(mut self, points: [f64; 6]) -> Self {
        let [focus, agility, crit, tenacity, luck, guardian] = points;
        self.focus_points = focus;
        self.agility_points = agility;
        self.crit_points = crit;
        self.tenacity_points = tenacity;
        self.luck_points = luck;
        self.guardian_points = guardian;
        self
    }

    pub fn with_guard(mut self, guard: f64, penetration: f64) -> Self {
        self.guard = guard;
        self.penetration = penetration;
        self
    }

    /// Decode a loose shell record; anything that is not an object yields defaults
    pub fn from_record(record: &Value) -> Self {
        PvpRawStats {
            base: CombatantStats::from_record(record),
            guard: lenient::field(record, &["defP", "guard"]),
            penetration: lenient::field(record, &["defSubtractP", "penetration"]),
            focus_points: lenient::field(record, &["hitValP", "focusP"]),
            agility_points: lenient::field(record, &["dodgeP", "agilityP"]),
            crit_points: lenient::field(record, &["critP"]),
            tenacity_points: lenient::field(record, &["tenacityP"]),
            luck_points: lenient::field(record, &["luckyP"]),
            guardian_points: lenient::field(record, &["guardianP"]),
        }
    }
}

/// Stat deltas contributed by the PVP point block
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PvpBonus {
    /// Hit, dodge, crit, tenacity, luck, guardian deltas
    pub six_dims: [f64; 6],
    pub defense: f64,
}

/// Compute the PVP-derived deltas
pub fn pvp_bonus(raw: &PvpRawStats, constants: &EngineConstants) -> PvpBonus {
    let ratio = constants.pvp_point_ratio;
    let six_dims = [
        raw.focus_points,
        raw.agility_points,
        raw.crit_points,
        raw.tenacity_points,
        raw.luck_points,
        raw.guardian_points,
    ]
    .map(|points| points * ratio);

    let effective_guard = raw.guard - raw.penetration;
    let defense = if effective_guard > 0.0 {
        effective_guard * constants.guard_defense_ratio
    } else {
        0.0
    };

    PvpBonus { six_dims, defense }
}

/// Convert PVP stats with the default constants
pub fn convert_pvp_stats(raw: &PvpRawStats) -> CombatantStats {
    convert_pvp_stats_with(raw, &EngineConstants::default())
}

/// Convert PVP stats into an equivalent combatant
pub fn convert_pvp_stats_with(raw: &PvpRawStats, constants: &EngineConstants) -> CombatantStats {
    let bonus = pvp_bonus(raw, constants);
    let base = raw.base.six_dims();

    let mut dims = [0.0; 6];
    for (i, dim) in dims.iter_mut().enumerate() {
        *dim = base[i] + bonus.six_dims[i];
    }

    CombatantStats::new(raw.base.level)
        .with_six_dims(dims)
        .with_defense(raw.base.defense + bonus.defense)
}
