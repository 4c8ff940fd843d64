//! CombatantStats - Level, six-dimension stats and defense of one side

pub mod lenient;

use crate::standards::Level;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stats of one combatant for a single calculation
///
/// Deserializes from the shell's records as well as from this crate's own
/// output. Each field is read from its spellings in order (`lv` then
/// `level`, `def` then `defense`) and the first non-zero one wins; strings,
/// `null` and missing values count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CombatantStats {
    pub level: Level,
    pub hit: f64,
    pub dodge: f64,
    pub crit: f64,
    pub tenacity: f64,
    pub luck: f64,
    pub guardian: f64,
    pub defense: f64,
}

impl Default for CombatantStats {
    fn default() -> Self {
        CombatantStats {
            level: 1,
            hit: 0.0,
            dodge: 0.0,
            crit: 0.0,
            tenacity: 0.0,
            luck: 0.0,
            guardian: 0.0,
            defense: 0.0,
        }
    }
}

impl CombatantStats {
    /// Create a combatant with all stats at zero
    pub fn new(level: Level) -> Self {
        CombatantStats {
            level,
            ..Default::default()
        }
    }

    /// Set the six paired stats in hit, dodge, crit, tenacity, luck, guardian order
    pub fn with_six_dims(mut self, dims: [f64; 6]) -> Self {
        let [hit, dodge, crit, tenacity, luck, guardian] = dims;
        self.hit = hit;
        self.dodge = dodge;
        self.crit = crit;
        self.tenacity = tenacity;
        self.luck = luck;
        self.guardian = guardian;
        self
    }

    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = defense;
        self
    }

    /// The six paired stats in hit, dodge, crit, tenacity, luck, guardian order
    pub fn six_dims(&self) -> [f64; 6] {
        [
            self.hit,
            self.dodge,
            self.crit,
            self.tenacity,
            self.luck,
            self.guardian,
        ]
    }

    /// Decode a loose shell record; anything that is not an object yields defaults
    pub fn from_record(record: &Value) -> Self {
        CombatantStats {
            level: lenient::level_field(record, &["lv", "level"]),
            hit: lenient::field(record, &["hitVal", "hit"]),
            dodge: lenient::field(record, &["dodge"]),
            crit: lenient::field(record, &["crit"]),
            tenacity: lenient::field(record, &["tenacity"]),
            luck: lenient::field(record, &["lucky", "luck"]),
            guardian: lenient::field(record, &["guardian"]),
            defense: lenient::field(record, &["def", "defense"]),
        }
    }
}

impl From<Value> for CombatantStats {
    fn from(record: Value) -> Self {
        CombatantStats::from_record(&record)
    }
}
