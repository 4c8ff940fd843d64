//! Combat resolution - Six-dimension outcome probabilities

mod resolution;
mod result;
mod roll;

pub use resolution::{hit_chance, resolve_six_dimensions, resolve_six_dimensions_with};
pub use result::{CombatResult, FlatCombatResult, StrikeBranch};
pub use roll::{
    damage_multiplier, expected_damage_multiplier, roll_attack, roll_attack_with_rng,
    AttackOutcome,
};
