//! Damage estimates - Defense and resistance applied to a raw attack

mod estimate;

pub use estimate::{
    estimate_pve_damage, estimate_pvp_damage, physical_defense_reduction,
    six_dim_resistance_reduction, DamageEstimate, DamageKind, DefenseProfile, PveDamageInput,
    PvpDamageInput,
};
