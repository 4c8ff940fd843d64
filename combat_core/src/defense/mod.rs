//! Defense - Flat physical defense mitigation

mod reduction;

pub use reduction::{
    defense_needed_for_reduction, defense_reduction, reduction_fraction, DefenseReductionResult,
};
