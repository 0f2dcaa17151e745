//! 증기압축 사이클과 냉매 등급.

pub mod cycle;
pub mod ratings;

pub use cycle::{
    solve_refrigeration_cycle, CompressionModel, CycleState, RefrigerationCycleInput,
    RefrigerationCycleResult,
};
pub use ratings::{substance_ratings, EnvironmentalImpact, HazardRatings, SubstanceRatings};
