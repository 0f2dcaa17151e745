//! 배관: 마찰계수, 수력 계산, 부속류, 재질, 보온, 내경 선정.

pub mod fittings;
pub mod friction;
pub mod hydraulics;
pub mod insulation;
pub mod materials;
pub mod sizing;

pub use fittings::{FittingInventory, FittingKind};
pub use friction::{solve_colebrook, solve_explicit, ColebrookSolution};
