//! 기체 혼합물 물성.

pub mod mixture;

pub use mixture::{blend, mixture_molar_mass, GasMixture, MixtureProperties};
