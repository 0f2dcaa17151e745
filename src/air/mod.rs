//! 습공기(대기) 계산.

pub mod psychrometrics;

pub use psychrometrics::{atmospheric_pressure_kpa, psychrometric_properties, PsychrometricState};
