//! 압력 환산 상수. 모두 절대압 기준이다.

pub const PA_PER_BAR: f64 = 100_000.0;
pub const PA_PER_MBAR: f64 = 100.0;
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;
