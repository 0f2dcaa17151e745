/// 0 °C의 켈빈 값.
pub const ZERO_CELSIUS_K: f64 = 273.15;

pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + ZERO_CELSIUS_K
}

pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - ZERO_CELSIUS_K
}
