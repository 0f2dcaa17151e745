//! 단위 정의 및 변환 모듈 모음. 계산 모듈 내부 기준은 SI(K, Pa, m³/s, kg/s)이다.

pub mod flow;
pub mod pressure;
pub mod temperature;

pub use flow::{convert_mass_flow, convert_volume_flow, MassFlowUnit, VolumeFlowUnit};
pub use temperature::{celsius_to_kelvin, kelvin_to_celsius, ZERO_CELSIUS_K};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_conversions() {
        let q = convert_volume_flow(20.0, VolumeFlowUnit::LiterPerMinute, VolumeFlowUnit::CubicMeterPerHour);
        assert!((q - 1.2).abs() < 1e-12);
        let m = convert_mass_flow(3600.0, MassFlowUnit::KgPerHour, MassFlowUnit::KgPerSecond);
        assert!((m - 1.0).abs() < 1e-12);
    }

    #[test]
    fn celsius_round_trip() {
        assert_eq!(celsius_to_kelvin(0.0), ZERO_CELSIUS_K);
        assert!((kelvin_to_celsius(celsius_to_kelvin(26.85)) - 26.85).abs() < 1e-12);
    }
}
