/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
}

/// 질량 유량 단위. 내부 기준은 kg/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassFlowUnit {
    KgPerSecond,
    KgPerHour,
}

fn volume_factor(unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => 1.0,
        VolumeFlowUnit::CubicMeterPerHour => 1.0 / 3600.0,
        VolumeFlowUnit::LiterPerSecond => 1.0 / 1000.0,
        VolumeFlowUnit::LiterPerMinute => 1.0 / 60_000.0,
    }
}

fn mass_factor(unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KgPerSecond => 1.0,
        MassFlowUnit::KgPerHour => 1.0 / 3600.0,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    value * volume_factor(from) / volume_factor(to)
}

/// 질량 유량을 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    value * mass_factor(from) / mass_factor(to)
}
