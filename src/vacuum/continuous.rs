use tracing::debug;

use super::superheat::require_superheated;
use super::NormalConditions;
use crate::error::{CalcError, CalcResult};
use crate::gas::{blend, GasMixture};
use crate::properties::PropertyProvider;
use crate::units::pressure::PA_PER_MBAR;
use crate::units::{
    celsius_to_kelvin, convert_mass_flow, convert_volume_flow, MassFlowUnit, VolumeFlowUnit,
};

/// 체적유량 환산에 쓰는 기체상수 [J/(mol·K)]
const R: f64 = 8.314;
const STEAM: &str = "Water";
const CO2: &str = "CO2";

/// 연속 운전(증기 + 비응축가스 유입) 진공펌프 용량 산정 입력.
#[derive(Debug, Clone)]
pub struct ContinuousInput {
    /// 용기 압력(mbar a)
    pub pressure_mbar: f64,
    pub temperature_c: f64,
    /// 증기 유량(kg/h)
    pub steam_kg_h: f64,
    /// CO₂ 유량(kg/h)
    pub co2_kg_h: f64,
}

#[derive(Debug, Clone)]
pub struct ContinuousResult {
    /// 실제 조건 체적유량(m³/h)
    pub flow_m3_h: f64,
    /// 표준 상태 환산(Nm³/h)
    pub flow_nm3_h: f64,
    pub steam_mole_fraction: f64,
    pub co2_mole_fraction: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    /// 증기가 있으면 용기 압력의 포화온도(°C)
    pub saturation_temp_c: Option<f64>,
}

/// 몰 수지와 이상기체 법칙 `V̇ = n·R·T/P`로 흡입 체적유량을 구한다.
pub fn continuous_operation_sizing(
    provider: &dyn PropertyProvider,
    input: &ContinuousInput,
    normal: &NormalConditions,
) -> CalcResult<ContinuousResult> {
    if !(input.pressure_mbar > 0.0) {
        return Err(CalcError::domain("용기 압력(mbar)", input.pressure_mbar));
    }
    if input.steam_kg_h < 0.0 || input.co2_kg_h < 0.0 {
        return Err(CalcError::invalid_input("유량은 음수일 수 없습니다"));
    }
    if input.steam_kg_h + input.co2_kg_h <= 0.0 {
        return Err(CalcError::invalid_input("증기와 CO₂ 유량이 모두 0일 수 없습니다"));
    }
    let t_k = celsius_to_kelvin(input.temperature_c);
    if !(t_k > 0.0) {
        return Err(CalcError::domain("온도(K)", t_k));
    }

    let saturation_temp_c = if input.steam_kg_h > 0.0 {
        Some(require_superheated(provider, input.temperature_c, input.pressure_mbar)?)
    } else {
        None
    };

    let to_kg_s = |kg_h| convert_mass_flow(kg_h, MassFlowUnit::KgPerHour, MassFlowUnit::KgPerSecond);
    let steam_kg_s = to_kg_s(input.steam_kg_h);
    let co2_kg_s = to_kg_s(input.co2_kg_h);

    let n_steam = steam_kg_s / provider.molar_mass(STEAM)?;
    let n_co2 = co2_kg_s / provider.molar_mass(CO2)?;
    let n_total = n_steam + n_co2;

    let p_pa = input.pressure_mbar * PA_PER_MBAR;
    let flow_m3_h = convert_volume_flow(
        n_total * R * t_k / p_pa,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::CubicMeterPerHour,
    );
    let flow_nm3_h = normal.to_normal(flow_m3_h, p_pa, t_k);

    let mixture = GasMixture::new(vec![
        (STEAM.to_string(), steam_kg_s),
        (CO2.to_string(), co2_kg_s),
    ]);
    let props = blend(provider, &mixture, t_k, p_pa)?;
    debug!(flow_m3_h, flow_nm3_h, n_total, "연속 운전 흡입 유량");

    Ok(ContinuousResult {
        flow_m3_h,
        flow_nm3_h,
        steam_mole_fraction: n_steam / n_total,
        co2_mole_fraction: n_co2 / n_total,
        density_kg_m3: props.density_kg_m3,
        viscosity_pa_s: props.viscosity_pa_s,
        saturation_temp_c,
    })
}
