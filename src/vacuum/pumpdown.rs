use tracing::debug;

use super::superheat::require_superheated;
use super::NormalConditions;
use crate::error::{CalcError, CalcResult};
use crate::gas::{blend, GasMixture};
use crate::properties::PropertyProvider;
use crate::units::pressure::PA_PER_MBAR;
use crate::units::{celsius_to_kelvin, convert_volume_flow, VolumeFlowUnit};

/// 배기 시간 기준 진공펌프 용량 산정 입력.
#[derive(Debug, Clone)]
pub struct PumpDownInput {
    pub mixture: GasMixture,
    /// 용기 체적(m³)
    pub volume_m3: f64,
    /// 초기 압력(mbar a)
    pub initial_pressure_mbar: f64,
    /// 목표 압력(mbar a)
    pub final_pressure_mbar: f64,
    pub temperature_c: f64,
    /// 배기 시간(s)
    pub duration_s: f64,
}

#[derive(Debug, Clone)]
pub struct PumpDownResult {
    /// 실제 조건 배기 속도(m³/h)
    pub flow_m3_h: f64,
    /// 표준 상태 환산(Nm³/h)
    pub flow_nm3_h: f64,
    /// 혼합물 몰질량(kg/mol)
    pub molar_mass_kg_per_mol: f64,
    /// 초기 압력에서의 혼합물 밀도(kg/m³)
    pub density_kg_m3: f64,
    /// 초기 압력에서의 혼합물 점도(Pa·s)
    pub viscosity_pa_s: f64,
    pub temperature_c: f64,
    /// 물이 포함된 경우 초기 압력의 포화온도(°C)
    pub saturation_temp_c: Option<f64>,
}

/// 등온 이상기체 배기식 `Q = (V/t)·ln(Pi/Pf)`로 필요 배기 속도를 구한다.
pub fn pumpdown_sizing(
    provider: &dyn PropertyProvider,
    input: &PumpDownInput,
    normal: &NormalConditions,
) -> CalcResult<PumpDownResult> {
    let pi_mbar = input.initial_pressure_mbar;
    let pf_mbar = input.final_pressure_mbar;
    if pf_mbar >= pi_mbar {
        return Err(CalcError::invalid_input(format!(
            "목표 압력 {pf_mbar} mbar는 초기 압력 {pi_mbar} mbar보다 낮아야 합니다"
        )));
    }
    if !(pf_mbar > 0.0) {
        return Err(CalcError::domain("목표 압력(mbar)", pf_mbar));
    }
    if !(input.volume_m3 > 0.0) {
        return Err(CalcError::domain("용기 체적", input.volume_m3));
    }
    if !(input.duration_s > 0.0) {
        return Err(CalcError::domain("배기 시간", input.duration_s));
    }
    let t_k = celsius_to_kelvin(input.temperature_c);
    if !(t_k > 0.0) {
        return Err(CalcError::domain("온도(K)", t_k));
    }

    let saturation_temp_c = if input.mixture.contains_water() {
        Some(require_superheated(provider, input.temperature_c, pi_mbar)?)
    } else {
        None
    };

    let pi_pa = pi_mbar * PA_PER_MBAR;
    let pf_pa = pf_mbar * PA_PER_MBAR;
    let q_m3_s = input.volume_m3 / input.duration_s * (pi_pa / pf_pa).ln();
    let flow_m3_h = convert_volume_flow(
        q_m3_s,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::CubicMeterPerHour,
    );
    let flow_nm3_h = normal.to_normal(flow_m3_h, pi_pa, t_k);

    let props = blend(provider, &input.mixture, t_k, pi_pa)?;
    debug!(flow_m3_h, flow_nm3_h, "배기 용량");

    Ok(PumpDownResult {
        flow_m3_h,
        flow_nm3_h,
        molar_mass_kg_per_mol: props.molar_mass_kg_per_mol,
        density_kg_m3: props.density_kg_m3,
        viscosity_pa_s: props.viscosity_pa_s,
        temperature_c: input.temperature_c,
        saturation_temp_c,
    })
}
