//! T-s / P-h 선도용 수치 데이터. 그리기는 호출자가 담당한다.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::properties::{FluidState, PropertyProvider, StatePair, SubstanceConstant};
use crate::units::celsius_to_kelvin;
use crate::units::pressure::PA_PER_BAR;

pub const DEFAULT_PATH_POINTS: usize = 50;

/// 포화 돔 위 한 온도의 액/증기 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub liquid_enthalpy_j_per_kg: f64,
    pub vapor_enthalpy_j_per_kg: f64,
    pub liquid_entropy_j_per_kgk: f64,
    pub vapor_entropy_j_per_kgk: f64,
}

/// 과정 종류. 끝값의 의미가 종류마다 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    /// 끝값 = 온도(°C)
    Isobaric,
    /// 끝값 = 압력(bar)
    Isothermal,
    /// 끝값 = 압력(bar)
    Isenthalpic,
}

fn linspace(start: f64, end: f64, points: usize) -> CalcResult<Vec<f64>> {
    if points < 2 {
        return Err(CalcError::invalid_input(format!(
            "점 개수는 2 이상이어야 합니다(입력 {points})"
        )));
    }
    let step = (end - start) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| if i == points - 1 { end } else { start + step * i as f64 })
        .collect())
}

/// 삼중점+1 K부터 임계점-1 K까지 포화 액/증기 물성을 표본화한다.
pub fn saturation_dome(
    provider: &dyn PropertyProvider,
    fluid: &str,
    points: usize,
) -> CalcResult<Vec<SaturationPoint>> {
    let t_triple = provider.constant(fluid, SubstanceConstant::TriplePointTemperature)?;
    let t_crit = provider.constant(fluid, SubstanceConstant::CriticalTemperature)?;
    linspace(t_triple + 1.0, t_crit - 1.0, points)?
        .into_iter()
        .map(|t_k| {
            let liquid = provider.lookup(fluid, StatePair::TemperatureQuality { t_k, quality: 0.0 })?;
            let vapor = provider.lookup(fluid, StatePair::TemperatureQuality { t_k, quality: 1.0 })?;
            Ok(SaturationPoint {
                temperature_k: t_k,
                pressure_pa: liquid.pressure_pa,
                liquid_enthalpy_j_per_kg: liquid.enthalpy_j_per_kg,
                vapor_enthalpy_j_per_kg: vapor.enthalpy_j_per_kg,
                liquid_entropy_j_per_kgk: liquid.entropy_j_per_kgk,
                vapor_entropy_j_per_kgk: vapor.entropy_j_per_kgk,
            })
        })
        .collect()
}

/// 시작 상태(°C, bar)에서 지정 과정을 따라 끝값까지의 상태 목록을 만든다.
pub fn process_path(
    provider: &dyn PropertyProvider,
    fluid: &str,
    start_t_c: f64,
    start_p_bar: f64,
    kind: ProcessKind,
    end_value: f64,
    points: usize,
) -> CalcResult<Vec<FluidState>> {
    let t_k = celsius_to_kelvin(start_t_c);
    let p_pa = start_p_bar * PA_PER_BAR;
    match kind {
        ProcessKind::Isobaric => linspace(t_k, celsius_to_kelvin(end_value), points)?
            .into_iter()
            .map(|t| Ok(provider.lookup(fluid, StatePair::TemperaturePressure { t_k: t, p_pa })?))
            .collect(),
        ProcessKind::Isothermal => linspace(p_pa, end_value * PA_PER_BAR, points)?
            .into_iter()
            .map(|p| Ok(provider.lookup(fluid, StatePair::TemperaturePressure { t_k, p_pa: p })?))
            .collect(),
        ProcessKind::Isenthalpic => {
            let pressures = linspace(p_pa, end_value * PA_PER_BAR, points)?;
            let h = provider
                .lookup(fluid, StatePair::TemperaturePressure { t_k, p_pa })?
                .enthalpy_j_per_kg;
            pressures
                .into_iter()
                .map(|p| {
                    Ok(provider.lookup(fluid, StatePair::PressureEnthalpy { p_pa: p, h_j_per_kg: h })?)
                })
                .collect()
        }
    }
}
