//! 증기압축 냉동/히트펌프 사이클 해석.
//!
//! 상태점은 1 → 2 → 2x → 3 → 4 순서로만 결정된다. 각 상태는 앞 상태의 물성에 의존한다.
//! - 1: 증발온도 포화증기
//! - 2: 압축기 출구(응축압력)
//! - 2x: 응축압력 포화증기(과열 제거점, 참고용)
//! - 3: 응축압력 포화액
//! - 4: 등엔탈피 팽창 후(증발압력)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::properties::{FluidState, PropertyLookupError, PropertyProvider, StatePair};
use crate::units::celsius_to_kelvin;

/// 압축 과정 모델.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompressionModel {
    /// s2 = s1 + 고정 엔트로피 증가 [J/kg·K]
    FixedEntropyRise { j_per_kgk: f64 },
    /// h2 = h1 + (h2s - h1)/η
    Isentropic { efficiency: f64 },
}

impl Default for CompressionModel {
    fn default() -> Self {
        CompressionModel::FixedEntropyRise { j_per_kgk: 100.0 }
    }
}

#[derive(Debug, Clone)]
pub struct RefrigerationCycleInput {
    pub refrigerant: String,
    pub evaporator_temp_c: f64,
    pub condenser_temp_c: f64,
    /// 압축기 동력(kW)
    pub compressor_power_kw: f64,
    pub compression: CompressionModel,
}

/// 사이클 위 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleState {
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub enthalpy_j_per_kg: f64,
    pub entropy_j_per_kgk: f64,
    pub quality: Option<f64>,
}

impl From<&FluidState> for CycleState {
    fn from(st: &FluidState) -> Self {
        Self {
            pressure_pa: st.pressure_pa,
            temperature_k: st.temperature_k,
            enthalpy_j_per_kg: st.enthalpy_j_per_kg,
            entropy_j_per_kgk: st.entropy_j_per_kgk,
            quality: st.quality,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefrigerationCycleResult {
    pub evaporator_pressure_pa: f64,
    pub condenser_pressure_pa: f64,
    pub state1: CycleState,
    pub state2: CycleState,
    pub state2x: CycleState,
    pub state3: CycleState,
    pub state4: CycleState,
    /// 난방 COP = (h2-h3)/(h2-h1)
    pub cop: f64,
    /// 냉매 유량(kg/s)
    pub mass_flow_kg_s: f64,
    /// 응축기 방열량(kW)
    pub heat_load_kw: f64,
    /// 증발기 흡열량(kW)
    pub cooling_load_kw: f64,
    /// 온도 상승폭(K)
    pub temperature_lift_k: f64,
}

impl RefrigerationCycleResult {
    /// 1, 2, 2x, 3, 4 순서의 상태점.
    pub fn states(&self) -> [(&'static str, CycleState); 5] {
        [
            ("1", self.state1),
            ("2", self.state2),
            ("2x", self.state2x),
            ("3", self.state3),
            ("4", self.state4),
        ]
    }
}

/// 사이클 상태점과 성능을 계산한다. 물성 제공자가 풀지 못한 상태는 그대로 오류로 전달한다.
pub fn solve_refrigeration_cycle(
    provider: &dyn PropertyProvider,
    input: &RefrigerationCycleInput,
) -> CalcResult<RefrigerationCycleResult> {
    let fluid = input.refrigerant.as_str();
    let t_evap = celsius_to_kelvin(input.evaporator_temp_c);
    let t_cond = celsius_to_kelvin(input.condenser_temp_c);
    if t_cond <= t_evap {
        return Err(CalcError::domain(
            "응축-증발 온도차",
            input.condenser_temp_c - input.evaporator_temp_c,
        ));
    }

    // 1: 증발기 출구 포화증기
    let s1 = provider.lookup(fluid, StatePair::TemperatureQuality { t_k: t_evap, quality: 1.0 })?;
    let p_evap = provider
        .lookup(fluid, StatePair::TemperatureQuality { t_k: t_evap, quality: 0.0 })?
        .pressure_pa;
    let p_cond = provider
        .lookup(fluid, StatePair::TemperatureQuality { t_k: t_cond, quality: 0.0 })?
        .pressure_pa;

    // 2: 압축기 출구
    let s2 = match input.compression {
        CompressionModel::FixedEntropyRise { j_per_kgk } => provider.lookup(
            fluid,
            StatePair::PressureEntropy {
                p_pa: p_cond,
                s_j_per_kgk: s1.entropy_j_per_kgk + j_per_kgk,
            },
        )?,
        CompressionModel::Isentropic { efficiency } => {
            if !(efficiency > 0.0 && efficiency <= 1.0) {
                return Err(CalcError::domain("등엔트로피 효율", efficiency));
            }
            let ideal = provider.lookup(
                fluid,
                StatePair::PressureEntropy {
                    p_pa: p_cond,
                    s_j_per_kgk: s1.entropy_j_per_kgk,
                },
            )?;
            let h2 = s1.enthalpy_j_per_kg
                + (ideal.enthalpy_j_per_kg - s1.enthalpy_j_per_kg) / efficiency;
            provider.lookup(fluid, StatePair::PressureEnthalpy { p_pa: p_cond, h_j_per_kg: h2 })?
        }
    };

    // 2x: 과열 제거점, 3: 응축기 출구 포화액
    let s2x = provider.lookup(fluid, StatePair::PressureQuality { p_pa: p_cond, quality: 1.0 })?;
    let s3 = provider.lookup(fluid, StatePair::PressureQuality { p_pa: p_cond, quality: 0.0 })?;

    // 4: 등엔탈피 팽창. 건도는 증발압력에서 (P, H)로 구한다.
    let h4 = s3.enthalpy_j_per_kg;
    let throttled = provider.lookup(fluid, StatePair::PressureEnthalpy { p_pa: p_evap, h_j_per_kg: h4 })?;
    let q4 = throttled.quality.ok_or_else(|| {
        PropertyLookupError::state(
            fluid,
            StatePair::PressureEnthalpy { p_pa: p_evap, h_j_per_kg: h4 },
            "팽창 후 상태가 2상 영역이 아닙니다",
        )
    })?;
    let s4 = provider.lookup(fluid, StatePair::PressureQuality { p_pa: p_evap, quality: q4 })?;
    let state4 = CycleState {
        pressure_pa: p_evap,
        temperature_k: s4.temperature_k,
        enthalpy_j_per_kg: h4,
        entropy_j_per_kgk: s4.entropy_j_per_kgk,
        quality: Some(q4),
    };

    let (h1, h2, h3) = (s1.enthalpy_j_per_kg, s2.enthalpy_j_per_kg, s3.enthalpy_j_per_kg);
    let compressor_work = h2 - h1;
    if !(compressor_work > 0.0) {
        return Err(CalcError::domain("압축기 엔탈피 상승(h2-h1)", compressor_work));
    }
    let cop = (h2 - h3) / compressor_work;
    let mass_flow_kg_s = input.compressor_power_kw * 1000.0 / compressor_work;
    let heat_load_kw = mass_flow_kg_s * (h2 - h3) / 1000.0;
    let cooling_load_kw = mass_flow_kg_s * (h1 - h4) / 1000.0;
    debug!(fluid, h1, h2, h3, h4, cop, mass_flow_kg_s, "냉동 사이클 해석");

    Ok(RefrigerationCycleResult {
        evaporator_pressure_pa: p_evap,
        condenser_pressure_pa: p_cond,
        state1: CycleState::from(&s1),
        state2: CycleState::from(&s2),
        state2x: CycleState::from(&s2x),
        state3: CycleState::from(&s3),
        state4,
        cop,
        mass_flow_kg_s,
        heat_load_kw,
        cooling_load_kw,
        temperature_lift_k: t_cond - t_evap,
    })
}
