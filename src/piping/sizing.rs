//! 후보 내경을 일정 간격으로 훑어 유속/압력강하 조건을 만족하는 배관 크기를 찾는다.

use tracing::{debug, warn};

use super::fittings::FittingInventory;
use super::friction::solve_colebrook;
use super::hydraulics::{equivalent_length, head_loss, head_to_pressure_mbar, velocity_and_reynolds};
use super::insulation::{required_thickness, InsulationInput};
use super::materials;
use crate::error::{CalcError, CalcResult};
use crate::properties::{PropertyProvider, StatePair};
use crate::units::{celsius_to_kelvin, convert_mass_flow, MassFlowUnit};
use crate::units::pressure::PA_PER_BAR;

/// 보온 조건(선택)
#[derive(Debug, Clone)]
pub struct InsulationSpec {
    pub ambient_temp_c: f64,
    /// 허용 열손실 [W/m]
    pub max_heat_loss_w_per_m: f64,
    /// 보온재 열전도율 [W/m·K]
    pub conductivity_w_per_mk: f64,
}

#[derive(Debug, Clone)]
pub struct PipeSizingInput {
    pub fluid: String,
    /// 질량유량 [kg/h]
    pub mass_flow_kg_per_h: f64,
    /// 압력 [bar a]
    pub pressure_bar_abs: f64,
    pub temperature_c: f64,
    /// 직관 길이 [m]
    pub straight_length_m: f64,
    pub min_diameter_mm: f64,
    pub max_diameter_mm: f64,
    pub step_mm: f64,
    /// 배관 재질 이름(거칠기 표 키)
    pub material: String,
    pub fittings: FittingInventory,
    pub min_velocity_m_s: f64,
    pub max_velocity_m_s: f64,
    pub max_pressure_drop_mbar: f64,
    pub insulation: Option<InsulationSpec>,
}

/// 후보 내경 한 행.
#[derive(Debug, Clone)]
pub struct PipeSizingRow {
    pub diameter_mm: f64,
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub friction_converged: bool,
    /// 부속류 등가길이 [m]
    pub equivalent_length_m: f64,
    pub total_length_m: f64,
    pub pressure_drop_mbar: f64,
    /// 보온 두께 [mm]. 보온 조건이 없으면 `None`.
    pub insulation_mm: Option<f64>,
    pub acceptable: bool,
}

#[derive(Debug, Clone)]
pub struct PipeSizingResult {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub roughness_m: f64,
    /// 내경 오름차순
    pub rows: Vec<PipeSizingRow>,
    /// 조건을 만족하는 가장 작은 내경 행의 인덱스
    pub recommended: Option<usize>,
    pub warnings: Vec<String>,
}

impl PipeSizingResult {
    pub fn recommendation(&self) -> Option<&PipeSizingRow> {
        self.recommended.and_then(|i| self.rows.get(i))
    }
}

fn candidate_diameters(min_mm: f64, max_mm: f64, step_mm: f64) -> CalcResult<Vec<f64>> {
    if !(min_mm > 0.0) {
        return Err(CalcError::domain("최소 내경", min_mm));
    }
    if !(step_mm > 0.0) {
        return Err(CalcError::domain("내경 간격", step_mm));
    }
    if max_mm < min_mm {
        return Err(CalcError::invalid_input(format!(
            "최대 내경 {max_mm} mm가 최소 내경 {min_mm} mm보다 작습니다"
        )));
    }
    // 누적 오차 없이 min + i·step ≤ max
    let count = ((max_mm - min_mm) / step_mm + 1e-9).floor() as usize + 1;
    Ok((0..count).map(|i| min_mm + i as f64 * step_mm).collect())
}

/// 후보 내경 전체에 대해 유속, 압력강하, 보온 두께를 계산한다.
pub fn size_pipe(provider: &dyn PropertyProvider, input: &PipeSizingInput) -> CalcResult<PipeSizingResult> {
    let roughness_m = materials::roughness_m(&input.material).ok_or_else(|| {
        CalcError::invalid_input(format!("알 수 없는 배관 재질: {}", input.material))
    })?;
    let diameters = candidate_diameters(input.min_diameter_mm, input.max_diameter_mm, input.step_mm)?;

    let state = provider.lookup(
        &input.fluid,
        StatePair::TemperaturePressure {
            t_k: celsius_to_kelvin(input.temperature_c),
            p_pa: input.pressure_bar_abs * PA_PER_BAR,
        },
    )?;
    let density = state.density_kg_m3;
    let viscosity = state.viscosity_pa_s;
    let mass_flow_kg_s = convert_mass_flow(
        input.mass_flow_kg_per_h,
        MassFlowUnit::KgPerHour,
        MassFlowUnit::KgPerSecond,
    );

    let mut rows = Vec::with_capacity(diameters.len());
    let mut warnings = Vec::new();
    for d_mm in diameters {
        let d = d_mm / 1000.0;
        let flow = velocity_and_reynolds(mass_flow_kg_s, density, viscosity, d)?;
        let colebrook = solve_colebrook(flow.reynolds, roughness_m / d)?;
        if !colebrook.converged {
            warnings.push(format!(
                "내경 {d_mm:.1} mm: 마찰계수 반복이 수렴하지 않아 최선 추정치를 사용했습니다."
            ));
        }
        let eq_len = equivalent_length(&input.fittings, d).total_m;
        let total_len = input.straight_length_m + eq_len;
        let dp = head_to_pressure_mbar(
            head_loss(colebrook.friction_factor, total_len, flow.velocity_m_s, d),
            density,
        );
        let insulation_mm = input.insulation.as_ref().map(|spec| {
            required_thickness(&InsulationInput {
                diameter_m: d,
                fluid_temp_c: input.temperature_c,
                ambient_temp_c: spec.ambient_temp_c,
                max_heat_loss_w_per_m: spec.max_heat_loss_w_per_m,
                conductivity_w_per_mk: spec.conductivity_w_per_mk,
            })
            .thickness_mm
        });
        let acceptable = input.min_velocity_m_s <= flow.velocity_m_s
            && flow.velocity_m_s <= input.max_velocity_m_s
            && dp <= input.max_pressure_drop_mbar;
        debug!(d_mm, v = flow.velocity_m_s, dp, acceptable, "배관 후보");
        rows.push(PipeSizingRow {
            diameter_mm: d_mm,
            velocity_m_s: flow.velocity_m_s,
            reynolds: flow.reynolds,
            friction_factor: colebrook.friction_factor,
            friction_converged: colebrook.converged,
            equivalent_length_m: eq_len,
            total_length_m: total_len,
            pressure_drop_mbar: dp,
            insulation_mm,
            acceptable,
        });
    }

    let recommended = rows.iter().position(|r| r.acceptable);
    if recommended.is_none() {
        warn!(fluid = %input.fluid, "조건을 만족하는 배관 내경 없음");
        warnings.push("조건을 만족하는 내경이 없습니다. 제약 조건을 조정하세요.".into());
    }

    Ok(PipeSizingResult {
        density_kg_m3: density,
        viscosity_pa_s: viscosity,
        roughness_m,
        rows,
        recommended,
        warnings,
    })
}
