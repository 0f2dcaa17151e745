use tracing::{debug, warn};

use crate::error::{CalcError, CalcResult};
use crate::piping::hydraulics::{head_loss, velocity_and_reynolds, GRAVITY};
use crate::piping::solve_explicit;
use crate::properties::{PropertyProvider, StatePair};
use crate::units::pressure::PA_PER_BAR;
use crate::units::{celsius_to_kelvin, convert_volume_flow, VolumeFlowUnit};

/// 펌프 계통 계산 입력.
#[derive(Debug, Clone)]
pub struct PumpSystemInput {
    pub fluid: String,
    /// 요구 유량(L/min)
    pub demand_flow_l_min: f64,
    /// 배관 전체 길이(m)
    pub pipe_length_m: f64,
    /// 배관 내경(m)
    pub diameter_m: f64,
    pub temperature_c: f64,
    /// 유체 압력(bar a)
    pub pressure_bar: f64,
    /// 고도 점 목록(m). N개 점이 길이가 같은 N-1개 구간을 만든다.
    pub elevations_m: Vec<f64>,
    /// 펌프 정격 압력(bar)
    pub pump_rated_pressure_bar: f64,
    /// 펌프 최대 유량(L/min)
    pub pump_max_flow_l_min: f64,
}

/// 곡선 위 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub flow_l_min: f64,
    /// 계통 수두(m). 유량 0에서는 +∞로 둔다.
    pub system_head_m: f64,
    pub pump_head_m: f64,
}

/// 펌프 계통 계산 결과.
#[derive(Debug, Clone)]
pub struct PumpSystemResult {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// 마찰 수두손실 합(m)
    pub friction_head_m: f64,
    /// 마찰 + 고도차 수두(m)
    pub total_head_m: f64,
    /// 필요 압력(Pa)
    pub required_pressure_pa: f64,
    pub flow_ok: bool,
    pub pressure_ok: bool,
    /// 계통 곡선과 2차 펌프 곡선(시각화용)
    pub curve: Vec<CurvePoint>,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

impl PumpSystemResult {
    pub fn required_pressure_bar(&self) -> f64 {
        self.required_pressure_pa / PA_PER_BAR
    }

    pub fn feasible(&self) -> bool {
        self.flow_ok && self.pressure_ok
    }
}

fn l_min_to_m3_s(q: f64) -> f64 {
    convert_volume_flow(q, VolumeFlowUnit::LiterPerMinute, VolumeFlowUnit::CubicMeterPerSecond)
}

/// 구간별 마찰/고도 수두를 합산하고 펌프 정격과 비교한다.
pub fn compute_pump_system(
    provider: &dyn PropertyProvider,
    input: &PumpSystemInput,
) -> CalcResult<PumpSystemResult> {
    if input.elevations_m.len() < 2 {
        return Err(CalcError::invalid_input(
            "고도 점은 최소 2개(시작, 끝) 필요합니다",
        ));
    }
    if !(input.pump_max_flow_l_min > 0.0) {
        return Err(CalcError::domain("펌프 최대 유량", input.pump_max_flow_l_min));
    }
    if !(input.pipe_length_m >= 0.0) {
        return Err(CalcError::domain("배관 길이", input.pipe_length_m));
    }

    let state = provider.lookup(
        &input.fluid,
        StatePair::TemperaturePressure {
            t_k: celsius_to_kelvin(input.temperature_c),
            p_pa: input.pressure_bar * PA_PER_BAR,
        },
    )?;
    let rho = state.density_kg_m3;
    let mu = state.viscosity_pa_s;
    let d = input.diameter_m;

    let q = l_min_to_m3_s(input.demand_flow_l_min);
    let flow = velocity_and_reynolds(q * rho, rho, mu, d)?;
    let f = solve_explicit(flow.reynolds)?;

    let segments = input.elevations_m.len() - 1;
    let seg_length = input.pipe_length_m / segments as f64;
    let mut friction_head = 0.0;
    let mut total_head = 0.0;
    let mut total_dp = 0.0;
    for pair in input.elevations_m.windows(2) {
        let h_f = head_loss(f, seg_length, flow.velocity_m_s, d);
        let dz = pair[1] - pair[0];
        friction_head += h_f;
        total_head += h_f + dz;
        total_dp += (h_f + dz) * rho * GRAVITY;
    }
    debug!(segments, friction_head, total_head, total_dp, "펌프 계통 수두");

    let flow_ok = input.demand_flow_l_min <= input.pump_max_flow_l_min;
    let pressure_ok = total_dp <= input.pump_rated_pressure_bar * PA_PER_BAR;
    let mut warnings = Vec::new();
    if !flow_ok {
        warnings.push(format!(
            "요구 유량 {:.1} L/min이 펌프 최대 유량 {:.1} L/min을 초과합니다.",
            input.demand_flow_l_min, input.pump_max_flow_l_min
        ));
    }
    if !pressure_ok {
        warnings.push(format!(
            "필요 압력 {:.3} bar가 펌프 정격 {:.3} bar를 초과합니다.",
            total_dp / PA_PER_BAR,
            input.pump_rated_pressure_bar
        ));
    }
    for w in &warnings {
        warn!("{w}");
    }

    let curve = build_curves(input, rho, mu)?;

    Ok(PumpSystemResult {
        density_kg_m3: rho,
        viscosity_pa_s: mu,
        velocity_m_s: flow.velocity_m_s,
        reynolds: flow.reynolds,
        friction_factor: f,
        friction_head_m: friction_head,
        total_head_m: total_head,
        required_pressure_pa: total_dp,
        flow_ok,
        pressure_ok,
        curve,
        warnings,
    })
}

const CURVE_SEGMENTS: u32 = 20;

/// 곡선 표본 유량(L/min). 최대 유량이 20 L/min 이상이면 정수 간격, 그보다 작으면 q_max/20 간격.
fn curve_flows(q_max: f64) -> Vec<f64> {
    let segments = f64::from(CURVE_SEGMENTS);
    if q_max >= segments {
        let step = (q_max / segments).floor() as usize;
        (0..=q_max.floor() as u64).step_by(step).map(|q| q as f64).collect()
    } else {
        (0..=CURVE_SEGMENTS)
            .map(|i| q_max * f64::from(i) / segments)
            .collect()
    }
}

/// 0 ~ 최대 유량을 약 20등분하여 계통/펌프 곡선을 만든다.
fn build_curves(input: &PumpSystemInput, rho: f64, mu: f64) -> CalcResult<Vec<CurvePoint>> {
    let q_max = input.pump_max_flow_l_min;
    let elevation_total = match (input.elevations_m.first(), input.elevations_m.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    };
    let h_max = input.pump_rated_pressure_bar * PA_PER_BAR / (rho * GRAVITY);

    let mut curve = Vec::new();
    for q_l_min in curve_flows(q_max) {
        let system_head_m = if q_l_min == 0.0 {
            f64::INFINITY
        } else {
            let flow = velocity_and_reynolds(l_min_to_m3_s(q_l_min) * rho, rho, mu, input.diameter_m)?;
            let f = solve_explicit(flow.reynolds)?;
            head_loss(f, input.pipe_length_m, flow.velocity_m_s, input.diameter_m) + elevation_total
        };
        let ratio = q_l_min / q_max;
        curve.push(CurvePoint {
            flow_l_min: q_l_min,
            system_head_m,
            pump_head_m: h_max * (1.0 - ratio * ratio),
        });
    }
    Ok(curve)
}
