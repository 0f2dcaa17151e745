use tracing::warn;

use crate::air::{psychrometric_properties, PsychrometricState};
use crate::error::{CalcError, CalcResult};
use crate::properties::PropertyProvider;

/// 물 비열 기본값 [kJ/kg·K]
pub const DEFAULT_WATER_CP: f64 = 4.18;

/// 냉각탑(증발식) 성능 계산을 위한 입력 값.
#[derive(Debug, Clone)]
pub struct CoolingTowerInput {
    /// 열부하(kW)
    pub heat_load_kw: f64,
    /// 순환수 비열(kJ/kg·K)
    pub water_cp_kj_per_kgk: f64,
    /// 순환수 입구 온도(°C)
    pub water_in_c: f64,
    /// 대기 습구 온도(°C)
    pub wet_bulb_c: f64,
    /// 접근(°C) = 출구수온 - 습구온도
    pub approach_c: f64,
}

/// 냉각탑 성능 계산 결과.
#[derive(Debug, Clone)]
pub struct CoolingTowerResult {
    /// 순환수 질량유량(kg/s)
    pub water_flow_kg_s: f64,
    /// 효율 = Range / (Range + Approach)
    pub effectiveness: f64,
    /// Range = Tin - Tout
    pub range_c: f64,
    /// 순환수 출구 온도(°C)
    pub water_out_c: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 냉각탑 물 손실(kg/h).
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingTowerLosses {
    pub evaporation_kg_h: f64,
    pub drift_kg_h: f64,
    pub blowdown_kg_h: f64,
}

impl CoolingTowerLosses {
    /// 보충수 = 증발 + 비산 + 블로다운
    pub fn makeup_kg_h(&self) -> f64 {
        self.evaporation_kg_h + self.drift_kg_h + self.blowdown_kg_h
    }
}

/// 출구수온, Range, 필요 순환수량, 효율을 계산한다.
pub fn compute_cooling_tower(input: &CoolingTowerInput) -> CalcResult<CoolingTowerResult> {
    if !(input.water_cp_kj_per_kgk > 0.0) {
        return Err(CalcError::domain("물 비열", input.water_cp_kj_per_kgk));
    }
    let water_out_c = input.wet_bulb_c + input.approach_c;
    let range_c = input.water_in_c - water_out_c;
    if !(range_c > 0.0) {
        return Err(CalcError::domain("냉각탑 Range(입구-출구 온도차)", range_c));
    }
    let water_flow_kg_s = input.heat_load_kw / (input.water_cp_kj_per_kgk * range_c);
    let effectiveness = range_c / (range_c + input.approach_c);

    let mut warnings = Vec::new();
    if input.approach_c < 0.0 {
        warnings
            .push("접근(Approach)이 음수입니다. 습구 온도보다 낮은 냉각은 불가능합니다.".into());
    } else if input.approach_c < 2.0 {
        warnings.push("접근이 2°C 미만입니다. 실제 운전에서 달성하기 어려울 수 있습니다.".into());
    }
    for w in &warnings {
        warn!("{w}");
    }

    Ok(CoolingTowerResult {
        water_flow_kg_s,
        effectiveness,
        range_c,
        water_out_c,
        warnings,
    })
}

/// 증발/비산/블로다운 손실. 농축배수(CoC)는 1보다 커야 한다.
pub fn compute_cooling_tower_losses(
    water_flow_kg_s: f64,
    range_c: f64,
    cycles_of_concentration: f64,
) -> CalcResult<CoolingTowerLosses> {
    if !(cycles_of_concentration > 1.0) {
        return Err(CalcError::domain("농축배수(CoC)", cycles_of_concentration));
    }
    let flow_kg_h = water_flow_kg_s * 3600.0;
    let evaporation_kg_h = 0.000_85 * flow_kg_h * range_c;
    Ok(CoolingTowerLosses {
        evaporation_kg_h,
        drift_kg_h: 0.002 * flow_kg_h,
        blowdown_kg_h: evaporation_kg_h / (cycles_of_concentration - 1.0),
    })
}

/// 현장 조건부터 손실까지 한 번에 계산하기 위한 입력.
#[derive(Debug, Clone)]
pub struct CoolingTowerSizingInput {
    pub altitude_m: f64,
    pub dry_bulb_c: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    pub heat_load_kw: f64,
    pub water_in_c: f64,
    pub approach_c: f64,
    pub cycles_of_concentration: f64,
    pub water_cp_kj_per_kgk: f64,
}

#[derive(Debug, Clone)]
pub struct CoolingTowerSizing {
    pub air: PsychrometricState,
    pub performance: CoolingTowerResult,
    pub losses: CoolingTowerLosses,
}

/// 고도·건구온도·습도 → 습구온도 → 성능 → 손실 순으로 계산한다.
pub fn size_cooling_tower(
    provider: &dyn PropertyProvider,
    input: &CoolingTowerSizingInput,
) -> CalcResult<CoolingTowerSizing> {
    let air = psychrometric_properties(
        provider,
        input.dry_bulb_c,
        input.relative_humidity_pct,
        input.altitude_m,
    )?;
    let performance = compute_cooling_tower(&CoolingTowerInput {
        heat_load_kw: input.heat_load_kw,
        water_cp_kj_per_kgk: input.water_cp_kj_per_kgk,
        water_in_c: input.water_in_c,
        wet_bulb_c: air.wet_bulb_c,
        approach_c: input.approach_c,
    })?;
    let losses = compute_cooling_tower_losses(
        performance.water_flow_kg_s,
        performance.range_c,
        input.cycles_of_concentration,
    )?;
    Ok(CoolingTowerSizing {
        air,
        performance,
        losses,
    })
}
