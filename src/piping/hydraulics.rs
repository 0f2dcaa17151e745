//! Darcy-Weisbach 기반 배관 수력 계산. 순수 산술만 수행하고 마찰계수는 [`super::friction`]에 맡긴다.

use std::f64::consts::PI;

use super::fittings::{FittingInventory, FittingKind};
use crate::error::{CalcError, CalcResult};

/// 중력가속도 [m/s²]
pub const GRAVITY: f64 = 9.81;

/// 부속류 등가길이 합계와 종류별 분해.
#[derive(Debug, Clone, PartialEq)]
pub struct EquivalentLength {
    /// 합계 [m]
    pub total_m: f64,
    /// 모든 부속 종류를 빠짐없이 담는다(없으면 0).
    pub breakdown: Vec<(FittingKind, f64)>,
}

impl EquivalentLength {
    pub fn of(&self, kind: FittingKind) -> f64 {
        self.breakdown
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, le)| *le)
            .unwrap_or(0.0)
    }
}

/// 유속과 레이놀즈수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCondition {
    /// 유속 [m/s]
    pub velocity_m_s: f64,
    pub reynolds: f64,
}

/// Σ(개수 × L/D × 직경)
pub fn equivalent_length(inventory: &FittingInventory, diameter_m: f64) -> EquivalentLength {
    let breakdown: Vec<(FittingKind, f64)> = FittingKind::ALL
        .into_iter()
        .map(|kind| {
            let le = f64::from(inventory.count(kind)) * kind.length_ratio() * diameter_m;
            (kind, le)
        })
        .collect();
    let total_m = breakdown.iter().map(|(_, le)| le).sum();
    EquivalentLength { total_m, breakdown }
}

/// 수두손실 [m] = f·L·v²/(2·D·g)
pub fn head_loss(friction_factor: f64, length_m: f64, velocity_m_s: f64, diameter_m: f64) -> f64 {
    friction_factor * length_m * velocity_m_s * velocity_m_s / (2.0 * diameter_m * GRAVITY)
}

/// 수두 [m] → 압력 [mbar]
pub fn head_to_pressure_mbar(head_m: f64, density_kg_m3: f64) -> f64 {
    GRAVITY * density_kg_m3 * head_m / 100.0
}

/// 원형 단면적 [m²]
pub fn pipe_area(diameter_m: f64) -> f64 {
    PI * diameter_m * diameter_m / 4.0
}

/// 질량유량으로 유속과 레이놀즈수를 구한다.
pub fn velocity_and_reynolds(
    mass_flow_kg_s: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
    diameter_m: f64,
) -> CalcResult<FlowCondition> {
    if !(diameter_m > 0.0) {
        return Err(CalcError::domain("배관 내경", diameter_m));
    }
    if !(density_kg_m3 > 0.0) {
        return Err(CalcError::domain("밀도", density_kg_m3));
    }
    if !(viscosity_pa_s > 0.0) {
        return Err(CalcError::domain("점도", viscosity_pa_s));
    }
    let velocity = mass_flow_kg_s / (density_kg_m3 * pipe_area(diameter_m));
    Ok(FlowCondition {
        velocity_m_s: velocity,
        reynolds: density_kg_m3 * velocity * diameter_m / viscosity_pa_s,
    })
}
