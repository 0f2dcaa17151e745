//! 원통 반경방향 전도 기반 보온 두께 산정.

use std::f64::consts::PI;

use tracing::warn;

/// 설계 안전 여유
pub const SAFETY_MARGIN: f64 = 1.1;
/// exp() 오버플로 경계
const MAX_EXPONENT: f64 = 700.0;

/// 보온 두께 계산 입력.
#[derive(Debug, Clone)]
pub struct InsulationInput {
    /// 배관 외경 [m]
    pub diameter_m: f64,
    /// 유체 온도 [°C]
    pub fluid_temp_c: f64,
    /// 주위 온도 [°C]
    pub ambient_temp_c: f64,
    /// 허용 열손실 [W/m]
    pub max_heat_loss_w_per_m: f64,
    /// 보온재 열전도율 [W/m·K]
    pub conductivity_w_per_mk: f64,
}

#[derive(Debug, Clone)]
pub struct InsulationResult {
    /// 필요 두께 [mm]. 유한한 두께로 만족할 수 없으면 +∞.
    pub thickness_mm: f64,
    pub warnings: Vec<String>,
}

/// `r2/r1 = exp(2πkΔT/q_max)`로 외반경을 구하고 안전 여유 1.1을 곱한다.
/// 유체가 주위보다 차갑거나 같으면 보온이 필요 없으므로 0을 반환한다.
pub fn required_thickness(input: &InsulationInput) -> InsulationResult {
    let mut warnings = Vec::new();
    let delta_t = input.fluid_temp_c - input.ambient_temp_c;
    if delta_t <= 0.0 {
        return InsulationResult {
            thickness_mm: 0.0,
            warnings,
        };
    }

    let exponent = 2.0 * PI * input.conductivity_w_per_mk * delta_t / input.max_heat_loss_w_per_m;
    let thickness_mm = if exponent > MAX_EXPONENT {
        warnings.push("허용 열손실을 만족하는 유한한 보온 두께가 없습니다.".into());
        f64::INFINITY
    } else {
        let r1 = input.diameter_m / 2.0;
        let r2 = r1 * exponent.exp();
        let raw_mm = (r2 - r1) * 1000.0;
        // f64::max는 NaN을 삼키므로 먼저 걸러낸다
        if raw_mm.is_nan() {
            f64::NAN
        } else {
            raw_mm.max(0.0) * SAFETY_MARGIN
        }
    };

    if thickness_mm.is_nan() {
        warn!(?input, "보온 두께 계산 결과가 NaN");
        warnings.push("보온 두께 계산 중 수치 오류가 발생했습니다(NaN).".into());
    }

    InsulationResult {
        thickness_mm,
        warnings,
    }
}
