//! 건구온도·상대습도·고도로부터 습공기 상태를 구한다.

use crate::error::{CalcError, CalcResult};
use crate::properties::PropertyProvider;

/// 습공기 계산 결과. 압력은 모두 kPa.
#[derive(Debug, Clone, PartialEq)]
pub struct PsychrometricState {
    /// 대기압 [kPa]
    pub atmospheric_pressure_kpa: f64,
    /// 포화 수증기압 [kPa]
    pub saturation_pressure_kpa: f64,
    /// 수증기 분압 [kPa]
    pub vapor_pressure_kpa: f64,
    /// 건공기 분압 [kPa]
    pub dry_air_pressure_kpa: f64,
    /// 비습도 [kg수증기/kg건공기]
    pub specific_humidity: f64,
    /// 습구온도 [°C]
    pub wet_bulb_c: f64,
}

/// 표준대기 모델에 따른 고도별 대기압 [kPa]
pub fn atmospheric_pressure_kpa(altitude_m: f64) -> CalcResult<f64> {
    let base = 1.0 - 2.255_77e-5 * altitude_m;
    if !(base > 0.0) {
        return Err(CalcError::domain("고도", altitude_m));
    }
    Ok(101.3 * base.powf(5.255_88))
}

/// Magnus형 근사 포화수증기압 [kPa]
pub fn saturation_pressure_kpa(t_c: f64) -> f64 {
    0.611 * 10_f64.powf(7.5 * t_c / (t_c + 237.3))
}

/// 습공기 상태를 계산한다. 습구온도는 물성 제공자의 습공기 루틴으로 구한다.
pub fn psychrometric_properties(
    provider: &dyn PropertyProvider,
    t_dry_c: f64,
    relative_humidity_pct: f64,
    altitude_m: f64,
) -> CalcResult<PsychrometricState> {
    if !(0.0..=100.0).contains(&relative_humidity_pct) {
        return Err(CalcError::domain("상대습도(%)", relative_humidity_pct));
    }
    let p_atm = atmospheric_pressure_kpa(altitude_m)?;
    let p_sat = saturation_pressure_kpa(t_dry_c);
    let p_v = relative_humidity_pct / 100.0 * p_sat;
    let p_d = p_atm - p_v;
    if p_d <= 0.0 {
        return Err(CalcError::invalid_input(format!(
            "수증기 분압 {p_v:.3} kPa가 대기압 {p_atm:.3} kPa 이상입니다"
        )));
    }
    let wet_bulb_c = provider.wet_bulb(t_dry_c, relative_humidity_pct / 100.0, p_atm * 1000.0)?;

    Ok(PsychrometricState {
        atmospheric_pressure_kpa: p_atm,
        saturation_pressure_kpa: p_sat,
        vapor_pressure_kpa: p_v,
        dry_air_pressure_kpa: p_d,
        specific_humidity: 0.622 * p_v / p_d,
        wet_bulb_c,
    })
}
