//! IAPWS-IF97 물/증기 물성을 seuif97 크레이트로 위임한 백엔드.
//! seuif97 입력은 MPa/°C/kJ 단위이므로 경계에서 SI(Pa/K/J)로 환산한다.

use seuif97::{ph, ps, pt, px, tx, ODV, OH, OS, OT, OV};

use super::{FluidState, PropertyLookupError, StatePair, SubstanceConstant};
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

const WATER_NAME: &str = "Water";
const MOLAR_MASS: f64 = 0.018_015_268;
const T_CRIT_K: f64 = 647.096;
const T_TRIPLE_K: f64 = 273.16;
const P_CRIT_PA: f64 = 22.064e6;

fn nan_err(pair: StatePair) -> PropertyLookupError {
    PropertyLookupError::state(
        WATER_NAME,
        pair,
        "IF97 계산 실패(유효 범위 밖이거나 수렴 실패)",
    )
}

fn check(pair: StatePair, values: &[f64]) -> Result<(), PropertyLookupError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(nan_err(pair));
    }
    Ok(())
}

/// 포화 액/증기 끝점의 (h[kJ/kg], s[kJ/kg·K], v[m³/kg], μ[Pa·s]).
fn saturated_end(t_c: f64, x: f64) -> [f64; 4] {
    [
        tx(t_c, x, OH),
        tx(t_c, x, OS),
        tx(t_c, x, OV),
        tx(t_c, x, ODV),
    ]
}

/// IF97 물/증기 백엔드. 상태가 없으므로 복사해서 써도 된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterBackend;

impl WaterBackend {
    pub fn state(&self, pair: StatePair) -> Result<FluidState, PropertyLookupError> {
        match pair {
            StatePair::TemperaturePressure { t_k, p_pa } => {
                if t_k <= 0.0 || p_pa <= 0.0 {
                    return Err(nan_err(pair));
                }
                self.single_phase(pair, p_pa, kelvin_to_celsius(t_k))
            }
            StatePair::TemperatureQuality { t_k, quality } => {
                self.two_phase(pair, kelvin_to_celsius(t_k), quality)
            }
            StatePair::PressureQuality { p_pa, quality } => {
                if p_pa <= 0.0 || p_pa > P_CRIT_PA {
                    return Err(nan_err(pair));
                }
                let t_c = px(p_pa / 1e6, 0.0, OT);
                check(pair, &[t_c])?;
                self.two_phase(pair, t_c, quality)
            }
            StatePair::PressureEnthalpy { p_pa, h_j_per_kg } => {
                let h_kj = h_j_per_kg / 1000.0;
                match self.dome_fraction(p_pa, h_kj, OH) {
                    Some((t_c, x)) => self.two_phase(pair, t_c, x),
                    None => {
                        let t_c = ph(p_pa / 1e6, h_kj, OT);
                        check(pair, &[t_c])?;
                        self.single_phase(pair, p_pa, t_c)
                    }
                }
            }
            StatePair::PressureEntropy { p_pa, s_j_per_kgk } => {
                let s_kj = s_j_per_kgk / 1000.0;
                match self.dome_fraction(p_pa, s_kj, OS) {
                    Some((t_c, x)) => self.two_phase(pair, t_c, x),
                    None => {
                        let t_c = ps(p_pa / 1e6, s_kj, OT);
                        check(pair, &[t_c])?;
                        self.single_phase(pair, p_pa, t_c)
                    }
                }
            }
        }
    }

    pub fn constant(&self, constant: SubstanceConstant) -> f64 {
        match constant {
            SubstanceConstant::MolarMass => MOLAR_MASS,
            SubstanceConstant::CriticalTemperature => T_CRIT_K,
            SubstanceConstant::TriplePointTemperature => T_TRIPLE_K,
            // 물은 온난화/오존층/NFPA 위험도가 모두 0
            SubstanceConstant::Gwp100
            | SubstanceConstant::Gwp20
            | SubstanceConstant::Odp
            | SubstanceConstant::HealthHazard
            | SubstanceConstant::FlammabilityHazard
            | SubstanceConstant::PhysicalHazard => 0.0,
        }
    }

    /// 아임계 압력에서 값(h 또는 s)이 포화 돔 안이면 (포화온도 °C, 건도)를 반환한다.
    fn dome_fraction(&self, p_pa: f64, value: f64, prop: i32) -> Option<(f64, f64)> {
        if !(p_pa > 0.0 && p_pa < P_CRIT_PA) {
            return None;
        }
        let p_mpa = p_pa / 1e6;
        let liquid = px(p_mpa, 0.0, prop);
        let vapor = px(p_mpa, 1.0, prop);
        let t_c = px(p_mpa, 0.0, OT);
        if !(liquid.is_finite() && vapor.is_finite() && t_c.is_finite()) || vapor <= liquid {
            return None;
        }
        if value < liquid || value > vapor {
            return None;
        }
        Some((t_c, (value - liquid) / (vapor - liquid)))
    }

    fn single_phase(
        &self,
        pair: StatePair,
        p_pa: f64,
        t_c: f64,
    ) -> Result<FluidState, PropertyLookupError> {
        let p_mpa = p_pa / 1e6;
        let h_kj = pt(p_mpa, t_c, OH);
        let v = pt(p_mpa, t_c, OV);
        let s_kj = pt(p_mpa, t_c, OS);
        let mu = pt(p_mpa, t_c, ODV);
        check(pair, &[h_kj, v, s_kj, mu])?;
        if v <= 0.0 {
            return Err(nan_err(pair));
        }
        Ok(FluidState {
            fluid: WATER_NAME.to_string(),
            temperature_k: celsius_to_kelvin(t_c),
            pressure_pa: p_pa,
            density_kg_m3: 1.0 / v,
            viscosity_pa_s: mu,
            enthalpy_j_per_kg: h_kj * 1000.0,
            entropy_j_per_kgk: s_kj * 1000.0,
            quality: None,
        })
    }

    /// 포화 액/증기 끝점을 건도로 혼합한다. 점도는 McAdams 균질 혼합식.
    fn two_phase(
        &self,
        pair: StatePair,
        t_c: f64,
        quality: f64,
    ) -> Result<FluidState, PropertyLookupError> {
        if !(0.0..=1.0).contains(&quality) {
            return Err(PropertyLookupError::state(
                WATER_NAME,
                pair,
                "건도는 0~1 범위여야 합니다",
            ));
        }
        let t_k = celsius_to_kelvin(t_c);
        if t_k < T_TRIPLE_K || t_k > T_CRIT_K {
            return Err(nan_err(pair));
        }
        let p_mpa = tx(t_c, 0.0, seuif97::OP);
        let [hl, sl, vl, mul] = saturated_end(t_c, 0.0);
        let [hv, sv, vv, muv] = saturated_end(t_c, 1.0);
        check(pair, &[p_mpa, hl, sl, vl, mul, hv, sv, vv, muv])?;

        let x = quality;
        let v = vl + x * (vv - vl);
        let mu = 1.0 / (x / muv + (1.0 - x) / mul);
        Ok(FluidState {
            fluid: WATER_NAME.to_string(),
            temperature_k: t_k,
            pressure_pa: p_mpa * 1e6,
            density_kg_m3: 1.0 / v,
            viscosity_pa_s: mu,
            enthalpy_j_per_kg: (hl + x * (hv - hl)) * 1000.0,
            entropy_j_per_kgk: (sl + x * (sv - sl)) * 1000.0,
            quality: Some(x),
        })
    }
}
