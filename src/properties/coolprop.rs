//! CoolProp 백엔드(rfluids). 냉매, 탄화수소, 영구가스 등 CoolProp이 아는 순수 물질과
//! 습공기 습구온도를 담당한다.
//!
//! rfluids의 `Fluid`는 상태를 갖지 않으므로 조회마다 새로 만든다.

use std::fmt::Display;
use std::str::FromStr;

use rfluids::prelude::*;
use tracing::debug;

use super::{FluidState, PropertyLookupError, StatePair, SubstanceConstant};
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

/// 화학식 별칭 → CoolProp 물질 이름
const ALIASES: &[(&str, &str)] = &[
    ("N2", "Nitrogen"),
    ("O2", "Oxygen"),
    ("CO2", "CarbonDioxide"),
    ("Ar", "Argon"),
    ("He", "Helium"),
    ("H2", "Hydrogen"),
    ("CH4", "Methane"),
    ("NH3", "Ammonia"),
    ("H2O", "Water"),
    ("Steam", "Water"),
];

/// 물질 이름(대소문자 무시, 화학식 별칭 허용)을 CoolProp 순수 물질로 해석한다.
pub fn resolve(fluid: &str) -> Option<Pure> {
    let name = fluid.trim();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |(_, coolprop)| *coolprop);
    Pure::from_str(canonical).ok()
}

fn backend_error(err: impl Display) -> String {
    format!("CoolProp: {err}")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropBackend;

impl CoolPropBackend {
    pub fn state(
        &self,
        fluid: &str,
        pure: Pure,
        pair: StatePair,
    ) -> Result<FluidState, PropertyLookupError> {
        let fail = |reason: String| PropertyLookupError::state(fluid, pair, reason);
        let (first, second) = match pair {
            StatePair::TemperaturePressure { t_k, p_pa } => {
                (FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            }
            StatePair::TemperatureQuality { t_k, quality } => {
                check_quality(quality).map_err(fail)?;
                (FluidInput::temperature(t_k), FluidInput::quality(quality))
            }
            StatePair::PressureQuality { p_pa, quality } => {
                check_quality(quality).map_err(fail)?;
                (FluidInput::pressure(p_pa), FluidInput::quality(quality))
            }
            StatePair::PressureEnthalpy { p_pa, h_j_per_kg } => {
                (FluidInput::pressure(p_pa), FluidInput::enthalpy(h_j_per_kg))
            }
            StatePair::PressureEntropy { p_pa, s_j_per_kgk } => {
                (FluidInput::pressure(p_pa), FluidInput::entropy(s_j_per_kgk))
            }
        };

        let mut st = Fluid::from(pure)
            .in_state(first, second)
            .map_err(|e| fail(backend_error(e)))?;
        let temperature_k = st.temperature().map_err(|e| fail(backend_error(e)))?;
        let pressure_pa = st.pressure().map_err(|e| fail(backend_error(e)))?;
        let density_kg_m3 = st.density().map_err(|e| fail(backend_error(e)))?;
        let enthalpy_j_per_kg = st.enthalpy().map_err(|e| fail(backend_error(e)))?;
        let entropy_j_per_kgk = st.entropy().map_err(|e| fail(backend_error(e)))?;
        // 단상 영역에서 CoolProp 건도는 -1 또는 오류
        let quality = st.quality().ok().filter(|x| (0.0..=1.0).contains(x));

        let viscosity_pa_s = match (st.dynamic_viscosity(), quality) {
            (Ok(mu), _) => mu,
            (Err(_), Some(x)) => self
                .two_phase_viscosity(pure, pressure_pa, x)
                .map_err(|e| fail(backend_error(e)))?,
            (Err(e), None) => return Err(fail(backend_error(e))),
        };

        Ok(FluidState {
            fluid: fluid.trim().to_string(),
            temperature_k,
            pressure_pa,
            density_kg_m3,
            viscosity_pa_s,
            enthalpy_j_per_kg,
            entropy_j_per_kgk,
            quality,
        })
    }

    /// CoolProp은 2상 점도를 정의하지 않으므로 포화 끝점으로 McAdams 균질 혼합한다.
    fn two_phase_viscosity(&self, pure: Pure, p_pa: f64, x: f64) -> Result<f64, String> {
        let saturated = |q: f64| -> Result<f64, String> {
            Fluid::from(pure)
                .in_state(FluidInput::pressure(p_pa), FluidInput::quality(q))
                .map_err(|e| e.to_string())?
                .dynamic_viscosity()
                .map_err(|e| e.to_string())
        };
        let mu_l = saturated(0.0)?;
        let mu_v = saturated(1.0)?;
        Ok(1.0 / (x / mu_v + (1.0 - x) / mu_l))
    }

    pub fn constant(
        &self,
        fluid: &str,
        pure: Pure,
        constant: SubstanceConstant,
    ) -> Result<f64, PropertyLookupError> {
        let mut substance = Fluid::from(pure);
        let value = match constant {
            SubstanceConstant::MolarMass => substance.molar_mass(),
            SubstanceConstant::CriticalTemperature => substance.critical_temperature(),
            SubstanceConstant::TriplePointTemperature => substance.triple_temperature(),
            SubstanceConstant::Gwp100 => substance.gwp100(),
            SubstanceConstant::Gwp20 => substance.gwp20(),
            SubstanceConstant::Odp => substance.odp(),
            SubstanceConstant::HealthHazard => substance.health_hazard(),
            SubstanceConstant::FlammabilityHazard => substance.flammability_hazard(),
            SubstanceConstant::PhysicalHazard => substance.physical_hazard(),
        }
        .map_err(|e| PropertyLookupError::constant(fluid, constant, backend_error(e)))?;

        // 자료가 없는 지표는 음수로 온다
        if !value.is_finite() || value < 0.0 {
            debug!(fluid, constant = constant.symbol(), value, "CoolProp 자료 없음");
            return Err(PropertyLookupError::constant(fluid, constant, "데이터 없음"));
        }
        Ok(value)
    }

    /// 건구온도(°C), 상대습도(0~1), 압력(Pa)에서 습구온도(°C).
    pub fn wet_bulb_c(
        &self,
        t_dry_c: f64,
        relative_humidity: f64,
        pressure_pa: f64,
    ) -> Result<f64, PropertyLookupError> {
        let fail = |reason: String| PropertyLookupError {
            fluid: "HumidAir".to_string(),
            query: format!("Tdb={t_dry_c}, RH={relative_humidity}, P={pressure_pa}"),
            reason,
        };
        let mut air = HumidAir::new()
            .in_state(
                HumidAirInput::pressure(pressure_pa),
                HumidAirInput::temperature(celsius_to_kelvin(t_dry_c)),
                HumidAirInput::rel_humidity(relative_humidity),
            )
            .map_err(|e| fail(backend_error(e)))?;
        let t_wet_k = air
            .wet_bulb_temperature()
            .map_err(|e| fail(backend_error(e)))?;
        Ok(kelvin_to_celsius(t_wet_k))
    }
}

fn check_quality(quality: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&quality) {
        Ok(())
    } else {
        Err("건도는 0~1 범위여야 합니다".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_formula_aliases() {
        assert_eq!(resolve("R134a"), Some(Pure::R134a));
        assert_eq!(resolve(" co2 "), Some(Pure::CarbonDioxide));
        assert_eq!(resolve("N2"), Some(Pure::Nitrogen));
        assert_eq!(resolve("Ammonia"), Some(Pure::Ammonia));
        assert!(resolve("Unobtainium").is_none());
    }

    #[test]
    fn r134a_saturation_at_zero_celsius() {
        let backend = CoolPropBackend;
        let st = backend
            .state(
                "R134a",
                Pure::R134a,
                StatePair::TemperatureQuality { t_k: 273.15, quality: 0.0 },
            )
            .expect("saturated liquid");
        // 0 °C 포화압력 ≈ 292.8 kPa
        assert!((st.pressure_pa / 1000.0 - 292.8).abs() < 1.5, "p={}", st.pressure_pa);
        assert_eq!(st.quality, Some(0.0));
        assert!(st.viscosity_pa_s > 0.0);
    }

    #[test]
    fn two_phase_viscosity_lies_between_saturated_ends() {
        let backend = CoolPropBackend;
        let wet = |x| {
            backend
                .state(
                    "R134a",
                    Pure::R134a,
                    StatePair::PressureQuality { p_pa: 5e5, quality: x },
                )
                .expect("two-phase")
        };
        let (liquid, mid, vapor) = (wet(0.0), wet(0.5), wet(1.0));
        assert!(mid.viscosity_pa_s < liquid.viscosity_pa_s);
        assert!(mid.viscosity_pa_s > vapor.viscosity_pa_s);
        assert!((mid.quality.expect("x") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn superheated_state_has_no_quality() {
        let st = CoolPropBackend
            .state(
                "Nitrogen",
                Pure::Nitrogen,
                StatePair::TemperaturePressure { t_k: 300.0, p_pa: 101_325.0 },
            )
            .expect("gas");
        assert!(st.quality.is_none());
        assert!((st.density_kg_m3 - 1.138).abs() < 0.01, "rho={}", st.density_kg_m3);
    }

    #[test]
    fn molar_mass_and_critical_temperature() {
        let backend = CoolPropBackend;
        let m = backend
            .constant("R134a", Pure::R134a, SubstanceConstant::MolarMass)
            .expect("M");
        assert!((m - 0.102_032).abs() < 1e-5);
        let tc = backend
            .constant("R134a", Pure::R134a, SubstanceConstant::CriticalTemperature)
            .expect("Tc");
        assert!((tc - 374.21).abs() < 0.05);
    }

    #[test]
    fn wet_bulb_at_sea_level() {
        let t_wet = CoolPropBackend.wet_bulb_c(20.0, 0.5, 101_325.0).expect("wet bulb");
        // 습공기선도: 20 °C, 50 % → 약 13.7 °C
        assert!((t_wet - 13.7).abs() < 0.3, "Twb={t_wet}");
        let saturated = CoolPropBackend.wet_bulb_c(20.0, 1.0, 101_325.0).expect("wet bulb");
        assert!((saturated - 20.0).abs() < 0.01);
    }
}
