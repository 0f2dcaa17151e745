//! 결정적인 테스트를 위한 표 기반 가짜 물성 제공자.
#![allow(dead_code)]

use process_engineering_toolbox::properties::{
    is_water, FluidState, PropertyLookupError, PropertyProvider, StatePair, SubstanceConstant,
};

const R: f64 = 8.314_462_618;
/// 물 증발잠열/기체상수 [K] (Clausius-Clapeyron 근사)
const WATER_L_OVER_R: f64 = 4_890.0;

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[derive(Debug, Clone)]
pub struct FakeGas {
    pub name: &'static str,
    pub molar_mass: f64,
    pub viscosity: f64,
}

/// 기체는 이상기체 밀도 + 일정 점도, 물은 Clausius-Clapeyron 포화선으로 액/증기를 나눈다.
#[derive(Debug, Clone)]
pub struct FakeProvider {
    pub gases: Vec<FakeGas>,
    pub wet_bulb_c: f64,
    pub constants: Vec<(&'static str, SubstanceConstant, f64)>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            gases: vec![
                FakeGas {
                    name: "Air",
                    molar_mass: 0.028_97,
                    viscosity: 1.8e-5,
                },
                FakeGas {
                    name: "CO2",
                    molar_mass: 0.044_01,
                    viscosity: 1.5e-5,
                },
                FakeGas {
                    name: "N2",
                    molar_mass: 0.028_01,
                    viscosity: 1.75e-5,
                },
            ],
            wet_bulb_c: 18.99,
            constants: vec![
                ("CO2", SubstanceConstant::Gwp100, 1.0),
                ("CO2", SubstanceConstant::Gwp20, 1.0),
                ("CO2", SubstanceConstant::Odp, 0.0),
                ("CO2", SubstanceConstant::HealthHazard, 2.0),
                ("CO2", SubstanceConstant::FlammabilityHazard, 0.0),
                ("CO2", SubstanceConstant::PhysicalHazard, 0.0),
                ("N2", SubstanceConstant::HealthHazard, 3.0),
                ("N2", SubstanceConstant::FlammabilityHazard, 0.0),
                ("N2", SubstanceConstant::PhysicalHazard, 0.0),
            ],
        }
    }

    pub fn water_saturation_k(p_pa: f64) -> f64 {
        1.0 / (1.0 / 373.15 - (p_pa / 101_325.0).ln() / WATER_L_OVER_R)
    }

    fn gas(&self, fluid: &str) -> Option<&FakeGas> {
        self.gases.iter().find(|g| g.name.eq_ignore_ascii_case(fluid))
    }

    fn state(fluid: &str, t_k: f64, p_pa: f64, rho: f64, mu: f64, quality: Option<f64>) -> FluidState {
        FluidState {
            fluid: fluid.to_string(),
            temperature_k: t_k,
            pressure_pa: p_pa,
            density_kg_m3: rho,
            viscosity_pa_s: mu,
            enthalpy_j_per_kg: 0.0,
            entropy_j_per_kgk: 0.0,
            quality,
        }
    }
}

impl PropertyProvider for FakeProvider {
    fn lookup(&self, fluid: &str, pair: StatePair) -> Result<FluidState, PropertyLookupError> {
        if is_water(fluid) {
            return match pair {
                StatePair::TemperaturePressure { t_k, p_pa } => {
                    if t_k < Self::water_saturation_k(p_pa) {
                        Ok(Self::state(fluid, t_k, p_pa, 998.0, 1.0e-3, None))
                    } else {
                        let rho = p_pa * 0.018_015 / (R * t_k);
                        Ok(Self::state(fluid, t_k, p_pa, rho, 1.2e-5, None))
                    }
                }
                StatePair::PressureQuality { p_pa, quality } => {
                    let t_k = Self::water_saturation_k(p_pa);
                    Ok(Self::state(fluid, t_k, p_pa, 1.0, 1.0e-4, Some(quality)))
                }
                _ => Err(PropertyLookupError::state(fluid, pair, "fake: unsupported pair")),
            };
        }
        let gas = self
            .gas(fluid)
            .ok_or_else(|| PropertyLookupError::state(fluid, pair, "fake: unknown fluid"))?;
        match pair {
            StatePair::TemperaturePressure { t_k, p_pa } => {
                let rho = p_pa * gas.molar_mass / (R * t_k);
                Ok(Self::state(fluid, t_k, p_pa, rho, gas.viscosity, None))
            }
            _ => Err(PropertyLookupError::state(fluid, pair, "fake: unsupported pair")),
        }
    }

    fn constant(
        &self,
        fluid: &str,
        constant: SubstanceConstant,
    ) -> Result<f64, PropertyLookupError> {
        if constant == SubstanceConstant::MolarMass {
            if is_water(fluid) {
                return Ok(0.018_015);
            }
            if let Some(g) = self.gas(fluid) {
                return Ok(g.molar_mass);
            }
        }
        self.constants
            .iter()
            .find(|(f, c, _)| f.eq_ignore_ascii_case(fluid) && *c == constant)
            .map(|(_, _, v)| *v)
            .ok_or_else(|| PropertyLookupError::constant(fluid, constant, "fake: missing"))
    }

    fn wet_bulb(
        &self,
        _t_dry_c: f64,
        _relative_humidity: f64,
        _pressure_pa: f64,
    ) -> Result<f64, PropertyLookupError> {
        Ok(self.wet_bulb_c)
    }
}

/// 모든 조회가 실패하는 제공자. 오류 전달 경로 확인용.
pub struct FailingProvider;

impl PropertyProvider for FailingProvider {
    fn lookup(&self, fluid: &str, pair: StatePair) -> Result<FluidState, PropertyLookupError> {
        Err(PropertyLookupError::state(fluid, pair, "out of range"))
    }

    fn constant(
        &self,
        fluid: &str,
        constant: SubstanceConstant,
    ) -> Result<f64, PropertyLookupError> {
        Err(PropertyLookupError::constant(fluid, constant, "out of range"))
    }

    fn wet_bulb(&self, t: f64, rh: f64, p: f64) -> Result<f64, PropertyLookupError> {
        Err(PropertyLookupError {
            fluid: "HumidAir".into(),
            query: format!("{t},{rh},{p}"),
            reason: "out of range".into(),
        })
    }
}
