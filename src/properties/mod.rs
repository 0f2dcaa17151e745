//! 물성 제공자(Property Provider) 계약.
//!
//! 계산 모듈은 상태방정식을 직접 풀지 않는다. 물질 이름과 상태쌍(T+P, P+Q, P+H 등)을
//! [`PropertyProvider`]에 넘겨 물성을 받고, 그 위에서 공학적 파생량만 계산한다.
//! 제공자 경계의 단위는 항상 SI(K, Pa, J/kg, J/kg·K, Pa·s)이다.

use std::fmt;

use thiserror::Error;

pub mod coolprop;
pub mod if97;
pub mod standard;

pub use standard::{ProviderConfig, StandardProvider, WaterModel};

/// 상태쌍을 구성하는 물성 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Temperature,
    Pressure,
    Density,
    Viscosity,
    Enthalpy,
    Entropy,
    Quality,
}

impl PropertyKind {
    /// CoolProp 계열에서 흔히 쓰는 한 글자 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PropertyKind::Temperature => "T",
            PropertyKind::Pressure => "P",
            PropertyKind::Density => "D",
            PropertyKind::Viscosity => "V",
            PropertyKind::Enthalpy => "H",
            PropertyKind::Entropy => "S",
            PropertyKind::Quality => "Q",
        }
    }
}

/// 두 개의 독립 강도성 물성으로 정의한 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatePair {
    /// 온도 [K] + 압력 [Pa]
    TemperaturePressure { t_k: f64, p_pa: f64 },
    /// 온도 [K] + 건도 [-]
    TemperatureQuality { t_k: f64, quality: f64 },
    /// 압력 [Pa] + 건도 [-]
    PressureQuality { p_pa: f64, quality: f64 },
    /// 압력 [Pa] + 비엔탈피 [J/kg]
    PressureEnthalpy { p_pa: f64, h_j_per_kg: f64 },
    /// 압력 [Pa] + 비엔트로피 [J/kg·K]
    PressureEntropy { p_pa: f64, s_j_per_kgk: f64 },
}

impl StatePair {
    /// 상태쌍을 (종류, 값, 종류, 값) 형태로 펼친다.
    pub fn parts(&self) -> (PropertyKind, f64, PropertyKind, f64) {
        match *self {
            StatePair::TemperaturePressure { t_k, p_pa } => {
                (PropertyKind::Temperature, t_k, PropertyKind::Pressure, p_pa)
            }
            StatePair::TemperatureQuality { t_k, quality } => {
                (PropertyKind::Temperature, t_k, PropertyKind::Quality, quality)
            }
            StatePair::PressureQuality { p_pa, quality } => {
                (PropertyKind::Pressure, p_pa, PropertyKind::Quality, quality)
            }
            StatePair::PressureEnthalpy { p_pa, h_j_per_kg } => {
                (PropertyKind::Pressure, p_pa, PropertyKind::Enthalpy, h_j_per_kg)
            }
            StatePair::PressureEntropy { p_pa, s_j_per_kgk } => {
                (PropertyKind::Pressure, p_pa, PropertyKind::Entropy, s_j_per_kgk)
            }
        }
    }
}

impl fmt::Display for StatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (k1, v1, k2, v2) = self.parts();
        write!(f, "{}={v1}, {}={v2}", k1.symbol(), k2.symbol())
    }
}

/// 물성 제공자가 돌려주는 완결된 상태. 한 번 계산되면 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidState {
    pub fluid: String,
    /// 온도 [K]
    pub temperature_k: f64,
    /// 압력 [Pa]
    pub pressure_pa: f64,
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 동점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 비엔탈피 [J/kg]
    pub enthalpy_j_per_kg: f64,
    /// 비엔트로피 [J/kg·K]
    pub entropy_j_per_kgk: f64,
    /// 건도. 단상 영역이면 `None`.
    pub quality: Option<f64>,
}

impl FluidState {
    pub fn temperature_c(&self) -> f64 {
        crate::units::kelvin_to_celsius(self.temperature_k)
    }
}

/// 상태와 무관한 물질 상수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstanceConstant {
    /// 몰질량 [kg/mol]
    MolarMass,
    /// 임계온도 [K]
    CriticalTemperature,
    /// 삼중점 온도 [K]
    TriplePointTemperature,
    Gwp100,
    Gwp20,
    Odp,
    /// NFPA 704 건강 위험도
    HealthHazard,
    /// NFPA 704 인화성
    FlammabilityHazard,
    /// NFPA 704 물리적(반응성) 위험도
    PhysicalHazard,
}

impl SubstanceConstant {
    pub fn symbol(&self) -> &'static str {
        match self {
            SubstanceConstant::MolarMass => "M",
            SubstanceConstant::CriticalTemperature => "Tcrit",
            SubstanceConstant::TriplePointTemperature => "Ttriple",
            SubstanceConstant::Gwp100 => "GWP100",
            SubstanceConstant::Gwp20 => "GWP20",
            SubstanceConstant::Odp => "ODP",
            SubstanceConstant::HealthHazard => "HH",
            SubstanceConstant::FlammabilityHazard => "FH",
            SubstanceConstant::PhysicalHazard => "PH",
        }
    }
}

/// 제공자가 요청한 상태/상수를 계산하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{fluid} [{query}]: {reason}")]
pub struct PropertyLookupError {
    pub fluid: String,
    /// 실패한 질의(상태쌍 또는 상수 기호)
    pub query: String,
    pub reason: String,
}

impl PropertyLookupError {
    pub fn state(fluid: &str, pair: StatePair, reason: impl Into<String>) -> Self {
        Self {
            fluid: fluid.to_string(),
            query: pair.to_string(),
            reason: reason.into(),
        }
    }

    pub fn constant(fluid: &str, constant: SubstanceConstant, reason: impl Into<String>) -> Self {
        Self {
            fluid: fluid.to_string(),
            query: constant.symbol().to_string(),
            reason: reason.into(),
        }
    }
}

/// 물성 조회 계약. 구현체는 부작용이 없어야 하며 여러 계산에서 동시에 호출될 수 있다.
pub trait PropertyProvider: Send + Sync {
    /// 상태쌍으로 전체 물성을 계산한다.
    fn lookup(&self, fluid: &str, pair: StatePair) -> Result<FluidState, PropertyLookupError>;

    /// 물질 상수를 조회한다.
    fn constant(&self, fluid: &str, constant: SubstanceConstant)
        -> Result<f64, PropertyLookupError>;

    /// 건구온도(°C), 상대습도(0~1), 압력(Pa)으로 습구온도(°C)를 구한다.
    fn wet_bulb(
        &self,
        t_dry_c: f64,
        relative_humidity: f64,
        pressure_pa: f64,
    ) -> Result<f64, PropertyLookupError>;

    /// 몰질량 [kg/mol]
    fn molar_mass(&self, fluid: &str) -> Result<f64, PropertyLookupError> {
        self.constant(fluid, SubstanceConstant::MolarMass)
    }
}

/// 물/증기를 가리키는 식별자인지 판정한다.
pub fn is_water(fluid: &str) -> bool {
    let f = fluid.trim();
    ["Water", "H2O", "Steam"]
        .iter()
        .any(|alias| f.eq_ignore_ascii_case(alias))
}
