//! 진공 펌프 용량 산정: 배기(pump-down)와 연속 운전.

use serde::{Deserialize, Serialize};

use crate::units::pressure::STANDARD_ATMOSPHERE_PA;
use crate::units::ZERO_CELSIUS_K;

pub mod continuous;
pub mod pumpdown;
pub mod superheat;

pub use continuous::{continuous_operation_sizing, ContinuousInput, ContinuousResult};
pub use pumpdown::{pumpdown_sizing, PumpDownInput, PumpDownResult};
pub use superheat::{check_water_superheat, require_superheated, SuperheatCheck};

/// 표준(Normal) 상태. 체적유량을 Nm³/h로 환산할 때 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalConditions {
    pub pressure_pa: f64,
    pub temperature_k: f64,
}

impl Default for NormalConditions {
    fn default() -> Self {
        Self {
            pressure_pa: STANDARD_ATMOSPHERE_PA,
            temperature_k: ZERO_CELSIUS_K,
        }
    }
}

impl NormalConditions {
    /// 실제 조건 체적유량 [m³/h]을 표준 상태 [Nm³/h]로 환산한다.
    pub fn to_normal(&self, actual_m3_h: f64, pressure_pa: f64, temperature_k: f64) -> f64 {
        actual_m3_h * (pressure_pa / self.pressure_pa) * (self.temperature_k / temperature_k)
    }
}
