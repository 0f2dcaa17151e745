//! 기본 물성 제공자: 물/증기는 설정에 따라 IF97 또는 CoolProp, 그 밖의 물질은 CoolProp으로 라우팅한다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::coolprop::{self, CoolPropBackend};
use super::if97::WaterBackend;
use super::{
    is_water, FluidState, PropertyLookupError, PropertyProvider, StatePair, SubstanceConstant,
};

/// 물/증기 상태방정식 선택.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterModel {
    /// IAPWS-IF97 (seuif97)
    #[default]
    If97,
    /// IAPWS-95 (CoolProp)
    CoolProp,
}

/// 제공자 생성 시 명시적으로 넘기는 설정. 프로세스 전역 상태는 없다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub water_model: WaterModel,
}

#[derive(Debug, Clone, Default)]
pub struct StandardProvider {
    config: ProviderConfig,
    water: WaterBackend,
    coolprop: CoolPropBackend,
}

impl StandardProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            water: WaterBackend,
            coolprop: CoolPropBackend,
        }
    }

    fn uses_if97(&self, fluid: &str) -> bool {
        self.config.water_model == WaterModel::If97 && is_water(fluid)
    }
}

impl PropertyProvider for StandardProvider {
    fn lookup(&self, fluid: &str, pair: StatePair) -> Result<FluidState, PropertyLookupError> {
        let state = if self.uses_if97(fluid) {
            self.water.state(pair)?
        } else if let Some(pure) = coolprop::resolve(fluid) {
            self.coolprop.state(fluid, pure, pair)?
        } else {
            return Err(PropertyLookupError::state(fluid, pair, "지원하지 않는 물질입니다"));
        };
        debug!(fluid, %pair, t_k = state.temperature_k, "물성 조회");
        Ok(state)
    }

    fn constant(
        &self,
        fluid: &str,
        constant: SubstanceConstant,
    ) -> Result<f64, PropertyLookupError> {
        if self.uses_if97(fluid) {
            Ok(self.water.constant(constant))
        } else if let Some(pure) = coolprop::resolve(fluid) {
            self.coolprop.constant(fluid, pure, constant)
        } else {
            Err(PropertyLookupError::constant(fluid, constant, "지원하지 않는 물질입니다"))
        }
    }

    fn wet_bulb(
        &self,
        t_dry_c: f64,
        relative_humidity: f64,
        pressure_pa: f64,
    ) -> Result<f64, PropertyLookupError> {
        self.coolprop.wet_bulb_c(t_dry_c, relative_humidity, pressure_pa)
    }
}
