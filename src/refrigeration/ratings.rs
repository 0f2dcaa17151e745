//! 냉매의 환경 영향 지표와 NFPA 704 위험도.

use tracing::debug;

use crate::error::CalcResult;
use crate::properties::{is_water, PropertyLookupError, PropertyProvider, SubstanceConstant};

#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentalImpact {
    /// 물은 환경 영향이 없다.
    None,
    Rated { gwp100: f64, gwp20: f64, odp: f64 },
    /// 제공자가 지표를 갖고 있지 않음
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardRatings {
    pub health: f64,
    pub flammability: f64,
    pub physical: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubstanceRatings {
    pub environmental: EnvironmentalImpact,
    pub hazards: HazardRatings,
}

fn rated(
    provider: &dyn PropertyProvider,
    fluid: &str,
) -> Result<EnvironmentalImpact, PropertyLookupError> {
    Ok(EnvironmentalImpact::Rated {
        gwp100: provider.constant(fluid, SubstanceConstant::Gwp100)?,
        gwp20: provider.constant(fluid, SubstanceConstant::Gwp20)?,
        odp: provider.constant(fluid, SubstanceConstant::Odp)?,
    })
}

fn environmental(provider: &dyn PropertyProvider, fluid: &str) -> EnvironmentalImpact {
    if is_water(fluid) {
        return EnvironmentalImpact::None;
    }
    match rated(provider, fluid) {
        Ok(impact) => impact,
        Err(err) => {
            debug!(%err, "환경 지표 없음");
            EnvironmentalImpact::Unavailable
        }
    }
}

/// 환경 지표(없으면 `Unavailable`)와 위험도(조회 실패 시 오류)를 모은다.
pub fn substance_ratings(provider: &dyn PropertyProvider, fluid: &str) -> CalcResult<SubstanceRatings> {
    let hazards = HazardRatings {
        health: provider.constant(fluid, SubstanceConstant::HealthHazard)?,
        flammability: provider.constant(fluid, SubstanceConstant::FlammabilityHazard)?,
        physical: provider.constant(fluid, SubstanceConstant::PhysicalHazard)?,
    };
    Ok(SubstanceRatings {
        environmental: environmental(provider, fluid),
        hazards,
    })
}
