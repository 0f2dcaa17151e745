//! 질량분율로 정의한 기체 혼합물의 물성 혼합.
//!
//! 밀도와 점도는 각 순성분 물성을 같은 (T, P)에서 구해 몰분율로 가중 평균한다.
//! 이상혼합 근사이며 혼합 상태방정식이 아니다.

use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::properties::{PropertyProvider, StatePair};

/// (물질, 질량분율) 목록. 분율 합이 1일 필요는 없다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasMixture {
    components: Vec<(String, f64)>,
}

impl GasMixture {
    pub fn new(components: Vec<(String, f64)>) -> Self {
        Self { components }
    }

    /// 이름과 분율을 따로 받은 목록으로 만든다. 길이가 다르면 오류.
    pub fn from_parts<S: AsRef<str>>(fluids: &[S], mass_fractions: &[f64]) -> CalcResult<Self> {
        if fluids.len() != mass_fractions.len() {
            return Err(CalcError::invalid_input(format!(
                "물질 {}개와 질량분율 {}개의 개수가 다릅니다",
                fluids.len(),
                mass_fractions.len()
            )));
        }
        Ok(Self::new(
            fluids
                .iter()
                .map(|f| f.as_ref().to_string())
                .zip(mass_fractions.iter().copied())
                .collect(),
        ))
    }

    pub fn single(fluid: &str) -> Self {
        Self::new(vec![(fluid.to_string(), 1.0)])
    }

    pub fn components(&self) -> &[(String, f64)] {
        &self.components
    }

    /// 분율이 0보다 큰 물 성분이 있는지
    pub fn contains_water(&self) -> bool {
        self.components
            .iter()
            .any(|(f, w)| *w > 0.0 && crate::properties::is_water(f))
    }

    /// 합이 1이 되도록 정규화한 질량분율.
    pub fn normalized(&self) -> CalcResult<Vec<(&str, f64)>> {
        if self.components.is_empty() {
            return Err(CalcError::invalid_input("혼합물 성분이 비어 있습니다"));
        }
        if let Some((fluid, w)) = self
            .components
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(CalcError::invalid_input(format!(
                "{fluid}의 질량분율 {w}는 0 이상의 유한값이어야 합니다"
            )));
        }
        let total: f64 = self.components.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(CalcError::invalid_input("질량분율이 모두 0일 수 없습니다"));
        }
        Ok(self
            .components
            .iter()
            .map(|(f, w)| (f.as_str(), w / total))
            .collect())
    }
}

/// 혼합 물성 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureProperties {
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 평균 몰질량 [kg/mol]
    pub molar_mass_kg_per_mol: f64,
    /// 성분별 몰분율(입력 순서)
    pub mole_fractions: Vec<(String, f64)>,
}

/// 혼합물의 평균 몰질량 `1 / Σ(wᵢ/Mᵢ)`
pub fn mixture_molar_mass(provider: &dyn PropertyProvider, mixture: &GasMixture) -> CalcResult<f64> {
    let mut inv = 0.0;
    for (fluid, w) in mixture.normalized()? {
        inv += w / provider.molar_mass(fluid)?;
    }
    Ok(1.0 / inv)
}

/// 온도 [K]·압력 [Pa]에서 혼합물의 밀도, 점도, 몰질량을 구한다.
pub fn blend(
    provider: &dyn PropertyProvider,
    mixture: &GasMixture,
    t_k: f64,
    p_pa: f64,
) -> CalcResult<MixtureProperties> {
    let fractions = mixture.normalized()?;

    let mut moles = Vec::with_capacity(fractions.len());
    let mut inv_molar_mass = 0.0;
    for (fluid, w) in &fractions {
        let m = provider.molar_mass(fluid)?;
        moles.push(w / m);
        inv_molar_mass += w / m;
    }
    let total_moles: f64 = moles.iter().sum();

    let mut density = 0.0;
    let mut viscosity = 0.0;
    let mut mole_fractions = Vec::with_capacity(fractions.len());
    for ((fluid, _), n) in fractions.iter().zip(&moles) {
        let y = n / total_moles;
        let state = provider.lookup(fluid, StatePair::TemperaturePressure { t_k, p_pa })?;
        density += y * state.density_kg_m3;
        viscosity += y * state.viscosity_pa_s;
        mole_fractions.push((fluid.to_string(), y));
    }
    debug!(density, viscosity, components = fractions.len(), "혼합물 물성");

    Ok(MixtureProperties {
        density_kg_m3: density,
        viscosity_pa_s: viscosity,
        molar_mass_kg_per_mol: 1.0 / inv_molar_mass,
        mole_fractions,
    })
}
