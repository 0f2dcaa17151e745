use crate::error::{CalcError, CalcResult};
use crate::properties::{PropertyProvider, StatePair};
use crate::units::pressure::PA_PER_MBAR;
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

/// 물(증기) 과열 여부 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperheatCheck {
    /// 해당 압력의 포화온도(°C)
    pub saturation_temp_c: f64,
    pub superheated: bool,
}

/// 압력(mbar)에서의 포화온도와 비교해 물이 과열 상태인지 판정한다.
pub fn check_water_superheat(
    provider: &dyn PropertyProvider,
    temperature_c: f64,
    pressure_mbar: f64,
) -> CalcResult<SuperheatCheck> {
    let sat = provider.lookup(
        "Water",
        StatePair::PressureQuality {
            p_pa: pressure_mbar * PA_PER_MBAR,
            quality: 0.0,
        },
    )?;
    Ok(SuperheatCheck {
        saturation_temp_c: kelvin_to_celsius(sat.temperature_k),
        superheated: celsius_to_kelvin(temperature_c) > sat.temperature_k,
    })
}

/// 과열이 아니면 포화온도를 담은 [`CalcError::InvalidState`]를 반환한다.
pub fn require_superheated(
    provider: &dyn PropertyProvider,
    temperature_c: f64,
    pressure_mbar: f64,
) -> CalcResult<f64> {
    let check = check_water_superheat(provider, temperature_c, pressure_mbar)?;
    if !check.superheated {
        return Err(CalcError::InvalidState {
            saturation_temp_c: check.saturation_temp_c,
            temperature_c,
            pressure_mbar,
        });
    }
    Ok(check.saturation_temp_c)
}
