//! 계산 모듈 전체가 공유하는 오류 분류.

use thiserror::Error;

use crate::properties::PropertyLookupError;

/// 엔지니어링 계산에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 물리적으로 성립하지 않는 입력(레이놀즈수, 직경, 온도차 ≤ 0 등)
    #[error("비물리적 입력: {what} (입력값 {value})")]
    Domain { what: &'static str, value: f64 },
    /// 호출자 입력 형식 오류(Pf ≥ Pi, 질량분율 합 0 등)
    #[error("입력 오류: {0}")]
    InvalidInput(String),
    /// 과열 조건 등 물리적 전제 조건 위반. 포화온도를 함께 전달한다.
    #[error(
        "물(증기)이 과열 상태가 아닙니다. {pressure_mbar} mbar에서 포화온도 ≈ {saturation_temp_c:.2} °C, 입력 온도 {temperature_c:.2} °C"
    )]
    InvalidState {
        saturation_temp_c: f64,
        temperature_c: f64,
        pressure_mbar: f64,
    },
    /// 물성 제공자가 상태를 계산하지 못함
    #[error("운전점이 해당 물질의 유효 범위를 벗어났습니다: {0}")]
    PropertyLookup(#[from] PropertyLookupError),
}

impl CalcError {
    pub(crate) fn domain(what: &'static str, value: f64) -> Self {
        CalcError::Domain { what, value }
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
