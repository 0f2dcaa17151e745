//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 함수를 쓰게 한다.
//!
//! 모든 계산은 입력과 [`properties::PropertyProvider`] 조회만으로 결정되는 순수 함수이다.

pub mod air;
pub mod app;
pub mod cli;
pub mod config;
pub mod cooling;
pub mod diagram;
pub mod error;
pub mod gas;
pub mod piping;
pub mod properties;
pub mod refrigeration;
pub mod units;
pub mod vacuum;

pub use error::{CalcError, CalcResult};
